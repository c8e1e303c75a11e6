use super::utils;
use crate::{
    state::ledger::{shift_field_name, ShiftEntries},
    utils::validation::FieldErrors,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ShiftFormViewModel {
    pub values: RwSignal<Vec<String>>,
    pub errors: RwSignal<FieldErrors>,
    pub attempted: RwSignal<bool>,
}

impl ShiftFormViewModel {
    fn validate(&self) -> Result<ShiftEntries, FieldErrors> {
        self.values.with_untracked(|values| utils::validate_shifts(values))
    }

    pub fn set_day(&self, index: usize, value: String) {
        self.values.update(|values| {
            if let Some(slot) = values.get_mut(index) {
                *slot = value;
            }
        });
        if self.attempted.get_untracked() {
            self.errors.set(self.validate().err().unwrap_or_default());
        }
    }

    pub fn submit(&self) -> Option<ShiftEntries> {
        self.attempted.set(true);
        match self.validate() {
            Ok(entries) => {
                self.errors.set(FieldErrors::new());
                Some(entries)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn day_value(&self, index: usize) -> Signal<String> {
        let values = self.values;
        Signal::derive(move || values.with(|values| values.get(index).cloned().unwrap_or_default()))
    }

    pub fn day_error(&self, index: usize) -> Signal<Option<String>> {
        let errors = self.errors;
        let field = shift_field_name(index);
        Signal::derive(move || errors.with(|errors| errors.message(&field)))
    }
}

pub fn use_shift_form_view_model() -> ShiftFormViewModel {
    ShiftFormViewModel {
        values: create_rw_signal(utils::blank_days()),
        errors: create_rw_signal(FieldErrors::new()),
        attempted: create_rw_signal(false),
    }
}
