use super::utils::{self, EMPLOYEE_ID_FIELD};
use crate::{
    state::{
        roster::{Identity, Roster},
        session::use_session,
    },
    utils::validation::FieldErrors,
};
use leptos::*;

/// Errors stay hidden until the first submit; afterwards every edit
/// re-validates so fixed input clears its message.
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub employee_id: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub attempted: RwSignal<bool>,
    roster: StoredValue<Roster>,
}

impl LoginViewModel {
    fn validate(&self) -> Result<Identity, FieldErrors> {
        self.employee_id.with_untracked(|raw| {
            self.roster
                .with_value(|roster| utils::validate_login(raw, roster))
        })
    }

    pub fn set_employee_id(&self, value: String) {
        self.employee_id.set(value);
        if self.attempted.get_untracked() {
            self.errors.set(self.validate().err().unwrap_or_default());
        }
    }

    pub fn submit(&self) -> Option<Identity> {
        self.attempted.set(true);
        match self.validate() {
            Ok(identity) => {
                self.errors.set(FieldErrors::new());
                Some(identity)
            }
            Err(errors) => {
                self.errors.set(errors);
                None
            }
        }
    }

    pub fn field_error(&self) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.message(EMPLOYEE_ID_FIELD)))
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let session = use_session();
    LoginViewModel {
        employee_id: create_rw_signal(String::new()),
        errors: create_rw_signal(FieldErrors::new()),
        attempted: create_rw_signal(false),
        roster: session.roster(),
    }
}
