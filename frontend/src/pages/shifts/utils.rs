use crate::{
    state::ledger::{ShiftEntries, SHIFT_DAYS},
    utils::validation::FieldErrors,
};

pub const SHIFT_PLACEHOLDER: &str = "Enter shift";

pub fn day_label(index: usize) -> String {
    format!("Day {}", index + 1)
}

pub fn blank_days() -> Vec<String> {
    vec![String::new(); SHIFT_DAYS]
}

pub fn validate_shifts(values: &[String]) -> Result<ShiftEntries, FieldErrors> {
    ShiftEntries::from_values(values)
}
