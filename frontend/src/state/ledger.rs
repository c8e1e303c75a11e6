use super::roster::EmployeeId;
use crate::utils::validation::{FieldErrors, FormError};

pub const SHIFT_DAYS: usize = 30;

pub fn shift_field_name(day_index: usize) -> String {
    format!("shifts[{}]", day_index)
}

/// One employee's submission: exactly [`SHIFT_DAYS`] non-empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEntries(Vec<String>);

impl ShiftEntries {
    /// Every empty or missing day gets its own error, and so does every value
    /// past the last day.
    pub fn from_values(values: &[String]) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut days = Vec::with_capacity(SHIFT_DAYS);
        for index in 0..SHIFT_DAYS {
            match values.get(index) {
                Some(value) if !value.is_empty() => days.push(value.clone()),
                _ => errors.insert(
                    shift_field_name(index),
                    FormError::RequiredFieldMissing("Shift"),
                ),
            }
        }
        for index in SHIFT_DAYS..values.len() {
            errors.insert(shift_field_name(index), FormError::DayOutOfRange);
        }
        if errors.is_empty() {
            Ok(Self(days))
        } else {
            Err(errors)
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Submissions keyed by employee, in first-submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    rows: Vec<(EmployeeId, ShiftEntries)>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites in place when the employee already has a row.
    pub fn record(&mut self, employee: EmployeeId, entries: ShiftEntries) {
        match self.rows.iter_mut().find(|(id, _)| *id == employee) {
            Some((_, existing)) => *existing = entries,
            None => self.rows.push((employee, entries)),
        }
    }

    pub fn get(&self, employee: &EmployeeId) -> Option<&ShiftEntries> {
        self.rows
            .iter()
            .find(|(id, _)| id == employee)
            .map(|(_, entries)| entries)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&EmployeeId, &ShiftEntries)> + '_ {
        self.rows.iter().map(|(id, entries)| (id, entries))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
