//! Field-level form validation results.
//!
//! Validators are plain functions from form values to [`FieldErrors`]; the
//! views only decide when to show them.

use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    RequiredFieldMissing(&'static str),
    #[error("Invalid Employee ID")]
    InvalidIdentifier,
    #[error("Only 30 days can be submitted")]
    DayOutOfRange,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, FormError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FormError) {
        self.errors.insert(field.into(), error);
    }

    pub fn get(&self, field: &str) -> Option<FormError> {
        self.errors.get(field).copied()
    }

    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(|err| err.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
