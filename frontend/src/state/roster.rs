use crate::utils::validation::FormError;
use std::fmt;

pub const ROSTER_SIZE: usize = 100;
pub const ADMIN_ID: &str = "admin";

/// Identifier of an employee on the roster.
///
/// Only [`Roster`] hands these out, so a value of this type is always one of
/// the generated ids and never the admin sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: EmployeeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin,
    Employee(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Mock roster: `emp1`..`emp100`, named `Employee 1`..`Employee 100`.
    pub fn generated() -> Self {
        let entries = (1..=ROSTER_SIZE)
            .map(|n| RosterEntry {
                id: EmployeeId(format!("emp{}", n)),
                name: format!("Employee {}", n),
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn find(&self, raw: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id.as_str() == raw)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.find(raw).is_some()
    }

    pub fn display_name(&self, id: &EmployeeId) -> Option<&str> {
        self.find(id.as_str()).map(|entry| entry.name.as_str())
    }

    /// Maps raw login input to an identity. Matching is exact.
    pub fn resolve(&self, raw: &str) -> Result<Identity, FormError> {
        if raw.is_empty() {
            return Err(FormError::RequiredFieldMissing("Employee ID"));
        }
        if raw == ADMIN_ID {
            return Ok(Identity::Admin);
        }
        self.find(raw)
            .map(|entry| Identity::Employee(entry.id.clone()))
            .ok_or(FormError::InvalidIdentifier)
    }
}
