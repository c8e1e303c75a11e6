use crate::{
    state::roster::{Identity, Roster},
    utils::validation::FieldErrors,
};

pub const EMPLOYEE_ID_FIELD: &str = "employee_id";

pub fn validate_login(raw: &str, roster: &Roster) -> Result<Identity, FieldErrors> {
    roster.resolve(raw).map_err(|err| {
        let mut errors = FieldErrors::new();
        errors.insert(EMPLOYEE_ID_FIELD, err);
        errors
    })
}
