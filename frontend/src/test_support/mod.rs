#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::{
        ledger::{ShiftEntries, SHIFT_DAYS},
        roster::{EmployeeId, Identity, Roster},
        session::{provide_session, Session, SessionContext},
    };

    pub fn employee(raw: &str) -> EmployeeId {
        match Roster::generated().resolve(raw) {
            Ok(Identity::Employee(id)) => id,
            other => panic!("{} did not resolve to an employee: {:?}", raw, other),
        }
    }

    pub fn week_pattern() -> Vec<String> {
        let pattern = ["Morning", "Morning", "Evening", "Night", "Off", "Off", "Night"];
        (0..SHIFT_DAYS)
            .map(|day| pattern[day % pattern.len()].to_string())
            .collect()
    }

    pub fn entries(values: &[String]) -> ShiftEntries {
        ShiftEntries::from_values(values).expect("test values fill every day")
    }

    pub fn provide_employee_session(raw: &str) -> SessionContext {
        let ctx = provide_session(Session::new());
        ctx.login(Identity::Employee(employee(raw)));
        ctx
    }

    pub fn provide_admin_session() -> SessionContext {
        let ctx = provide_session(Session::new());
        ctx.login(Identity::Admin);
        ctx
    }
}
