//! Session state for the single active user and the submission ledger.
//!
//! [`Session`] holds the transitions as plain methods so they can be tested
//! without a reactive runtime. [`SessionContext`] wraps it in a signal and is
//! what the views receive through context.

use super::{
    ledger::{Ledger, ShiftEntries},
    roster::{EmployeeId, Identity, Roster},
};
use crate::router::AppRoute;
use leptos::*;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Anonymous,
    EnteringShifts(EmployeeId),
    AdminView,
}

impl SessionState {
    pub fn current_employee(&self) -> Option<&EmployeeId> {
        match self {
            SessionState::EnteringShifts(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, SessionState::AdminView)
    }

    pub fn landing_route(&self) -> AppRoute {
        match self {
            SessionState::Anonymous => AppRoute::Login,
            SessionState::EnteringShifts(_) => AppRoute::Shifts,
            SessionState::AdminView => AppRoute::Admin,
        }
    }

    pub fn allows(&self, route: AppRoute) -> bool {
        match route {
            AppRoute::Login => true,
            AppRoute::Shifts => self.current_employee().is_some(),
            AppRoute::Admin => self.is_admin(),
        }
    }

    /// Where a request for `requested` actually ends up.
    pub fn resolve_route(&self, requested: AppRoute) -> AppRoute {
        if self.allows(requested) {
            requested
        } else {
            AppRoute::Login
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no employee is entering shifts")]
    NotEnteringShifts,
    #[error("shifts submitted for {submitted} while {active} is signed in")]
    EmployeeMismatch {
        active: EmployeeId,
        submitted: EmployeeId,
    },
    #[error("session is no longer available")]
    Closed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Login is accepted from any state.
    pub fn login(&mut self, identity: Identity) -> AppRoute {
        self.state = match identity {
            Identity::Admin => {
                log::info!("administrator signed in");
                SessionState::AdminView
            }
            Identity::Employee(id) => {
                log::info!("employee {} signed in", id);
                SessionState::EnteringShifts(id)
            }
        };
        self.state.landing_route()
    }

    pub fn check_submission(&self, employee: &EmployeeId) -> Result<(), SessionError> {
        match &self.state {
            SessionState::EnteringShifts(active) if active == employee => Ok(()),
            SessionState::EnteringShifts(active) => Err(SessionError::EmployeeMismatch {
                active: active.clone(),
                submitted: employee.clone(),
            }),
            _ => Err(SessionError::NotEnteringShifts),
        }
    }

    pub fn submit_shifts(
        &mut self,
        employee: &EmployeeId,
        entries: ShiftEntries,
    ) -> Result<AppRoute, SessionError> {
        self.check_submission(employee)?;
        let replaced = self.ledger.get(employee).is_some();
        self.ledger.record(employee.clone(), entries);
        self.state = SessionState::Anonymous;
        log::info!(
            "recorded shifts for {} ({})",
            employee,
            if replaced { "replaced" } else { "new" }
        );
        log::debug!("ledger now holds {} employees", self.ledger.len());
        Ok(self.state.landing_route())
    }
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    roster: StoredValue<Roster>,
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: create_rw_signal(session),
            roster: store_value(Roster::generated()),
        }
    }

    pub fn state(&self) -> Signal<SessionState> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.state().clone()))
    }

    pub fn ledger(&self) -> Signal<Ledger> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.ledger().clone()))
    }

    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn roster(&self) -> StoredValue<Roster> {
        self.roster
    }

    pub fn display_name(&self, id: &EmployeeId) -> Option<String> {
        self.roster
            .with_value(|roster| roster.display_name(id).map(str::to_string))
    }

    pub fn login(&self, identity: Identity) -> AppRoute {
        self.session
            .try_update(|session| session.login(identity))
            .unwrap_or(AppRoute::Login)
    }

    /// Rejected submissions leave the signal untouched.
    pub fn submit_shifts(
        &self,
        employee: &EmployeeId,
        entries: ShiftEntries,
    ) -> Result<AppRoute, SessionError> {
        self.session
            .try_with_untracked(|session| session.check_submission(employee))
            .unwrap_or(Err(SessionError::Closed))?;
        self.session
            .try_update(|session| session.submit_shifts(employee, entries))
            .unwrap_or(Err(SessionError::Closed))
    }
}

pub fn provide_session(session: Session) -> SessionContext {
    let ctx = SessionContext::new(session);
    provide_context(ctx);
    ctx
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_session(Session::new());
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    match use_context::<SessionContext>() {
        Some(ctx) => ctx,
        None => provide_session(Session::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ledger::SHIFT_DAYS;

    fn roster() -> Roster {
        Roster::generated()
    }

    fn employee(raw: &str) -> EmployeeId {
        match roster().resolve(raw) {
            Ok(Identity::Employee(id)) => id,
            other => panic!("{} did not resolve to an employee: {:?}", raw, other),
        }
    }

    fn entries(label: &str) -> ShiftEntries {
        let values: Vec<String> = (0..SHIFT_DAYS).map(|day| format!("{}-{}", label, day)).collect();
        ShiftEntries::from_values(&values).unwrap()
    }

    #[test]
    fn new_session_is_anonymous_with_empty_ledger() {
        let session = Session::new();
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn every_roster_id_logs_in_to_shift_entry() {
        for entry in roster().entries() {
            let mut session = Session::new();
            let route = session.login(Identity::Employee(entry.id.clone()));
            assert_eq!(route, AppRoute::Shifts);
            assert_eq!(
                session.state(),
                &SessionState::EnteringShifts(entry.id.clone())
            );
        }
    }

    #[test]
    fn admin_login_opens_admin_view() {
        let mut session = Session::new();
        assert_eq!(session.login(Identity::Admin), AppRoute::Admin);
        assert!(session.state().is_admin());
        assert!(session.state().current_employee().is_none());
    }

    #[test]
    fn employee_login_replaces_admin_mode() {
        let mut session = Session::new();
        session.login(Identity::Admin);
        session.login(Identity::Employee(employee("emp5")));
        assert!(!session.state().is_admin());
        assert_eq!(session.state().current_employee(), Some(&employee("emp5")));
    }

    #[test]
    fn submission_records_entries_and_signs_out() {
        let mut session = Session::new();
        let id = employee("emp12");
        session.login(Identity::Employee(id.clone()));

        let route = session.submit_shifts(&id, entries("day")).unwrap();

        assert_eq!(route, AppRoute::Login);
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.ledger().get(&id), Some(&entries("day")));
    }

    #[test]
    fn resubmission_overwrites_existing_row() {
        let mut session = Session::new();
        let id = employee("emp1");
        session.login(Identity::Employee(id.clone()));
        session.submit_shifts(&id, entries("first")).unwrap();
        session.login(Identity::Employee(id.clone()));
        session.submit_shifts(&id, entries("second")).unwrap();

        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().get(&id), Some(&entries("second")));
    }

    #[test]
    fn submission_without_login_is_rejected() {
        let mut session = Session::new();
        let err = session
            .submit_shifts(&employee("emp3"), entries("x"))
            .unwrap_err();
        assert_eq!(err, SessionError::NotEnteringShifts);
        assert!(session.ledger().is_empty());
        assert_eq!(session.state(), &SessionState::Anonymous);
    }

    #[test]
    fn submission_for_another_employee_is_rejected() {
        let mut session = Session::new();
        session.login(Identity::Employee(employee("emp3")));
        let err = session
            .submit_shifts(&employee("emp4"), entries("x"))
            .unwrap_err();
        assert!(matches!(err, SessionError::EmployeeMismatch { .. }));
        assert!(session.ledger().is_empty());
        assert_eq!(
            session.state(),
            &SessionState::EnteringShifts(employee("emp3"))
        );
    }

    #[test]
    fn guards_send_unauthorised_routes_to_login() {
        let anonymous = SessionState::Anonymous;
        assert_eq!(anonymous.resolve_route(AppRoute::Shifts), AppRoute::Login);
        assert_eq!(anonymous.resolve_route(AppRoute::Admin), AppRoute::Login);
        assert_eq!(anonymous.resolve_route(AppRoute::Login), AppRoute::Login);

        let employee_state = SessionState::EnteringShifts(employee("emp2"));
        assert_eq!(employee_state.resolve_route(AppRoute::Shifts), AppRoute::Shifts);
        assert_eq!(employee_state.resolve_route(AppRoute::Admin), AppRoute::Login);

        let admin = SessionState::AdminView;
        assert_eq!(admin.resolve_route(AppRoute::Admin), AppRoute::Admin);
        assert_eq!(admin.resolve_route(AppRoute::Shifts), AppRoute::Login);
    }
}
