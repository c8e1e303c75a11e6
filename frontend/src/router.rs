use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireAdmin, RequireEmployee},
        layout::Layout,
    },
    config,
    pages::{admin::AdminPage, login::LoginPage, shifts::ShiftsPage},
    state::{
        ledger::ShiftEntries,
        roster::{EmployeeId, Identity},
        session::{use_session, SessionProvider},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Shifts,
    Admin,
}

impl AppRoute {
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Shifts => "/shifts",
            AppRoute::Admin => "/admin",
        }
    }
}

pub const ROUTE_PATHS: &[&str] = &["/", "/shifts", "/admin"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/shifts", "/admin"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text=config::app_title()/>
        <SessionProvider>
            <Router>
                <Layout>
                    <Routes>
                        <Route path=AppRoute::Login.path() view=LoginRoute/>
                        <Route path=AppRoute::Shifts.path() view=ProtectedShifts/>
                        <Route path=AppRoute::Admin.path() view=ProtectedAdmin/>
                    </Routes>
                </Layout>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let on_login = Callback::new(move |identity: Identity| {
        let target = session.login(identity);
        navigate(target.path(), Default::default());
    });
    view! { <LoginPage on_login=on_login /> }
}

#[component]
fn ProtectedShifts() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let navigate = use_navigate();
    let on_submit = Callback::new(move |(employee, entries): (EmployeeId, ShiftEntries)| {
        match session.submit_shifts(&employee, entries) {
            Ok(target) => navigate(target.path(), Default::default()),
            Err(err) => log::warn!("shift submission rejected: {}", err),
        }
    });
    view! {
        <RequireEmployee>
            {move || {
                state
                    .get()
                    .current_employee()
                    .cloned()
                    .map(|employee| view! { <ShiftsPage employee_id=employee on_submit=on_submit /> })
            }}
        </RequireEmployee>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    let session = use_session();
    view! { <RequireAdmin><AdminPage ledger=session.ledger() /></RequireAdmin> }
}
