use crate::state::{ledger::ShiftEntries, roster::EmployeeId};
use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ShiftPanel;

#[component]
pub fn ShiftsPage(
    employee_id: EmployeeId,
    on_submit: Callback<(EmployeeId, ShiftEntries)>,
) -> impl IntoView {
    view! { <ShiftPanel employee_id=employee_id on_submit=on_submit /> }
}
