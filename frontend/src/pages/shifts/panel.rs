use crate::{
    pages::shifts::{components::form::ShiftForm, view_model::use_shift_form_view_model},
    state::{ledger::ShiftEntries, roster::EmployeeId},
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn ShiftPanel(
    employee_id: EmployeeId,
    on_submit: Callback<(EmployeeId, ShiftEntries)>,
) -> impl IntoView {
    let vm = use_shift_form_view_model();
    let heading = employee_id.to_string();
    let employee = store_value(employee_id);

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(entries) = vm.submit() {
            on_submit.call((employee.get_value(), entries));
        }
    });

    view! { <ShiftForm employee_id=heading vm=vm on_submit=handle_submit /> }
}
