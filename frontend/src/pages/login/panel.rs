use crate::{
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    state::roster::Identity,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(on_login: Callback<Identity>) -> impl IntoView {
    let vm = use_login_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(identity) = vm.submit() {
            on_login.call(identity);
        }
    });

    let employee_id_input = Callback::new(move |value: String| vm.set_employee_id(value));

    view! {
        <LoginForm
            employee_id=vm.employee_id.into()
            error=vm.field_error()
            on_employee_id_input=employee_id_input
            on_submit=handle_submit
        />
    }
}
