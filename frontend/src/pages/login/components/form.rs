use crate::{
    components::{common::SubmitButton, forms::TextField},
    pages::login::utils::EMPLOYEE_ID_FIELD,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    employee_id: Signal<String>,
    error: Signal<Option<String>>,
    on_employee_id_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                    "Employee Login"
                </h2>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <TextField
                        id=EMPLOYEE_ID_FIELD
                        label="Employee ID"
                        placeholder="Enter your Employee ID"
                        value=employee_id
                        error=error
                        on_input=on_employee_id_input
                    />
                    <SubmitButton class="w-full">"Login"</SubmitButton>
                </form>
            </div>
        </div>
    }
}
