use crate::{
    components::{common::SubmitButton, forms::TextField},
    pages::shifts::{
        utils::{day_label, SHIFT_PLACEHOLDER},
        view_model::ShiftFormViewModel,
    },
    state::ledger::{shift_field_name, SHIFT_DAYS},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ShiftForm(
    #[prop(into)] employee_id: String,
    vm: ShiftFormViewModel,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let day_fields = (0..SHIFT_DAYS)
        .map(|index| {
            let on_input = Callback::new(move |value: String| vm.set_day(index, value));
            view! {
                <TextField
                    id=shift_field_name(index)
                    label=day_label(index)
                    placeholder=SHIFT_PLACEHOLDER
                    value=vm.day_value(index)
                    error=vm.day_error(index)
                    on_input=on_input
                />
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col items-center py-8 px-4 sm:px-6 lg:px-8">
            <div class="w-full max-w-4xl space-y-6">
                <h2 class="text-center text-2xl font-extrabold text-fg">
                    {format!("Input Shifts for {}", employee_id)}
                </h2>
                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {day_fields}
                    </div>
                    <SubmitButton>"Submit Shifts"</SubmitButton>
                </form>
            </div>
        </div>
    }
}
