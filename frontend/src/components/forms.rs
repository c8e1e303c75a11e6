use crate::components::error::FieldErrorMessage;
use leptos::*;

/// Labelled text input with its inline validation message.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    value: Signal<String>,
    error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let error_id = format!("{}-error", id);
    let invalid = move || error.get().is_some();
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label for=id.clone() class="text-sm font-bold text-fg-muted ml-1">{label}</label>
            <input
                id=id.clone()
                name=id
                type="text"
                class=move || format!(
                    "appearance-none rounded-md block w-full px-3 py-2 border bg-form-control-bg text-fg placeholder-text-muted focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm {}",
                    if invalid() { "border-status-error-border" } else { "border-form-control-border" }
                )
                placeholder=placeholder
                aria-invalid=move || if invalid() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <FieldErrorMessage id=error_id error=error />
        </div>
    }
}
