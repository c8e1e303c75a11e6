use leptos::*;

#[component]
pub fn FieldErrorMessage(
    #[prop(into)] id: String,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p id=id.clone() class="mt-1 text-sm text-status-error-text" role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
