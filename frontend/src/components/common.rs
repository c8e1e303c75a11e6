use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
        }
    }
}

#[component]
pub fn SubmitButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=format!(
                "mt-4 inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 {} {}",
                variant.classes(),
                class
            )
        >
            {children()}
        </button>
    }
}
