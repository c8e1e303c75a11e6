use crate::{
    config,
    router::AppRoute,
    state::{
        roster::EmployeeId,
        session::{use_session, SessionState},
    },
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let badge = move || session_badge(&state.get(), |id| session.display_name(id));
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">{config::app_title()}</h1>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-fg-muted" data-session-badge="">{badge}</span>
                        <a
                            href=AppRoute::Login.path()
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Employee Login"
                        </a>
                    </div>
                </div>
            </div>
        </header>
    }
}

fn session_badge(
    state: &SessionState,
    display_name: impl Fn(&EmployeeId) -> Option<String>,
) -> String {
    match state {
        SessionState::Anonymous => "Not signed in".to_string(),
        SessionState::EnteringShifts(id) => match display_name(id) {
            Some(name) => format!("Entering shifts for {} ({})", name, id),
            None => format!("Entering shifts for {}", id),
        },
        SessionState::AdminView => "Administrator".to_string(),
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}
