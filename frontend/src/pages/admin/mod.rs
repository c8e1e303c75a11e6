use crate::state::ledger::Ledger;
use leptos::*;

pub mod components;
pub mod utils;

mod panel;

pub use panel::AdminPanel;

#[component]
pub fn AdminPage(ledger: Signal<Ledger>) -> impl IntoView {
    view! { <AdminPanel ledger=ledger /> }
}
