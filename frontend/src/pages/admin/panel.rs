use crate::{
    components::empty_state::EmptyState,
    pages::admin::{components::table::ShiftTable, utils::table_rows},
    state::ledger::Ledger,
};
use leptos::*;

#[component]
pub fn AdminPanel(ledger: Signal<Ledger>) -> impl IntoView {
    let rows = Signal::derive(move || ledger.with(table_rows));
    let is_empty = move || ledger.with(Ledger::is_empty);

    view! {
        <div class="flex flex-col items-center py-8 px-4 sm:px-6 lg:px-8 space-y-6">
            <h2 class="text-2xl font-extrabold text-fg">"Admin View"</h2>
            <ShiftTable rows=rows />
            <Show when=is_empty fallback=|| ()>
                <EmptyState
                    title="No shifts submitted yet"
                    description="Rows appear here once employees submit their 30 days."
                />
            </Show>
        </div>
    }
}
