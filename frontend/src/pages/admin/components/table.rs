use crate::pages::admin::utils::{day_headers, AdminRow};
use leptos::*;

#[component]
pub fn ShiftTable(rows: Signal<Vec<AdminRow>>) -> impl IntoView {
    let headers = day_headers();
    view! {
        <div class="w-full overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                            "Employee ID"
                        </th>
                        {headers
                            .into_iter()
                            .map(|header| view! {
                                <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider whitespace-nowrap">
                                    {header}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| view! {
                                <tr data-employee-id=row.employee_id.clone()>
                                    <td class="px-4 py-3 whitespace-nowrap text-sm font-medium text-fg">
                                        {row.employee_id}
                                    </td>
                                    {row
                                        .cells
                                        .into_iter()
                                        .map(|cell| view! {
                                            <td class="px-4 py-3 whitespace-nowrap text-sm text-fg">{cell}</td>
                                        })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
