use crate::pages::requests::utils::RequestFilterState;
use leptos::*;

const STATUS_OPTIONS: [&str; 7] = [
    "Pending",
    "Approved",
    "In Progress",
    "Done for Review",
    "Completed",
    "Cancelled",
    "Emergency",
];

#[component]
pub fn RequestsFilter(filter_state: RequestFilterState) -> impl IntoView {
    let status_signal = filter_state.status_signal();
    let query_signal = filter_state.query_signal();
    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <div>
                <h3 class="text-sm font-semibold text-gray-900">{"Filter requests"}</h3>
                <p class="text-xs text-gray-600">{"Narrow the table by status or search text."}</p>
            </div>
            <div class="flex items-center gap-2">
                <input
                    type="search"
                    class="border rounded px-2 py-1 text-sm"
                    placeholder="Search requestor, office, unit..."
                    prop:value=move || query_signal.get()
                    on:input=move |ev| query_signal.set(event_target_value(&ev))
                />
                <select
                    class="border rounded px-2 py-1 text-sm"
                    prop:value=move || status_signal.get()
                    on:change=move |ev| status_signal.set(event_target_value(&ev))
                >
                    <option value="">{"All statuses"}</option>
                    {STATUS_OPTIONS
                        .iter()
                        .map(|status| view! { <option value=*status>{*status}</option> })
                        .collect_view()}
                </select>
                <button
                    class="text-sm text-gray-700 underline"
                    on:click=move |_| filter_state.clear()
                >
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}
