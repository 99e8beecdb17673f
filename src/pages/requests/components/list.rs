use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::requests::components::status_badge::status_badge_classes;
use crate::pages::requests::types::ServiceRequestDetail;
use crate::pages::requests::utils::format_request_date;
use leptos::*;

#[component]
pub fn RequestsList(
    requests: Signal<Vec<ServiceRequestDetail>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    on_select: Callback<ServiceRequestDetail>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <div class="px-6 py-4 border-b">
                <h3 class="text-lg font-medium text-gray-900">{"Service Requests"}</h3>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="px-6 py-4">
                    <ErrorMessage message={error.get().unwrap_or_default()} />
                </div>
            </Show>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-gray-600">
                    <LoadingSpinner />
                    <span>{"Loading requests..."}</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && requests.get().is_empty() && error.get().is_none()>
                <div class="px-6 py-4 text-sm text-gray-600">
                    {"No requests match the current filter."}
                </div>
            </Show>
            <Show when=move || !requests.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Requestor"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Office"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Unit"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Category"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            <For
                                each=move || requests.get()
                                key=|detail| detail.id
                                children=move |detail: ServiceRequestDetail| {
                                    let detail = store_value(detail);
                                    let row = detail.get_value();
                                    view! {
                                        <tr
                                            class="hover:bg-gray-50 cursor-pointer"
                                            on:click=move |_| on_select.call(detail.get_value())
                                        >
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {format_request_date(&row.date)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {row.requestor.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {row.office.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {row.unit.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                                {row.category_label()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <span class=status_badge_classes(&row.status)>
                                                    {row.status.clone()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
