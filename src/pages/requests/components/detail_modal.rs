use crate::api::SuccessIndicator;
use crate::pages::requests::components::status_badge::status_badge_classes;
use crate::pages::requests::types::ServiceRequestDetail;
use crate::pages::requests::utils::text_or;
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;

const UNASSIGNED: &str = "Unassigned";
const NO_MATERIALS: &str = "No materials assigned";
const NO_REPORTS: &str = "No reports submitted";

/// Detail dialog for one service request. Every render fully resynchronizes
/// the dialog from the selected record, so reopening or switching rows never
/// leaks state from the previous request.
#[component]
pub fn RequestDetailModal(
    selected: RwSignal<Option<ServiceRequestDetail>>,
    #[prop(into)] indicators: Signal<Vec<SuccessIndicator>>,
) -> impl IntoView {
    let close_ref = create_node_ref::<html::Button>();

    let on_dialog_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            selected.set(None);
        }
    };

    create_effect(move |_| {
        if selected.get().is_some() {
            #[cfg(target_arch = "wasm32")]
            if let Some(button) = close_ref.get() {
                let _ = button.focus();
            }
        }
    });

    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|detail| {
                        let approve_visible = detail.shows_approve_form();
                        let locked = detail.indicator_locked();
                        let chosen_indicator = detail.selected_indicator_id;
                        let reports = text_or(&detail.reports_html, NO_REPORTS).to_string();
                        let approve_action = detail.approve_action();
                        let indicator_action = detail.indicator_action();
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div
                                    class="fixed inset-0 bg-overlay-backdrop"
                                    on:click=move |_| selected.set(None)
                                ></div>
                                <div
                                    id="requestModal"
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg mx-4 p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=on_dialog_keydown
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-fg-muted">"Service Request"</p>
                                            <p class="text-lg font-semibold text-fg">
                                                {format!("Request #{}", detail.id)}
                                            </p>
                                        </div>
                                        <button
                                            id="request-modal-close"
                                            node_ref=close_ref
                                            aria-label="Close"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| selected.set(None)
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <div class="space-y-2 text-sm text-fg">
                                        <div>
                                            <span class="font-medium text-fg-muted">"Date: "</span>
                                            <span id="modal-date">{detail.date.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Requestor: "</span>
                                            <span id="modal-requestor">{detail.requestor.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Office: "</span>
                                            <span id="modal-office">{detail.office.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Unit: "</span>
                                            <span id="modal-unit">{detail.unit.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Description: "</span>
                                            <span id="modal-description">{detail.description.clone()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Assigned Personnel: "</span>
                                            <span id="modal-personnel">
                                                {text_or(&detail.personnel, UNASSIGNED).to_string()}
                                            </span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Materials: "</span>
                                            <span id="modal-materials">
                                                {text_or(&detail.materials, NO_MATERIALS).to_string()}
                                            </span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Reports: "</span>
                                            // Pre-rendered by the backend; the only markup-capable field.
                                            <span id="modal-reports" inner_html=reports></span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Category: "</span>
                                            <span id="modal-category">{detail.category_label()}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Status: "</span>
                                            <span
                                                id="modal-status"
                                                class=status_badge_classes(&detail.status)
                                            >
                                                {detail.status.clone()}
                                            </span>
                                        </div>
                                    </div>
                                    {detail
                                        .visible_cancel_reason()
                                        .map(|reason| {
                                            let reason = reason.to_string();
                                            view! {
                                                <div
                                                    id="modal-cancel-reason"
                                                    class="text-sm text-status-error-text bg-status-error-bg border border-status-error-border rounded px-3 py-2"
                                                >
                                                    <span class="font-medium">"Reason for Cancellation: "</span>
                                                    <span inner_html=reason></span>
                                                </div>
                                            }
                                        })}
                                    <Show when=move || approve_visible>
                                        <form
                                            id="approveForm"
                                            method="post"
                                            action=approve_action.clone()
                                        >
                                            <button
                                                type="submit"
                                                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg_hover"
                                            >
                                                "Approve Request"
                                            </button>
                                        </form>
                                    </Show>
                                    <form
                                        id="indicatorForm"
                                        method="post"
                                        action=indicator_action
                                        class="space-y-2"
                                        class=("pointer-events-none", locked)
                                        style:opacity=if locked { "0.5" } else { "1" }
                                    >
                                        <label class="text-sm font-medium text-fg-muted" for="selected_indicator">
                                            "Success Indicator"
                                        </label>
                                        <select
                                            id="selected_indicator"
                                            name="selected_indicator"
                                            class="w-full border rounded px-2 py-1 text-sm"
                                            disabled=locked
                                        >
                                            <option value="" selected=move || {
                                                let ids = indicators.get();
                                                !chosen_indicator
                                                    .map(|id| ids.iter().any(|indicator| indicator.id == id))
                                                    .unwrap_or(false)
                                            }>
                                                "-- Select Success Indicator --"
                                            </option>
                                            <For
                                                each=move || indicators.get()
                                                key=|indicator| indicator.id
                                                children=move |indicator: SuccessIndicator| {
                                                    let is_chosen = chosen_indicator == Some(indicator.id);
                                                    view! {
                                                        <option value=indicator.id selected=is_chosen>
                                                            {indicator.option_label()}
                                                        </option>
                                                    }
                                                }
                                            />
                                        </select>
                                        <button
                                            type="submit"
                                            class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-60"
                                            disabled=locked
                                        >
                                            "Save Indicator"
                                        </button>
                                    </form>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
