use crate::pages::requests::{
    components::{
        detail_modal::RequestDetailModal, filter::RequestsFilter, list::RequestsList,
    },
    layout::RequestsLayout,
    repository::RequestManagementRepository,
    types::ServiceRequestDetail,
    utils::RequestFilterState,
};
use leptos::*;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let repository = store_value(RequestManagementRepository::default());
    let filter_state = RequestFilterState::default();
    let selected_request = create_rw_signal(None::<ServiceRequestDetail>);
    let reload = create_rw_signal(0u32);

    let requests_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_requests().await }
        },
    );
    let indicators_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.list_indicators().await }
        },
    );

    let requests_loading = requests_resource.loading();
    let requests_error = Signal::derive(move || {
        requests_resource
            .get()
            .and_then(|result| result.err())
            .map(String::from)
    });
    let all_requests = Signal::derive(move || {
        requests_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let filtered_requests = Signal::derive(move || {
        all_requests
            .get()
            .into_iter()
            .filter(|detail| filter_state.matches(detail))
            .collect::<Vec<_>>()
    });

    // The indicator list only feeds the modal dropdown, so a failed fetch
    // degrades to an empty dropdown instead of blocking the whole page.
    create_effect(move |_| {
        if let Some(Err(err)) = indicators_resource.get() {
            log::warn!("failed to load success indicators: {}", err.error);
        }
    });
    let indicators = Signal::derive(move || {
        indicators_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let on_select = Callback::new(move |detail: ServiceRequestDetail| {
        selected_request.set(Some(detail));
    });

    view! {
        <>
            <RequestsLayout>
                <RequestsFilter filter_state=filter_state />
                <RequestsList
                    requests=filtered_requests
                    loading=requests_loading
                    error=requests_error
                    on_select=on_select
                />
            </RequestsLayout>
            <RequestDetailModal selected=selected_request indicators=indicators />
        </>
    }
}
