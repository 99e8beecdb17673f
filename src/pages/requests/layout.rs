use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn RequestsLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Request Management"}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {"Review service requests, approve pending ones, and assign success indicators."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
