use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use pages::{home::HomePage, requests::RequestsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/requests" view=RequestsPage/>
            </Routes>
        </Router>
    }
}

// The bin is the sole entry point; it initializes logging and runtime
// config before calling this.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    mount_to_body(|| view! { <App/> });
}
