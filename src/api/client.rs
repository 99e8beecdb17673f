use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn send(
        &self,
        build: impl Fn() -> Result<reqwest::RequestBuilder, ApiError>,
    ) -> Result<reqwest::Response, ApiError> {
        let request = build()?
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = test_hooks::lookup(request.url().as_str()) {
            return responder
                .respond(&request)
                .map(test_hooks::MockResponse::into_response);
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse error: {}", e)))?;
            Err(error)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_hooks::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_hooks {
    use super::ApiError;
    use std::sync::{Arc, Mutex, OnceLock};

    /// Answers requests addressed to a registered mock base URL, so host
    /// tests never touch the network.
    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone)]
    pub struct MockResponse {
        status: u16,
        body: serde_json::Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: serde_json::Value) -> Self {
            Self { status, body }
        }

        pub(super) fn into_response(self) -> reqwest::Response {
            let response = http::Response::builder()
                .status(self.status)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(self.body.to_string())
                .expect("mock response body");
            reqwest::Response::from(response)
        }
    }

    fn registry() -> &'static Mutex<Vec<(String, Arc<dyn TestResponder>)>> {
        static REGISTRY: OnceLock<Mutex<Vec<(String, Arc<dyn TestResponder>)>>> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        let mut entries = registry().lock().expect("mock registry lock");
        entries.retain(|(base, _)| base != &base_url);
        entries.push((base_url, responder));
    }

    // A base only matches at a path boundary, so "http://mock-1" does not
    // capture requests addressed to "http://mock-10".
    fn matches_base(url: &str, base: &str) -> bool {
        url.strip_prefix(base)
            .map(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(false)
    }

    pub(super) fn lookup(url: &str) -> Option<Arc<dyn TestResponder>> {
        let entries = registry().lock().expect("mock registry lock");
        entries
            .iter()
            .rev()
            .find(|(base, _)| matches_base(url, base))
            .map(|(_, responder)| responder.clone())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        struct AlwaysOk;

        impl TestResponder for AlwaysOk {
            fn respond(&self, _request: &reqwest::Request) -> Result<MockResponse, ApiError> {
                Ok(MockResponse::json(200, serde_json::json!({})))
            }
        }

        #[test]
        fn lookup_matches_bases_only_at_path_boundaries() {
            register_mock("http://mock-one".into(), Arc::new(AlwaysOk));

            assert!(lookup("http://mock-one").is_some());
            assert!(lookup("http://mock-one/gso_requests/management/").is_some());
            assert!(lookup("http://mock-one-extra/gso_requests/management/").is_none());
        }
    }
}
