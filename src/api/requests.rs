use serde_json::Value;

use super::{client::ApiClient, types::{ApiError, SuccessIndicator}};

impl ApiClient {
    /// Fetches the full request-management payload for the GSO office screen.
    pub async fn get_request_management(&self) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/gso_requests/management/", base_url)))
            })
            .await?;
        self.map_json_response(response).await
    }

    /// Fetches the active success indicators, ordered by code on the server.
    pub async fn list_success_indicators(&self) -> Result<Vec<SuccessIndicator>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/gso_reports/success-indicators/", base_url)))
            })
            .await?;
        self.map_json_response(response).await
    }
}
