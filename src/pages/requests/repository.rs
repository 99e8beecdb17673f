use crate::api::{ApiClient, ApiError, SuccessIndicator};
use serde_json::Value;
use std::rc::Rc;

use super::types::{collect_requests, RequestManagementResponse, ServiceRequestDetail};

#[derive(Clone)]
pub struct RequestManagementRepository {
    client: Rc<ApiClient>,
}

impl RequestManagementRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(&self) -> Result<Vec<ServiceRequestDetail>, ApiError> {
        let value: Value = self.client.get_request_management().await?;
        let response: RequestManagementResponse = serde_json::from_value(value)
            .map_err(|err| ApiError::unknown(format!("Failed to parse requests response: {}", err)))?;
        Ok(collect_requests(&response))
    }

    pub async fn list_indicators(&self) -> Result<Vec<SuccessIndicator>, ApiError> {
        self.client.list_success_indicators().await
    }
}

impl Default for RequestManagementRepository {
    fn default() -> Self {
        Self::new(ApiClient::new())
    }
}
