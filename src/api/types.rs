use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

/// A selectable outcome classification maintained by the reports office and
/// offered to personnel when a request nears completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessIndicator {
    pub id: i64,
    pub code: String,
    pub description: String,
}

impl SuccessIndicator {
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.code, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_constructors_set_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_converts_to_message() {
        let error = ApiError::unknown("boom");
        assert_eq!(error.to_string(), "boom");
        assert_eq!(String::from(error), "boom");
    }

    #[test]
    fn indicator_option_label_joins_code_and_description() {
        let indicator = SuccessIndicator {
            id: 3,
            code: "SI-1".into(),
            description: "Uptime".into(),
        };
        assert_eq!(indicator.option_label(), "SI-1 - Uptime");
    }
}
