use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Workflow states a service request moves through. Labels on the wire are
/// the human-readable forms ("In Progress", "Done for Review").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    InProgress,
    DoneForReview,
    Completed,
    Cancelled,
    Emergency,
}

impl RequestStatus {
    /// Unknown labels are tolerated and simply carry no status styling.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Pending" => Some(Self::Pending),
            "Approved" => Some(Self::Approved),
            "In Progress" => Some(Self::InProgress),
            "Done for Review" => Some(Self::DoneForReview),
            "Completed" => Some(Self::Completed),
            "Cancelled" => Some(Self::Cancelled),
            "Emergency" => Some(Self::Emergency),
            _ => None,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::InProgress => "in-progress",
            Self::DoneForReview => "review",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RequestManagementResponse {
    #[serde(default)]
    pub requests: Vec<Value>,
}

/// One service request, flattened for display. The loosely typed booleans
/// and the indicator id are normalized here, at the JSON boundary, so the
/// rest of the page works with real types.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceRequestDetail {
    pub id: i64,
    pub date: String,
    pub requestor: String,
    pub office: String,
    pub unit: String,
    pub description: String,
    pub status: String,
    pub personnel: String,
    pub materials: String,
    pub reports_html: String,
    pub labor: bool,
    pub materials_needed: bool,
    pub others_needed: bool,
    pub cancel_reason: String,
    pub selected_indicator_id: Option<i64>,
}

impl ServiceRequestDetail {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: value.get("id").and_then(Value::as_i64).unwrap_or_default(),
            date: extract_string(value, "date"),
            requestor: extract_string(value, "requestor"),
            office: extract_string(value, "office"),
            unit: extract_string(value, "unit"),
            description: extract_string(value, "description"),
            status: extract_string(value, "status"),
            personnel: extract_string(value, "personnel"),
            materials: extract_string(value, "materials"),
            reports_html: extract_string(value, "reports"),
            labor: loose_flag(value.get("labor")),
            materials_needed: loose_flag(value.get("materials_needed")),
            others_needed: loose_flag(value.get("others_needed")),
            cancel_reason: extract_string(value, "cancel_reason"),
            selected_indicator_id: loose_id(value.get("selected_indicator_id")),
        }
    }

    pub fn parsed_status(&self) -> Option<RequestStatus> {
        RequestStatus::parse(&self.status)
    }

    pub fn category_label(&self) -> String {
        category_label(self.labor, self.materials_needed, self.others_needed)
    }

    /// The approval form only appears while the request awaits the director's
    /// decision and personnel have already been proposed.
    pub fn shows_approve_form(&self) -> bool {
        self.parsed_status() == Some(RequestStatus::Pending) && !self.personnel.trim().is_empty()
    }

    /// A cancellation note is only worth a panel when the request is actually
    /// cancelled and the reason carries text other than the literal "None".
    pub fn visible_cancel_reason(&self) -> Option<&str> {
        if self.parsed_status() != Some(RequestStatus::Cancelled) {
            return None;
        }
        let reason = self.cancel_reason.trim();
        if reason.is_empty() || reason == "None" {
            return None;
        }
        Some(self.cancel_reason.as_str())
    }

    /// Completed requests keep their indicator frozen for WAR generation.
    pub fn indicator_locked(&self) -> bool {
        self.parsed_status() == Some(RequestStatus::Completed)
    }

    pub fn approve_action(&self) -> String {
        format!("/gso_requests/approve/{}/", self.id)
    }

    pub fn indicator_action(&self) -> String {
        format!("/gso_requests/request/{}/update_indicator/", self.id)
    }
}

/// Accepts boolean `true`, `"True"`, or `"1"` as true; anything else,
/// including a missing field, is false.
pub fn loose_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(s)) => s == "True" || s == "1",
        _ => false,
    }
}

// The backend serializes the pre-selected indicator id either as a number or
// as a numeric string depending on which form saved it.
fn loose_id(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn category_label(labor: bool, materials: bool, others: bool) -> String {
    let mut categories = Vec::new();
    if labor {
        categories.push("Labor");
    }
    if materials {
        categories.push("Materials");
    }
    if others {
        categories.push("Others");
    }
    if categories.is_empty() {
        "None".to_string()
    } else {
        categories.join(", ")
    }
}

fn extract_string(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_default()
}

pub fn collect_requests(response: &RequestManagementResponse) -> Vec<ServiceRequestDetail> {
    response
        .requests
        .iter()
        .map(ServiceRequestDetail::from_value)
        .collect()
}
