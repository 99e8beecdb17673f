use chrono::NaiveDate;
use leptos::*;

use super::types::ServiceRequestDetail;

/// Status dropdown plus the free-text search the GSO office uses to narrow
/// the request table.
#[derive(Clone, Copy)]
pub struct RequestFilterState {
    status: RwSignal<String>,
    query: RwSignal<String>,
}

impl Default for RequestFilterState {
    fn default() -> Self {
        Self {
            status: create_rw_signal(String::new()),
            query: create_rw_signal(String::new()),
        }
    }
}

impl RequestFilterState {
    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn query_signal(&self) -> RwSignal<String> {
        self.query
    }

    pub fn clear(&self) {
        self.status.set(String::new());
        self.query.set(String::new());
    }

    pub fn matches(&self, detail: &ServiceRequestDetail) -> bool {
        let status = self.status.get();
        if !status.is_empty() && detail.status != status {
            return false;
        }
        let query = self.query.get();
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            &detail.requestor,
            &detail.office,
            &detail.unit,
            &detail.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Table-friendly date: "2025-03-14" becomes "Mar 14, 2025"; anything the
/// backend sends in another shape is shown untouched.
pub fn format_request_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn text_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
