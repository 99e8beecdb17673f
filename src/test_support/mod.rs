#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::SuccessIndicator;
    use serde_json::{json, Value};

    /// A management record with every field present but every optional field
    /// empty, so tests only set what they assert on.
    pub fn sample_request(status: &str) -> Value {
        json!({
            "id": 7,
            "date": "2025-03-14",
            "requestor": "Maria Santos",
            "office": "Registrar",
            "unit": "Records",
            "description": "Replace busted ceiling light",
            "status": status,
            "personnel": "",
            "materials": "",
            "reports": "",
            "labor": false,
            "materials_needed": false,
            "others_needed": false,
            "cancel_reason": "",
            "selected_indicator_id": Value::Null,
        })
    }

    pub fn sample_indicators() -> Vec<SuccessIndicator> {
        vec![
            SuccessIndicator {
                id: 1,
                code: "GSO-01".into(),
                description: "Requests resolved within 3 days".into(),
            },
            SuccessIndicator {
                id: 2,
                code: "GSO-02".into(),
                description: "Preventive maintenance completed".into(),
            },
        ]
    }
}
