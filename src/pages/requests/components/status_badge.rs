use crate::pages::requests::types::RequestStatus;

/// Class list for a status badge: the base class plus at most one modifier
/// from the status table. Unknown labels keep the base class only.
pub fn status_badge_classes(label: &str) -> String {
    match RequestStatus::parse(label) {
        Some(status) => format!("status-badge {}", status.badge_class()),
        None => "status-badge".to_string(),
    }
}
