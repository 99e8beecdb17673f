pub mod detail_modal;
pub mod filter;
pub mod list;
pub mod status_badge;
