pub mod query_client;
pub mod toasts;
pub mod toggle;
