pub mod event_log;
pub mod identity_store;
pub mod permission_checker;
