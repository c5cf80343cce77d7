pub mod event_log;
pub mod identities;
pub mod permissions;
