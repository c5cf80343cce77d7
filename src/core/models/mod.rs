pub mod acceptance_event;
pub mod actor;
pub mod agreements;
pub mod permission;
pub mod subject_key;
