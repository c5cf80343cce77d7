pub mod accept;
pub mod accepted;
pub mod identity;
pub mod init;
pub mod ledger_helpers;
pub mod permissions;
