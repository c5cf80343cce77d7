use sha2::{Digest, Sha256};

/// Index key the event log files an event under for a given subject.
///
/// Both the write path (indexing an appended event) and the read path
/// (building a query filter) must derive keys through this function.
pub fn subject_key(subject_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(subject_id.as_bytes());
    format!("{:x}", hasher.finalize())
}
