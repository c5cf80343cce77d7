use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::{AccordError, Result};

static ACCORD_DIR: OnceLock<PathBuf> = OnceLock::new();
static SIMPLE_FILENAME: OnceLock<Regex> = OnceLock::new();

/// Initialize the global accord directory path.
/// If `custom` is provided, uses that path; otherwise defaults to `.accord`.
pub fn init(custom: Option<&str>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".accord"));
    let _ = ACCORD_DIR.set(dir);
}

/// Get the current accord directory path.
pub fn accord_dir() -> &'static Path {
    ACCORD_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(".accord"))
}

/// Reject anything but a bare file name (no separators, no `..`).
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let pattern = SIMPLE_FILENAME
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("static regex is valid"));

    if !pattern.is_match(name) || name.contains("..") {
        return Err(AccordError::InvalidConfig {
            detail: format!("Invalid {what} name '{name}': expected a plain file name"),
        });
    }
    Ok(())
}
