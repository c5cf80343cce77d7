/// All domain errors for Accord.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum AccordError {
    #[error("Invalid input: {detail}")]
    Validation { detail: String },

    #[error(
        "Permission denied: {permission}\n\n  \
         The acting identity holds no role granting this permission\n  \
         for the requested resource.\n\n  \
         Solutions:\n    \
         → Check the identity's roles: accord identity list\n    \
         → Check which roles grant {permission} in .accord/config.toml"
    )]
    PermissionDenied { permission: String },

    #[error("Event log error: {detail}")]
    EventLog { detail: String },

    #[error("Identity '{id}' already exists")]
    IdentityExists { id: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AccordError {
    /// Shorthand for a `Validation` error.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AccordError>;
