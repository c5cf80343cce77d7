use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

use crate::core::errors::{AccordError, Result};
use crate::core::models::permission::Permission;

/// Top-level Accord configuration read from `.accord/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub accord: AccordSection,
    pub event_log: Option<EventLogSection>,
    pub logging: Option<LoggingSection>,
    /// Role name to the permissions it grants.
    #[serde(default)]
    pub roles: HashMap<String, RoleEntry>,
}

impl AppConfig {
    /// Load the configuration from `config.toml` inside `accord_dir`.
    ///
    /// After parsing, validates the event log filename to prevent path
    /// traversal and checks that every role only names known permissions.
    pub fn load(accord_dir: &Path) -> Result<Self> {
        let config_path = accord_dir.join("config.toml");
        if !config_path.exists() {
            return Err(AccordError::InvalidConfig {
                detail: "config.toml not found. Run 'accord init' first.".into(),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AccordError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        if let Some(event_log) = &config.event_log {
            crate::cli::context::validate_simple_filename(&event_log.log_file, "event log file")?;
        }

        // Surface unknown permission ids at load time rather than on first check
        config.role_permissions()?;

        debug!(
            version = %config.accord.version,
            roles = config.roles.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Event log file name, defaulting to `events.log`.
    pub fn log_file(&self) -> &str {
        self.event_log
            .as_ref()
            .map(|e| e.log_file.as_str())
            .unwrap_or(DEFAULT_LOG_FILE)
    }

    /// Configured log level, if any.
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().map(|l| l.level.as_str())
    }

    /// Resolve every role's permission ids.
    pub fn role_permissions(&self) -> Result<HashMap<String, HashSet<Permission>>> {
        self.roles
            .iter()
            .map(|(name, entry)| {
                let permissions = entry
                    .permissions
                    .iter()
                    .map(|id| Permission::from_id(id))
                    .collect::<Result<HashSet<_>>>()
                    .map_err(|e| AccordError::InvalidConfig {
                        detail: format!("role '{name}': {e}"),
                    })?;
                Ok((name.clone(), permissions))
            })
            .collect()
    }
}

/// Default file name of the event log inside `.accord/`.
pub const DEFAULT_LOG_FILE: &str = "events.log";

/// The `[accord]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AccordSection {
    pub version: String,
}

/// The `[event_log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct EventLogSection {
    pub log_file: String,
}

/// The `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".into()
}

/// A role entry in `[roles]`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleEntry {
    #[serde(default)]
    pub permissions: Vec<String>,
}
