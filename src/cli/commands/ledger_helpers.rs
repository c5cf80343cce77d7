use std::path::Path;

use tracing::{debug, warn};

use crate::adapters::event_log::json_event_log::JsonEventLog;
use crate::adapters::identities::file_identity_store::FileIdentityStore;
use crate::adapters::permissions::role_permission_checker::RolePermissionChecker;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{AccordError, Result};
use crate::core::models::actor::Actor;
use crate::core::services::acceptance_query::AcceptanceQuery;
use crate::core::services::acceptance_recorder::AcceptanceRecorder;
use crate::core::traits::identity_store::IdentityStore;

/// File name of the identity store inside the accord directory.
pub const IDENTITIES_FILE: &str = "identities.toml";

/// Load the config, failing with a hint when Accord is not initialized.
pub fn load_config(accord_dir: &Path) -> Result<AppConfig> {
    if !accord_dir.exists() {
        return Err(AccordError::InvalidConfig {
            detail: "Accord not initialized. Run 'accord init' first.".into(),
        });
    }
    AppConfig::load(accord_dir)
}

pub fn identity_store(accord_dir: &Path) -> FileIdentityStore {
    FileIdentityStore::new(accord_dir.join(IDENTITIES_FILE))
}

/// Wire the recorder to the file-backed event log and role checker.
pub fn recorder(
    accord_dir: &Path,
    config: &AppConfig,
) -> Result<AcceptanceRecorder<JsonEventLog, RolePermissionChecker>> {
    let log = JsonEventLog::from_config(accord_dir, config);
    debug!(path = %log.path().display(), "using event log");
    Ok(AcceptanceRecorder {
        log,
        permissions: RolePermissionChecker::from_config(config)?,
    })
}

/// Wire the query to the file-backed event log and role checker.
pub fn query(
    accord_dir: &Path,
    config: &AppConfig,
) -> Result<AcceptanceQuery<JsonEventLog, RolePermissionChecker>> {
    Ok(AcceptanceQuery {
        log: JsonEventLog::from_config(accord_dir, config),
        permissions: RolePermissionChecker::from_config(config)?,
    })
}

/// Look up the acting identity. An unknown id resolves to no actor so the
/// services reject it like any other missing actor.
pub fn resolve_actor(accord_dir: &Path, id: &str) -> Result<Option<Actor>> {
    let actor = identity_store(accord_dir).get(id)?;
    if actor.is_none() {
        warn!(actor = id, "unknown identity");
        output::warning(&format!(
            "Identity '{id}' is not registered. Add it with: accord identity add {id} --role <role>"
        ));
    }
    Ok(actor)
}
