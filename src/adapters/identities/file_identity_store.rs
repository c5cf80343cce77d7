use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{AccordError, Result};
use crate::core::models::actor::Actor;
use crate::core::traits::identity_store::IdentityStore;

/// On-disk shape of `identities.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct IdentityFile {
    #[serde(default)]
    identity: Vec<Actor>,
}

/// File-based identity store that persists identities as TOML.
///
/// Example `identities.toml`:
/// ```text
/// [[identity]]
/// id = "did:example:alice"
/// label = "alice"
/// roles = [{ role = "agreement-user", scope = "own" }]
/// ```
#[derive(Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Create an identity store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<IdentityFile> {
        if !self.path.exists() {
            return Ok(IdentityFile::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| AccordError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", self.path.display()),
        })
    }

    fn write(&self, file: &IdentityFile) -> Result<()> {
        let content = toml::to_string(file).map_err(|e| AccordError::InvalidConfig {
            detail: format!("Failed to serialize identities: {e}"),
        })?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl IdentityStore for FileIdentityStore {
    fn add(&self, actor: &Actor) -> Result<()> {
        let mut file = self.read()?;

        if file.identity.iter().any(|a| a.id == actor.id) {
            return Err(AccordError::IdentityExists {
                id: actor.id.clone(),
            });
        }

        file.identity.push(actor.clone());
        self.write(&file)
    }

    fn get(&self, id: &str) -> Result<Option<Actor>> {
        Ok(self.read()?.identity.into_iter().find(|a| a.id == id))
    }

    fn list(&self) -> Result<Vec<Actor>> {
        Ok(self.read()?.identity)
    }
}
