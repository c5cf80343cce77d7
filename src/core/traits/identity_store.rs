use crate::core::errors::Result;
use crate::core::models::actor::Actor;

/// Port for looking up registered identities and their role bindings.
pub trait IdentityStore: Send + Sync {
    /// Register an identity.
    fn add(&self, actor: &Actor) -> Result<()>;

    /// Find an identity by id.
    fn get(&self, id: &str) -> Result<Option<Actor>>;

    /// List all registered identities.
    fn list(&self) -> Result<Vec<Actor>>;
}
