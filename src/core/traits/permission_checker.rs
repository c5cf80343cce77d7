use crate::core::errors::Result;
use crate::core::models::acceptance_event::AcceptanceEvent;
use crate::core::models::actor::Actor;
use crate::core::models::permission::Permission;

/// The resource an authorization check is made against.
#[derive(Debug, Clone, Copy)]
pub enum ResourceDescriptor<'a> {
    /// An event about to be written; its `actor` is the subject.
    Event(&'a AcceptanceEvent),
    /// A bare subject identifier.
    Subject(&'a str),
}

impl ResourceDescriptor<'_> {
    /// Identifier of the subject the check is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::Event(event) => &event.actor,
            Self::Subject(id) => id,
        }
    }
}

/// Port for authorizing an actor against a named permission.
pub trait PermissionChecker: Send + Sync {
    /// Succeed when `actor` holds `permission` for `resource`, fail with
    /// `PermissionDenied` otherwise.
    fn check(
        &self,
        actor: &Actor,
        permission: Permission,
        resource: &ResourceDescriptor<'_>,
    ) -> Result<()>;
}
