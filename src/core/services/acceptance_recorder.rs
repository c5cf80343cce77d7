use chrono::Utc;
use tracing::{debug, info};

use crate::core::errors::Result;
use crate::core::models::acceptance_event::{AcceptanceEvent, AppendResult};
use crate::core::models::actor::Actor;
use crate::core::models::agreements::Agreements;
use crate::core::models::permission::Permission;
use crate::core::traits::event_log::EventLog;
use crate::core::traits::permission_checker::{PermissionChecker, ResourceDescriptor};

/// Records agreement acceptances by combining a `PermissionChecker`
/// gate with an `EventLog`.
pub struct AcceptanceRecorder<L: EventLog, P: PermissionChecker> {
    pub log: L,
    pub permissions: P,
}

impl<L: EventLog, P: PermissionChecker> AcceptanceRecorder<L, P> {
    /// Record that `actor` accepted `agreements`.
    ///
    /// A single agreement is stored as a one-element `resource`; a list is
    /// stored verbatim, duplicates included. Every call appends its own
    /// event, so repeated acceptances accumulate.
    ///
    /// # Errors
    ///
    /// - `Validation` if the actor or agreements are malformed. Raised
    ///   before any collaborator is called.
    /// - `PermissionDenied` if the actor lacks `AGREEMENT_ACCEPT` for
    ///   itself. Nothing is written.
    /// - Any error from the event log, unmodified.
    pub fn accept(
        &self,
        actor: Option<&Actor>,
        agreements: impl Into<Agreements>,
    ) -> Result<AppendResult> {
        let actor = Actor::require(actor)?;
        let resource = agreements.into().into_resource()?;

        let event = AcceptanceEvent::accept(actor, resource, Utc::now());

        self.permissions.check(
            actor,
            Permission::AgreementAccept,
            &ResourceDescriptor::Event(&event),
        )?;
        debug!(actor = %actor.id, "accept authorized");

        let result = self.log.append(event)?;
        info!(
            actor = %actor.id,
            event_id = result.event.id.as_deref().unwrap_or_default(),
            agreements = result.event.resource.len(),
            "recorded agreement acceptance"
        );

        Ok(result)
    }
}
