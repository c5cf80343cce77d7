use std::collections::HashSet;

use tracing::debug;

use crate::core::errors::{AccordError, Result};
use crate::core::models::acceptance_event::{AcceptanceEvent, EventFilter, EventType};
use crate::core::models::actor::Actor;
use crate::core::models::permission::Permission;
use crate::core::models::subject_key::subject_key;
use crate::core::traits::event_log::EventLog;
use crate::core::traits::permission_checker::{PermissionChecker, ResourceDescriptor};

/// Answers which agreements a subject has accepted.
pub struct AcceptanceQuery<L: EventLog, P: PermissionChecker> {
    pub log: L,
    pub permissions: P,
}

impl<L: EventLog, P: PermissionChecker> AcceptanceQuery<L, P> {
    /// Return the distinct agreements `subject_id` has ever accepted.
    ///
    /// Results are in order of first occurrence across the stored events.
    /// Deduplication uses literal string equality. An empty vector is
    /// returned when the subject never accepted anything.
    ///
    /// # Errors
    ///
    /// - `Validation` for a missing actor or blank subject id.
    /// - `PermissionDenied` if the actor lacks `AGREEMENT_ACCESS` for the
    ///   subject. The log is not read.
    /// - Any error from the event log, unmodified.
    pub fn get_accepted(&self, actor: Option<&Actor>, subject_id: &str) -> Result<Vec<String>> {
        let actor = Actor::require(actor)?;
        if subject_id.trim().is_empty() {
            return Err(AccordError::validation(
                "subject id must be a non-empty string",
            ));
        }

        self.permissions.check(
            actor,
            Permission::AgreementAccess,
            &ResourceDescriptor::Subject(subject_id),
        )?;

        let filter = EventFilter {
            event_type: EventType::AgreementAccept,
            subject_key: subject_key(subject_id),
        };
        let events = self.log.query(&filter)?;
        debug!(
            actor = %actor.id,
            subject = subject_id,
            events = events.len(),
            "loaded acceptance events"
        );

        Ok(distinct_agreements(&events))
    }
}

/// Flatten every event's `resource` in order and keep the first
/// occurrence of each agreement.
fn distinct_agreements(events: &[AcceptanceEvent]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();

    for agreement in events.iter().flat_map(|e| &e.resource) {
        if seen.insert(agreement.as_str()) {
            distinct.push(agreement.clone());
        }
    }

    distinct
}
