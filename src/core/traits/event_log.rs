use crate::core::errors::Result;
use crate::core::models::acceptance_event::{AcceptanceEvent, AppendResult, EventFilter};

/// Port for the append-only store of domain events.
///
/// Implementations live in `adapters::event_log`.
pub trait EventLog: Send + Sync {
    /// Persist one event as a single atomic write and return it with its
    /// assigned id.
    fn append(&self, event: AcceptanceEvent) -> Result<AppendResult>;

    /// Return every stored event matching `filter`, in store order.
    fn query(&self, filter: &EventFilter) -> Result<Vec<AcceptanceEvent>>;
}
