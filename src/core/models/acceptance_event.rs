use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::actor::Actor;

/// Discriminator for events kept in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    AgreementAccept,
}

/// Immutable record that an actor accepted one or more agreements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceEvent {
    /// Assigned by the event log on insertion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// ISO-8601 creation time, e.g. `2026-10-19T08:30:00.000Z`.
    pub date: String,
    pub resource: Vec<String>,
    pub actor: String,
}

impl AcceptanceEvent {
    /// Build an unsaved `AgreementAccept` event for `actor`.
    pub fn accept(actor: &Actor, resource: Vec<String>, at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            event_type: EventType::AgreementAccept,
            date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            resource,
            actor: actor.id.clone(),
        }
    }

    /// Subject the log indexes this event under. `AgreementAccept`
    /// events are indexed by their actor.
    pub fn index_value(&self) -> &str {
        match self.event_type {
            EventType::AgreementAccept => &self.actor,
        }
    }
}

/// Equality filter understood by the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub event_type: EventType,
    pub subject_key: String,
}

/// What the event log returns from an append: the event as stored,
/// including its generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendResult {
    pub event: AcceptanceEvent,
}
