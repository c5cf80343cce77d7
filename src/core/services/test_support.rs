//! In-memory ports that record how the services call them.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::core::errors::{AccordError, Result};
use crate::core::models::acceptance_event::{
    AcceptanceEvent, AppendResult, EventFilter, EventType,
};
use crate::core::models::actor::{Actor, RoleScope};
use crate::core::models::permission::Permission;
use crate::core::models::subject_key::subject_key;
use crate::core::traits::event_log::EventLog;
use crate::core::traits::permission_checker::{PermissionChecker, ResourceDescriptor};

pub fn regular_user() -> Actor {
    Actor::new("did:example:regular-user").with_role("agreement-user", RoleScope::Own)
}

#[derive(Default)]
pub struct FakeLog {
    events: Mutex<Vec<AcceptanceEvent>>,
    append_calls: Mutex<usize>,
    filters: Mutex<Vec<EventFilter>>,
    fail: bool,
}

impl FakeLog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<AcceptanceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn append_calls(&self) -> usize {
        *self.append_calls.lock().unwrap()
    }

    pub fn filters(&self) -> Vec<EventFilter> {
        self.filters.lock().unwrap().clone()
    }

    /// Store an event directly, bypassing the services.
    pub fn seed(&self, actor: &str, resource: &[&str]) {
        let event = AcceptanceEvent {
            id: Some(format!("seed-{}", self.events.lock().unwrap().len())),
            event_type: EventType::AgreementAccept,
            date: "2026-01-01T00:00:00.000Z".into(),
            resource: resource.iter().map(|s| s.to_string()).collect(),
            actor: actor.into(),
        };
        self.events.lock().unwrap().push(event);
    }
}

impl EventLog for FakeLog {
    fn append(&self, mut event: AcceptanceEvent) -> Result<AppendResult> {
        let mut calls = self.append_calls.lock().unwrap();
        *calls += 1;
        if self.fail {
            return Err(AccordError::EventLog {
                detail: "store unavailable".into(),
            });
        }

        event.id = Some(format!("evt-{calls}"));
        self.events.lock().unwrap().push(event.clone());
        Ok(AppendResult { event })
    }

    fn query(&self, filter: &EventFilter) -> Result<Vec<AcceptanceEvent>> {
        self.filters.lock().unwrap().push(filter.clone());
        if self.fail {
            return Err(AccordError::EventLog {
                detail: "store unavailable".into(),
            });
        }

        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.event_type == filter.event_type
                    && subject_key(e.index_value()) == filter.subject_key
            })
            .cloned()
            .collect())
    }
}

/// Grants a fixed set of permissions to everyone and records each check
/// as `(actor id, permission, resolved subject)`.
pub struct FakeChecker {
    granted: HashSet<Permission>,
    calls: Mutex<Vec<(String, Permission, String)>>,
}

impl FakeChecker {
    pub fn granting(permissions: &[Permission]) -> Self {
        Self {
            granted: permissions.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn allow_all() -> Self {
        Self::granting(&[Permission::AgreementAccept, Permission::AgreementAccess])
    }

    pub fn deny_all() -> Self {
        Self::granting(&[])
    }

    pub fn calls(&self) -> Vec<(String, Permission, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PermissionChecker for FakeChecker {
    fn check(
        &self,
        actor: &Actor,
        permission: Permission,
        resource: &ResourceDescriptor<'_>,
    ) -> Result<()> {
        self.calls.lock().unwrap().push((
            actor.id.clone(),
            permission,
            resource.subject().to_string(),
        ));

        if self.granted.contains(&permission) {
            Ok(())
        } else {
            Err(AccordError::PermissionDenied {
                permission: permission.id().to_string(),
            })
        }
    }
}
