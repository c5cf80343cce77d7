use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::app_config::AppConfig;
use crate::core::errors::{AccordError, Result};
use crate::core::models::actor::Actor;
use crate::core::models::permission::Permission;
use crate::core::traits::permission_checker::{PermissionChecker, ResourceDescriptor};

/// Permission checker driven by the `[roles]` table of `config.toml`.
///
/// A role grants a set of permissions. An actor holds role bindings, each
/// limited by a `RoleScope`. A check passes when any binding names a
/// known role that grants the permission and whose scope covers the
/// subject resolved from the resource descriptor.
#[derive(Debug, Clone)]
pub struct RolePermissionChecker {
    roles: HashMap<String, HashSet<Permission>>,
}

impl RolePermissionChecker {
    pub fn new(roles: HashMap<String, HashSet<Permission>>) -> Self {
        Self { roles }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.role_permissions()?))
    }
}

impl PermissionChecker for RolePermissionChecker {
    fn check(
        &self,
        actor: &Actor,
        permission: Permission,
        resource: &ResourceDescriptor<'_>,
    ) -> Result<()> {
        let subject = resource.subject();

        let granted_by = actor.roles.iter().find(|binding| {
            self.roles
                .get(&binding.role)
                .is_some_and(|perms| perms.contains(&permission))
                && binding.scope.covers(&actor.id, subject)
        });

        match granted_by {
            Some(binding) => {
                debug!(
                    actor = %actor.id,
                    %permission,
                    subject,
                    role = %binding.role,
                    "permission granted"
                );
                Ok(())
            }
            None => {
                warn!(actor = %actor.id, %permission, subject, "permission denied");
                Err(AccordError::PermissionDenied {
                    permission: permission.id().to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::acceptance_event::AcceptanceEvent;
    use crate::core::models::actor::RoleScope;
    use chrono::Utc;

    fn checker() -> RolePermissionChecker {
        RolePermissionChecker::new(HashMap::from([
            (
                "agreement-user".to_string(),
                HashSet::from([Permission::AgreementAccept, Permission::AgreementAccess]),
            ),
            (
                "agreement-auditor".to_string(),
                HashSet::from([Permission::AgreementAccess]),
            ),
        ]))
    }

    fn denied_permission(result: Result<()>) -> String {
        match result {
            Err(AccordError::PermissionDenied { permission }) => permission,
            other => panic!("expected PermissionDenied, got {other:?}"),
        }
    }

    #[test]
    fn own_scope_allows_self() {
        let alice = Actor::new("did:alice").with_role("agreement-user", RoleScope::Own);

        assert!(
            checker()
                .check(
                    &alice,
                    Permission::AgreementAccess,
                    &ResourceDescriptor::Subject("did:alice")
                )
                .is_ok()
        );
    }

    #[test]
    fn own_scope_denies_others() {
        let alice = Actor::new("did:alice").with_role("agreement-user", RoleScope::Own);

        let result = checker().check(
            &alice,
            Permission::AgreementAccess,
            &ResourceDescriptor::Subject("did:bob"),
        );

        assert_eq!(denied_permission(result), "AGREEMENT_ACCESS");
    }

    #[test]
    fn event_descriptor_resolves_to_event_actor() {
        let alice = Actor::new("did:alice").with_role("agreement-user", RoleScope::Own);
        let own_event = AcceptanceEvent::accept(&alice, vec!["tos".into()], Utc::now());
        let foreign_event =
            AcceptanceEvent::accept(&Actor::new("did:bob"), vec!["tos".into()], Utc::now());

        let c = checker();
        assert!(
            c.check(
                &alice,
                Permission::AgreementAccept,
                &ResourceDescriptor::Event(&own_event)
            )
            .is_ok()
        );
        let result = c.check(
            &alice,
            Permission::AgreementAccept,
            &ResourceDescriptor::Event(&foreign_event),
        );
        assert_eq!(denied_permission(result), "AGREEMENT_ACCEPT");
    }

    #[test]
    fn role_without_permission_denies() {
        let auditor = Actor::new("did:auditor").with_role("agreement-auditor", RoleScope::Any);
        let event = AcceptanceEvent::accept(&auditor, vec!["tos".into()], Utc::now());

        let result = checker().check(
            &auditor,
            Permission::AgreementAccept,
            &ResourceDescriptor::Event(&event),
        );

        assert_eq!(denied_permission(result), "AGREEMENT_ACCEPT");
    }

    #[test]
    fn any_scope_reads_other_subjects() {
        let auditor = Actor::new("did:auditor").with_role("agreement-auditor", RoleScope::Any);

        assert!(
            checker()
                .check(
                    &auditor,
                    Permission::AgreementAccess,
                    &ResourceDescriptor::Subject("did:bob")
                )
                .is_ok()
        );
    }

    #[test]
    fn resource_scope_lists_subjects() {
        let guardian = Actor::new("did:guardian").with_role(
            "agreement-auditor",
            RoleScope::Resources(vec!["did:child".into()]),
        );
        let c = checker();

        assert!(
            c.check(
                &guardian,
                Permission::AgreementAccess,
                &ResourceDescriptor::Subject("did:child")
            )
            .is_ok()
        );
        assert!(
            c.check(
                &guardian,
                Permission::AgreementAccess,
                &ResourceDescriptor::Subject("did:stranger")
            )
            .is_err()
        );
    }

    #[test]
    fn actor_without_roles_is_denied() {
        let nobody = Actor::new("did:nobody");

        let result = checker().check(
            &nobody,
            Permission::AgreementAccess,
            &ResourceDescriptor::Subject("did:nobody"),
        );

        assert_eq!(denied_permission(result), "AGREEMENT_ACCESS");
    }

    #[test]
    fn undefined_role_grants_nothing() {
        let actor = Actor::new("did:x").with_role("superuser", RoleScope::Any);

        assert!(
            checker()
                .check(
                    &actor,
                    Permission::AgreementAccess,
                    &ResourceDescriptor::Subject("did:x")
                )
                .is_err()
        );
    }

    #[test]
    fn from_config_reads_roles() {
        let config = AppConfig::parse(
            "[accord]\nversion = \"0.1.0\"\n[roles.reader]\npermissions = [\"AGREEMENT_ACCESS\"]\n",
        )
        .unwrap();
        let c = RolePermissionChecker::from_config(&config).unwrap();
        let reader = Actor::new("did:r").with_role("reader", RoleScope::Own);

        assert!(
            c.check(
                &reader,
                Permission::AgreementAccess,
                &ResourceDescriptor::Subject("did:r")
            )
            .is_ok()
        );
    }
}
