use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{AccordError, Result};

/// An identity performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub roles: Vec<ResourceRole>,
}

impl Actor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>, scope: RoleScope) -> Self {
        self.roles.push(ResourceRole {
            role: role.into(),
            scope,
        });
        self
    }

    /// Validate an optional actor.
    ///
    /// An absent actor and an actor whose id is blank are rejected alike.
    pub fn require(actor: Option<&Actor>) -> Result<&Actor> {
        match actor {
            Some(a) if !a.id.trim().is_empty() => Ok(a),
            _ => Err(AccordError::validation("actor must be an object with an id")),
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", self.id, label),
            None => write!(f, "{}", self.id),
        }
    }
}

/// Binding of an actor to a role, limited to a set of subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRole {
    pub role: String,
    #[serde(default)]
    pub scope: RoleScope,
}

/// Which subjects a role binding covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleScope {
    /// Every subject.
    #[default]
    Any,
    /// Only the actor itself.
    Own,
    /// The listed subject ids.
    Resources(Vec<String>),
}

impl RoleScope {
    /// Whether this scope grants access to `subject` for the actor `actor_id`.
    pub fn covers(&self, actor_id: &str, subject: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Own => actor_id == subject,
            Self::Resources(ids) => ids.iter().any(|id| id == subject),
        }
    }
}

impl FromStr for ResourceRole {
    type Err = AccordError;

    /// Parse `role`, `role:own` or `role:any`. A bare role name is scoped
    /// to the actor itself.
    fn from_str(s: &str) -> Result<Self> {
        let (role, scope) = match s.split_once(':') {
            Some((role, "own")) => (role, RoleScope::Own),
            Some((role, "any")) => (role, RoleScope::Any),
            Some((_, other)) => {
                return Err(AccordError::validation(format!(
                    "unknown role scope '{other}' (expected 'own' or 'any')"
                )));
            }
            None => (s, RoleScope::Own),
        };

        if role.trim().is_empty() {
            return Err(AccordError::validation("role name must not be empty"));
        }

        Ok(Self {
            role: role.trim().to_string(),
            scope,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accepts_actor_with_id() {
        let actor = Actor::new("did:example:alice");
        assert_eq!(Actor::require(Some(&actor)).unwrap().id, "did:example:alice");
    }

    #[test]
    fn require_rejects_missing_actor() {
        let err = Actor::require(None).unwrap_err();
        assert!(matches!(err, AccordError::Validation { .. }));
        assert!(err.to_string().contains("actor must be an object with an id"));
    }

    #[test]
    fn require_rejects_blank_id() {
        let actor = Actor::new("  ");
        assert!(matches!(
            Actor::require(Some(&actor)),
            Err(AccordError::Validation { .. })
        ));
    }

    #[test]
    fn scope_coverage() {
        assert!(RoleScope::Any.covers("a", "b"));
        assert!(RoleScope::Own.covers("a", "a"));
        assert!(!RoleScope::Own.covers("a", "b"));

        let listed = RoleScope::Resources(vec!["b".into(), "c".into()]);
        assert!(listed.covers("a", "c"));
        assert!(!listed.covers("a", "a"));
    }

    #[test]
    fn parse_role_with_scope() {
        let own: ResourceRole = "agreement-user".parse().unwrap();
        assert_eq!(own.scope, RoleScope::Own);

        let any: ResourceRole = "agreement-auditor:any".parse().unwrap();
        assert_eq!(any.role, "agreement-auditor");
        assert_eq!(any.scope, RoleScope::Any);

        assert!("agreement-user:everyone".parse::<ResourceRole>().is_err());
        assert!(":own".parse::<ResourceRole>().is_err());
    }

    #[test]
    fn deserialize_from_toml() {
        let actor: Actor = toml::from_str(
            r#"
            id = "did:example:alice"
            label = "alice"
            roles = [
                { role = "agreement-user", scope = "own" },
                { role = "auditor", scope = { resources = ["did:example:bob"] } },
                { role = "admin" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(actor.roles.len(), 3);
        assert_eq!(actor.roles[0].scope, RoleScope::Own);
        assert_eq!(
            actor.roles[1].scope,
            RoleScope::Resources(vec!["did:example:bob".into()])
        );
        assert_eq!(actor.roles[2].scope, RoleScope::Any);
    }
}
