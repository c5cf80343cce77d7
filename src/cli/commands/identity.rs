use colored::Colorize;

use crate::cli::IdentityAction;
use crate::cli::commands::ledger_helpers::{identity_store, load_config};
use crate::cli::output;
use crate::core::errors::{AccordError, Result};
use crate::core::models::actor::{Actor, ResourceRole, RoleScope};
use crate::core::traits::identity_store::IdentityStore;

/// Execute the `accord identity` command.
pub fn execute(action: &IdentityAction) -> Result<()> {
    match action {
        IdentityAction::Add { id, label, roles } => execute_add(id, label.as_deref(), roles),
        IdentityAction::List => execute_list(),
    }
}

fn execute_add(id: &str, label: Option<&str>, roles: &[String]) -> Result<()> {
    let accord_dir = crate::cli::context::accord_dir();
    let config = load_config(accord_dir)?;

    if id.trim().is_empty() {
        return Err(AccordError::validation("identity id must not be empty"));
    }

    let roles = roles
        .iter()
        .map(|r| r.parse::<ResourceRole>())
        .collect::<Result<Vec<_>>>()?;

    for binding in &roles {
        if !config.roles.contains_key(&binding.role) {
            output::warning(&format!(
                "Role '{}' is not defined in config.toml and grants nothing",
                binding.role
            ));
        }
    }

    let mut actor = Actor::new(id);
    actor.label = label.map(String::from);
    for binding in roles {
        actor = actor.with_role(binding.role, binding.scope);
    }

    let store = identity_store(accord_dir);
    store.add(&actor)?;
    output::success(&format!(
        "Added identity {actor} to {}",
        store.path().display()
    ));
    Ok(())
}

fn execute_list() -> Result<()> {
    let accord_dir = crate::cli::context::accord_dir();
    load_config(accord_dir)?;

    let identities = identity_store(accord_dir).list()?;

    if identities.is_empty() {
        output::header("Identities");
        output::warning("No identities registered");
        return Ok(());
    }

    output::header(&format!("Identities ({})", identities.len()));
    for actor in &identities {
        output::item(&actor.to_string());
        for binding in &actor.roles {
            println!("      {} {}", binding.role.cyan(), format_scope(&binding.scope).dimmed());
        }
    }

    Ok(())
}

fn format_scope(scope: &RoleScope) -> String {
    match scope {
        RoleScope::Any => "(any subject)".into(),
        RoleScope::Own => "(own)".into(),
        RoleScope::Resources(ids) => format!("({})", ids.join(", ")),
    }
}
