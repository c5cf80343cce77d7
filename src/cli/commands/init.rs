use crate::cli::commands::ledger_helpers::IDENTITIES_FILE;
use crate::cli::output;
use crate::core::errors::{AccordError, Result};

/// Configuration written by `accord init`.
pub const DEFAULT_CONFIG: &str = r#"[accord]
version = "0.1.0"

[event_log]
log_file = "events.log"

[logging]
level = "warn"

# Roles grant permissions. Identities bind roles with a scope:
# "own" (only themselves), "any" (every subject) or { resources = [...] }.
[roles.agreement-user]
permissions = ["AGREEMENT_ACCEPT", "AGREEMENT_ACCESS"]

[roles.agreement-auditor]
permissions = ["AGREEMENT_ACCESS"]
"#;

/// Execute the `accord init` command.
///
/// Creates the accord directory with a default configuration and an
/// empty identity store.
pub fn execute(verbose: bool) -> Result<()> {
    let accord_dir = crate::cli::context::accord_dir();

    if accord_dir.exists() {
        return Err(AccordError::InvalidConfig {
            detail: format!(
                "Accord is already initialized here ({} exists)",
                accord_dir.display()
            ),
        });
    }

    output::header("Accord — Initializing ledger");

    std::fs::create_dir_all(accord_dir)?;
    output::success(&format!("Created {}/", accord_dir.display()));

    std::fs::write(accord_dir.join("config.toml"), DEFAULT_CONFIG)?;
    output::success("Generated config.toml with default roles");

    std::fs::write(accord_dir.join(IDENTITIES_FILE), "")?;
    output::success(&format!("Created empty {IDENTITIES_FILE}"));

    output::success("Ledger ready.\n");
    print_next_steps(verbose);

    Ok(())
}

/// Print next steps after init.
fn print_next_steps(verbose: bool) {
    println!("  Next steps:");
    println!("     1. Register an identity: accord identity add did:example:alice --role agreement-user");
    println!("     2. Record an acceptance: accord accept --actor did:example:alice tos-v1");
    println!("     3. List acceptances:     accord accepted --actor did:example:alice");

    if verbose {
        println!();
        println!("  Files created:");
        println!("     config.toml       — roles, event log and logging settings");
        println!("     {IDENTITIES_FILE}   — registered identities and role bindings");
    }
}
