use crate::cli::commands::ledger_helpers::{load_config, query, resolve_actor};
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `accord accepted` command.
///
/// Lists the distinct agreements `subject` accepted, defaulting to the
/// acting identity itself.
pub fn execute(actor_id: &str, subject: Option<&str>) -> Result<()> {
    let accord_dir = crate::cli::context::accord_dir();
    let config = load_config(accord_dir)?;

    let subject = subject.unwrap_or(actor_id);
    let actor = resolve_actor(accord_dir, actor_id)?;
    let query = query(accord_dir, &config)?;

    let agreements = query.get_accepted(actor.as_ref(), subject)?;

    if agreements.is_empty() {
        output::header(&format!("Accepted by {subject}"));
        output::warning("No accepted agreements found");
        return Ok(());
    }

    output::header(&format!("Accepted by {subject} ({})", agreements.len()));
    for agreement in &agreements {
        output::item(agreement);
    }

    Ok(())
}
