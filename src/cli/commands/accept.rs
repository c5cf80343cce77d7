use colored::Colorize;

use crate::cli::commands::ledger_helpers::{load_config, recorder, resolve_actor};
use crate::cli::output;
use crate::core::errors::{AccordError, Result};
use crate::core::models::agreements::Agreements;

/// Execute the `accord accept` command.
///
/// Agreements come either from positional arguments or from a raw
/// `--json` payload, which must be a string or an array of strings.
pub fn execute(actor_id: &str, agreements: &[String], json: Option<&str>) -> Result<()> {
    let accord_dir = crate::cli::context::accord_dir();
    let config = load_config(accord_dir)?;

    let agreements = match json {
        Some(raw) => parse_json(raw)?,
        None => from_args(agreements),
    };

    let actor = resolve_actor(accord_dir, actor_id)?;
    let recorder = recorder(accord_dir, &config)?;
    let result = recorder.accept(actor.as_ref(), agreements)?;

    let event = &result.event;
    output::success(&format!(
        "Recorded acceptance of {} agreement(s) by {}",
        event.resource.len(),
        event.actor
    ));
    println!(
        "  {} {}",
        "Event:".dimmed(),
        event.id.as_deref().unwrap_or("—")
    );
    println!("  {} {}", "Date:".dimmed(), event.date);

    Ok(())
}

/// One positional argument is a single agreement, several are a list.
fn from_args(args: &[String]) -> Agreements {
    match args {
        [one] => Agreements::One(one.clone()),
        many => Agreements::Many(many.to_vec()),
    }
}

fn parse_json(raw: &str) -> Result<Agreements> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AccordError::validation(format!("--json is not valid JSON: {e}")))?;
    Agreements::from_json(&value)
}
