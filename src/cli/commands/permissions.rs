use colored::Colorize;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::permission::PERMISSIONS;

/// Execute the `accord permissions` command.
pub fn execute() -> Result<()> {
    output::header("Permissions");

    for info in PERMISSIONS {
        println!(
            "  {:<18} {:<18} {}",
            info.id.cyan(),
            info.label,
            info.comment.dimmed()
        );
    }

    Ok(())
}
