mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    cli::context::init(args.dir.as_deref());

    // Config may not exist yet (e.g. before `accord init`)
    let configured_level = AppConfig::load(cli::context::accord_dir())
        .ok()
        .and_then(|c| c.log_level().map(String::from));
    cli::logging::init(args.verbose, configured_level.as_deref());

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(args.verbose),
        Commands::Identity { action } => cli::commands::identity::execute(action),
        Commands::Accept {
            actor,
            agreement,
            json,
        } => cli::commands::accept::execute(actor, agreement, json.as_deref()),
        Commands::Accepted { actor, subject } => {
            cli::commands::accepted::execute(actor, subject.as_deref())
        }
        Commands::Permissions => cli::commands::permissions::execute(),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
