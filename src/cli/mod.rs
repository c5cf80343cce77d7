pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use clap::{ArgGroup, Parser, Subcommand};

/// Record agreement acceptances. Ask who accepted what.
#[derive(Parser, Debug)]
#[command(name = "accord", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an alternative accord directory (default: .accord)
    #[arg(long, global = true, env = "ACCORD_DIR")]
    pub dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Accord in the current directory
    Init,

    /// Manage identities and their roles
    Identity {
        #[command(subcommand)]
        action: IdentityAction,
    },

    /// Record that an identity accepted one or more agreements
    #[command(group(ArgGroup::new("agreements").required(true).args(["agreement", "json"])))]
    Accept {
        /// Identity performing the acceptance
        #[arg(long)]
        actor: String,
        /// Agreement identifiers (one or more)
        agreement: Vec<String>,
        /// Agreements as a JSON string or array of strings
        #[arg(long)]
        json: Option<String>,
    },

    /// List the distinct agreements a subject has accepted
    Accepted {
        /// Identity performing the query
        #[arg(long)]
        actor: String,
        /// Subject whose acceptances are listed (default: the actor)
        #[arg(long)]
        subject: Option<String>,
    },

    /// Show the permissions roles can grant
    Permissions,
}

#[derive(Subcommand, Debug)]
pub enum IdentityAction {
    /// Register an identity
    Add {
        /// Identity id, e.g. did:example:alice
        id: String,
        /// Human-readable label
        #[arg(long)]
        label: Option<String>,
        /// Role binding as ROLE, ROLE:own or ROLE:any (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// List registered identities
    List,
}
