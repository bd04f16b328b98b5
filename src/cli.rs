//! CLI argument definitions.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pagestore",
    version,
    about = "Inspect a page builder state snapshot through its query namespace"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// State snapshot (.json, .yaml or .yml); falls back to the config file.
    #[arg(long, short, value_name = "FILE", global = true)]
    pub state: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print compact JSON instead of pretty JSON.
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one query, e.g. `query getPageById home`.
    Query {
        /// Registered query name
        name: String,
        /// Id, name, path or index, depending on the query
        #[arg(allow_hyphen_values = true)]
        argument: String,
    },

    /// List every registered query name.
    Queries,

    /// Report whether a new page's name or path is already taken.
    CheckPage {
        #[arg(long)]
        name: String,
        #[arg(long)]
        path: String,
    },

    /// Remember a snapshot as the default for later runs.
    UseState {
        /// Snapshot file to store in the config
        file: PathBuf,
    },
}
