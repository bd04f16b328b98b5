//! pagestore - inspect a page builder state snapshot
//!
//! Loads a serialized state tree and evaluates queries from the registered
//! namespace against it, printing JSON results on stdout.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use pagestore::config::Config;
use pagestore::logging::init_logging;
use pagestore::services::{check_new_page, load_state};
use pagestore::{Query, QueryName, StoreState};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().unwrap_or_default();
    debug!(?config, "resolved configuration");

    if let Err(err) = run(&cli, &config) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let pretty = config.pretty && !cli.compact;

    match &cli.command {
        Command::Queries => {
            for name in QueryName::ALL {
                println!("{:<28} <{}>", name.as_str(), name.argument());
            }
        }
        Command::Query { name, argument } => {
            let state = load(cli, config)?;
            let query = Query::parse(name, argument.as_str())?;
            let output = query
                .evaluate(&state.getters())
                .with_context(|| format!("Query {} failed", query.name))?;
            print_json(&output.to_json()?, pretty)?;
        }
        Command::CheckPage { name, path } => {
            let state = load(cli, config)?;
            let conflicts = check_new_page(&state.getters(), name, path);
            debug!(clear = conflicts.is_clear(), "checked page name and path");
            print_json(&conflicts, pretty)?;
        }
        Command::UseState { file } => {
            let resolved = resolve_state_path(file)?;
            let mut updated = config.clone();
            updated.state_path = Some(resolved.display().to_string());
            updated.save().context("Failed to save config")?;
            println!("Default state set to {}", resolved.display());
        }
    }

    Ok(())
}

/// Load the snapshot named by `--state`, or the one from the config file
fn load(cli: &Cli, config: &Config) -> Result<StoreState> {
    let path = cli
        .state
        .clone()
        .or_else(|| config.state_path.as_ref().map(PathBuf::from))
        .context("No state snapshot given: pass --state or set state_path in the config")?;

    load_state(&path).with_context(|| format!("Failed to load state from {}", path.display()))
}

/// Absolute form of a snapshot path so the stored default works from any directory
fn resolve_state_path(file: &Path) -> Result<PathBuf> {
    fs::canonicalize(file)
        .with_context(|| format!("Cannot resolve state file {}", file.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
