// src/cli.rs
//! Command-line surface: argument parsing and handlers.

use crate::config::Config;
use crate::exit::MigralintExit;
use crate::reporting;
use crate::validator::Validator;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "migralint", version, about = "Migration file validator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate migration files in a directory
    Validate {
        /// Migrations directory (default from migralint.toml or db/migrate)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
        /// Enable strict validation mode (reserved; no effect yet)
        #[arg(long)]
        strict: bool,
        /// Emit the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// Executes the parsed command. No subcommand means `validate` with
/// defaults, matching the tool's single purpose.
///
/// # Errors
/// Returns error if discovery fails or the report cannot be serialized.
pub fn execute(cli: Cli) -> Result<MigralintExit> {
    match cli.command {
        Some(Commands::Validate { path, strict, json }) => handle_validate(path, strict, json),
        None => handle_validate(None, false, false),
    }
}

fn handle_validate(path: Option<PathBuf>, strict: bool, json: bool) -> Result<MigralintExit> {
    let mut config = Config::load();
    if let Some(path) = path {
        config.migrations_path = path;
    }
    if strict {
        config.strict = true;
    }
    // `strict` is currently inert in the core rules; escalation policies
    // would hook in here.

    let validator = Validator::new(&config.migrations_path)
        .with_extension(&config.extension)
        .with_dependencies(config.dependency_graph());
    let report = validator.run()?;

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report);
    }

    if report.passed() {
        Ok(MigralintExit::Success)
    } else {
        Ok(MigralintExit::CheckFailed)
    }
}
