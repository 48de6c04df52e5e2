//! Winery CLI library
//!
//! This library contains all the CLI logic for winery, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use winery_scaffold::Outcome;

/// Winery - bootstrap kit for the wine quality ML project
#[derive(Parser)]
#[command(name = "winery")]
#[command(about = "Bootstrap the wine quality ML project structure")]
#[command(version)]
#[command(long_about = "Bootstrap the wine quality ML project structure

Generates the standard layered project layout (config, staged data folders,
src components and pipeline stages, tests) and seeds the well-known files
with boilerplate.

Features:
  • Idempotent directory creation
  • Overwrite confirmation before replacing an existing project
  • Console and rotating file logging")]
pub struct Cli {
    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to timestamped files under this directory
    #[arg(long, env = "WINERY_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for winery CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the project structure
    Init(cmd::init::InitCommand),

    /// Inspect a generated project and validate its configuration
    Info(cmd::info::InfoCommand),
}

/// Run the CLI, returning the process exit code
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or a command fails.
pub fn run(cli: Cli) -> Result<i32> {
    winery_config::logging::init(cli.verbose, cli.log_dir.as_deref())?;

    match cli.command {
        Commands::Init(cmd) => match cmd.execute()? {
            Some(Outcome::Declined) => Ok(1),
            _ => Ok(0),
        },
        Commands::Info(cmd) => {
            cmd.execute()?;
            Ok(0)
        }
    }
}
