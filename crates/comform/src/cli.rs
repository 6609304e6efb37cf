//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Check Git commit messages for structural conformance.
#[derive(Debug, Parser)]
#[command(name = "comform")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the commit history against the rule file
    Check(commands::check::CheckArgs),

    /// Extract commit data as JSON
    Extract(commands::extract::ExtractArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Check(args) => commands::check::run(args),
            Commands::Extract(args) => commands::extract::run(args),
        }
    }
}
