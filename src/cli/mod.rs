//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no kata logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::settings::Settings;
use crate::infra::dirs::KatasDirs;
use commands::Commands;
use output::OutputConfig;

/// Katas - small algorithm exercises
///
/// Zig-zag matrices, compass points, brace expansion, domino chains and
/// integer range compression.
#[derive(Parser, Debug)]
#[command(name = "katas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "KATAS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Effective output mode
    pub output: OutputConfig,
    /// Settings loaded from the settings file
    pub settings: Settings,
}

impl Cli {
    /// Load settings and work out the effective output mode
    pub fn load_context(&self) -> Result<RunContext> {
        let settings = match &self.config {
            Some(path) => Settings::load_from_path(path),
            None => Settings::load(&KatasDirs::new()),
        }
        .context("Failed to load settings")?;

        let output =
            OutputConfig::new(self.quiet, self.json, self.verbose).with_settings(&settings);
        Ok(RunContext { output, settings })
    }

    /// Execute the CLI command
    pub fn run(self, ctx: &RunContext) -> Result<()> {
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        cmd.run(ctx)
    }
}
