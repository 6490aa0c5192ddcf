//! CLI command implementations
//!
//! Each kata is implemented as its own submodule.

pub mod braces;
pub mod compass;
pub mod config;
pub mod dominoes;
pub mod ranges;
pub mod zigzag;

use anyhow::Result;
use clap::Subcommand;

use super::RunContext;
use crate::core::dominoes::Domino;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the zig-zag (JPEG scan order) matrix
    Zigzag {
        /// Matrix dimension
        n: usize,

        /// Print the visited cells in order instead of the matrix
        #[arg(long)]
        order: bool,
    },

    /// Print the 32-point compass table
    Compass {
        /// Show only the point nearest to this azimuth (degrees)
        #[arg(short, long, allow_hyphen_values = true)]
        azimuth: Option<f64>,
    },

    /// Expand shell-style brace alternations
    Braces {
        /// Pattern such as 'img.{png,jp{e,}g}'
        pattern: String,
    },

    /// Check whether domino tiles can be laid in one row
    Dominoes {
        /// Tiles written as 'a:b'
        #[arg(required = true, value_name = "TILE")]
        tiles: Vec<Domino>,

        /// Print one possible arrangement
        #[arg(long)]
        chain: bool,
    },

    /// Compress or expand integer range lists
    Ranges {
        #[command(subcommand)]
        command: RangeCommands,
    },

    /// Show effective settings
    Config,
}

/// Range subcommands
#[derive(Subcommand, Debug)]
pub enum RangeCommands {
    /// Format ascending integers as '0-2,5,7-9'
    Compress {
        /// Strictly ascending integers
        #[arg(allow_negative_numbers = true, value_name = "N")]
        numbers: Vec<i64>,
    },

    /// Expand '0-2,5,7-9' back into integers
    Expand {
        /// Range expression
        #[arg(allow_hyphen_values = true, value_name = "EXPR")]
        expr: String,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, ctx: &RunContext) -> Result<()> {
        match self {
            Self::Zigzag { n, order } => zigzag::execute(ctx, n, order),
            Self::Compass { azimuth } => compass::execute(ctx, azimuth),
            Self::Braces { pattern } => braces::execute(ctx, &pattern),
            Self::Dominoes { tiles, chain } => dominoes::execute(ctx, &tiles, chain),
            Self::Ranges { command } => match command {
                RangeCommands::Compress { numbers } => ranges::execute_compress(ctx, &numbers),
                RangeCommands::Expand { expr } => ranges::execute_expand(ctx, &expr),
            },
            Self::Config => config::execute(ctx),
        }
    }
}
