//! Katas CLI - small algorithm exercises
//!
//! Entry point for the katas command-line application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use katas::cli::output::{display_error, OutputConfig};
use katas::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the default level; an explicit -v wins over RUST_LOG
    let flags = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    let mut filter = EnvFilter::builder()
        .with_default_directive(flags.tracing_level().into())
        .from_env_lossy();
    if cli.verbose > 0 {
        filter = filter.add_directive(flags.tracing_level().into());
    }

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let ctx = match cli.load_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            display_error(&e, flags.json);
            std::process::exit(1);
        }
    };

    // Errors follow the effective output mode, settings included
    match cli.run(&ctx) {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e, ctx.output.json);
            std::process::exit(1);
        }
    }
}
