//! Braces command implementation
//!
//! Implements `katas braces <PATTERN>`.

use anyhow::{Context, Result};

use crate::cli::RunContext;
use crate::core::braces::expand_braces;

/// Execute the braces command
pub fn execute(ctx: &RunContext, pattern: &str) -> Result<()> {
    let expanded =
        expand_braces(pattern).with_context(|| format!("Cannot expand '{pattern}'"))?;

    tracing::info!("'{pattern}' expands to {} strings", expanded.len());

    ctx.output.emit(&expanded, || expanded.join("\n"))
}
