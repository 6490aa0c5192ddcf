//! Config command implementation
//!
//! Implements `katas config`, printing the effective settings with all
//! defaults filled in.

use anyhow::Result;

use crate::cli::RunContext;

/// Execute the config command
pub fn execute(ctx: &RunContext) -> Result<()> {
    let resolved = ctx.settings.resolved();
    let text = resolved.to_toml()?;
    ctx.output.emit(&resolved, || text.trim_end().to_string())
}
