//! Ranges command implementation
//!
//! Implements `katas ranges compress` and `katas ranges expand`.

use anyhow::{Context, Result};

use crate::cli::RunContext;
use crate::core::ranges::{expand_ranges_with_limit, extract_ranges};

/// Execute `katas ranges compress`
pub fn execute_compress(ctx: &RunContext, numbers: &[i64]) -> Result<()> {
    let compressed = extract_ranges(numbers)?;
    ctx.output.emit(&compressed, || compressed.clone())
}

/// Execute `katas ranges expand`
pub fn execute_expand(ctx: &RunContext, expr: &str) -> Result<()> {
    let max = ctx.settings.max_range_values();
    let numbers = expand_ranges_with_limit(expr, max)
        .with_context(|| format!("Cannot expand '{expr}'"))?;

    tracing::info!("'{expr}' expands to {} numbers", numbers.len());

    ctx.output.emit(&numbers, || {
        numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    })
}
