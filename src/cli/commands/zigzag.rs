//! Zig-zag command implementation
//!
//! Implements `katas zigzag <N>`.

use anyhow::{Context, Result};

use crate::cli::RunContext;
use crate::core::zigzag::build_zigzag_matrix;
use crate::error::ZigZagError;

/// Execute the zigzag command
pub fn execute(ctx: &RunContext, n: usize, order: bool) -> Result<()> {
    let max = ctx.settings.max_zigzag_dimension();
    if n > max {
        return Err(ZigZagError::DimensionTooLarge { n, max }).with_context(|| {
            format!("Refusing to print a {n}x{n} matrix; raise [zigzag] max_dimension to allow it")
        });
    }

    tracing::info!("Building {n}x{n} zig-zag matrix");
    let matrix = build_zigzag_matrix(n)?;

    if order {
        let cells = matrix.traversal_order();
        ctx.output.emit(&cells, || {
            cells
                .iter()
                .map(|(row, col)| format!("{row},{col}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
    } else {
        ctx.output.emit(&matrix, || matrix.to_string())
    }
}
