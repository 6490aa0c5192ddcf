//! Compass command implementation
//!
//! Implements `katas compass`.

use anyhow::Result;

use crate::cli::RunContext;
use crate::core::compass::{compass_points, nearest_point, CompassPoint};

/// Execute the compass command
pub fn execute(ctx: &RunContext, azimuth: Option<f64>) -> Result<()> {
    let precision = ctx.settings.compass_precision();

    if let Some(azimuth) = azimuth {
        let point = nearest_point(azimuth)?;
        return ctx.output.emit(&point, || format_point(&point, precision));
    }

    let points = compass_points();
    ctx.output.emit(&points, || {
        points
            .iter()
            .map(|p| format_point(p, precision))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn format_point(point: &CompassPoint, precision: usize) -> String {
    format!("{:<4} {:>w$.p$}", point.abbreviation, point.azimuth, w = precision + 4, p = precision)
}
