//! 32-point compass table
//!
//! Points are generated from the four cardinal directions alone. Each
//! quadrant between two neighbouring cardinals follows the same eight-step
//! naming pattern, e.g. for N to E:
//! `N, NbE, NNE, NEbN, NE, NEbE, ENE, EbN`.

use serde::Serialize;

use crate::error::CompassError;

/// The cardinal directions in clockwise order
const SIDES: [&str; 4] = ["N", "E", "S", "W"];

/// Degrees between two neighbouring points
pub const POINT_SPACING: f64 = 11.25;

/// Number of points on the compass
pub const POINT_COUNT: usize = 32;

/// A named compass heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompassPoint {
    /// Short name, e.g. `NbE`
    pub abbreviation: String,
    /// Heading in degrees clockwise from north
    pub azimuth: f64,
}

/// Build the full table of 32 compass points, clockwise from north
pub fn compass_points() -> Vec<CompassPoint> {
    (0..POINT_COUNT)
        .map(|index| CompassPoint {
            abbreviation: abbreviation(index),
            azimuth: azimuth_of(index),
        })
        .collect()
}

/// Find the compass point closest to an azimuth
///
/// The azimuth is normalized into `[0, 360)` first, so `-11.25` resolves to
/// `NbW` and `360` to `N`. Exact midpoints round up to the next point.
pub fn nearest_point(azimuth: f64) -> Result<CompassPoint, CompassError> {
    if !azimuth.is_finite() {
        return Err(CompassError::InvalidAzimuth { azimuth });
    }

    let normalized = azimuth.rem_euclid(360.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = (normalized / POINT_SPACING).round() as usize % POINT_COUNT;

    tracing::debug!("Azimuth {azimuth} normalized to {normalized}, point #{index}");

    Ok(CompassPoint {
        abbreviation: abbreviation(index),
        azimuth: azimuth_of(index),
    })
}

#[allow(clippy::cast_precision_loss)]
fn azimuth_of(index: usize) -> f64 {
    index as f64 * POINT_SPACING
}

/// Name of the point at `index` (0 = N, 8 = E, ...)
fn abbreviation(index: usize) -> String {
    let quadrant = index / 8;
    let from = SIDES[quadrant];
    let to = SIDES[(quadrant + 1) % 4];
    // Intercardinals always lead with N or S: NE, SE, SW, NW
    let between = if quadrant % 2 == 0 {
        format!("{from}{to}")
    } else {
        format!("{to}{from}")
    };

    match index % 8 {
        0 => from.to_string(),
        1 => format!("{from}b{to}"),
        2 => format!("{from}{between}"),
        3 => format!("{between}b{from}"),
        4 => between,
        5 => format!("{between}b{to}"),
        6 => format!("{to}{between}"),
        _ => format!("{to}b{from}"),
    }
}
