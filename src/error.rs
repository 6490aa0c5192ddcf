//! Error types for katas
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Zig-zag matrix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZigZagError {
    /// Dimension is zero or its square does not fit in memory indices
    #[error("Invalid matrix dimension {n}: must be a positive integer whose square fits in usize")]
    InvalidDimension { n: usize },

    /// Dimension exceeds the configured limit
    #[error("Matrix dimension {n} exceeds the configured maximum of {max}")]
    DimensionTooLarge { n: usize, max: usize },
}

/// Compass errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompassError {
    /// Azimuth is NaN or infinite
    #[error("Invalid azimuth {azimuth}: must be a finite number of degrees")]
    InvalidAzimuth { azimuth: f64 },
}

/// Brace expansion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BraceError {
    /// An opening brace has no matching close
    #[error("Unbalanced brace: '{{' at position {position} is never closed")]
    Unbalanced { position: usize },
}

/// Domino errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DominoError {
    /// Tile text could not be parsed
    #[error("Invalid domino tile '{tile}': expected two pip values like '1:2'")]
    InvalidTile { tile: String },
}

/// Range formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Input list is not strictly ascending
    #[error("Numbers must be strictly ascending: element {index} ({value}) does not exceed its predecessor")]
    NotAscending { index: usize, value: i64 },

    /// Token of a range expression could not be parsed
    #[error("Invalid range token '{token}'")]
    InvalidToken { token: String },

    /// Range bounds are reversed
    #[error("Invalid range '{token}': start is greater than end")]
    ReversedRange { token: String },

    /// Expansion would produce more numbers than allowed
    #[error("Range '{token}' would expand past the limit of {max} numbers")]
    TooLarge { token: String, max: usize },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read settings file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse settings file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {error}")]
    SerializeError { error: String },
}
