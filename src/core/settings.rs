//! User settings
//!
//! Reads optional preferences from `config.toml` in the config directory.
//! A missing file means defaults; a malformed file is an error.
//!
//! ```toml
//! [output]
//! json = true
//!
//! [zigzag]
//! max_dimension = 64
//!
//! [compass]
//! precision = 1
//!
//! [ranges]
//! max_values = 10000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{COMPASS_PRECISION, MAX_RANGE_VALUES, MAX_ZIGZAG_DIMENSION};
use crate::error::SettingsError;
use crate::infra::dirs::KatasDirs;

/// All settings read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Output preferences
    #[serde(default)]
    pub output: OutputSettings,

    /// Zig-zag command settings
    #[serde(default)]
    pub zigzag: ZigZagSettings,

    /// Compass command settings
    #[serde(default)]
    pub compass: CompassSettings,

    /// Ranges command settings
    #[serde(default)]
    pub ranges: RangesSettings,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Emit JSON unless overridden
    pub json: Option<bool>,

    /// Suppress regular output unless overridden
    pub quiet: Option<bool>,
}

/// Zig-zag command settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZigZagSettings {
    /// Largest dimension the CLI will print
    pub max_dimension: Option<usize>,
}

/// Compass command settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompassSettings {
    /// Decimal places for azimuths
    pub precision: Option<usize>,
}

/// Ranges command settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangesSettings {
    /// Most numbers `ranges expand` may produce
    pub max_values: Option<usize>,
}

impl Settings {
    /// Load settings from the config directory
    pub fn load(dirs: &KatasDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.settings_path())
    }

    /// Load settings from a specific path
    ///
    /// Returns defaults if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let settings = toml::from_str(&content).map_err(|e| SettingsError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Render the settings as TOML
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::SerializeError {
            error: e.to_string(),
        })
    }

    /// Same settings with every default filled in
    #[must_use]
    pub fn resolved(&self) -> Self {
        Self {
            output: OutputSettings {
                json: Some(self.json()),
                quiet: Some(self.quiet()),
            },
            zigzag: ZigZagSettings {
                max_dimension: Some(self.max_zigzag_dimension()),
            },
            compass: CompassSettings {
                precision: Some(self.compass_precision()),
            },
            ranges: RangesSettings {
                max_values: Some(self.max_range_values()),
            },
        }
    }

    /// Whether JSON output is on by default
    #[must_use]
    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }

    /// Whether quiet mode is on by default
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.output.quiet.unwrap_or(false)
    }

    /// Effective zig-zag dimension limit
    #[must_use]
    pub fn max_zigzag_dimension(&self) -> usize {
        self.zigzag.max_dimension.unwrap_or(MAX_ZIGZAG_DIMENSION)
    }

    /// Effective azimuth precision
    #[must_use]
    pub fn compass_precision(&self) -> usize {
        self.compass.precision.unwrap_or(COMPASS_PRECISION)
    }

    /// Effective limit on numbers produced by range expansion
    #[must_use]
    pub fn max_range_values(&self) -> usize {
        self.ranges.max_values.unwrap_or(MAX_RANGE_VALUES)
    }
}
