//! Platform-specific directory management
//!
//! Locates the directory holding the katas settings file. Follows the XDG
//! Base Directory Specification on Linux and standard locations on macOS.
//!
//! The `KATAS_CONFIG_DIR` environment variable overrides the default.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::SETTINGS_FILE_NAME;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "KATAS_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "katas";

/// Platform-specific directory provider for katas
#[derive(Debug, Clone)]
pub struct KatasDirs {
    config_dir: PathBuf,
}

impl KatasDirs {
    /// Create a new `KatasDirs` instance
    ///
    /// Checks the environment variable first, then falls back to the
    /// platform default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/katas` or `~/.config/katas`
    /// - macOS: `~/Library/Application Support/katas`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the settings file path
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir().map_or_else(
            || {
                dirs::home_dir()
                    .map_or_else(|| PathBuf::from(".").join(".config"), |h| h.join(".config"))
                    .join(APP_NAME)
            },
            |p| p.join(APP_NAME),
        )
    }
}

impl Default for KatasDirs {
    fn default() -> Self {
        Self::new()
    }
}
