//! Output formatting
//!
//! Every command produces one result. This module decides whether it is
//! printed as text, as JSON, or not at all, and renders errors.

use anyhow::Result;
use serde::Serialize;
use tracing::Level;

use crate::core::settings::Settings;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Output in JSON format
    pub json: bool,
    /// Verbosity level (0 = warnings only)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create from command-line flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Switch on modes the settings file enables
    ///
    /// Flags can only turn a mode on; a setting of `false` never overrides
    /// a flag.
    #[must_use]
    pub fn with_settings(self, settings: &Settings) -> Self {
        Self {
            quiet: self.quiet || settings.quiet(),
            json: self.json || settings.json(),
            verbose: self.verbose,
        }
    }

    /// Log level selected by the verbosity count
    pub fn tracing_level(&self) -> Level {
        tracing_level(self.verbose)
    }

    /// Print a result as JSON or as the text produced by `text`
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.quiet {
            return Ok(());
        }
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}

/// Log level for a `-v` count
pub fn tracing_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error, json: bool) {
    if json {
        let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "error": error.to_string(),
            "causes": causes,
        });
        eprintln!("{body}");
        return;
    }

    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
