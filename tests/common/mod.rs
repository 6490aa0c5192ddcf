//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory that doubles as the working directory and
/// the settings directory, so tests never read the user's real settings.
pub struct TestProject {
    /// Temporary directory for the test
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write the settings file picked up by default
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) {
        self.create_file("config.toml", content);
    }

    /// Build a katas command isolated to this project
    pub fn katas(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_katas"));
        cmd.current_dir(self.path());
        cmd.env("KATAS_CONFIG_DIR", self.path());
        cmd.env_remove("KATAS_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a command as a string
#[allow(dead_code)]
pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a command as a string
#[allow(dead_code)]
pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
