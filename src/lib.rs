//! Katas - small algorithm exercises
//!
//! A library of self-contained algorithm katas with a thin command-line
//! front end.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - The katas themselves (pure functions) and user settings
//! - [`infra`] - Infrastructure layer (config directory lookup)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```
//! use katas::core::zigzag::build_zigzag_matrix;
//!
//! let matrix = build_zigzag_matrix(2).unwrap();
//! assert_eq!(matrix.to_rows(), vec![vec![0, 1], vec![2, 3]]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
