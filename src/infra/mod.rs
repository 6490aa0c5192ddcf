//! Infrastructure layer
//!
//! Filesystem locations used by the rest of the crate.

pub mod dirs;
