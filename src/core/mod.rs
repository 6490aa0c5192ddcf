//! Core kata logic
//!
//! Every kata is a pure function over plain values. Only [`settings`]
//! touches the filesystem.
//!
//! # Submodules
//!
//! - [`zigzag`] - Zig-zag (JPEG scan order) matrix construction
//! - [`compass`] - 32-point compass table
//! - [`braces`] - Shell-style brace expansion
//! - [`dominoes`] - Domino chain feasibility and arrangement
//! - [`ranges`] - Integer range compression and expansion
//! - [`settings`] - User settings file

pub mod braces;
pub mod compass;
pub mod dominoes;
pub mod ranges;
pub mod settings;
pub mod zigzag;
