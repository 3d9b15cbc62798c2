//! Core types shared across the crate.
//!
//! ### [`error`] - Error handling
//! The crate prints errors produced elsewhere; its own fallible surface is
//! configuration validation and the writer, both reported through
//! [`DebugError`].

pub mod error;

// Re-export core types
pub use error::{DebugError, DebugResult};
