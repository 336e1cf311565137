//! Prelude module for date_roller crate.
//!
//! Re-exports the derive macros used across the crate.

pub use derive_more::Display;
