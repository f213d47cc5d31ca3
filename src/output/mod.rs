//! Report output formatting.
//!
//! The analytics core computes exact values; this module only formats.
//! Terminal rendering rounds for readability, JSON serialization keeps
//! full precision.

pub mod json;
pub mod terminal;
