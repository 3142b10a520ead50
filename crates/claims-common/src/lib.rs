//! Shared utilities for the claims crates.
//!
//! This crate provides the small value-parsing helpers used across the
//! workspace: cells arrive from ingestion as strings and every numeric
//! interpretation goes through the functions here.

pub mod value;

// Re-export commonly used functions at crate root for convenience
pub use value::{format_numeric, parse_f64, parse_i64, round2};
