//! Shared test utilities used across trellis crates.

pub mod profile;
pub mod tracing;
