//! Support library for the trellis CLI binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive them
//! without spawning a process.

pub mod cli;
pub mod logging;
