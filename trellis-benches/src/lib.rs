//! Benchmark support crate for trellis.
//!
//! Provides seeded edge sets and parameter types shared by the Criterion
//! benchmarks for Bernoulli generation and adjacency insertion.

pub mod error;
pub mod params;
pub mod source;
