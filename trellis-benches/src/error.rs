//! Benchmark setup error type.
//!
//! Lets setup functions propagate library failures with `?` instead of
//! panicking inside Criterion closures.

use trellis_core::{GeneratorError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator parameters were rejected.
    #[error("generator configuration failed: {0}")]
    Generator(#[from] GeneratorError),
    /// Graph construction or mutation failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
