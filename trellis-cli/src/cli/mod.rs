//! Command-line interface for generating graphs.
//!
//! The `bernoulli` command draws a random graph, seeds an adjacency graph
//! with it, and reports its order, size and density.

mod commands;

pub use commands::{
    BernoulliCommand, Cli, CliError, Command, ExecutionSummary, render_summary, run_cli,
};
