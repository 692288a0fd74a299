#![expect(
    clippy::expect_used,
    reason = "tests require contextual panics when a graph fails to build"
)]

pub(crate) use super::AdjacencyGraph;

mod mutation;
mod queries;
mod support;
