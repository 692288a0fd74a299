//! Adjacency-list graph backend for trellis.
//!
//! [`AdjacencyGraph`] implements the read capabilities and mutators from
//! `trellis-core` for any combination of declared properties except
//! persistence, checking the declaration as edges arrive. [`Simple`] and
//! [`Frozen`] carry the simple and immutable declarations in the type.

mod graph;
mod links;
mod mutate;
mod typed;

pub use graph::AdjacencyGraph;
pub use typed::{Frozen, Simple};

#[cfg(test)]
mod tests;
