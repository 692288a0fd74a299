//! Seeded edge sets for insertion benchmarks.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use trellis_core::{Directedness, Edge, max_size};

/// Draws `edge_count` distinct undirected edges over `0..order` from `seed`.
///
/// The count is capped at the number of vertex pairs, so small orders
/// saturate rather than loop forever.
///
/// # Examples
/// ```
/// use trellis_benches::source::random_edges;
///
/// let edges = random_edges(4, 100, 7);
/// assert_eq!(edges.len(), 6);
/// ```
#[must_use]
pub fn random_edges(order: usize, edge_count: usize, seed: u64) -> Vec<Edge<usize>> {
    let target = edge_count.min(max_size(order, Directedness::Undirected));
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(target);
    let mut edges = Vec::with_capacity(target);
    while edges.len() < target {
        let u = rng.gen_range(0..order);
        let v = rng.gen_range(0..order);
        if u != v && seen.insert((u.min(v), u.max(v))) {
            edges.push(Edge::new(u, v));
        }
    }
    edges
}
