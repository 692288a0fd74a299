//! Edge lists as graph sources.
//!
//! A list of edges seeds a graph with exactly those edges; its vertex set is
//! the set of endpoints, in first-seen order.

use crate::{
    edge::{Edge, Vertex},
    graph::GraphSource,
    traversal::TraversalExt,
};

fn endpoints<'a, V, D>(edges: &'a [Edge<V, D>]) -> impl Iterator<Item = V> + 'a
where
    V: Vertex,
{
    edges
        .iter()
        .flat_map(|edge| {
            let (u, v) = edge.both();
            [u.clone(), v.clone()]
        })
        .distinct()
}

impl<V: Vertex, D: Clone> GraphSource<V, D> for Vec<Edge<V, D>> {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        endpoints(self)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.iter().cloned()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<V: Vertex, D: Clone, const N: usize> GraphSource<V, D> for [Edge<V, D>; N] {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        endpoints(self)
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.iter().cloned()
    }

    fn size(&self) -> usize {
        N
    }
}
