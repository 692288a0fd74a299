use trellis_core::{Edge, GraphSource, GraphSpec, Vertex};

use super::AdjacencyGraph;

pub(crate) fn build<V, D, S>(spec: GraphSpec<S>) -> AdjacencyGraph<V, D>
where
    V: Vertex,
    D: Clone + PartialEq,
    S: GraphSource<V, D>,
{
    AdjacencyGraph::from_spec(spec).expect("spec must build")
}

/// Endpoint pairs of `edges`, sorted for order-free comparison.
pub(crate) fn pairs<V: Ord + Clone, D>(edges: impl IntoIterator<Item = Edge<V, D>>) -> Vec<(V, V)> {
    let mut pairs: Vec<_> = edges
        .into_iter()
        .map(|edge| {
            let (u, v) = edge.both();
            (u.clone(), v.clone())
        })
        .collect();
    pairs.sort();
    pairs
}

pub(crate) fn sorted<V: Ord>(items: impl IntoIterator<Item = V>) -> Vec<V> {
    let mut items: Vec<_> = items.into_iter().collect();
    items.sort();
    items
}
