//! The null graph: no vertices, no edges.

use std::iter;

use crate::{
    edge::{Edge, Vertex},
    graph::{
        DataDigraph, DataGraph, Digraph, Graph, GraphSource, LabeledDigraph, LabeledGraph,
        SimpleGraph, WeightedDigraph, WeightedGraph,
    },
    spec::Directedness,
};

/// A graph with order and size zero that satisfies every read capability.
///
/// It is the default source of a [`crate::GraphSpec`] and a convenient
/// identity element for algorithms. It offers no mutators.
///
/// The empty iterators borrow nothing from the graph, so vertex and payload
/// types must be `'static` to outlive any borrow of it.
///
/// # Examples
/// ```
/// use trellis_core::{Graph, NULL_GRAPH};
///
/// fn summary(graph: &impl Graph<u32>) -> (usize, Option<usize>, bool) {
///     (graph.order(), graph.degree_of(&7), graph.density().is_nan())
/// }
///
/// assert_eq!(summary(&NULL_GRAPH), (0, None, true));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullGraph;

/// The canonical [`NullGraph`] value.
pub const NULL_GRAPH: NullGraph = NullGraph;

impl<V: Vertex + 'static, D: 'static> GraphSource<V, D> for NullGraph {
    fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        iter::empty()
    }

    fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        iter::empty()
    }

    #[rustfmt::skip]
    fn order(&self) -> usize { 0 }

    #[rustfmt::skip]
    fn size(&self) -> usize { 0 }
}

impl<V: Vertex + 'static, D: 'static> Graph<V, D> for NullGraph {
    fn directedness(&self) -> Directedness {
        Directedness::Undirected
    }

    fn has_vertex(&self, _vertex: &V) -> bool {
        false
    }

    fn has_edge(&self, _edge: &Edge<V, D>) -> bool {
        false
    }

    fn degree_of(&self, _vertex: &V) -> Option<usize> {
        None
    }

    fn incident_to(&self, _vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        iter::empty()
    }

    fn adjacent_to(&self, _vertex: &V) -> impl Iterator<Item = V> + '_ {
        iter::empty()
    }
}

impl<V: Vertex + 'static, D: 'static> Digraph<V, D> for NullGraph {
    type Transpose = Self;

    fn arcs(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        iter::empty()
    }

    fn arcs_from(&self, _vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        iter::empty()
    }

    fn arcs_to(&self, _vertex: &V) -> impl Iterator<Item = Edge<V, D>> + '_ {
        iter::empty()
    }

    fn successors_of(&self, _vertex: &V) -> impl Iterator<Item = V> + '_ {
        iter::empty()
    }

    fn predecessors_of(&self, _vertex: &V) -> impl Iterator<Item = V> + '_ {
        iter::empty()
    }

    fn in_degree_of(&self, _vertex: &V) -> Option<usize> {
        None
    }

    fn out_degree_of(&self, _vertex: &V) -> Option<usize> {
        None
    }

    fn has_arc(&self, _arc: &Edge<V, D>) -> bool {
        false
    }

    fn transpose(&self) -> Self {
        Self
    }
}

impl<V: Vertex + 'static, D: 'static> SimpleGraph<V, D> for NullGraph {}

macro_rules! never_contains {
    ($($Trait:ident :: $method:ident),+ $(,)?) => {
        $(
            impl<V: Vertex + 'static, D: 'static> $Trait<V, D> for NullGraph {
                fn $method(&self, _edge: &Edge<V, D>) -> bool {
                    false
                }
            }
        )+
    };
}

never_contains! {
    WeightedGraph::has_weighted_edge,
    LabeledGraph::has_labeled_edge,
    DataGraph::has_data_edge,
    WeightedDigraph::has_weighted_arc,
    LabeledDigraph::has_labeled_arc,
    DataDigraph::has_data_arc,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn assert_vertex_queries_empty<G: Digraph<u32>>(graph: &G, vertex: u32) {
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
        assert!(!graph.has_vertex(&vertex));
        assert_eq!(graph.degree_of(&vertex), None);
        assert_eq!(graph.in_degree_of(&vertex), None);
        assert_eq!(graph.out_degree_of(&vertex), None);
        assert_eq!(graph.incident_to(&vertex).count(), 0);
        assert_eq!(graph.adjacent_to(&vertex).count(), 0);
        assert_eq!(graph.successors_of(&vertex).count(), 0);
        assert_eq!(graph.predecessors_of(&vertex).count(), 0);
        assert_eq!(graph.arcs().count(), 0);
        assert_eq!(graph.arcs_from(&vertex).count(), 0);
        assert_eq!(graph.arcs_to(&vertex).count(), 0);
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.edges().count(), 0);
        assert!(graph.density().is_nan());
    }

    #[rstest]
    #[case(0_u32)]
    #[case(42_u32)]
    fn every_vertex_query_is_empty(#[case] vertex: u32) {
        assert_vertex_queries_empty(&NULL_GRAPH, vertex);
    }

    #[test]
    fn membership_is_always_false() {
        let edge: Edge<u8> = Edge::weighted(1, 2, 3.5);
        let labeled: Edge<u8> = Edge::labeled(1, 2, "x");
        assert!(!NULL_GRAPH.has_edge(&edge));
        assert!(!NULL_GRAPH.has_weighted_edge(&edge));
        assert!(!NULL_GRAPH.has_weighted_arc(&edge));
        assert!(!NULL_GRAPH.has_arc(&edge));
        let data: Edge<u8, char> = Edge::with_data(1, 2, 'd');
        assert!(!NULL_GRAPH.has_labeled_edge(&labeled));
        assert!(!NULL_GRAPH.has_labeled_arc(&labeled));
        assert!(!NULL_GRAPH.has_data_edge(&data));
        assert!(!NULL_GRAPH.has_data_arc(&data));
    }

    #[test]
    fn owned_vertices_see_an_empty_graph() {
        fn assert_owned_queries_empty<G: LabeledDigraph<String>>(graph: &G) {
            let vertex = String::from("hub");
            let edge = Edge::labeled(vertex.clone(), String::from("leaf"), "x");
            assert_eq!(graph.vertices().count(), 0);
            assert!(!graph.has_vertex(&vertex));
            assert_eq!(graph.incident_to(&vertex).count(), 0);
            assert_eq!(graph.arcs_from(&vertex).count(), 0);
            assert!(!graph.has_edge(&edge));
            assert!(!graph.has_labeled_arc(&edge));
        }
        assert_owned_queries_empty(&NULL_GRAPH);
    }

    #[test]
    fn transpose_is_null() {
        fn transposed<G: Digraph<u8>>(graph: &G) -> G::Transpose {
            graph.transpose()
        }
        assert_eq!(transposed(&NULL_GRAPH), NULL_GRAPH);
    }
}
