use rstest::rstest;
use trellis_core::{
    ArcSetMutator, Digraph, Edge, EdgeKind, EdgeSetMutator, Graph, GraphError, GraphErrorCode,
    GraphSource, LabeledEdgeSetMutator, VertexSetMutator, WeightedArcSetMutator,
    WeightedEdgeSetMutator, WeightedGraph, spec,
};

use super::{
    AdjacencyGraph,
    support::{build, pairs, sorted},
};

fn simple_path() -> AdjacencyGraph<u8> {
    build(spec().using(vec![Edge::new(1, 2), Edge::new(2, 3)]))
}

#[rstest]
fn empty_batches_are_accepted() {
    let mut graph = simple_path();
    graph.add_edges([]).expect("empty batch is a no-op");
    graph.remove_edges([]).expect("empty removal is a no-op");
    assert_eq!(graph.size(), 2);
}

#[rstest]
fn simple_graphs_reject_loops_without_side_effects() {
    let mut graph = simple_path();
    let err = graph
        .add_edges([Edge::new(3, 4), Edge::new(4, 4)])
        .expect_err("loop must be rejected");
    assert_eq!(err.code(), GraphErrorCode::LoopRejected);
    assert_eq!(graph.size(), 2);
    assert!(!graph.has_vertex(&4));
}

#[rstest]
fn exact_duplicates_are_idempotent_in_simple_graphs() {
    let mut graph = simple_path();
    graph
        .add_edges([Edge::new(2, 1), Edge::new(1, 2), Edge::new(3, 4), Edge::new(4, 3)])
        .expect("duplicates of present edges are accepted");
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.degree_of(&1), Some(1));
}

#[rstest]
fn conflicting_payload_is_a_parallel_edge() {
    let mut graph: AdjacencyGraph<u8> =
        build(spec().weighted().using(vec![Edge::weighted(1, 2, 1.0)]));
    graph
        .add_weighted_edges([(2, 1, 1.0)])
        .expect("same weight is the same edge");
    let err = graph
        .add_weighted_edges([(2, 1, 2.0)])
        .expect_err("different weight would be parallel");
    assert!(matches!(
        err,
        GraphError::ParallelEdgeRejected { ref left, ref right }
            if &**left == "2" && &**right == "1"
    ));
    assert!(graph.has_weighted_edge(&Edge::weighted(1, 2, 1.0)));
    assert_eq!(graph.size(), 1);
}

#[rstest]
fn conflicts_inside_one_batch_are_detected() {
    let mut graph: AdjacencyGraph<u8> = build(spec().weighted());
    let err = graph
        .add_weighted_edges([(1, 2, 1.0), (2, 1, 5.0)])
        .expect_err("batch conflicts with itself");
    assert_eq!(err.code(), GraphErrorCode::ParallelEdgeRejected);
    assert_eq!(graph.order(), 0);
}

#[rstest]
fn multigraphs_append_parallel_edges() {
    let mut graph: AdjacencyGraph<u8> = build(spec().multigraph());
    graph
        .add_edges([Edge::new(1, 2), Edge::new(2, 1), Edge::new(1, 2)])
        .expect("multigraph accepts parallel edges");
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.edges().count(), 3);
    assert_eq!(graph.degree_of(&2), Some(3));
    assert_eq!(sorted(graph.adjacent_to(&1)), [2]);

    let err = graph
        .add_edges([Edge::new(5, 5)])
        .expect_err("multigraphs still reject loops");
    assert_eq!(err.code(), GraphErrorCode::LoopRejected);

    graph.remove_edges([Edge::new(2, 1)]).expect("mutable graph");
    assert_eq!(graph.size(), 2);
    assert!(graph.has_edge(&Edge::new(1, 2)));
}

#[rstest]
#[case::weighted_into_basic(
    AdjacencyGraph::new(spec().properties()),
    Edge::weighted(1, 2, 1.0),
    EdgeKind::Basic,
    EdgeKind::Weighted,
)]
#[case::basic_into_weighted(
    AdjacencyGraph::new(spec().weighted().properties()),
    Edge::new(1, 2),
    EdgeKind::Weighted,
    EdgeKind::Basic,
)]
#[case::labeled_into_weighted(
    AdjacencyGraph::new(spec().weighted().properties()),
    Edge::labeled(1, 2, "x"),
    EdgeKind::Weighted,
    EdgeKind::Labeled,
)]
fn richness_must_match_declaration(
    #[case] graph: trellis_core::Result<AdjacencyGraph<u8>>,
    #[case] edge: Edge<u8>,
    #[case] declared: EdgeKind,
    #[case] found: EdgeKind,
) {
    let mut graph = graph.expect("properties are supported");
    let err = graph.add_edges([edge]).expect_err("richness must match");
    assert_eq!(err, GraphError::RichnessMismatch { declared, found });
    assert_eq!(graph.size(), 0);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn non_finite_weights_are_rejected(#[case] weight: f64) {
    let mut graph: AdjacencyGraph<u8> = build(spec().weighted());
    let err = graph
        .add_weighted_edges([(1, 2, weight)])
        .expect_err("weight must be finite");
    assert_eq!(err.code(), GraphErrorCode::NonFiniteWeight);
}

#[rstest]
fn labeled_helpers_accept_owned_and_borrowed_labels() {
    let mut graph: AdjacencyGraph<u8> = build(spec().labeled().multigraph());
    graph
        .add_labeled_edges([(1, 2, "road")])
        .expect("borrowed label");
    graph
        .add_labeled_edges([(1, 2, String::from("rail"))])
        .expect("owned label");
    assert_eq!(graph.size(), 2);
}

#[rstest]
fn removing_absent_edges_is_a_no_op() {
    let mut graph = simple_path();
    graph
        .remove_edges([Edge::new(1, 3), Edge::new(7, 8)])
        .expect("absent edges are ignored");
    assert_eq!(pairs(graph.edges().map(normalise)), [(1, 2), (2, 3)]);
}

#[rstest]
fn undirected_removal_accepts_either_orientation() {
    let mut graph = simple_path();
    graph
        .remove_edges([Edge::new(2, 1)])
        .expect("mutable graph");
    assert!(!graph.has_edge(&Edge::new(1, 2)));
    assert_eq!(graph.degree_of(&1), Some(0));
    assert_eq!(graph.size(), 1);
}

#[rstest]
fn directed_removal_respects_orientation() {
    let mut graph: AdjacencyGraph<u8> = build(spec().directed().using(vec![Edge::new(1, 2)]));
    graph.remove_arcs([Edge::new(2, 1)]).expect("mutable graph");
    assert_eq!(graph.size(), 1);
    graph.remove_arcs([Edge::new(1, 2)]).expect("mutable graph");
    assert_eq!(graph.size(), 0);
    assert_eq!(graph.in_degree_of(&2), Some(0));
}

#[rstest]
fn multigraph_removal_prefers_matching_payload() {
    let mut graph: AdjacencyGraph<u8> = build(spec().directed().weighted().multigraph());
    graph
        .add_weighted_arcs([(1, 2, 1.0), (1, 2, 2.0)])
        .expect("parallel arcs");
    graph
        .remove_arcs([Edge::weighted(1, 2, 2.0)])
        .expect("mutable graph");
    assert!(graph.has_weighted_edge(&Edge::weighted(1, 2, 1.0)));
    assert!(!graph.has_weighted_edge(&Edge::weighted(1, 2, 2.0)));
}

#[rstest]
fn removing_a_vertex_drops_incident_edges() {
    let mut graph: AdjacencyGraph<u8> = build(spec().directed().loops().using(vec![
        Edge::new(1, 2),
        Edge::new(2, 3),
        Edge::new(3, 2),
        Edge::new(2, 2),
    ]));
    graph.remove_vertices([2]).expect("mutable graph");
    assert_eq!(graph.size(), 0);
    assert_eq!(sorted(graph.vertices()), [1, 3]);
    assert_eq!(graph.out_degree_of(&1), Some(0));
    assert_eq!(graph.in_degree_of(&3), Some(0));
}

#[rstest]
fn vertices_added_only_by_edges_are_pruned_with_them() {
    let mut graph: AdjacencyGraph<u8> = build(spec());
    graph.add_edges([Edge::new(1, 2)]).expect("mutable graph");
    assert_eq!((graph.order(), graph.size()), (2, 1));
    graph.remove_edges([Edge::new(1, 2)]).expect("mutable graph");
    assert_eq!((graph.order(), graph.size()), (0, 0));
    assert!(!graph.has_vertex(&1));
}

#[rstest]
fn registered_vertices_outlive_their_edges() {
    let mut graph: AdjacencyGraph<u8> = build(spec().directed());
    graph.ensure_vertices([1]).expect("mutable graph");
    graph
        .add_arcs([Edge::new(1, 2), Edge::new(2, 3)])
        .expect("mutable graph");
    graph.remove_arcs([Edge::new(1, 2)]).expect("mutable graph");
    assert_eq!(sorted(graph.vertices()), [1, 2, 3]);
    graph.remove_vertices([3]).expect("mutable graph");
    assert_eq!(sorted(graph.vertices()), [1]);
    assert_eq!(graph.out_degree_of(&1), Some(0));
}

#[rstest]
fn immutable_graphs_are_seeded_then_frozen() {
    let mut graph: AdjacencyGraph<u8> = build(spec().immutable().using(vec![Edge::new(1, 2)]));
    assert_eq!(graph.size(), 1);
    for err in [
        graph.add_edges([Edge::new(2, 3)]).expect_err("frozen"),
        graph.remove_edges([Edge::new(1, 2)]).expect_err("frozen"),
        graph.ensure_vertices([4]).expect_err("frozen"),
        graph.remove_vertices([1]).expect_err("frozen"),
    ] {
        assert_eq!(err, GraphError::ImmutableGraph);
    }
    assert_eq!(graph.size(), 1);
}

#[rstest]
fn persistent_graphs_are_unsupported() {
    let result: trellis_core::Result<AdjacencyGraph<u8>> =
        AdjacencyGraph::from_spec(spec().persistent());
    let err = result.expect_err("persistence is not implemented");
    assert_eq!(err.code(), GraphErrorCode::UnsupportedProperty);
}

fn normalise(edge: Edge<u8>) -> Edge<u8> {
    let (&u, &v) = edge.both();
    Edge::new(u.min(v), u.max(v))
}
