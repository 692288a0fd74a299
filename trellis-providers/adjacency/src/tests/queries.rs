use rstest::rstest;
use trellis_core::{
    DataGraph, Directedness, Edge, Graph, GraphSource, LabeledGraph, WeightedDigraph,
    WeightedGraph, spec,
};

use super::{
    AdjacencyGraph,
    support::{build, pairs, sorted},
};

#[rstest]
fn directed_weighted_membership_respects_direction() {
    let graph: AdjacencyGraph<u32> = build(
        spec()
            .directed()
            .weighted()
            .using(vec![Edge::weighted(1, 2, 3.5)]),
    );
    assert!(graph.has_weighted_edge(&Edge::weighted(1, 2, 3.5)));
    assert!(!graph.has_weighted_edge(&Edge::weighted(2, 1, 3.5)));
    assert!(!graph.has_weighted_edge(&Edge::weighted(1, 2, 3.0)));
    assert!(graph.has_weighted_arc(&Edge::weighted(1, 2, 3.5)));
    assert!(graph.has_edge(&Edge::new(1, 2)));
    assert!(!graph.has_edge(&Edge::new(2, 1)));
}

#[rstest]
fn undirected_membership_ignores_orientation() {
    let graph: AdjacencyGraph<&str> = build(spec().using(vec![Edge::new("a", "b")]));
    assert!(graph.has_edge(&Edge::new("a", "b")));
    assert!(graph.has_edge(&Edge::new("b", "a")));
    assert!(!graph.has_edge(&Edge::new("a", "c")));
    assert!(graph.has_vertex(&"b"));
    assert!(!graph.has_vertex(&"c"));
}

#[rstest]
fn undirected_edges_are_reported_once() {
    let graph: AdjacencyGraph<u8> = build(spec().loops().using(vec![
        Edge::new(1, 2),
        Edge::new(3, 2),
        Edge::new(1, 3),
        Edge::new(2, 2),
    ]));
    let mut reported: Vec<_> = graph
        .edges()
        .map(|edge| {
            let (&u, &v) = edge.both();
            (u.min(v), u.max(v))
        })
        .collect();
    reported.sort_unstable();
    assert_eq!(reported, [(1, 2), (1, 3), (2, 2), (2, 3)]);
    assert_eq!(graph.size(), 4);
    assert_eq!(graph.order(), 3);
}

#[rstest]
#[case::undirected(Directedness::Undirected, 4, 2, 1.0 / 3.0)]
#[case::directed(Directedness::Directed, 2, 1, 0.5)]
#[case::undirected_pair(Directedness::Undirected, 2, 1, 1.0)]
fn density_uses_directed_maximum(
    #[case] directedness: Directedness,
    #[case] order: u32,
    #[case] arcs: u32,
    #[case] expected: f64,
) {
    let edges: Vec<Edge<u32>> = (0..arcs).map(|u| Edge::new(2 * u, 2 * u + 1)).collect();
    let base = match directedness {
        Directedness::Directed => spec().directed(),
        Directedness::Undirected => spec().undirected(),
    };
    let graph: AdjacencyGraph<u32> = build(base.using(edges));
    assert_eq!(graph.order(), order as usize);
    assert!((graph.density() - expected).abs() < f64::EPSILON);
}

#[rstest]
fn density_is_nan_below_two_vertices() {
    let empty: AdjacencyGraph<u8> = build(spec());
    assert!(empty.density().is_nan());
    let single: AdjacencyGraph<u8> = build(spec().loops().using(vec![Edge::new(4, 4)]));
    assert!(single.density().is_nan());
}

#[rstest]
fn degree_counts_loops_twice() {
    let graph: AdjacencyGraph<char> = build(
        spec()
            .pseudograph()
            .using(vec![Edge::new('a', 'a'), Edge::new('a', 'b'), Edge::new('a', 'b')]),
    );
    assert_eq!(graph.degree_of(&'a'), Some(4));
    assert_eq!(graph.degree_of(&'b'), Some(2));
    assert_eq!(graph.degree_of(&'z'), None);
    assert_eq!(graph.incident_to(&'a').count(), 3);
    assert_eq!(sorted(graph.adjacent_to(&'a')), ['a', 'b']);
}

#[rstest]
fn incident_edges_start_at_the_queried_vertex() {
    let graph: AdjacencyGraph<u8> = build(spec().using(vec![Edge::new(1, 2), Edge::new(3, 1)]));
    assert_eq!(pairs(graph.incident_to(&1)), [(1, 2), (1, 3)]);
    assert_eq!(graph.incident_to(&9).count(), 0);
    assert_eq!(graph.adjacent_to(&9).count(), 0);
}

#[rstest]
fn labeled_membership_compares_labels() {
    let graph: AdjacencyGraph<u8> = build(
        spec()
            .labeled()
            .using(vec![Edge::labeled(1, 2, "road")]),
    );
    assert!(graph.has_labeled_edge(&Edge::labeled(2, 1, "road")));
    assert!(!graph.has_labeled_edge(&Edge::labeled(1, 2, "rail")));
    assert!(!graph.has_labeled_edge(&Edge::new(1, 2)));
}

#[rstest]
fn data_membership_compares_payloads() {
    let graph: AdjacencyGraph<u8, (u16, bool)> = build(
        spec()
            .data_edges()
            .using(vec![Edge::with_data(1, 2, (7, true))]),
    );
    assert!(graph.has_data_edge(&Edge::with_data(1, 2, (7, true))));
    assert!(!graph.has_data_edge(&Edge::with_data(1, 2, (7, false))));
    assert!(graph.has_edge(&Edge::new(2, 1)));
}

#[rstest]
fn seeding_registers_isolated_source_vertices() {
    let source: AdjacencyGraph<u8> = build(spec().using(vec![Edge::new(1, 2)]));
    let mut with_isolated = source.clone();
    trellis_core::VertexSetMutator::ensure_vertices(&mut with_isolated, [9])
        .expect("mutable graph accepts vertices");

    let copy: AdjacencyGraph<u8> = build(spec().using(with_isolated));
    assert_eq!(sorted(copy.vertices()), [1, 2, 9]);
    assert_eq!(pairs(copy.edges()).len(), 1);
    assert_eq!(copy.degree_of(&9), Some(0));
}

#[rstest]
fn stable_generator_seeds_identical_edge_set() {
    let generator = trellis_core::BernoulliParams::new(20, 0.3)
        .expect("probability must be valid")
        .stable()
        .with_rng_seed(13)
        .build();
    let expected = pairs(generator.edges());
    let graph: AdjacencyGraph<usize> = build(spec().using(generator));
    assert_eq!(graph.order(), 20);
    assert_eq!(pairs(graph.edges().map(|edge| {
        let (u, v, payload) = edge.into_parts();
        Edge::from_parts(u.min(v), u.max(v), payload)
    })), expected);
}
