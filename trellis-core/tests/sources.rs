#![expect(
    clippy::expect_used,
    reason = "tests require contextual panics for invalid configuration"
)]

mod common;

use std::{collections::HashSet, ops::ControlFlow};

use common::CountingRing;
use rstest::rstest;
use trellis_core::{
    BernoulliParams, Directedness, Edge, Graph, GraphSource, NULL_GRAPH, Traversal,
    TraversalExt, spec,
};

fn drain<S: GraphSource<u32>>(source: &S) -> (Vec<u32>, Vec<Edge<u32>>) {
    (source.vertices().collect(), source.edges().collect())
}

#[test]
fn using_defers_enumeration_to_the_factory() {
    let seeded = spec().directed().using(CountingRing::new(4));
    assert_eq!(seeded.source().enumerations(), 0);

    let (vertices, edges) = seeded.create(|spec| {
        let (_, source) = spec.into_parts();
        let drained = drain(&source);
        assert_eq!(source.enumerations(), 1);
        drained
    });
    assert_eq!(vertices, [0, 1, 2, 3]);
    assert_eq!(edges.len(), 4);
    assert!(edges.contains(&Edge::new(3, 0)));
}

#[test]
fn default_source_seeds_nothing() {
    let (vertices, edges) = drain(spec().source());
    assert!(vertices.is_empty());
    assert!(edges.is_empty());
}

#[test]
fn counting_defaults_enumerate_the_source() {
    let ring = CountingRing::new(5);
    assert_eq!(ring.order(), 5);
    assert_eq!(ring.size(), 5);
    assert_eq!(ring.enumerations(), 1);
}

#[rstest]
#[case(0)]
#[case(3)]
fn visit_halts_edge_enumeration(#[case] stop_after: usize) {
    let ring = CountingRing::new(10);
    let mut delivered = 0;
    let outcome = ring.edges().visit(|_| {
        delivered += 1;
        if delivered > stop_after {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(outcome, Traversal::Terminated);
    assert_eq!(delivered, stop_after + 1);
}

#[rstest]
#[case::empty(0.0, 12)]
#[case::dense(0.999, 0)]
fn generated_sources_feed_generic_algorithms(#[case] rho: f64, #[case] isolated: usize) {
    fn isolated_count<S: GraphSource<usize>>(source: &S) -> usize {
        let touched: HashSet<usize> = source
            .edges()
            .flat_map(|edge| {
                let (u, v, _) = edge.into_parts();
                [u, v]
            })
            .collect();
        source.order() - touched.len()
    }

    let generator = BernoulliParams::new(12, rho)
        .expect("probability must be valid")
        .stable()
        .with_rng_seed(21)
        .build();
    assert_eq!(isolated_count(&generator), isolated);
}

#[test]
fn null_graph_density_is_nan() {
    fn describe<G: Graph<u32>>(graph: &G) -> (Directedness, bool) {
        (graph.directedness(), graph.density().is_nan())
    }
    assert_eq!(describe(&NULL_GRAPH), (Directedness::Undirected, true));
}

#[test]
fn stable_generator_seeds_a_spec() {
    let generator = BernoulliParams::new(30, 0.2)
        .expect("probability must be valid")
        .stable()
        .with_rng_seed(4)
        .build();
    let seeded = spec().using(generator);
    let first: Vec<_> = seeded.source().edges().collect();
    let again: Vec<_> = seeded.source().edges().collect();
    assert_eq!(first, again);
    assert_eq!(first.len(), seeded.source().size());
}
