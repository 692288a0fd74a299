//! Bernoulli generator benchmarks.
//!
//! Compares a full traversal of a stable generator, which replays its fixed
//! edge set, against an unstable one, which draws every candidate pair again.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use trellis_benches::{error::BenchSetupError, params::BernoulliBenchParams};
use trellis_core::{BernoulliParams, GraphSource, Stability};

/// Seed used for every generator.
const SEED: u64 = 42;

/// Vertex counts to benchmark.
const ORDERS: &[usize] = &[100, 500, 1_000];

/// Edge probability for every run.
const PROBABILITY: f64 = 0.05;

fn bernoulli_traversal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("bernoulli_traversal");
    group.sample_size(20);

    for &order in ORDERS {
        for stability in [Stability::Stable, Stability::Unstable] {
            let generator = BernoulliParams::new(order, PROBABILITY)?
                .with_stability(stability)
                .with_rng_seed(SEED)
                .build();
            // Materialise the stable set outside the timed loop.
            let _size = generator.size();
            let params = BernoulliBenchParams {
                order,
                probability: PROBABILITY,
                stability,
            };

            group.bench_with_input(
                BenchmarkId::from_parameter(params),
                &generator,
                |b, generator| {
                    b.iter(|| generator.edges().count());
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn bernoulli_traversal(c: &mut Criterion) {
    if let Err(err) = bernoulli_traversal_impl(c) {
        panic!("bernoulli_traversal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, bernoulli_traversal);
criterion_main!(benches);
