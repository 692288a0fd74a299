//! Bernoulli random graphs, `G(n, ρ)`.
//!
//! Each candidate vertex pair is included independently with probability
//! `ρ`. Vertices are the integers `0..n`. Undirected graphs consider pairs
//! `u < v`; directed graphs consider every ordered pair `u != v`. Loops are
//! never generated.
//!
//! A *stable* graph draws its edge set once, on the first edge or size query,
//! and replays it afterwards. An *unstable* graph draws afresh on every edge
//! enumeration and reports the expected size instead of a count.

mod presence;
mod rng;

use std::cell::{OnceCell, RefCell};

use rand::{Rng, RngCore};
use tracing::{debug, instrument};

use self::presence::{PresenceMatrix, PresentPairs};
pub use self::rng::{DefaultRng, GeneratorRng};
use crate::{
    edge::Edge,
    error::GeneratorError,
    graph::{GraphSource, max_size},
    spec::Directedness,
};

/// Whether a generator replays one edge set or redraws on every enumeration.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Stability {
    /// Draw once, replay forever.
    Stable,
    /// Draw afresh on every edge enumeration.
    #[default]
    Unstable,
}

/// Validated configuration for a [`BernoulliGraph`].
///
/// # Examples
/// ```
/// use trellis_core::{BernoulliParams, GraphSource, Stability};
///
/// let graph = BernoulliParams::new(5, 0.5)?
///     .directed()
///     .stable()
///     .with_rng_seed(7)
///     .build();
/// assert_eq!(graph.order(), 5);
/// let first: Vec<_> = graph.edges().collect();
/// let second: Vec<_> = graph.edges().collect();
/// assert_eq!(first, second);
/// # Ok::<(), trellis_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliParams {
    order: usize,
    rho: f64,
    directedness: Directedness,
    stability: Stability,
    rng_seed: Option<u64>,
}

impl BernoulliParams {
    /// Creates an undirected, unstable configuration over `order` vertices.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidProbability`] when `rho` is NaN or
    /// outside `[0, 1)`.
    pub fn new(order: usize, rho: f64) -> Result<Self, GeneratorError> {
        if !(0.0..1.0).contains(&rho) {
            return Err(GeneratorError::InvalidProbability { rho });
        }
        Ok(Self {
            order,
            rho,
            directedness: Directedness::Undirected,
            stability: Stability::Unstable,
            rng_seed: None,
        })
    }

    /// Generates arcs over ordered pairs.
    #[must_use]
    pub const fn directed(self) -> Self {
        self.with_directedness(Directedness::Directed)
    }

    /// Sets the directedness explicitly.
    #[must_use]
    pub const fn with_directedness(mut self, directedness: Directedness) -> Self {
        self.directedness = directedness;
        self
    }

    /// Draws the edge set once and replays it.
    #[must_use]
    pub const fn stable(self) -> Self {
        self.with_stability(Stability::Stable)
    }

    /// Sets the stability explicitly.
    #[must_use]
    pub const fn with_stability(mut self, stability: Stability) -> Self {
        self.stability = stability;
        self
    }

    /// Seeds a private random stream so generation is reproducible.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn order(&self) -> usize { self.order }

    /// Inclusion probability of each candidate pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn probability(&self) -> f64 { self.rho }

    /// Directedness of generated edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn directedness(&self) -> Directedness { self.directedness }

    /// Replay behaviour of the edge set.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stability(&self) -> Stability { self.stability }

    /// Seed of the private random stream, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rng_seed(&self) -> Option<u64> { self.rng_seed }

    /// Builds a generator drawing from the configured seed, or from the
    /// shared process-wide stream when no seed was set.
    #[must_use]
    pub fn build(self) -> BernoulliGraph {
        let rng = GeneratorRng::from_seed(self.rng_seed);
        self.build_with(rng)
    }

    /// Builds a generator drawing from `rng`. Any configured seed is ignored.
    #[must_use]
    pub fn build_with<R: RngCore>(self, rng: R) -> BernoulliGraph<R> {
        BernoulliGraph {
            params: self,
            rng: RefCell::new(rng),
            presence: OnceCell::new(),
        }
    }
}

/// Builds a Bernoulli graph source from positional arguments.
///
/// # Errors
/// Returns [`GeneratorError::InvalidProbability`] when `rho` is NaN or outside
/// `[0, 1)`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use trellis_core::{Directedness, GraphSource, Stability, bernoulli_distribution};
///
/// let graph = bernoulli_distribution(
///     10,
///     0.0,
///     Directedness::Undirected,
///     Stability::Stable,
///     SmallRng::seed_from_u64(1),
/// )?;
/// assert_eq!(graph.size(), 0);
/// # Ok::<(), trellis_core::GeneratorError>(())
/// ```
pub fn bernoulli_distribution<R: RngCore>(
    order: usize,
    rho: f64,
    directedness: Directedness,
    stability: Stability,
    rng: R,
) -> Result<BernoulliGraph<R>, GeneratorError> {
    Ok(BernoulliParams::new(order, rho)?
        .with_directedness(directedness)
        .with_stability(stability)
        .build_with(rng))
}

/// A lazily sampled `G(n, ρ)` graph source over vertices `0..n`.
///
/// The generator is single-threaded: it owns its random stream behind a
/// [`RefCell`] and is not `Sync`.
#[derive(Debug)]
pub struct BernoulliGraph<R = GeneratorRng> {
    params: BernoulliParams,
    rng: RefCell<R>,
    presence: OnceCell<PresenceMatrix>,
}

impl<R: RngCore> BernoulliGraph<R> {
    /// Returns the configuration the graph was built from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn params(&self) -> &BernoulliParams { &self.params }

    /// Returns `true` once a stable graph has drawn its edge set.
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.presence.get().is_some()
    }

    /// Expected number of edges: the candidate pair count times `ρ`, rounded
    /// down.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::float_arithmetic,
        reason = "the product lies in [0, pairs) and flooring is intended"
    )]
    pub fn expected_size(&self) -> usize {
        let pairs = max_size(self.params.order, self.params.directedness);
        (pairs as f64 * self.params.rho) as usize
    }

    /// Reports whether the edge `(u, v)` is in a stable graph's edge set,
    /// drawing the set first if needed.
    ///
    /// Returns `None` for unstable graphs, which have no fixed set to ask.
    #[must_use]
    pub fn contains(&self, u: usize, v: usize) -> Option<bool> {
        if self.params.stability != Stability::Stable {
            return None;
        }
        let presence = self.materialized();
        Some(match self.params.directedness {
            Directedness::Directed => presence.contains(u, v),
            Directedness::Undirected => presence.contains(u.min(v), u.max(v)),
        })
    }

    fn trials(&self) -> Trials<'_, R> {
        Trials {
            rng: &self.rng,
            pairs: CandidatePairs::new(self.params.order, self.params.directedness),
            rho: self.params.rho,
        }
    }

    fn materialized(&self) -> &PresenceMatrix {
        self.presence.get_or_init(|| self.materialize())
    }

    #[instrument(
        name = "bernoulli.materialize",
        skip(self),
        fields(
            order = self.params.order,
            rho = self.params.rho,
            directed = self.params.directedness.is_directed(),
        ),
    )]
    fn materialize(&self) -> PresenceMatrix {
        let mut presence = PresenceMatrix::new(self.params.order);
        for edge in self.trials() {
            let (u, v) = edge.both();
            presence.insert(*u, *v);
        }
        debug!(size = presence.len(), "bernoulli edge set drawn");
        presence
    }
}

impl<R: RngCore> GraphSource<usize> for BernoulliGraph<R> {
    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.params.order
    }

    fn edges(&self) -> impl Iterator<Item = Edge<usize>> + '_ {
        match self.params.stability {
            Stability::Stable => BernoulliEdges::Replay(self.materialized().iter()),
            Stability::Unstable => BernoulliEdges::Draw(self.trials()),
        }
    }

    #[rustfmt::skip]
    fn order(&self) -> usize { self.params.order }

    fn size(&self) -> usize {
        match self.params.stability {
            Stability::Stable => self.materialized().len(),
            Stability::Unstable => self.expected_size(),
        }
    }
}

enum BernoulliEdges<'a, R> {
    Replay(PresentPairs<'a>),
    Draw(Trials<'a, R>),
}

impl<R: RngCore> Iterator for BernoulliEdges<'_, R> {
    type Item = Edge<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Replay(pairs) => pairs.next().map(|(u, v)| Edge::new(u, v)),
            Self::Draw(trials) => trials.next(),
        }
    }
}

/// One Bernoulli trial per candidate pair, yielding the successes.
struct Trials<'a, R> {
    rng: &'a RefCell<R>,
    pairs: CandidatePairs,
    rho: f64,
}

impl<R: RngCore> Iterator for Trials<'_, R> {
    type Item = Edge<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (u, v) = self.pairs.next()?;
            if self.rng.borrow_mut().gen_bool(self.rho) {
                return Some(Edge::new(u, v));
            }
        }
    }
}

/// Candidate pairs in row-major order: `u < v` when undirected, `u != v` when
/// directed.
#[derive(Clone, Debug)]
struct CandidatePairs {
    order: usize,
    directed: bool,
    u: usize,
    v: usize,
}

impl CandidatePairs {
    const fn new(order: usize, directedness: Directedness) -> Self {
        let directed = directedness.is_directed();
        Self {
            order,
            directed,
            u: 0,
            v: if directed { 0 } else { 1 },
        }
    }
}

impl Iterator for CandidatePairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.u >= self.order {
                return None;
            }
            if self.v >= self.order {
                self.u += 1;
                self.v = if self.directed { 0 } else { self.u + 1 };
                continue;
            }
            let pair = (self.u, self.v);
            self.v += 1;
            if pair.0 != pair.1 {
                return Some(pair);
            }
        }
    }
}
