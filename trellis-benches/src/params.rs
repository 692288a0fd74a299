//! Benchmark parameter types.

use std::fmt;

use trellis_core::Stability;

/// Parameters for a Bernoulli generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BernoulliBenchParams {
    /// Number of vertices.
    pub order: usize,
    /// Edge probability.
    pub probability: f64,
    /// Whether the edge set is fixed on first use.
    pub stability: Stability,
}

impl fmt::Display for BernoulliBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stability = match self.stability {
            Stability::Stable => "stable",
            Stability::Unstable => "unstable",
        };
        write!(f, "n={},p={},{stability}", self.order, self.probability)
    }
}

/// Parameters for an adjacency insertion benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct InsertBenchParams {
    /// Number of vertices.
    pub order: usize,
    /// Number of edges inserted.
    pub edge_count: usize,
}

impl fmt::Display for InsertBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.order, self.edge_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(Stability::Stable, "n=100,p=0.1,stable")]
    #[case(Stability::Unstable, "n=100,p=0.1,unstable")]
    fn bernoulli_params_label_their_stability(#[case] stability: Stability, #[case] expected: &str) {
        let params = BernoulliBenchParams {
            order: 100,
            probability: 0.1,
            stability,
        };
        assert_eq!(params.to_string(), expected);
    }

    #[rstest]
    fn insert_params_label_order_and_edges() {
        let params = InsertBenchParams {
            order: 50,
            edge_count: 200,
        };
        assert_eq!(params.to_string(), "n=50,m=200");
    }
}
