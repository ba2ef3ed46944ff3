//! Greedy baseline strategy.

use crate::constructive::nearest_neighbor;
use crate::distance::{DistanceOracle, Metric};
use crate::models::{City, Tour};

use super::{trivial_tour, TourSolver};

/// Nearest-neighbor tour starting at city 0.
///
/// Deterministic; compares single distances only and therefore measures with
/// [`Metric::Squared`].
#[derive(Debug, Clone, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }
}

impl TourSolver for GreedySolver {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, cities: &[City]) -> Tour {
        if let Some(tour) = trivial_tour(cities.len()) {
            return tour;
        }
        let mut oracle = DistanceOracle::new(cities, Metric::Squared);
        let tour = nearest_neighbor(&mut oracle, 0);
        log::debug!(
            "greedy: n={} cached_pairs={}",
            cities.len(),
            oracle.cache_len()
        );
        tour
    }
}
