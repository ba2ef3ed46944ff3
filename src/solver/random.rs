//! Random baseline strategy.

use rand::Rng;

use crate::constructive::random_tour;
use crate::models::{City, Tour};

use super::{make_rng, trivial_tour, TourSolver};

/// Returns a uniformly random tour.
#[derive(Debug, Clone, Default)]
pub struct RandomSolver {
    seed: Option<u64>,
}

impl RandomSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the seed used by [`TourSolver::solve`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn solve_with_rng<R: Rng>(&self, cities: &[City], rng: &mut R) -> Tour {
        trivial_tour(cities.len()).unwrap_or_else(|| random_tour(cities.len(), rng))
    }
}

impl TourSolver for RandomSolver {
    fn name(&self) -> &'static str {
        "random"
    }

    fn solve(&self, cities: &[City]) -> Tour {
        self.solve_with_rng(cities, &mut make_rng(self.seed))
    }
}
