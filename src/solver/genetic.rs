//! Genetic strategy.

use rand::Rng;

use crate::distance::{DistanceOracle, Metric};
use crate::error::Result;
use crate::ga::{GaConfig, GeneticEngine};
use crate::models::{City, Tour};

use super::{make_rng, trivial_tour, TourSolver};

/// Runs the [`GeneticEngine`] over all cities and returns its best tour.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::GaConfig;
/// use u_tsp::models::City;
/// use u_tsp::solver::{GeneticSolver, TourSolver};
///
/// let cities: Vec<City> = (0..8).map(|i| City::new(i as f64, (i % 2) as f64)).collect();
/// let solver = GeneticSolver::new(GaConfig::memetic().with_generations(5))
///     .unwrap()
///     .with_seed(7);
/// assert!(solver.solve(&cities).is_permutation_of(8));
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    engine: GeneticEngine,
    seed: Option<u64>,
}

impl GeneticSolver {
    /// Creates a solver, rejecting invalid configurations.
    pub fn new(config: GaConfig) -> Result<Self> {
        Ok(Self {
            engine: GeneticEngine::new(config)?,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &GaConfig {
        self.engine.config()
    }

    pub fn solve_with_rng<R: Rng>(&self, cities: &[City], rng: &mut R) -> Tour {
        if let Some(tour) = trivial_tour(cities.len()) {
            return tour;
        }
        let mut oracle = DistanceOracle::new(cities, Metric::Euclidean);
        let result = self.engine.run(&mut oracle, rng);
        log::debug!(
            "genetic: n={} generations={} best={:.4} cached_pairs={}",
            cities.len(),
            result.generations_run,
            result.best_distance,
            oracle.cache_len()
        );
        result.best
    }
}

impl TourSolver for GeneticSolver {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn solve(&self, cities: &[City]) -> Tour {
        self.solve_with_rng(cities, &mut make_rng(self.seed))
    }
}
