//! Solver facade: one entry point per strategy.
//!
//! Every strategy implements [`TourSolver`]: it takes the cities and returns
//! a permutation of their indices. Each call builds its own distance cache
//! and random generator, so calls never share state.
//!
//! - [`RandomSolver`] — Uniformly random tour
//! - [`GreedySolver`] — Nearest-neighbor tour from city 0
//! - [`LocalSearchSolver`] — Random start, 2-opt, then stochastic 3-opt
//! - [`GeneticSolver`] — Genetic engine

mod config;
mod genetic;
mod greedy;
mod local_search;
mod random;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{City, Tour};

pub use config::{SolverConfig, SolverKind};
pub use genetic::GeneticSolver;
pub use greedy::GreedySolver;
pub use local_search::LocalSearchSolver;
pub use random::RandomSolver;

/// A TSP strategy.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::solver::{GreedySolver, TourSolver};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(2.0, 0.0), City::new(1.0, 0.0)];
/// let solver: Box<dyn TourSolver> = Box::new(GreedySolver::new());
/// let tour = solver.solve(&cities);
/// assert!(tour.is_permutation_of(3));
/// ```
pub trait TourSolver: Send + Sync {
    /// Short strategy name, also used for output file names.
    fn name(&self) -> &'static str;

    /// Returns a visiting order over all of `cities`.
    fn solve(&self, cities: &[City]) -> Tour;
}

/// Tour returned without searching when every order is equally long.
///
/// With at most three cities each cyclic order has the same edge set.
pub(crate) fn trivial_tour(n: usize) -> Option<Tour> {
    (n < 4).then(|| Tour::identity(n))
}

/// Generator for one solve call: seeded if `seed` is set, otherwise from OS
/// entropy.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
