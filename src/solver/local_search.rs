//! 2-opt followed by stochastic 3-opt from a random start.

use rand::Rng;

use crate::deadline::Deadline;
use crate::distance::{DistanceOracle, Metric};
use crate::error::Result;
use crate::evaluation::total_distance;
use crate::local_search::{three_opt, two_opt, ThreeOptConfig};
use crate::models::{City, Tour};

use super::{make_rng, trivial_tour, TourSolver};

/// Random tour, improved by 2-opt to a local optimum, then by 3-opt until
/// `three_opt_attempts` consecutive samples fail.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::solver::{LocalSearchSolver, TourSolver};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let solver = LocalSearchSolver::new().with_three_opt_attempts(1_000).with_seed(1);
/// let tour = solver.solve(&cities);
/// assert!(tour.is_permutation_of(4));
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearchSolver {
    three_opt_attempts: usize,
    time_limit_secs: Option<f64>,
    seed: Option<u64>,
}

impl Default for LocalSearchSolver {
    fn default() -> Self {
        Self {
            three_opt_attempts: ThreeOptConfig::default().max_attempts,
            time_limit_secs: None,
            seed: None,
        }
    }
}

impl LocalSearchSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_three_opt_attempts(mut self, attempts: usize) -> Self {
        self.three_opt_attempts = attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bounds each solve call; checked during 3-opt.
    ///
    /// Rejects negative and non-finite limits.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Result<Self> {
        Deadline::from_secs(Some(secs))?;
        self.time_limit_secs = Some(secs);
        Ok(self)
    }

    pub fn solve_with_rng<R: Rng>(&self, cities: &[City], rng: &mut R) -> Tour {
        if let Some(tour) = trivial_tour(cities.len()) {
            return tour;
        }

        let mut oracle = DistanceOracle::new(cities, Metric::Euclidean);
        let mut tour = Tour::random(cities.len(), rng);

        let two_opt_moves = two_opt(&mut tour, &mut oracle);
        let after_two_opt = total_distance(tour.as_slice(), &mut oracle);

        let mut config = ThreeOptConfig::default().with_max_attempts(self.three_opt_attempts);
        // validated when set
        if let Ok(Some(deadline)) = Deadline::from_secs(self.time_limit_secs) {
            config = config.with_deadline(deadline);
        }
        let three_opt_moves = three_opt(&mut tour, &mut oracle, &config, rng);

        log::debug!(
            "local-search: n={} 2opt_moves={two_opt_moves} after_2opt={after_two_opt:.4} \
             3opt_moves={three_opt_moves} final={:.4}",
            cities.len(),
            total_distance(tour.as_slice(), &mut oracle)
        );
        tour
    }
}

impl TourSolver for LocalSearchSolver {
    fn name(&self) -> &'static str {
        "local-search"
    }

    fn solve(&self, cities: &[City]) -> Tour {
        self.solve_with_rng(cities, &mut make_rng(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ]
    }

    #[test]
    fn test_unit_square_optimal() {
        let cities = unit_square();
        for seed in 0..10 {
            let tour = LocalSearchSolver::new()
                .with_three_opt_attempts(200)
                .with_seed(seed)
                .solve(&cities);
            let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
            assert!((total_distance(tour.as_slice(), &mut oracle) - 4.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_ring_reaches_perimeter() {
        let cities: Vec<City> = (0..20)
            .map(|i| {
                let a = (i * 7 % 20) as f64 * std::f64::consts::TAU / 20.0;
                City::new(a.cos(), a.sin())
            })
            .collect();
        let tour = LocalSearchSolver::new()
            .with_three_opt_attempts(2_000)
            .with_seed(3)
            .solve(&cities);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let perimeter = 20.0 * 2.0 * (std::f64::consts::PI / 20.0).sin();
        assert!(tour.is_permutation_of(20));
        assert!((total_distance(tour.as_slice(), &mut oracle) - perimeter).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_negative_time_limit() {
        assert!(LocalSearchSolver::new().with_time_limit_secs(-2.0).is_err());
    }

    #[test]
    fn test_degenerate_inputs() {
        let solver = LocalSearchSolver::new();
        assert!(solver.solve(&[]).is_empty());
        assert_eq!(solver.solve(&[City::new(0.0, 0.0)]).as_slice(), &[0]);
        let three = [City::new(0.0, 0.0), City::new(1.0, 0.0), City::new(0.0, 1.0)];
        assert_eq!(solver.solve(&three).as_slice(), &[0, 1, 2]);
    }
}
