//! Cyclic tour length and ranking.

use crate::distance::DistanceOracle;
use crate::models::Tour;

/// Total length of the closed tour, including the edge from the last city
/// back to the first.
///
/// An empty or single-city tour has length 0.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::evaluation::total_distance;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
/// assert!((total_distance(&[0, 1, 2, 3], &mut oracle) - 4.0).abs() < 1e-10);
/// ```
pub fn total_distance(tour: &[usize], oracle: &mut DistanceOracle<'_>) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }
    let mut dist = 0.0;
    for k in 0..n {
        dist += oracle.distance(tour[k], tour[(k + 1) % n]);
    }
    dist
}

/// Evaluates and ranks tours against one oracle.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::evaluation::TourEvaluator;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
/// let mut evaluator = TourEvaluator::new(&mut oracle);
///
/// let crossed = Tour::new(vec![0, 2, 1, 3]);
/// let square = Tour::identity(4);
/// let ranked = evaluator.rank(&[crossed, square]);
/// assert_eq!(ranked[0].0, 1);
/// ```
pub struct TourEvaluator<'o, 'a> {
    oracle: &'o mut DistanceOracle<'a>,
}

impl<'o, 'a> TourEvaluator<'o, 'a> {
    /// Creates an evaluator backed by `oracle`.
    pub fn new(oracle: &'o mut DistanceOracle<'a>) -> Self {
        Self { oracle }
    }

    /// Total length of `tour`.
    pub fn evaluate(&mut self, tour: &Tour) -> f64 {
        total_distance(tour.as_slice(), self.oracle)
    }

    /// Returns `(index, length)` pairs sorted by ascending length.
    ///
    /// The sort is stable: equal lengths keep their input order.
    pub fn rank(&mut self, tours: &[Tour]) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = tours
            .iter()
            .enumerate()
            .map(|(i, t)| (i, self.evaluate(t)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}
