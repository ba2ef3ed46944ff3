//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given city, always move to the
//! nearest unvisited city.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Typically 20-25% above
//! optimal, it provides a fast baseline.

use crate::distance::DistanceOracle;
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Only single distances are compared, so a [`Metric::Squared`] oracle gives
/// the same tour as a Euclidean one. Ties go to the lowest city index.
///
/// [`Metric::Squared`]: crate::distance::Metric::Squared
///
/// # Arguments
///
/// * `oracle` — Distance oracle over all cities
/// * `start` — City the tour begins at; ignored for an empty city set
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::constructive::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Squared);
///
/// let tour = nearest_neighbor(&mut oracle, 0);
/// assert_eq!(tour.as_slice(), &[0, 2, 3, 1]);
/// ```
///
/// # Panics
///
/// Panics if `start` is out of bounds for a non-empty city set.
pub fn nearest_neighbor(oracle: &mut DistanceOracle<'_>, start: usize) -> Tour {
    let n = oracle.num_cities();
    if n == 0 {
        return Tour::identity(0);
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(next) = oracle.nearest(current, &unvisited) {
        // `unvisited` stays sorted, so ties resolve to the lowest index
        let pos = unvisited
            .binary_search(&next)
            .unwrap_or_else(|insert_at| insert_at);
        unvisited.remove(pos);
        order.push(next);
        current = next;
    }

    Tour::new(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::models::City;

    fn line_cities() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(3.0, 0.0),
            City::new(1.0, 0.0),
            City::new(2.0, 0.0),
        ]
    }

    #[test]
    fn test_nn_follows_line() {
        let cities = line_cities();
        let mut oracle = DistanceOracle::new(&cities, Metric::Squared);
        assert_eq!(nearest_neighbor(&mut oracle, 0).as_slice(), &[0, 2, 3, 1]);
    }

    #[test]
    fn test_nn_other_start() {
        let cities = line_cities();
        let mut oracle = DistanceOracle::new(&cities, Metric::Squared);
        let tour = nearest_neighbor(&mut oracle, 1);
        assert_eq!(tour.as_slice(), &[1, 3, 2, 0]);
    }

    #[test]
    fn test_nn_metric_does_not_change_order() {
        let cities = vec![
            City::new(0.0, 0.0),
            City::new(5.0, 1.0),
            City::new(-2.0, 3.0),
            City::new(4.0, -4.0),
            City::new(1.0, 1.0),
        ];
        let mut squared = DistanceOracle::new(&cities, Metric::Squared);
        let mut euclid = DistanceOracle::new(&cities, Metric::Euclidean);
        assert_eq!(
            nearest_neighbor(&mut squared, 0),
            nearest_neighbor(&mut euclid, 0)
        );
    }

    #[test]
    fn test_nn_tie_prefers_lower_index() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 1.0), City::new(1.0, 0.0)];
        let mut oracle = DistanceOracle::new(&cities, Metric::Squared);
        assert_eq!(nearest_neighbor(&mut oracle, 0).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_nn_degenerate() {
        let empty: Vec<City> = vec![];
        let mut oracle = DistanceOracle::new(&empty, Metric::Squared);
        assert!(nearest_neighbor(&mut oracle, 0).is_empty());

        let single = vec![City::new(4.0, 4.0)];
        let mut oracle = DistanceOracle::new(&single, Metric::Squared);
        assert_eq!(nearest_neighbor(&mut oracle, 0).as_slice(), &[0]);
    }

    #[test]
    fn test_nn_is_permutation() {
        let cities: Vec<City> = (0..30)
            .map(|i| City::new((i * 7 % 13) as f64, (i * 5 % 11) as f64))
            .collect();
        let mut oracle = DistanceOracle::new(&cities, Metric::Squared);
        assert!(nearest_neighbor(&mut oracle, 4).is_permutation_of(30));
    }
}
