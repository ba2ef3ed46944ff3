//! 2-opt improvement over a closed tour.
//!
//! # Algorithm
//!
//! For positions `i < j` (not cyclically adjacent), the edges
//! `(t[i], t[i+1])` and `(t[j], t[j+1 mod n])` are replaced by
//! `(t[i], t[j])` and `(t[i+1], t[j+1 mod n])` when that shortens the tour:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! An improving move is applied immediately by reversing `t[i+1..=j]` and the
//! scan continues. Passes repeat until a full pass applies no move.
//!
//! # Complexity
//!
//! O(n²) per pass, number of passes unbounded but small in practice.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceOracle;
use crate::models::Tour;

/// Minimum gain for a move to count as an improvement.
pub(crate) const IMPROVEMENT_EPS: f64 = 1e-10;

/// Runs 2-opt on `tour` in place until it is 2-optimal.
///
/// Returns the number of improving reversals applied; `0` means the tour was
/// already a local optimum. Needs a [`Metric::Euclidean`] oracle for the
/// result to be no longer than the input.
///
/// [`Metric::Euclidean`]: crate::distance::Metric::Euclidean
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::evaluation::total_distance;
/// use u_tsp::local_search::two_opt;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
///
/// let mut tour = Tour::new(vec![0, 2, 1, 3]); // crossing diagonals
/// two_opt(&mut tour, &mut oracle);
/// assert!((total_distance(tour.as_slice(), &mut oracle) - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt(tour: &mut Tour, oracle: &mut DistanceOracle<'_>) -> usize {
    let n = tour.len();
    if n < 4 {
        return 0;
    }

    let mut moves = 0;
    let mut improved = true;

    while improved {
        improved = false;

        for i in 0..n - 2 {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    // edges (t[0], t[1]) and (t[n-1], t[0]) share a city
                    continue;
                }
                if two_opt_delta(tour.as_slice(), oracle, i, j) < -IMPROVEMENT_EPS {
                    tour.reverse_segment(i + 1, j);
                    moves += 1;
                    improved = true;
                }
            }
        }
    }

    moves
}

/// Length change from reversing `t[i+1..=j]`.
///
/// Before: ...-t[i] - t[i+1] - ... - t[j] - t[j+1]-...
/// After:  ...-t[i] - t[j] - ... - t[i+1] - t[j+1]-...
fn two_opt_delta(tour: &[usize], oracle: &mut DistanceOracle<'_>, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let (a, b) = (tour[i], tour[i + 1]);
    let (c, d) = (tour[j], tour[(j + 1) % n]);

    let old_cost = oracle.distance(a, b) + oracle.distance(c, d);
    let new_cost = oracle.distance(a, c) + oracle.distance(b, d);

    new_cost - old_cost
}
