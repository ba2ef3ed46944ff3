//! Stochastic 3-opt improvement over a closed tour.
//!
//! # Algorithm
//!
//! Samples a random position triple `i < j < k`, which cuts the tour into
//!
//! ```text
//! A = ..t[i] | B = t[i+1..=j] | C = t[j+1..=k] | D = t[k+1]..
//! ```
//!
//! with the removed edges `(a, b)`, `(c, d)`, `(e, f)` where
//! `a = t[i], b = t[i+1], c = t[j], d = t[j+1], e = t[k], f = t[k+1 mod n]`.
//! Five reconnections are costed against the current three edges, in this
//! order, and the first strictly shorter one is applied:
//!
//! 1. reverse B            `a-c, b-d, e-f`
//! 2. reverse C            `a-b, c-e, d-f`
//! 3. reverse B and C      `a-e, d-c, b-f` (one reversal of `i+1..=k`)
//! 4. reverse B, reverse C `a-c, b-e, d-f`
//! 5. exchange B and C     `a-d, e-b, c-f` (reversal of `i+1..=k`, then each
//!    half reversed back)
//!
//! Each candidate is costed with exactly the edges its move creates, so an
//! accepted move always shortens the tour. The attempt counter resets on every
//! accepted move; the search stops after `max_attempts` consecutive failures.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use rand::seq::index;
use rand::Rng;

use crate::deadline::{is_expired, Deadline};
use crate::distance::{DistanceOracle, Metric};
use crate::models::Tour;

use super::two_opt::IMPROVEMENT_EPS;

/// Attempts between two deadline checks.
const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// Budget for [`three_opt`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeOptConfig {
    /// Consecutive non-improving samples before giving up.
    pub max_attempts: usize,
    /// Optional wall-clock limit.
    pub deadline: Option<Deadline>,
}

impl Default for ThreeOptConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100_000,
            deadline: None,
        }
    }
}

impl ThreeOptConfig {
    /// Sets the consecutive-failure budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets a wall-clock limit.
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// A 3-opt reconnection, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reconnection {
    ReverseFirst,
    ReverseSecond,
    ReverseSpan,
    ReverseBoth,
    Exchange,
}

/// Runs budgeted random 3-opt on `tour` in place.
///
/// Returns the number of accepted moves. Tours with fewer than four cities
/// are returned unchanged: below three no triple exists, and with three every
/// order has the same length.
///
/// The oracle must use [`Metric::Euclidean`]: candidates are compared as sums
/// of three edge lengths.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::evaluation::total_distance;
/// use u_tsp::local_search::{three_opt, ThreeOptConfig};
/// use rand::SeedableRng;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(3.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 2.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let mut tour = Tour::new(vec![0, 2, 4, 1, 3]);
/// let before = total_distance(tour.as_slice(), &mut oracle);
/// three_opt(&mut tour, &mut oracle, &ThreeOptConfig::default().with_max_attempts(500), &mut rng);
/// assert!(total_distance(tour.as_slice(), &mut oracle) <= before);
/// ```
pub fn three_opt<R: Rng>(
    tour: &mut Tour,
    oracle: &mut DistanceOracle<'_>,
    config: &ThreeOptConfig,
    rng: &mut R,
) -> usize {
    debug_assert_eq!(
        oracle.metric(),
        Metric::Euclidean,
        "3-opt compares sums of edge lengths and needs the Euclidean metric"
    );

    let n = tour.len();
    if n < 4 {
        return 0;
    }

    let mut moves = 0;
    let mut attempts = 0;
    let mut since_check = 0;

    while attempts < config.max_attempts {
        since_check += 1;
        if since_check == DEADLINE_CHECK_INTERVAL {
            since_check = 0;
            if is_expired(config.deadline.as_ref()) {
                log::debug!("3-opt: deadline reached after {moves} moves");
                break;
            }
        }

        let mut triple = index::sample(rng, n, 3).into_vec();
        triple.sort_unstable();
        let (i, j, k) = (triple[0], triple[1], triple[2]);

        match find_reconnection(tour.as_slice(), oracle, i, j, k) {
            Some(r) => {
                apply_reconnection(tour, r, i, j, k);
                moves += 1;
                attempts = 0;
            }
            None => attempts += 1,
        }
    }

    log::trace!("3-opt: {moves} moves accepted");
    moves
}

/// Returns the first reconnection of cut `(i, j, k)` that shortens the tour.
fn find_reconnection(
    tour: &[usize],
    oracle: &mut DistanceOracle<'_>,
    i: usize,
    j: usize,
    k: usize,
) -> Option<Reconnection> {
    let n = tour.len();
    let (a, b) = (tour[i], tour[i + 1]);
    let (c, d) = (tour[j], tour[j + 1]);
    let (e, f) = (tour[k], tour[(k + 1) % n]);

    let ab = oracle.distance(a, b);
    let cd = oracle.distance(c, d);
    let ef = oracle.distance(e, f);
    let baseline = ab + cd + ef - IMPROVEMENT_EPS;

    let ac = oracle.distance(a, c);
    let bd = oracle.distance(b, d);
    if ac + bd + ef < baseline {
        return Some(Reconnection::ReverseFirst);
    }

    let ce = oracle.distance(c, e);
    let df = oracle.distance(d, f);
    if ab + ce + df < baseline {
        return Some(Reconnection::ReverseSecond);
    }

    let ae = oracle.distance(a, e);
    let bf = oracle.distance(b, f);
    if ae + cd + bf < baseline {
        return Some(Reconnection::ReverseSpan);
    }

    let be = oracle.distance(b, e);
    if ac + be + df < baseline {
        return Some(Reconnection::ReverseBoth);
    }

    let ad = oracle.distance(a, d);
    let cf = oracle.distance(c, f);
    if ad + be + cf < baseline {
        return Some(Reconnection::Exchange);
    }

    None
}

fn apply_reconnection(tour: &mut Tour, r: Reconnection, i: usize, j: usize, k: usize) {
    match r {
        Reconnection::ReverseFirst => tour.reverse_segment(i + 1, j),
        Reconnection::ReverseSecond => tour.reverse_segment(j + 1, k),
        Reconnection::ReverseSpan => tour.reverse_segment(i + 1, k),
        Reconnection::ReverseBoth => {
            tour.reverse_segment(i + 1, j);
            tour.reverse_segment(j + 1, k);
        }
        Reconnection::Exchange => {
            // A C' B' D, then restore the orientation of C and B.
            let split = i + (k - j);
            tour.reverse_segment(i + 1, k);
            tour.reverse_segment(i + 1, split);
            tour.reverse_segment(split + 1, k);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::total_distance;
    use crate::local_search::two_opt;
    use crate::models::City;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> Vec<City> {
        vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ]
    }

    fn scattered(n: usize, seed: u64) -> Vec<City> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| City::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect()
    }

    fn small_budget() -> ThreeOptConfig {
        ThreeOptConfig::default().with_max_attempts(2_000)
    }

    #[test]
    fn test_3opt_already_optimal() {
        let cities = unit_square();
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(42);
        let mut tour = Tour::identity(4);
        assert_eq!(three_opt(&mut tour, &mut oracle, &small_budget(), &mut rng), 0);
        assert!((total_distance(tour.as_slice(), &mut oracle) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_3opt_small_tours_passthrough() {
        let cities = unit_square();
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(42);
        for tour in [vec![], vec![2], vec![1, 0], vec![2, 0, 1]] {
            let mut t = Tour::new(tour.clone());
            assert_eq!(three_opt(&mut t, &mut oracle, &small_budget(), &mut rng), 0);
            assert_eq!(t.as_slice(), tour.as_slice());
        }
    }

    #[test]
    fn test_3opt_fixes_crossed_square() {
        let cities = unit_square();
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(9);
        let mut tour = Tour::new(vec![0, 2, 1, 3]);
        three_opt(&mut tour, &mut oracle, &small_budget(), &mut rng);
        assert!(tour.is_permutation_of(4));
        assert!((total_distance(tour.as_slice(), &mut oracle) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_3opt_does_not_worsen() {
        let cities = scattered(30, 1);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(2);
        let mut tour = Tour::random(30, &mut rng);
        let before = total_distance(tour.as_slice(), &mut oracle);
        let moves = three_opt(&mut tour, &mut oracle, &small_budget(), &mut rng);
        let after = total_distance(tour.as_slice(), &mut oracle);
        assert!(moves > 0);
        assert!(after < before);
        assert!(tour.is_permutation_of(30));
    }

    #[test]
    fn test_3opt_after_2opt_does_not_worsen() {
        let cities = scattered(25, 4);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(5);
        let mut tour = Tour::random(25, &mut rng);
        two_opt(&mut tour, &mut oracle);
        let before = total_distance(tour.as_slice(), &mut oracle);
        three_opt(&mut tour, &mut oracle, &small_budget(), &mut rng);
        assert!(total_distance(tour.as_slice(), &mut oracle) <= before + 1e-10);
    }

    #[test]
    fn test_each_reconnection_matches_its_cost() {
        let cities = scattered(9, 8);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let base = Tour::identity(9);
        let (i, j, k) = (1, 4, 7);
        let t = base.as_slice();
        let (a, b, c, d, e, f) = (t[i], t[i + 1], t[j], t[j + 1], t[k], t[(k + 1) % 9]);
        let old = oracle.distance(a, b) + oracle.distance(c, d) + oracle.distance(e, f);
        let expected = [
            (Reconnection::ReverseFirst, [(a, c), (b, d), (e, f)]),
            (Reconnection::ReverseSecond, [(a, b), (c, e), (d, f)]),
            (Reconnection::ReverseSpan, [(a, e), (d, c), (b, f)]),
            (Reconnection::ReverseBoth, [(a, c), (b, e), (d, f)]),
            (Reconnection::Exchange, [(a, d), (e, b), (c, f)]),
        ];
        let before = total_distance(t, &mut oracle);
        for (r, edges) in expected {
            let new: f64 = edges.iter().map(|&(x, y)| oracle.distance(x, y)).sum();
            let mut moved = base.clone();
            apply_reconnection(&mut moved, r, i, j, k);
            assert!(moved.is_permutation_of(9), "{r:?}");
            let after = total_distance(moved.as_slice(), &mut oracle);
            assert!((after - before - (new - old)).abs() < 1e-9, "{r:?}");
        }
    }

    fn on_a_line(xs: &[f64]) -> Vec<City> {
        xs.iter().map(|&x| City::new(x, 0.0)).collect()
    }

    #[test]
    fn test_first_improving_reconnection_wins() {
        // reverse-first saves 2, reverse-both would save 4
        let cities = on_a_line(&[0.0, 2.0, 1.0, 4.0, 3.0, 5.0]);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let tour = Tour::identity(6);
        assert_eq!(
            find_reconnection(tour.as_slice(), &mut oracle, 0, 2, 4),
            Some(Reconnection::ReverseFirst)
        );
    }

    #[test]
    fn test_second_reconnection_when_first_does_not_improve() {
        // reverse-first worsens, reverse-second saves 2, reverse-span would save 4
        let cities = on_a_line(&[0.0, 3.0, 4.0, 5.0, 1.0, 6.0]);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let tour = Tour::identity(6);
        assert_eq!(
            find_reconnection(tour.as_slice(), &mut oracle, 0, 2, 4),
            Some(Reconnection::ReverseSecond)
        );

        let mut moved = tour.clone();
        apply_reconnection(&mut moved, Reconnection::ReverseSecond, 0, 2, 4);
        let saved = total_distance(tour.as_slice(), &mut oracle)
            - total_distance(moved.as_slice(), &mut oracle);
        assert!((saved - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_reconnection_on_sorted_line() {
        let cities = on_a_line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let tour = Tour::identity(6);
        assert_eq!(find_reconnection(tour.as_slice(), &mut oracle, 0, 2, 4), None);
    }

    #[test]
    fn test_exchange_layout() {
        let mut tour = Tour::identity(8);
        apply_reconnection(&mut tour, Reconnection::Exchange, 0, 2, 5);
        // A = [0], B = [1, 2], C = [3, 4, 5], D = [6, 7]
        assert_eq!(tour.as_slice(), &[0, 3, 4, 5, 1, 2, 6, 7]);
    }

    #[test]
    fn test_zero_deadline_stops_early() {
        let cities = scattered(50, 6);
        let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
        let mut rng = StdRng::seed_from_u64(6);
        let mut tour = Tour::random(50, &mut rng);
        let config = ThreeOptConfig::default()
            .with_max_attempts(usize::MAX)
            .with_deadline(Deadline::after(std::time::Duration::ZERO));
        three_opt(&mut tour, &mut oracle, &config, &mut rng);
        assert!(tour.is_permutation_of(50));
    }
}
