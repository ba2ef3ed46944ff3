//! Variation and selection operators on tours.
//!
//! # Operators
//!
//! - **Crossover**: Order crossover (OX) keeping one parent's segment in place
//! - **Mutation**: Random segment reversal
//! - **Selection**: Best-half uniform or tournament, on a ranked population

use rand::Rng;
use u_metaheur::ga::operators::invert_mutation;

use crate::models::Tour;

use super::config::Selection;

/// Order crossover with explicit cut points `i <= j`.
///
/// The child keeps `parent1[i..=j]` at the same positions. The remaining
/// positions, starting at `(j + 1) % n` and wrapping around, are filled with
/// the cities of `parent2` read from the same position onwards (also
/// wrapping), skipping cities already placed. Crossing a tour with itself
/// therefore returns it unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::order_crossover;
///
/// let child = order_crossover(&[0, 1, 2, 3, 4, 5], &[3, 5, 1, 4, 0, 2], 1, 3);
/// assert_eq!(child.as_slice(), &[4, 1, 2, 3, 0, 5]);
/// ```
///
/// # Panics
///
/// Panics if `i > j`, `j` is out of bounds, or the parents differ in length.
pub fn order_crossover(parent1: &[usize], parent2: &[usize], i: usize, j: usize) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have the same length");
    assert!(i <= j && j < n, "invalid cut points ({i}, {j}) for length {n}");

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];
    for pos in i..=j {
        child[pos] = parent1[pos];
        placed[parent1[pos]] = true;
    }

    let start = (j + 1) % n;
    let mut pos = start;
    for offset in 0..n {
        let city = parent2[(start + offset) % n];
        if placed[city] {
            continue;
        }
        child[pos] = city;
        placed[city] = true;
        pos = (pos + 1) % n;
    }

    Tour::new(child)
}

/// Order crossover with uniformly random cut points.
///
/// Cut points are drawn independently and sorted, so `i == j` is possible.
/// Empty parents yield an empty child.
pub fn random_order_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.len();
    if n == 0 {
        return Tour::identity(0);
    }
    let (i, j) = random_cut(n, rng);
    order_crossover(parent1.as_slice(), parent2.as_slice(), i, j)
}

/// Reverses a random segment `i..=j` of `tour`.
pub fn reverse_mutation<R: Rng>(tour: &mut Tour, rng: &mut R) {
    invert_mutation(tour.as_mut_slice(), rng);
}

/// Picks a parent index from a population ranked best-first.
///
/// With a ranked population the fittest of a tournament is simply the
/// smallest drawn rank.
///
/// # Panics
///
/// Panics if `ranked_len` is zero.
pub fn select_parent<R: Rng>(ranked_len: usize, selection: Selection, rng: &mut R) -> usize {
    assert!(ranked_len > 0, "cannot select from an empty population");
    match selection {
        Selection::BestHalf => {
            let pool = (ranked_len / 2).max(2).min(ranked_len);
            rng.random_range(0..pool as u64) as usize
        }
        Selection::Tournament { size } => (0..size.max(1))
            .map(|_| rng.random_range(0..ranked_len as u64) as usize)
            .min()
            .unwrap_or(0),
    }
}

/// Picks two distinct parent indices when the population allows it.
pub(crate) fn select_parents<R: Rng>(
    ranked_len: usize,
    selection: Selection,
    rng: &mut R,
) -> (usize, usize) {
    if let Selection::BestHalf = selection {
        let pool = (ranked_len / 2).max(2).min(ranked_len);
        if pool >= 2 {
            let picked = rand::seq::index::sample(rng, pool, 2);
            return (picked.index(0), picked.index(1));
        }
    }
    (
        select_parent(ranked_len, selection, rng),
        select_parent(ranked_len, selection, rng),
    )
}

fn random_cut<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n as u64) as usize;
    let b = rng.random_range(0..n as u64) as usize;
    (a.min(b), a.max(b))
}
