//! Tour type: a cyclic visiting order over city indices.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered permutation of city indices `0..n`.
///
/// The edge from the last city back to the first is implicit. A tour owns its
/// sequence; operators that need a modified copy of a tour they only borrow
/// clone it first.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let mut tour = Tour::identity(5);
/// tour.reverse_segment(1, 3);
/// assert_eq!(tour.as_slice(), &[0, 3, 2, 1, 4]);
/// assert!(tour.is_permutation_of(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Wraps an existing visiting order.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (0..n).collect();

        // Fisher-Yates shuffle
        for i in (1..perm.len()).rev() {
            let j = rng.random_range(0..=i as u64) as usize;
            perm.swap(i, j);
        }

        Self::new(perm)
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.cities
    }

    /// Mutable view of the visiting order, for in-place permutation operators.
    pub fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.cities
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_inner(self) -> Vec<usize> {
        self.cities
    }

    /// Reverses the inclusive position range `i..=j` in place.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j >= len()`.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        self.cities[i..=j].reverse();
    }

    /// Returns true if the tour contains every index in `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.cities.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }

    /// Returns the same cycle rotated so that it starts at `city`.
    ///
    /// Returns an unchanged copy if `city` is not in the tour.
    pub fn rotated_to_start(&self, city: usize) -> Tour {
        let mut cities = self.cities.clone();
        if let Some(pos) = cities.iter().position(|&c| c == city) {
            cities.rotate_left(pos);
        }
        Tour::new(cities)
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.cities
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Self::new(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_identity() {
        let tour = Tour::identity(4);
        assert_eq!(tour.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(tour.len(), 4);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_empty() {
        let tour = Tour::identity(0);
        assert!(tour.is_empty());
        assert!(tour.is_permutation_of(0));
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [1, 2, 5, 50] {
            let tour = Tour::random(n, &mut rng);
            assert!(tour.is_permutation_of(n));
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Tour::random(20, &mut StdRng::seed_from_u64(42));
        let b = Tour::random(20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_reverse_segment() {
        let mut tour = Tour::identity(6);
        tour.reverse_segment(0, 5);
        assert_eq!(tour.as_slice(), &[5, 4, 3, 2, 1, 0]);
        tour.reverse_segment(2, 2);
        assert_eq!(tour.as_slice(), &[5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_as_mut_slice_edits_in_place() {
        let mut tour = Tour::identity(4);
        tour.as_mut_slice().swap(0, 3);
        assert_eq!(tour.as_slice(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_is_permutation_rejects_duplicates_and_gaps() {
        assert!(!Tour::new(vec![0, 1, 1]).is_permutation_of(3));
        assert!(!Tour::new(vec![0, 1, 3]).is_permutation_of(3));
        assert!(!Tour::new(vec![0, 1]).is_permutation_of(3));
        assert!(Tour::new(vec![2, 0, 1]).is_permutation_of(3));
    }

    #[test]
    fn test_rotated_to_start() {
        let tour = Tour::new(vec![3, 1, 0, 2]);
        assert_eq!(tour.rotated_to_start(0).as_slice(), &[0, 2, 3, 1]);
        assert_eq!(tour.rotated_to_start(9), tour);
    }

    #[test]
    fn test_serde_transparent() {
        let tour = Tour::new(vec![2, 0, 1]);
        let json = serde_json::to_string(&tour).expect("serialize");
        assert_eq!(json, "[2,0,1]");
        let back: Tour = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tour);
    }
}
