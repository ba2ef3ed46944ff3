//! Uniformly random tour.

use rand::Rng;

use crate::models::Tour;

/// Constructs a uniformly random tour over `n` cities.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::constructive::random_tour;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let tour = random_tour(10, &mut rng);
/// assert!(tour.is_permutation_of(10));
/// ```
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    Tour::random(n, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = u_numflow::random::create_rng(42);
        for n in [0, 1, 2, 17] {
            assert!(random_tour(n, &mut rng).is_permutation_of(n));
        }
    }

    #[test]
    fn test_random_tour_varies() {
        let mut rng = u_numflow::random::create_rng(42);
        let first = random_tour(30, &mut rng);
        let differs = (0..10).any(|_| random_tour(30, &mut rng) != first);
        assert!(differs);
    }
}
