//! Tour chromosome for the genetic engine.

use u_metaheur::ga::Individual;

use crate::models::Tour;

/// A tour together with its cached fitness (total length).
///
/// Lower fitness = better tour. A fresh chromosome has infinite fitness until
/// the engine evaluates it.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Chromosome;
/// use u_tsp::models::Tour;
/// use u_metaheur::ga::Individual;
///
/// let c = Chromosome::new(Tour::new(vec![2, 0, 1]));
/// assert_eq!(c.tour().as_slice(), &[2, 0, 1]);
/// assert_eq!(c.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct Chromosome {
    tour: Tour,
    fitness: f64,
}

impl Chromosome {
    /// Creates an unevaluated chromosome.
    pub fn new(tour: Tour) -> Self {
        Self {
            tour,
            fitness: f64::INFINITY,
        }
    }

    /// The encoded tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Mutable access to the tour. Clears the cached fitness.
    pub fn tour_mut(&mut self) -> &mut Tour {
        self.fitness = f64::INFINITY;
        &mut self.tour
    }

    /// Returns true once a finite fitness has been assigned.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_finite()
    }

    /// Consumes the chromosome, returning its tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

impl Individual for Chromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
