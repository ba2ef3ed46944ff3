//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`random_tour`] — Uniformly random permutation, O(n)

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor;
pub use random::random_tour;
