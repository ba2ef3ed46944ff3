//! Domain model types for the traveling salesman problem.
//!
//! Cities are immutable points addressed by their index in the input slice;
//! a tour is an owned permutation of those indices.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
