//! # u-tsp
//!
//! Heuristic solvers for the Euclidean traveling salesman problem: given
//! points on the plane, find a short closed tour through all of them.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Tour)
//! - [`distance`] — Memoized distance oracle (squared or true Euclidean)
//! - [`evaluation`] — Cyclic tour length and ranking
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, random)
//! - [`local_search`] — Local search operators (2-opt, 3-opt)
//! - [`ga`] — Genetic algorithm with order crossover and elitism
//! - [`solver`] — Interchangeable strategies behind [`TourSolver`](solver::TourSolver)
//! - [`io`] — Delimited text input and output
//! - [`logging`] — Logger setup for the binary

pub mod constructive;
mod deadline;
pub mod distance;
mod error;
pub mod evaluation;
pub mod ga;
pub mod io;
pub mod local_search;
pub mod logging;
pub mod models;
pub mod solver;

pub use deadline::Deadline;
pub use error::{Error, Result};
