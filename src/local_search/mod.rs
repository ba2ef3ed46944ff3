//! Local search operators over a closed tour.
//!
//! - [`two_opt`] — deterministic 2-opt to a local optimum
//! - [`three_opt`] — budgeted stochastic 3-opt

mod three_opt;
mod two_opt;

pub use three_opt::{three_opt, ThreeOptConfig};
pub use two_opt::two_opt;
