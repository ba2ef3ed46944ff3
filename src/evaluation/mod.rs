//! Tour evaluation: cyclic length is the only fitness signal.

mod tour_length;

pub use tour_length::{total_distance, TourEvaluator};
