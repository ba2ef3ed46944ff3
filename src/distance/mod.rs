//! Distance evaluation.
//!
//! Provides a lazily memoized distance oracle with a selectable metric.

mod oracle;

pub use oracle::{CacheStats, DistanceOracle, Metric};
