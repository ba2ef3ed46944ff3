//! Memoized pairwise distance lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::City;

/// Distance function used by a [`DistanceOracle`].
///
/// `Squared` is only meaningful when single distances are compared against
/// each other (e.g. picking a nearest neighbor). Any operator that sums
/// several edge lengths and compares the sums needs `Euclidean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Squared,
    Euclidean,
}

impl Metric {
    /// Measures the distance between two cities under this metric.
    pub fn measure(self, a: &City, b: &City) -> f64 {
        match self {
            Metric::Squared => a.squared_distance_to(b),
            Metric::Euclidean => a.distance_to(b),
        }
    }
}

/// Cache hit/miss counters of a [`DistanceOracle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Pairwise distance oracle over a borrowed city slice.
///
/// Distances are computed on first request and cached under the sorted index
/// pair, so `distance(i, j)` and `distance(j, i)` return the same bits. The
/// cache lives exactly as long as the oracle; solvers create one per run.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::{DistanceOracle, Metric};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
/// assert!((oracle.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(oracle.distance(1, 0), oracle.distance(0, 1));
/// assert_eq!(oracle.stats().misses, 1);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceOracle<'a> {
    cities: &'a [City],
    metric: Metric,
    cache: HashMap<(usize, usize), f64>,
    stats: CacheStats,
}

impl<'a> DistanceOracle<'a> {
    /// Creates an oracle with an empty cache.
    pub fn new(cities: &'a [City], metric: Metric) -> Self {
        Self {
            cities,
            metric,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Distance between cities `i` and `j`. Order of arguments is irrelevant.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&mut self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let key = if i < j { (i, j) } else { (j, i) };
        if let Some(&d) = self.cache.get(&key) {
            self.stats.hits += 1;
            return d;
        }
        self.stats.misses += 1;
        let d = self.metric.measure(&self.cities[key.0], &self.cities[key.1]);
        self.cache.insert(key, d);
        d
    }

    /// The metric this oracle was built with.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The cities this oracle measures.
    pub fn cities(&self) -> &'a [City] {
        self.cities
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Number of cached pairs.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Hit/miss counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Returns the candidate closest to `from`, or `None` if there are none.
    ///
    /// Ties go to the candidate that comes first.
    pub fn nearest(&mut self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.distance(from, c);
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}
