//! Strategy selection by configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ga::GaConfig;
use crate::local_search::ThreeOptConfig;

use super::{GeneticSolver, GreedySolver, LocalSearchSolver, RandomSolver, TourSolver};

/// The available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    Random,
    Greedy,
    LocalSearch,
    Genetic,
}

impl SolverKind {
    pub const ALL: [SolverKind; 4] = [
        SolverKind::Random,
        SolverKind::Greedy,
        SolverKind::LocalSearch,
        SolverKind::Genetic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SolverKind::Random => "random",
            SolverKind::Greedy => "greedy",
            SolverKind::LocalSearch => "local-search",
            SolverKind::Genetic => "genetic",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SolverKind::Random),
            "greedy" => Ok(SolverKind::Greedy),
            "local-search" | "local_search" | "opt" | "3opt" => Ok(SolverKind::LocalSearch),
            "genetic" | "genetics" | "ga" => Ok(SolverKind::Genetic),
            other => Err(Error::invalid_config(format!(
                "unknown solver '{other}', expected one of: random, greedy, local-search, genetic"
            ))),
        }
    }
}

/// Everything needed to build one strategy.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::{SolverConfig, SolverKind};
///
/// let config: SolverConfig = serde_json::from_str(
///     r#"{"kind": "genetic", "seed": 7, "ga": {"generations": 20}}"#,
/// ).unwrap();
/// let solver = config.build().unwrap();
/// assert_eq!(solver.name(), "genetic");
/// assert_eq!(config.kind, SolverKind::Genetic);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub kind: SolverKind,
    /// Fixed seed; `None` draws a fresh one per solve call.
    pub seed: Option<u64>,
    /// Used by [`SolverKind::Genetic`].
    pub ga: GaConfig,
    /// Used by [`SolverKind::LocalSearch`].
    pub three_opt_attempts: usize,
    /// Wall-clock bound per solve call for the searching strategies.
    pub time_limit_secs: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            kind: SolverKind::Genetic,
            seed: None,
            ga: GaConfig::default(),
            three_opt_attempts: ThreeOptConfig::default().max_attempts,
            time_limit_secs: None,
        }
    }
}

impl SolverConfig {
    pub fn new(kind: SolverKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Parses a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the configured strategy.
    pub fn build(&self) -> Result<Box<dyn TourSolver>> {
        let solver: Box<dyn TourSolver> = match self.kind {
            SolverKind::Random => {
                let mut s = RandomSolver::new();
                if let Some(seed) = self.seed {
                    s = s.with_seed(seed);
                }
                Box::new(s)
            }
            SolverKind::Greedy => Box::new(GreedySolver::new()),
            SolverKind::LocalSearch => {
                let mut s = LocalSearchSolver::new().with_three_opt_attempts(self.three_opt_attempts);
                if let Some(secs) = self.time_limit_secs {
                    s = s.with_time_limit_secs(secs)?;
                }
                if let Some(seed) = self.seed {
                    s = s.with_seed(seed);
                }
                Box::new(s)
            }
            SolverKind::Genetic => {
                let mut ga = self.ga.clone();
                if self.time_limit_secs.is_some() {
                    ga.time_limit_secs = self.time_limit_secs;
                }
                let mut s = GeneticSolver::new(ga)?;
                if let Some(seed) = self.seed {
                    s = s.with_seed(seed);
                }
                Box::new(s)
            }
        };
        Ok(solver)
    }
}
