//! Genetic engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How parents are drawn from the ranked population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Selection {
    /// Uniformly from the better half of the ranking.
    BestHalf,
    /// Fittest of `size` uniform draws.
    Tournament { size: usize },
}

/// Operator applied to a child with probability `mutation_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mutation {
    /// Reverse one random segment.
    Reverse,
    /// Run 2-opt to a local optimum.
    TwoOpt,
}

/// Parameters of a [`GeneticEngine`](super::GeneticEngine) run.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{GaConfig, Mutation, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(50)
///     .with_selection(Selection::Tournament { size: 5 });
/// assert!(config.validate().is_ok());
/// assert_eq!(config.mutation, Mutation::Reverse);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    pub population_size: usize,
    pub generations: usize,
    pub elite_count: usize,
    pub mutation_rate: f64,
    pub selection: Selection,
    pub mutation: Mutation,
    /// Optional wall-clock limit in seconds, checked once per generation.
    pub time_limit_secs: Option<f64>,
}

impl Default for GaConfig {
    /// Large population with cheap segment-reversal mutation.
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            elite_count: 10,
            mutation_rate: 0.1,
            selection: Selection::BestHalf,
            mutation: Mutation::Reverse,
            time_limit_secs: None,
        }
    }
}

impl GaConfig {
    /// Small population where every child is driven to a 2-opt optimum.
    pub fn memetic() -> Self {
        Self {
            population_size: 10,
            generations: 100,
            elite_count: 2,
            mutation_rate: 1.0,
            selection: Selection::Tournament { size: 5 },
            mutation: Mutation::TwoOpt,
            time_limit_secs: None,
        }
    }

    /// Sets the number of tours per generation.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the generation limit.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets how many top-ranked tours survive unchanged.
    pub fn with_elite_count(mut self, elite_count: usize) -> Self {
        self.elite_count = elite_count;
        self
    }

    /// Sets the probability that a child is mutated.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the parent selection scheme.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets a wall-clock limit for one run.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid_config(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.elite_count > self.population_size {
            return Err(Error::invalid_config(format!(
                "elite_count ({}) exceeds population_size ({})",
                self.elite_count, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid_config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let Selection::Tournament { size: 0 } = self.selection {
            return Err(Error::invalid_config("tournament size must be at least 1"));
        }
        if let Some(secs) = self.time_limit_secs {
            if !secs.is_finite() || secs < 0.0 {
                return Err(Error::invalid_config(format!(
                    "time_limit_secs must be non-negative, got {secs}"
                )));
            }
        }
        Ok(())
    }
}
