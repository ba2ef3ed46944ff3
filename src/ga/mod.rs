//! Genetic algorithm over tour permutations.
//!
//! - [`Chromosome`] — Tour with cached fitness, an [`Individual`](u_metaheur::ga::Individual)
//! - [`GaConfig`] — Population, elitism, selection and mutation settings
//! - [`order_crossover`], [`reverse_mutation`], [`select_parent`] — Operators
//! - [`GeneticEngine`] — Generational loop with elitism

mod chromosome;
mod config;
mod engine;
mod operators;

pub use chromosome::Chromosome;
pub use config::{GaConfig, Mutation, Selection};
pub use engine::{GaResult, GeneticEngine};
pub use operators::{order_crossover, random_order_crossover, reverse_mutation, select_parent};
