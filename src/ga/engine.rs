//! Generational genetic search over tours.
//!
//! # Algorithm
//!
//! 1. Start from `population_size` random tours.
//! 2. Each generation: rank by total length, copy the `elite_count` best
//!    unchanged, then fill the remaining slots with order-crossover children
//!    of selected parents, each mutated with probability `mutation_rate`.
//! 3. After `generations` rounds (or when the time limit passes), return the
//!    shortest tour of the final population.
//!
//! Parents are only borrowed; every child is a freshly built tour, so the
//! ranked population is never modified while it is being sampled.

use rand::Rng;
use u_metaheur::ga::Individual;

use crate::deadline::{is_expired, Deadline};
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::evaluation::total_distance;
use crate::local_search::two_opt;
use crate::models::Tour;

use super::chromosome::Chromosome;
use super::config::{GaConfig, Mutation};
use super::operators::{random_order_crossover, reverse_mutation, select_parents};

/// Outcome of a [`GeneticEngine`] run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Shortest tour in the final population.
    pub best: Tour,
    /// Length of `best`.
    pub best_distance: f64,
    /// Generations actually completed.
    pub generations_run: usize,
    /// Best length at each ranking step, the final population last.
    pub history: Vec<f64>,
}

/// Genetic search engine with a validated configuration.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_tsp::models::City;
/// use u_tsp::distance::{DistanceOracle, Metric};
/// use u_tsp::ga::{GaConfig, GeneticEngine};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let mut oracle = DistanceOracle::new(&cities, Metric::Euclidean);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let engine = GeneticEngine::new(GaConfig::default().with_generations(30)).unwrap();
/// let result = engine.run(&mut oracle, &mut rng);
/// assert!((result.best_distance - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticEngine {
    config: GaConfig,
}

impl GeneticEngine {
    /// Creates an engine, rejecting invalid configurations.
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Evolves a population over all cities of `oracle`.
    ///
    /// The 2-opt mutation and the ranking both sum edge lengths, so the
    /// oracle should use the Euclidean metric.
    pub fn run<R: Rng>(&self, oracle: &mut DistanceOracle<'_>, rng: &mut R) -> GaResult {
        let config = &self.config;
        let n = oracle.num_cities();
        // validated in `new`
        let deadline = Deadline::from_secs(config.time_limit_secs).unwrap_or(None);

        log::debug!(
            "ga: start n={n} population={} generations={} elites={} mutation={:?}@{}",
            config.population_size,
            config.generations,
            config.elite_count,
            config.mutation,
            config.mutation_rate
        );

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::new(Tour::random(n, rng)))
            .collect();
        let mut history = Vec::with_capacity(config.generations + 1);
        let mut generations_run = 0;

        for generation in 0..config.generations {
            if is_expired(deadline.as_ref()) {
                log::debug!("ga: time limit reached at generation {generation}");
                break;
            }

            rank(&mut population, oracle);
            history.push(population[0].fitness());
            log::trace!("ga: generation={generation} best={:.4}", population[0].fitness());

            population = self.next_generation(&population, oracle, rng);
            generations_run += 1;
        }

        rank(&mut population, oracle);
        history.push(population[0].fitness());

        let best = population.swap_remove(0);
        let best_distance = best.fitness();
        log::debug!("ga: done generations={generations_run} best={best_distance:.4}");

        GaResult {
            best: best.into_tour(),
            best_distance,
            generations_run,
            history,
        }
    }

    /// Builds the next generation from a ranked population.
    fn next_generation<R: Rng>(
        &self,
        ranked: &[Chromosome],
        oracle: &mut DistanceOracle<'_>,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let config = &self.config;
        let mut next = Vec::with_capacity(config.population_size);
        next.extend(ranked.iter().take(config.elite_count).cloned());

        while next.len() < config.population_size {
            let (a, b) = select_parents(ranked.len(), config.selection, rng);
            let child = random_order_crossover(ranked[a].tour(), ranked[b].tour(), rng);
            let mut child = Chromosome::new(child);
            if rng.random::<f64>() < config.mutation_rate {
                self.mutate(&mut child, oracle, rng);
            }
            next.push(child);
        }

        next
    }

    fn mutate<R: Rng>(&self, child: &mut Chromosome, oracle: &mut DistanceOracle<'_>, rng: &mut R) {
        match self.config.mutation {
            Mutation::Reverse => reverse_mutation(child.tour_mut(), rng),
            Mutation::TwoOpt => {
                two_opt(child.tour_mut(), oracle);
            }
        }
    }
}

/// Evaluates unevaluated members and sorts best-first.
fn rank(population: &mut [Chromosome], oracle: &mut DistanceOracle<'_>) {
    for c in population.iter_mut().filter(|c| !c.is_evaluated()) {
        let d = total_distance(c.tour().as_slice(), oracle);
        c.set_fitness(d);
    }
    population.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
}
