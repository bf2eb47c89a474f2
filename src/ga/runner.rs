//! GA generational loop execution.
//!
//! [`GaRunner`] drives the complete evolutionary process:
//! initialization → evaluation → termination check → crossover → mutation →
//! evaluation → repeat.

use super::config::GaConfig;
use super::engine::GeneticAlgorithm;
use super::individual::Individual;
use super::types::GaProblem;
use crate::error::Result;
use crate::random::rng_from_seed;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a GA run.
///
/// Contains the best individual found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The fittest individual seen during the entire run.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations evaluated, counting the initial population as
    /// generation 1.
    pub generations: usize,

    /// Whether the problem reported a solution.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness so far, one entry per generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_genalg::ga::{GaConfig, GaRunner};
/// use u_genalg::problems::AllOnes;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// let result = GaRunner::run(&AllOnes, &config, 20).unwrap();
/// assert!(result.solved);
/// assert_eq!(result.best.to_string(), "1".repeat(20));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA until the problem is solved or `max_generations` is reached.
    pub fn run<P: GaProblem + ?Sized>(
        problem: &P,
        config: &GaConfig,
        genome_length: usize,
    ) -> Result<GaResult> {
        Self::run_with_cancel(problem, config, genome_length, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before breeding the next generation and return the best
    /// solution found so far.
    pub fn run_with_cancel<P: GaProblem + ?Sized>(
        problem: &P,
        config: &GaConfig,
        genome_length: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let ga = GeneticAlgorithm::new(problem, config.clone())?;
        let mut rng = rng_from_seed(config.seed);

        let mut population = ga.init_population(genome_length, &mut rng)?;
        ga.eval_population(&mut population);

        let mut best = population.fittest(0).clone();
        let mut fitness_history = vec![best.fitness()];
        let mut generation = 1;
        let mut solved = false;
        let mut cancelled = false;

        loop {
            if ga.is_termination_condition_met(&population) {
                solved = true;
                break;
            }
            if config.max_generations.is_some_and(|max| generation >= max) {
                break;
            }
            if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            problem.on_generation(generation, population.fittest(0));
            debug!(
                generation,
                best = population.fittest(0).fitness(),
                aggregate = population.fitness(),
                "generation evaluated"
            );

            let offspring = ga.crossover_population(&population, &mut rng);
            population = ga.mutate_population(offspring, &mut rng);
            ga.eval_population(&mut population);
            generation += 1;

            let gen_best = population.fittest(0);
            if gen_best.fitness() > best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());
        }

        // is_solution need not be monotone in fitness.
        if solved && !ga.problem().is_solution(best.fitness()) {
            if let Some(solution) = population
                .individuals()
                .iter()
                .find(|ind| ga.problem().is_solution(ind.fitness()))
            {
                best = solution.clone();
            }
        }

        info!(
            generations = generation,
            solved,
            cancelled,
            best_fitness = best.fitness(),
            "run finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: generation,
            solved,
            cancelled,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
