//! One generational step: evaluation, selection, crossover, mutation.
//!
//! [`GeneticAlgorithm`] owns a validated [`GaConfig`] and the problem. Each
//! operation takes the random stream explicitly, so a seeded generator makes
//! a whole run reproducible.
//!
//! # Elitism
//!
//! Positions `0..elitism_count` of a ranked population are elites. They are
//! exempt from both crossover and mutation. Crossover keeps the rank order of
//! its input, so the elites still occupy the leading positions when the
//! offspring reach [`mutate_population`](GeneticAlgorithm::mutate_population).

use super::config::GaConfig;
use super::individual::Individual;
use super::population::Population;
use super::selection::roulette;
use super::types::GaProblem;
use crate::error::{GaError, Result};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

/// The generational genetic algorithm.
///
/// # Usage
///
/// ```
/// use u_genalg::ga::{GaConfig, GeneticAlgorithm};
/// use u_genalg::problems::AllOnes;
/// use u_genalg::random::create_rng;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.02);
/// let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
/// let mut rng = create_rng(42);
///
/// let mut population = ga.init_population(16, &mut rng).unwrap();
/// ga.eval_population(&mut population);
/// while !ga.is_termination_condition_met(&population) {
///     let offspring = ga.crossover_population(&population, &mut rng);
///     population = ga.mutate_population(offspring, &mut rng);
///     ga.eval_population(&mut population);
/// }
/// assert_eq!(population.fittest(0).count_ones(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<P> {
    problem: P,
    config: GaConfig,
}

impl<P: GaProblem> GeneticAlgorithm<P> {
    /// Creates the engine after validating `config`.
    pub fn new(problem: P, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { problem, config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Creates the first generation: `population_size` random individuals.
    pub fn init_population<R: Rng>(
        &self,
        genome_length: usize,
        rng: &mut R,
    ) -> Result<Population> {
        if genome_length == 0 {
            return Err(GaError::EmptyGenome);
        }
        Ok(Population::random(self.config.population_size, genome_length, rng))
    }

    /// Scores one individual, caches the fitness on it and returns it.
    ///
    /// # Panics
    /// Panics if the problem returns a negative or non-finite fitness.
    pub fn evaluate(&self, individual: &mut Individual) -> f64 {
        let fitness = self.problem.evaluate(individual.genome());
        assert!(
            fitness.is_finite() && fitness >= 0.0,
            "fitness must be finite and non-negative, got {fitness}"
        );
        individual.set_fitness(fitness);
        fitness
    }

    /// Evaluates every member, stores the aggregate fitness, and ranks the
    /// population by descending fitness.
    ///
    /// Must run once per generation before selection or termination checks.
    #[instrument(level = "debug", skip_all, fields(size = population.size()))]
    pub fn eval_population(&self, population: &mut Population) {
        let members = population.members_mut();
        self.evaluate_members(members);
        // Summed sequentially so the aggregate is identical with or without rayon.
        let total: f64 = members.iter().map(Individual::fitness).sum();
        population.set_fitness(total);
        population.rank();
    }

    #[cfg(feature = "parallel")]
    fn evaluate_members(&self, members: &mut [Individual]) {
        if self.config.parallel {
            members.par_iter_mut().for_each(|ind| {
                self.evaluate(ind);
            });
        } else {
            members.iter_mut().for_each(|ind| {
                self.evaluate(ind);
            });
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_members(&self, members: &mut [Individual]) {
        for ind in members.iter_mut() {
            self.evaluate(ind);
        }
    }

    /// Returns `true` if any member is a solution according to the problem.
    ///
    /// # Panics
    /// Panics if the population has not been evaluated.
    pub fn is_termination_condition_met(&self, population: &Population) -> bool {
        assert!(
            population.is_evaluated(),
            "population must be evaluated before checking termination"
        );
        population
            .individuals()
            .iter()
            .any(|ind| self.problem.is_solution(ind.fitness()))
    }

    /// Roulette-wheel parent selection over the ranked population.
    ///
    /// # Panics
    /// Panics if the population has not been evaluated and ranked.
    pub fn select_parent<'a, R: Rng>(
        &self,
        population: &'a Population,
        rng: &mut R,
    ) -> &'a Individual {
        assert!(
            population.is_evaluated() && population.is_ranked(),
            "population must be evaluated and ranked before selection"
        );
        let idx = roulette(population.individuals(), population.fitness(), rng);
        population.fittest(idx)
    }

    /// Breeds the next generation.
    ///
    /// Walks the ranked population from the fittest down. Elites are copied
    /// through. Every other individual is, with probability `crossover_rate`,
    /// replaced by a uniform-crossover child of itself and a roulette-selected
    /// mate; otherwise it is copied through. The result keeps the input's
    /// rank order and is unevaluated.
    ///
    /// # Panics
    /// Panics if the population has not been evaluated and ranked, or if its
    /// size differs from `population_size`.
    #[instrument(level = "debug", skip_all, fields(size = population.size()))]
    pub fn crossover_population<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
    ) -> Population {
        self.check_size(population);
        let mut members = Vec::with_capacity(population.size());
        for rank in 0..population.size() {
            let parent1 = population.fittest(rank);
            if rank >= self.config.elitism_count && rng.random_bool(self.config.crossover_rate) {
                let parent2 = self.select_parent(population, rng);
                members.push(uniform_crossover(parent1, parent2, rng));
            } else {
                members.push(parent1.clone());
            }
        }
        Population::from_individuals(members)
    }

    /// Applies per-gene mutation to every non-elite member.
    ///
    /// Members are visited in storage order, which is rank order for both a
    /// ranked population and the output of
    /// [`crossover_population`](Self::crossover_population). Positions
    /// `< elitism_count` pass through; each gene of the others is replaced by
    /// [`GaProblem::mutate_gene`] with probability `mutation_rate`.
    ///
    /// # Panics
    /// Panics if the population size differs from `population_size`.
    #[instrument(level = "debug", skip_all, fields(size = population.size()))]
    pub fn mutate_population<R: Rng>(&self, population: Population, rng: &mut R) -> Population {
        self.check_size(&population);
        let members = population
            .into_individuals()
            .into_iter()
            .enumerate()
            .map(|(position, mut individual)| {
                if position >= self.config.elitism_count {
                    self.mutate(&mut individual, rng);
                }
                individual
            })
            .collect();
        Population::from_individuals(members)
    }

    fn check_size(&self, population: &Population) {
        assert_eq!(
            population.size(),
            self.config.population_size,
            "population size must match the configured population_size"
        );
    }

    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        for offset in 0..individual.genome_length() {
            if rng.random_bool(self.config.mutation_rate) {
                let gene = self.problem.mutate_gene(individual.gene(offset));
                individual.set_gene(offset, gene);
            }
        }
    }
}

/// Uniform crossover: each gene comes from either parent with equal
/// probability.
///
/// # Panics
/// Panics if the parents have different genome lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> Individual {
    assert_eq!(
        parent1.genome_length(),
        parent2.genome_length(),
        "parents must have equal length"
    );
    let genome = parent1
        .genome()
        .iter()
        .zip(parent2.genome())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();
    Individual::new(genome)
}
