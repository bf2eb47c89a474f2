//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{GaError, Result};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, elitism, termination and
/// parallelism.
///
/// # Defaults
///
/// ```
/// use u_genalg::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.elitism_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genalg::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.01)
///     .with_crossover_rate(0.9)
///     .with_elitism_count(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Per-gene probability of mutation (0.0–1.0).
    ///
    /// Each gene of each non-elite individual is mutated independently.
    /// Typical values are small: around `1 / genome_length`.
    pub mutation_rate: f64,

    /// Probability that a non-elite individual is replaced by offspring (0.0–1.0).
    ///
    /// When crossover is not applied, the individual passes through unchanged.
    pub crossover_rate: f64,

    /// Number of fittest individuals carried over untouched.
    ///
    /// Elites are never crossed over or mutated. Must be less than
    /// `population_size`.
    pub elitism_count: usize,

    /// Generation cap. `None` runs until the problem reports a solution.
    pub max_generations: Option<usize>,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.001,
            crossover_rate: 0.95,
            elitism_count: 2,
            max_generations: None,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the number of elites.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rates are not clamped by the builder; an out-of-range rate is
    /// reported here instead.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        if self.elitism_count >= self.population_size {
            return Err(GaError::ElitismTooLarge {
                elitism_count: self.elitism_count,
                population_size: self.population_size,
            });
        }
        if self.max_generations == Some(0) {
            return Err(GaError::ZeroGenerationLimit);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::RateOutOfRange { name, value })
    }
}
