//! Bit-string candidate solutions.

use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Fitness carried by an individual or population that has not been
/// evaluated yet.
///
/// Any negative fitness is treated as unevaluated; problems only produce
/// non-negative scores.
pub const UNEVALUATED: f64 = -1.0;

/// A candidate solution: a fixed-length bit genome and its cached fitness.
///
/// Writing a gene through [`set_gene`](Individual::set_gene) resets the
/// cached fitness to [`UNEVALUATED`], so a stale score is never mistaken for
/// a current one.
///
/// ```
/// use u_genalg::ga::Individual;
///
/// let mut ind: Individual = "1010".parse().unwrap();
/// assert_eq!(ind.genome_length(), 4);
/// assert!(ind.gene(0));
///
/// ind.set_fitness(0.5);
/// ind.set_gene(1, true);
/// assert!(!ind.is_evaluated());
/// assert_eq!(ind.to_string(), "1110");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genome: Vec<bool>,
    fitness: f64,
}

impl Individual {
    /// Wraps a caller-supplied genome. Fitness starts unevaluated.
    pub fn new(genome: Vec<bool>) -> Self {
        Self {
            genome,
            fitness: UNEVALUATED,
        }
    }

    /// Creates an individual whose genes are independent fair coin flips.
    pub fn random<R: Rng>(genome_length: usize, rng: &mut R) -> Self {
        let genome = (0..genome_length).map(|_| rng.random_bool(0.5)).collect();
        Self::new(genome)
    }

    pub fn genome(&self) -> &[bool] {
        &self.genome
    }

    pub fn genome_length(&self) -> usize {
        self.genome.len()
    }

    /// Returns the gene at `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= genome_length()`.
    pub fn gene(&self, offset: usize) -> bool {
        self.genome[offset]
    }

    /// Writes the gene at `offset` and invalidates the cached fitness.
    ///
    /// # Panics
    /// Panics if `offset >= genome_length()`.
    pub fn set_gene(&mut self, offset: usize, gene: bool) {
        self.genome[offset] = gene;
        self.fitness = UNEVALUATED;
    }

    /// Returns the cached fitness, or [`UNEVALUATED`].
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness >= 0.0
    }

    /// Number of genes set to 1.
    pub fn count_ones(&self) -> usize {
        self.genome.iter().filter(|&&g| g).count()
    }
}

impl From<Vec<bool>> for Individual {
    fn from(genome: Vec<bool>) -> Self {
        Self::new(genome)
    }
}

/// Renders the genome as a string of `0`/`1` digits.
impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genome {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Individual {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let genome = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidGene(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(genome))
    }
}
