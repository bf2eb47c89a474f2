//! Error types.
//!
//! Only recoverable precondition failures are reported through [`GaError`]:
//! invalid configuration and malformed input genomes. Out-of-range offsets and
//! mismatched genome lengths are programming errors and panic at the point of
//! violation.

use thiserror::Error;

/// Errors reported by configuration validation and genome parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// The population must hold at least one individual.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// A probability parameter lies outside `[0.0, 1.0]` or is not finite.
    #[error("{name} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Elites would fill the whole population.
    #[error(
        "elitism_count ({elitism_count}) must be less than population_size ({population_size})"
    )]
    ElitismTooLarge {
        elitism_count: usize,
        population_size: usize,
    },

    #[error("max_generations must be positive or None")]
    ZeroGenerationLimit,

    /// Genomes must contain at least one gene.
    #[error("genome length must be at least 1")]
    EmptyGenome,

    /// A textual genome contained something other than `0` or `1`.
    #[error("invalid gene {0:?}: expected '0' or '1'")]
    InvalidGene(char),
}

/// Result alias used throughout the crate.
pub type Result<T, E = GaError> = std::result::Result<T, E>;
