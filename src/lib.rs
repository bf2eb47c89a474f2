//! Generational genetic algorithm over bit-string genomes.
//!
//! Provides a small, problem-agnostic GA engine:
//!
//! - **Individual / Population**: fixed-length bit genomes with cached
//!   fitness, and generations with ranked access.
//! - **Engine**: roulette-wheel parent selection, uniform crossover,
//!   per-gene mutation and elitism, one generational step at a time.
//! - **Runner**: the generational loop, stopping on a solution, a
//!   generation cap, or cancellation.
//! - **Problems**: the all-ones (OneMax) problem as a ready-made
//!   [`GaProblem`](ga::GaProblem).
//!
//! # Architecture
//!
//! The engine owns no problem knowledge. Fitness, the termination
//! predicate and the gene mutation rule come from a [`ga::GaProblem`]
//! implementation; randomness comes from an explicitly passed, seedable
//! generator (see [`random`]), so a seed fully determines a run.
//!
//! # Features
//!
//! - `parallel`: evaluate individuals with rayon when
//!   [`GaConfig::parallel`](ga::GaConfig::parallel) is set.
//! - `serde`: `Serialize`/`Deserialize` for configuration, individuals,
//!   populations and results.

pub mod error;
pub mod ga;
pub mod problems;
pub mod random;

pub use error::{GaError, Result};
