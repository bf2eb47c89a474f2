//! Genetic Algorithm engine.
//!
//! A generational GA over fixed-length bit genomes. Users define their
//! problem by implementing [`GaProblem`], which scores genomes and decides
//! when the search is done; the engine supplies roulette-wheel selection,
//! uniform crossover, per-gene mutation and elitism.
//!
//! # Key Types
//!
//! - [`Individual`]: a bit genome with its cached fitness
//! - [`Population`]: one generation, with ranked access
//! - [`GaConfig`]: population size, operator rates, elitism, limits
//! - [`GeneticAlgorithm`]: the generational step operations
//! - [`GaRunner`]: drives the loop to termination, returning a [`GaResult`]
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod engine;
mod individual;
mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use engine::{uniform_crossover, GeneticAlgorithm};
pub use individual::{Individual, UNEVALUATED};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use types::GaProblem;
