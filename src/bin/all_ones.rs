//! Evolves a bit string of all ones and prints the best solution of every
//! generation.
//!
//! ```text
//! cargo run --features cli --bin all-ones -- --seed 42
//! all-ones --genome-length 50 --population-size 100 --seed 42
//! RUST_LOG=u_genalg=debug all-ones
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u_genalg::ga::{GaConfig, GaProblem, GaRunner, Individual};
use u_genalg::problems::AllOnes;

#[derive(Debug, Parser)]
#[command(name = "all-ones", version, about = "Genetic algorithm for the all-ones problem")]
struct Args {
    /// Number of genes per individual.
    #[arg(short = 'l', long, default_value_t = 50)]
    genome_length: usize,

    /// Number of individuals per generation.
    #[arg(short, long, default_value_t = 100)]
    population_size: usize,

    /// Per-gene mutation probability.
    #[arg(short, long, default_value_t = 0.001)]
    mutation_rate: f64,

    /// Probability of replacing a non-elite individual with offspring.
    #[arg(short, long, default_value_t = 0.95)]
    crossover_rate: f64,

    /// Number of fittest individuals carried over untouched.
    #[arg(short, long, default_value_t = 2)]
    elitism_count: usize,

    /// Stop after this many generations even if unsolved.
    #[arg(long)]
    max_generations: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate individuals in parallel (needs the `parallel` feature).
    #[arg(long)]
    parallel: bool,

    /// Only print the final result.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            elitism_count: self.elitism_count,
            max_generations: self.max_generations,
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

/// Prints the fittest individual of each generation.
struct Progress {
    quiet: bool,
}

impl GaProblem for Progress {
    fn evaluate(&self, genome: &[bool]) -> f64 {
        AllOnes.evaluate(genome)
    }

    fn is_solution(&self, fitness: f64) -> bool {
        AllOnes.is_solution(fitness)
    }

    fn on_generation(&self, _generation: usize, fittest: &Individual) {
        if !self.quiet {
            println!("Best solution: {fittest}");
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let problem = Progress { quiet: args.quiet };

    let result = match GaRunner::run(&problem, &args.config(), args.genome_length) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    if result.solved {
        println!("Found solution in {} generations", result.generations);
    } else {
        println!("No solution after {} generations", result.generations);
    }
    println!("Best solution: {}", result.best);

    if result.solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
