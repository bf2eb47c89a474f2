//! The contract between the generic GA engine and a concrete problem.
//!
//! The engine knows nothing about what a genome means. Everything
//! problem-specific (how to score a genome, when a score is good enough to
//! stop, and what "mutating" a gene produces) is supplied through
//! [`GaProblem`].

use super::individual::Individual;

/// Defines a bit-string optimization problem.
///
/// Fitness is **maximized**: higher values are better. The roulette-wheel
/// selection used by the engine weights individuals by their raw fitness, so
/// [`evaluate`](GaProblem::evaluate) must return a finite, non-negative value.
///
/// # Implementing
///
/// ```
/// use u_genalg::ga::GaProblem;
///
/// /// Rewards genomes that alternate 0/1.
/// struct Alternating;
///
/// impl GaProblem for Alternating {
///     fn evaluate(&self, genome: &[bool]) -> f64 {
///         let hits = genome.windows(2).filter(|w| w[0] != w[1]).count();
///         hits as f64 / genome.len().saturating_sub(1).max(1) as f64
///     }
///
///     fn is_solution(&self, fitness: f64) -> bool {
///         fitness >= 1.0
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the engine may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// Scores a genome. Higher is better.
    ///
    /// Must be pure: the engine may call it in any order, and in parallel.
    fn evaluate(&self, genome: &[bool]) -> f64;

    /// Returns `true` if `fitness` is good enough to stop the search.
    ///
    /// The default never terminates; runs then end on the generation limit
    /// or on cancellation.
    fn is_solution(&self, _fitness: f64) -> bool {
        false
    }

    /// Returns the value a gene takes when it is selected for mutation.
    ///
    /// The default flips the bit.
    fn mutate_gene(&self, gene: bool) -> bool {
        !gene
    }

    /// Called by the runner once per generation, before breeding, with the
    /// fittest individual of the current population.
    ///
    /// Useful for progress reporting. The default is a no-op.
    fn on_generation(&self, _generation: usize, _fittest: &Individual) {}
}

impl<P: GaProblem + ?Sized> GaProblem for &P {
    fn evaluate(&self, genome: &[bool]) -> f64 {
        (**self).evaluate(genome)
    }

    fn is_solution(&self, fitness: f64) -> bool {
        (**self).is_solution(fitness)
    }

    fn mutate_gene(&self, gene: bool) -> bool {
        (**self).mutate_gene(gene)
    }

    fn on_generation(&self, generation: usize, fittest: &Individual) {
        (**self).on_generation(generation, fittest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountZeros;

    impl GaProblem for CountZeros {
        fn evaluate(&self, genome: &[bool]) -> f64 {
            genome.iter().filter(|&&g| !g).count() as f64
        }
    }

    #[test]
    fn test_default_hooks() {
        let problem = CountZeros;
        assert!(!problem.is_solution(f64::MAX));
        assert!(problem.mutate_gene(false));
        assert!(!problem.mutate_gene(true));
    }

    #[test]
    fn test_reference_forwards() {
        let problem = CountZeros;
        let by_ref: &dyn GaProblem = &problem;
        assert_eq!((&by_ref).evaluate(&[false, true, false]), 2.0);
    }
}
