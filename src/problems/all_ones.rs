//! The all-ones (OneMax) problem.

use crate::ga::GaProblem;

/// Maximize the number of 1-bits in the genome.
///
/// Fitness is the fraction of genes equal to 1, in `[0.0, 1.0]`. A genome of
/// all ones scores exactly `1.0` and is a solution.
///
/// ```
/// use u_genalg::ga::GaProblem;
/// use u_genalg::problems::AllOnes;
///
/// assert_eq!(AllOnes.evaluate(&[true, true, false, false]), 0.5);
/// assert!(AllOnes.is_solution(AllOnes.evaluate(&[true; 8])));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AllOnes;

impl GaProblem for AllOnes {
    fn evaluate(&self, genome: &[bool]) -> f64 {
        if genome.is_empty() {
            return 0.0;
        }
        let ones = genome.iter().filter(|&&g| g).count();
        ones as f64 / genome.len() as f64
    }

    #[allow(clippy::float_cmp)]
    fn is_solution(&self, fitness: f64) -> bool {
        fitness == 1.0
    }
}
