//! A generation of individuals.
//!
//! A [`Population`] owns its members, remembers their aggregate fitness once
//! evaluated, and supports ranked access. Ranking is an explicit step
//! ([`rank`](Population::rank)) performed once per generation; afterwards
//! [`fittest`](Population::fittest) is plain indexing.

use super::individual::{Individual, UNEVALUATED};
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered, fixed-size collection of individuals sharing one genome length.
///
/// ```
/// use u_genalg::ga::{Individual, Population};
///
/// let mut pop = Population::from_individuals(vec![
///     Individual::new(vec![true, false]),
///     Individual::new(vec![true, true]),
/// ]);
/// pop.set_individual(0, Individual::new(vec![false, false]));
/// assert_eq!(pop.size(), 2);
/// assert_eq!(pop.individual(0).to_string(), "00");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    members: Vec<Individual>,
    fitness: f64,
    ranked: bool,
}

impl Population {
    /// Freezes a collected set of individuals into a population.
    ///
    /// This is how each generation is staged: the engine collects exactly
    /// one individual per slot and hands the vector over. The size is fixed
    /// from here on.
    ///
    /// # Panics
    /// Panics if `members` is empty or the genomes differ in length.
    pub fn from_individuals(members: Vec<Individual>) -> Self {
        assert!(!members.is_empty(), "population must not be empty");
        let genome_length = members[0].genome_length();
        assert!(
            members.iter().all(|m| m.genome_length() == genome_length),
            "all individuals must share one genome length"
        );
        Self {
            members,
            fitness: UNEVALUATED,
            ranked: false,
        }
    }

    /// Creates `size` random individuals of `genome_length` genes each.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn random<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| Individual::random(genome_length, rng))
            .collect();
        Self::from_individuals(members)
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn genome_length(&self) -> usize {
        self.members[0].genome_length()
    }

    /// Members in storage order (ranked order after [`rank`](Self::rank)).
    pub fn individuals(&self) -> &[Individual] {
        &self.members
    }

    /// Returns the member at `offset` in storage order.
    ///
    /// # Panics
    /// Panics if `offset >= size()`.
    pub fn individual(&self, offset: usize) -> &Individual {
        &self.members[offset]
    }

    /// Replaces the member at `offset`, returning the previous one.
    ///
    /// Clears the ranking and the aggregate fitness.
    ///
    /// # Panics
    /// Panics if `offset >= size()` or the genome length differs.
    pub fn set_individual(&mut self, offset: usize, individual: Individual) -> Individual {
        assert_eq!(
            individual.genome_length(),
            self.genome_length(),
            "genome length mismatch"
        );
        let previous = std::mem::replace(&mut self.members[offset], individual);
        self.ranked = false;
        self.fitness = UNEVALUATED;
        previous
    }

    /// Mutable member access for evaluation. Clears the ranking.
    pub(crate) fn members_mut(&mut self) -> &mut [Individual] {
        self.ranked = false;
        &mut self.members
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.members
    }

    /// Sorts members by descending fitness.
    ///
    /// Uses `f64::total_cmp`, so the order is total even with NaN. The sort
    /// is stable: equal fitness keeps its previous relative order.
    pub fn rank(&mut self) {
        self.members
            .sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
        self.ranked = true;
    }

    pub fn is_ranked(&self) -> bool {
        self.ranked
    }

    /// Returns the individual at `rank` (0 = fittest).
    ///
    /// # Panics
    /// Panics if the population has not been ranked since its last change,
    /// or if `rank >= size()`.
    pub fn fittest(&self, rank: usize) -> &Individual {
        assert!(
            self.ranked,
            "population must be ranked before ranked access"
        );
        &self.members[rank]
    }

    /// Sum of member fitness, or [`UNEVALUATED`].
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness >= 0.0
    }

    /// Mean member fitness, if evaluated.
    pub fn mean_fitness(&self) -> Option<f64> {
        self.is_evaluated()
            .then(|| self.fitness / self.members.len() as f64)
    }

    /// Applies a uniformly random permutation (Fisher–Yates) to the members.
    ///
    /// Clears the ranking.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.members.shuffle(rng);
        self.ranked = false;
    }
}
