//! Parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::individual::Individual;
use rand::Rng;

/// Fitness-proportionate (roulette wheel) selection.
///
/// Draws a position uniformly in `[0, total)` and walks `members` in order,
/// accumulating fitness; returns the index of the first member whose
/// cumulative fitness reaches the draw. Fitness is maximized, so weights are
/// the raw fitness values.
///
/// `total` is the precomputed sum of member fitness. When it is not
/// positive (every member scored zero) no draw is made and the last index is
/// returned. The last index is also the fallback if floating-point
/// accumulation stops short of the draw.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `members` is empty.
pub fn roulette<R: Rng>(members: &[Individual], total: f64, rng: &mut R) -> usize {
    assert!(!members.is_empty(), "cannot select from empty population");

    let last = members.len() - 1;
    if total <= 0.0 || !total.is_finite() {
        return last;
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, member) in members.iter().enumerate() {
        cumulative += member.fitness();
        if cumulative >= threshold {
            return i;
        }
    }

    last // floating-point fallback
}
