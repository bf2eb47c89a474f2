//! Seedable random number generation.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`
//! handle. These helpers produce the single stream a run threads through
//! initialization, selection, crossover and mutation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// Two generators created from the same seed yield identical streams.
///
/// ```
/// use rand::Rng;
/// use u_genalg::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the thread-local entropy source.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}

/// Creates a seeded generator if `seed` is set, otherwise an entropy-seeded one.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    }
}
