//! Random-number plumbing shared by the solvers.
//!
//! Solvers never touch process-wide randomness. Each run either builds
//! its own generator from a seed via [`create_rng`] or borrows one the
//! caller injects, so a run is reproducible given the seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator type used when a solver seeds itself.
///
/// ChaCha8 produces the same stream on every platform, which keeps
/// seeded runs replayable across machines.
pub type TspRng = ChaCha8Rng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> TspRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> TspRng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Samples `k` distinct indices uniformly from `0..n`, without replacement.
///
/// # Panics
/// Panics if `k > n`.
pub fn sample_distinct<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    rand::seq::index::sample(rng, n, k).into_vec()
}

/// Picks two distinct indices uniformly from `0..n`, in draw order.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions to pick a distinct pair");
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}
