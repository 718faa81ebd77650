//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::random::sample_distinct;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `k` distinct individuals uniformly at random and returns the
/// index of the one with the shortest tour. `lengths[i]` is the tour
/// length of individual `i`. Ties go to the contestant drawn first.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `lengths` is empty or `k > lengths.len()`.
pub fn tournament<R: Rng + ?Sized>(lengths: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!lengths.is_empty(), "cannot select from empty population");
    let k = k.max(1);

    let contestants = sample_distinct(rng, lengths.len(), k);
    let mut best_idx = contestants[0];
    for &idx in &contestants[1..] {
        if lengths[idx] < lengths[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
