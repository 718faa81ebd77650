//! Permutation operators used by the GA.
//!
//! These operate on `&[usize]` tours and always return valid
//! permutations when given valid permutations.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`order_crossover_at`]: the same with caller-chosen cut points
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::distinct_pair;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order Crossover (OX) with random cut points.
///
/// Picks two distinct cut points `start < end` uniformly over `0..n`
/// and delegates to [`order_crossover_at`].
///
/// # Panics
/// Panics if the parents have different lengths or fewer than two cities.
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let (a, b) = distinct_pair(rng, parent1.len());
    let (start, end) = if a < b { (a, b) } else { (b, a) };
    order_crossover_at(parent1, parent2, start, end)
}

/// Order Crossover (OX) with fixed cut points.
///
/// 1. Copy `parent1[start..=end]` into the child at the same positions
/// 2. Walk `parent2` from its first gene, skipping genes already in the
///    child, and write the rest starting at `(end + 1) % n`, wrapping
///    around to position 0
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths, are empty, or if
/// `start > end` or `end >= n`.
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");
    assert!(start <= end && end < n, "cut points out of range: ({start}, {end}) for {n}");

    let mut child = vec![usize::MAX; n];
    let mut in_child = vec![false; n];

    // Step 1: keep the slice from parent1
    for i in start..=end {
        child[i] = parent1[i];
        in_child[parent1[i]] = true;
    }

    // Step 2: fill the gaps in parent2's order
    let mut pos = (end + 1) % n;
    for &gene in parent2 {
        if !in_child[gene] {
            child[pos] = gene;
            in_child[gene] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// Tours shorter than two cities are left untouched.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rng: &mut R) {
    if perm.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(rng, perm.len());
    perm.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
