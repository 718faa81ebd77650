//! Tour evaluation and the permutation invariant.

use super::types::CityField;
use crate::error::{Result, TourDefect};

/// Checks that `tour` is a permutation of `0..n`.
///
/// Reports the first defect found: a length mismatch, then the first
/// out-of-range or repeated index in visiting order.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(TourDefect::LengthMismatch {
            expected: n,
            actual: tour.len(),
        }
        .into());
    }

    let mut seen = vec![false; n];
    for &index in tour {
        if index >= n {
            return Err(TourDefect::OutOfRange { index, n }.into());
        }
        if seen[index] {
            return Err(TourDefect::Duplicate { index }.into());
        }
        seen[index] = true;
    }
    Ok(())
}

/// Returns `true` if `tour` is a permutation of `0..n`.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    validate_tour(tour, n).is_ok()
}

/// Total length of `tour` read as a closed cycle over `field`.
///
/// Sums the distance from each city to the next, including the leg from
/// the last city back to the first.
///
/// # Errors
/// [`TspError::InvalidTour`](crate::TspError::InvalidTour) if `tour` is
/// not a permutation of the field's indices.
pub fn tour_length(field: &CityField, tour: &[usize]) -> Result<f64> {
    validate_tour(tour, field.len())?;
    Ok(field.tour_length_unchecked(tour))
}
