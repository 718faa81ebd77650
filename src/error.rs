//! Error types shared by the city field and both solvers.

use thiserror::Error;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Errors raised before or instead of a solver run.
///
/// Every failure is detected up front: a run that returns an error has
/// produced no trace and no partial tour.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TspError {
    /// The city field holds fewer cities than the operation requires.
    #[error("city field has {cities} cities, at least {required} are required")]
    EmptyField {
        /// Number of cities supplied.
        cities: usize,
        /// Minimum number of cities accepted.
        required: usize,
    },

    /// A tour is not a permutation of the field's city indices.
    #[error("invalid tour: {reason}")]
    InvalidTour {
        /// What is wrong with the tour.
        reason: TourDefect,
    },

    /// A solver or generator parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// The specific way a tour violates the permutation invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TourDefect {
    /// The tour does not visit exactly `expected` cities.
    #[error("expected {expected} cities, got {actual}")]
    LengthMismatch {
        /// Number of cities in the field.
        expected: usize,
        /// Length of the supplied tour.
        actual: usize,
    },

    /// The tour references a city index past the end of the field.
    #[error("city index {index} is out of range for {n} cities")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cities in the field.
        n: usize,
    },

    /// The tour visits the same city twice.
    #[error("city index {index} appears more than once")]
    Duplicate {
        /// Repeated index.
        index: usize,
    },
}

impl From<TourDefect> for TspError {
    fn from(reason: TourDefect) -> Self {
        TspError::InvalidTour { reason }
    }
}
