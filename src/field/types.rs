//! Points and the immutable city field.

use crate::error::{Result, TspError};

/// Smallest field that can be constructed at all.
pub const MIN_FIELD_CITIES: usize = 2;

/// Smallest field either solver accepts.
///
/// Below four cities the crossover cut points and swap moves degenerate.
pub const MIN_SOLVER_CITIES: usize = 4;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// An ordered, read-only set of cities.
///
/// Index `i` in a tour refers to `points()[i]`. Solvers only ever borrow
/// a field immutably, so one field can back several concurrent runs.
///
/// # Examples
///
/// ```
/// use u_tsp::field::CityField;
///
/// let field = CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])?;
/// assert_eq!(field.len(), 4);
/// assert_eq!(field.tour_length(&[0, 1, 2, 3])?, 40.0);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityField {
    points: Vec<Point>,
}

impl CityField {
    /// Builds a field from its points.
    ///
    /// Fails with [`TspError::EmptyField`] when fewer than two points are
    /// supplied, since no tour over them has any length.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < MIN_FIELD_CITIES {
            return Err(TspError::EmptyField {
                cities: points.len(),
                required: MIN_FIELD_CITIES,
            });
        }
        Ok(Self { points })
    }

    /// Builds a field from `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The city at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn distance_between(&self, i: usize, j: usize) -> f64 {
        distance(self.points[i], self.points[j])
    }

    /// Fails with [`TspError::EmptyField`] unless the field has at least
    /// `required` cities.
    pub fn require_cities(&self, required: usize) -> Result<()> {
        if self.len() < required {
            return Err(TspError::EmptyField {
                cities: self.len(),
                required,
            });
        }
        Ok(())
    }

    /// Length of the closed tour, after checking it is a permutation.
    pub fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        super::tour_length(self, tour)
    }

    /// Length of the closed tour without the permutation check.
    ///
    /// The caller guarantees `tour` is a permutation of `0..self.len()`;
    /// the solvers use this on tours they build themselves.
    ///
    /// # Panics
    /// Panics if `tour` holds an index past the end of the field.
    pub fn tour_length_unchecked(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|i| self.distance_between(tour[i], tour[(i + 1) % n]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> CityField {
        CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
            .expect("four cities")
    }

    #[test]
    fn test_distance_three_four_five() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(12.5, -3.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_new_rejects_single_city() {
        let err = CityField::from_coords(&[(1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            TspError::EmptyField {
                cities: 1,
                required: MIN_FIELD_CITIES
            }
        );
    }

    #[test]
    fn test_new_accepts_two_cities() {
        let field = CityField::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(field.len(), 2);
        assert!(!field.is_empty());
        // There and back again.
        assert!((field.tour_length_unchecked(&[0, 1]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_require_cities() {
        let field = square();
        assert!(field.require_cities(4).is_ok());
        assert_eq!(
            field.require_cities(5),
            Err(TspError::EmptyField {
                cities: 4,
                required: 5
            })
        );
    }

    #[test]
    fn test_square_perimeter_and_diagonal_tour() {
        let field = square();
        assert!((field.tour_length_unchecked(&[0, 1, 2, 3]) - 40.0).abs() < 1e-12);
        // Crossing tour: two sides plus two diagonals.
        let crossing = 20.0 + 2.0 * 200.0_f64.sqrt();
        assert!((field.tour_length_unchecked(&[0, 2, 1, 3]) - crossing).abs() < 1e-12);
    }

    #[test]
    fn test_accessors() {
        let field = square();
        assert_eq!(field.point(2), Point::new(10.0, 10.0));
        assert_eq!(field.points().len(), 4);
        assert!((field.distance_between(0, 2) - 200.0_f64.sqrt()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric_non_negative(
            ax in -1e4f64..1e4, ay in -1e4f64..1e4,
            bx in -1e4f64..1e4, by in -1e4f64..1e4,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(distance(a, b), distance(b, a));
            prop_assert!(distance(a, b) >= 0.0);
            prop_assert_eq!(distance(a, a), 0.0);
        }
    }
}
