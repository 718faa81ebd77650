//! Random city fields.

use super::types::{CityField, Point, MIN_FIELD_CITIES};
use crate::error::{Result, TspError};
use rand::Rng;

/// Generates random city fields.
///
/// The city count is drawn uniformly from `[min_cities, max_cities]` and
/// each coordinate is a uniform integer in `[0, coord_max]`.
///
/// # Examples
///
/// ```
/// use u_tsp::field::CityGenerator;
/// use u_tsp::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let field = CityGenerator::default().generate(&mut rng)?;
/// assert!((20..=40).contains(&field.len()));
/// # Ok::<(), u_tsp::TspError>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityGenerator {
    /// Fewest cities to generate (inclusive).
    pub min_cities: usize,

    /// Most cities to generate (inclusive).
    pub max_cities: usize,

    /// Upper bound of both coordinates (inclusive).
    pub coord_max: u32,
}

impl Default for CityGenerator {
    fn default() -> Self {
        Self {
            min_cities: 20,
            max_cities: 40,
            coord_max: 200,
        }
    }
}

impl CityGenerator {
    pub fn with_city_range(mut self, min: usize, max: usize) -> Self {
        self.min_cities = min;
        self.max_cities = max;
        self
    }

    /// Fixes the city count to exactly `n`.
    pub fn with_cities(self, n: usize) -> Self {
        self.with_city_range(n, n)
    }

    pub fn with_coord_max(mut self, coord_max: u32) -> Self {
        self.coord_max = coord_max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_cities < MIN_FIELD_CITIES {
            return Err(TspError::InvalidConfig(format!(
                "min_cities must be at least {MIN_FIELD_CITIES}, got {}",
                self.min_cities
            )));
        }
        if self.min_cities > self.max_cities {
            return Err(TspError::InvalidConfig(format!(
                "min_cities ({}) must not exceed max_cities ({})",
                self.min_cities, self.max_cities
            )));
        }
        Ok(())
    }

    /// Draws a new field.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CityField> {
        self.validate()?;

        let n = rng.random_range(self.min_cities..=self.max_cities);
        let points = (0..n)
            .map(|_| {
                let x = rng.random_range(0..=self.coord_max);
                let y = rng.random_range(0..=self.coord_max);
                Point::new(f64::from(x), f64::from(y))
            })
            .collect();

        log::debug!("generated {n} cities in [0, {}]^2", self.coord_max);
        CityField::new(points)
    }
}
