//! Cities, distances and tour evaluation.
//!
//! A [`CityField`] is the immutable problem instance both solvers read.
//! A tour is a plain `Vec<usize>` permutation of the field's indices,
//! read as a closed cycle.
//!
//! # Key Items
//!
//! - [`Point`], [`CityField`]: the instance
//! - [`distance`], [`tour_length`]: the objective
//! - [`validate_tour`], [`is_permutation`]: the permutation invariant
//! - [`CityGenerator`]: random instances in the classic 20–40 city range

mod generator;
mod tour;
mod types;

pub use generator::CityGenerator;
pub use tour::{is_permutation, tour_length, validate_tour};
pub use types::{distance, CityField, Point, MIN_FIELD_CITIES, MIN_SOLVER_CITIES};
