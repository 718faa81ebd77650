//! Genetic Algorithm for the TSP.
//!
//! A generational GA over permutation-encoded tours: tournament
//! selection without replacement, order crossover (OX), and at most one
//! swap mutation per child. Generations do not overlap; the best tour
//! ever seen is tracked outside the population.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best tour, its length, and the progress trace
//!
//! # Submodules
//!
//! - [`operators`]: OX crossover and swap mutation
//! - [`selection`]: tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
