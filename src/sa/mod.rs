//! Simulated Annealing (SA) for the TSP.
//!
//! A single-trajectory search: each step swaps two cities of the current
//! tour, accepts the neighbor by the Metropolis criterion, and cools the
//! temperature geometrically until it reaches the floor.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod state;

pub use config::SaConfig;
pub use runner::{metropolis_accept, swap_neighbor, SaResult, SaRunner};
pub use state::SearchState;
