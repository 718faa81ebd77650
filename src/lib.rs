//! Metaheuristic solvers for the Euclidean Traveling Salesman Problem.
//!
//! Two independent searches over permutation-encoded tours:
//!
//! - **Genetic Algorithm (GA)**: generational evolution with tournament
//!   selection, order crossover and swap mutation.
//! - **Simulated Annealing (SA)**: swap-neighborhood trajectory search
//!   with Metropolis acceptance and geometric cooling.
//!
//! Both take an immutable [`CityField`](field::CityField) and return the
//! best tour found together with a best-so-far progress trace. Runs are
//! reproducible given a seed, or an injected generator.
//!
//! # Architecture
//!
//! The crate computes and returns data only. Displaying cities, routes
//! and convergence curves is left to implementors of the [`sink`] traits,
//! which are fed after a run completes.
//!
//! # Example
//!
//! ```
//! use u_tsp::field::CityGenerator;
//! use u_tsp::ga::{GaConfig, GaRunner};
//! use u_tsp::random::create_rng;
//! use u_tsp::sa::{SaConfig, SaRunner};
//!
//! let field = CityGenerator::default().generate(&mut create_rng(7))?;
//! let ga = GaRunner::run(&field, &GaConfig::default().with_generations(50).with_seed(1))?;
//! let sa = SaRunner::run(&field, &SaConfig::default().with_seed(1))?;
//! assert!(ga.best_distance > 0.0 && sa.best_distance > 0.0);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod error;
pub mod field;
pub mod ga;
pub mod random;
pub mod sa;
pub mod sink;

pub use error::{Result, TourDefect, TspError};
