//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::selection::tournament;
use crate::error::Result;
use crate::field::{CityField, MIN_SOLVER_CITIES};
use crate::random::{random_permutation, rng_from_seed};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Shortest tour found in any generation.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Best-so-far distance after each generation.
    pub progress_trace: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_tsp::field::CityField;
/// use u_tsp::ga::{GaConfig, GaRunner};
///
/// let field = CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])?;
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let result = GaRunner::run(&field, &config)?;
/// assert_eq!(result.progress_trace.len(), 20);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`TspError::EmptyField`](crate::TspError::EmptyField) if the field has
    /// fewer than four cities,
    /// [`TspError::InvalidConfig`](crate::TspError::InvalidConfig) if the
    /// configuration does not validate.
    pub fn run(field: &CityField, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(field, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, the GA stops before the next
    /// generation and returns the best tour found so far.
    pub fn run_with_cancel(
        field: &CityField,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        evolve(field, config, &mut rng, cancel.as_deref())
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        field: &CityField,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        evolve(field, config, rng, None)
    }
}

fn evolve<R: Rng + ?Sized>(
    field: &CityField,
    config: &GaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Result<GaResult> {
    field.require_cities(MIN_SOLVER_CITIES)?;
    config.validate()?;

    let n = field.len();
    log::debug!(
        "GA start: {n} cities, population {}, {} generations",
        config.population_size,
        config.generations
    );

    // 1. Initialize population
    let mut population: Vec<Vec<usize>> = (0..config.population_size)
        .map(|_| random_permutation(rng, n))
        .collect();
    let mut lengths = evaluate_population(field, &population);

    // Only evolved generations compete for the best tour.
    let mut best_tour = Vec::new();
    let mut best_distance = f64::INFINITY;

    let mut progress_trace = Vec::with_capacity(config.generations);
    let mut cancelled = false;

    // 2. Evolutionary loop
    for gen in 0..config.generations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::warn!("GA cancelled after {gen} generations");
            cancelled = true;
            break;
        }

        population = next_generation(&population, &lengths, config, rng);
        lengths = evaluate_population(field, &population);

        let (idx, &len) = find_best(&lengths);
        if len < best_distance {
            best_distance = len;
            best_tour = population[idx].clone();
        }
        progress_trace.push(best_distance);

        if config.log_interval > 0 && gen.is_multiple_of(config.log_interval) {
            log::info!("generation {gen}, best distance: {best_distance:.2}");
        }
    }

    if best_tour.is_empty() {
        // Cancelled before the first generation.
        best_tour = population[0].clone();
        best_distance = field.tour_length_unchecked(&best_tour);
    }

    log::info!("GA finished: best distance {best_distance:.2}");

    Ok(GaResult {
        best_tour,
        best_distance,
        generations: progress_trace.len(),
        progress_trace,
        cancelled,
    })
}

/// Builds a full replacement population from `population`.
fn next_generation<R: Rng + ?Sized>(
    population: &[Vec<usize>],
    lengths: &[f64],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    (0..config.population_size)
        .map(|_| {
            let p1 = &population[tournament(lengths, config.tournament_size, rng)];
            let p2 = &population[tournament(lengths, config.tournament_size, rng)];

            let mut child = if rng.random::<f64>() <= config.crossover_rate {
                order_crossover(p1, p2, rng)
            } else {
                p1.clone()
            };

            if rng.random::<f64>() < config.mutation_rate {
                swap_mutation(&mut child, rng);
            }
            child
        })
        .collect()
}

/// Tour length of every individual.
fn evaluate_population(field: &CityField, population: &[Vec<usize>]) -> Vec<f64> {
    population
        .iter()
        .map(|tour| field.tour_length_unchecked(tour))
        .collect()
}

/// Index and length of the shortest tour; the first one on ties.
fn find_best(lengths: &[f64]) -> (usize, &f64) {
    lengths
        .iter()
        .enumerate()
        .fold((0, &lengths[0]), |best, (i, len)| {
            if len < best.1 {
                (i, len)
            } else {
                best
            }
        })
}

// ============================================================================
// Tests
// ============================================================================
