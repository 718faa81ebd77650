//! SA execution loop.

use super::config::SaConfig;
use super::state::SearchState;
use crate::error::Result;
use crate::field::{CityField, MIN_SOLVER_CITIES};
use crate::random::{distinct_pair, random_permutation, rng_from_seed};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Shortest tour visited.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Best-so-far distance after every step.
    pub progress_trace: Vec<f64>,

    /// Total number of steps (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Simulated Annealing algorithm.
///
/// # Usage
///
/// ```
/// use u_tsp::field::CityField;
/// use u_tsp::sa::{SaConfig, SaRunner};
///
/// let field = CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])?;
/// let result = SaRunner::run(&field, &SaConfig::default().with_seed(42))?;
/// assert!((result.best_distance - 40.0).abs() < 1e-9);
/// # Ok::<(), u_tsp::TspError>(())
/// ```
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`TspError::EmptyField`](crate::TspError::EmptyField) if the field has
    /// fewer than four cities,
    /// [`TspError::InvalidConfig`](crate::TspError::InvalidConfig) if the
    /// configuration does not validate.
    pub fn run(field: &CityField, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(field, config, None)
    }

    /// Runs SA with an optional cancellation token, checked before every step.
    pub fn run_with_cancel(
        field: &CityField,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        anneal(field, config, &mut rng, cancel.as_deref())
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        field: &CityField,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        anneal(field, config, rng, None)
    }
}

fn anneal<R: Rng + ?Sized>(
    field: &CityField,
    config: &SaConfig,
    rng: &mut R,
    cancel: Option<&AtomicBool>,
) -> Result<SaResult> {
    field.require_cities(MIN_SOLVER_CITIES)?;
    config.validate()?;

    log::debug!(
        "SA start: {} cities, T0 = {}, T_min = {}, alpha = {}",
        field.len(),
        config.initial_temperature,
        config.final_temperature,
        config.cooling_rate
    );

    let initial = random_permutation(rng, field.len());
    let mut state = SearchState::new(field, initial, config.initial_temperature);

    let mut progress_trace = Vec::with_capacity(capacity_hint(config));
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;

    while state.temperature > config.final_temperature {
        if config.max_iterations > 0 && progress_trace.len() >= config.max_iterations {
            break;
        }
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::warn!("SA cancelled after {} steps", progress_trace.len());
            cancelled = true;
            break;
        }

        let neighbor = swap_neighbor(&state.current, rng);
        let neighbor_distance = field.tour_length_unchecked(&neighbor);
        let delta = neighbor_distance - state.current_distance;

        if metropolis_accept(delta, state.temperature, rng) {
            accepted_moves += 1;
            if delta < 0.0 {
                improving_moves += 1;
            }
            state.accept(neighbor, neighbor_distance);
        }

        progress_trace.push(state.best_distance);
        state.cool(config.cooling_rate);

        if config.log_interval > 0 && progress_trace.len().is_multiple_of(config.log_interval) {
            log::debug!(
                "step {}, T = {:.3e}, best distance: {:.2}",
                progress_trace.len(),
                state.temperature,
                state.best_distance
            );
        }
    }

    log::info!(
        "SA finished after {} steps: best distance {:.2}",
        progress_trace.len(),
        state.best_distance
    );

    Ok(SaResult {
        best_tour: state.best,
        best_distance: state.best_distance,
        iterations: progress_trace.len(),
        progress_trace,
        final_temperature: state.temperature,
        accepted_moves,
        improving_moves,
        cancelled,
    })
}

/// Copies `tour` with two distinct positions swapped.
///
/// # Panics
/// Panics if `tour` has fewer than two cities.
pub fn swap_neighbor<R: Rng + ?Sized>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let mut neighbor = tour.to_vec();
    let (i, j) = distinct_pair(rng, neighbor.len());
    neighbor.swap(i, j);
    neighbor
}

/// Metropolis acceptance criterion.
///
/// Improvements are taken without consuming randomness. Otherwise one
/// uniform draw `u` in [0, 1) accepts the move iff `u < exp(-delta / T)`.
/// `temperature` must be strictly positive.
pub fn metropolis_accept<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = (-delta / temperature).exp();
    rng.random::<f64>() < probability
}

/// Trace capacity to reserve up front, capped for pathological schedules.
fn capacity_hint(config: &SaConfig) -> usize {
    let steps = (config.final_temperature / config.initial_temperature).ln()
        / config.cooling_rate.ln();
    let steps = if steps.is_finite() { steps.ceil() as usize } else { 0 };
    let steps = steps.min(1 << 20);
    if config.max_iterations > 0 {
        steps.min(config.max_iterations)
    } else {
        steps
    }
}
