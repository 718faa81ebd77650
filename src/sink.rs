//! Consumers of finished runs.
//!
//! Rendering a route or plotting convergence is not part of the search.
//! The solvers return plain data; whatever displays it implements
//! [`RouteSink`] and [`ProgressSink`] and is fed with [`publish`] after
//! the run completes.

use crate::field::CityField;
use crate::ga::GaResult;
use crate::sa::SaResult;

/// Receives cities and the final tour for display.
pub trait RouteSink {
    /// Shows the cities before any route is known.
    fn render_cities(&mut self, _field: &CityField) {}

    /// Shows `tour` as a closed path over `field`.
    fn render_route(&mut self, tour: &[usize], field: &CityField);
}

/// Receives the complete progress trace of a finished run.
pub trait ProgressSink {
    fn plot_progress(&mut self, label: &str, trace: &[f64]);
}

/// Read access to the outcome of either solver.
pub trait Solution {
    fn best_tour(&self) -> &[usize];
    fn best_distance(&self) -> f64;
    fn progress_trace(&self) -> &[f64];
}

impl Solution for GaResult {
    fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    fn best_distance(&self) -> f64 {
        self.best_distance
    }

    fn progress_trace(&self) -> &[f64] {
        &self.progress_trace
    }
}

impl Solution for SaResult {
    fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    fn best_distance(&self) -> f64 {
        self.best_distance
    }

    fn progress_trace(&self) -> &[f64] {
        &self.progress_trace
    }
}

/// Hands a finished run to its consumers: the trace first, then the route.
pub fn publish<S, R, P>(
    label: &str,
    field: &CityField,
    solution: &S,
    routes: &mut R,
    progress: &mut P,
) where
    S: Solution + ?Sized,
    R: RouteSink + ?Sized,
    P: ProgressSink + ?Sized,
{
    progress.plot_progress(label, solution.progress_trace());
    routes.render_route(solution.best_tour(), field);
}

/// Writes routes and traces to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RouteSink for LogSink {
    fn render_cities(&mut self, field: &CityField) {
        let coords: Vec<(f64, f64)> = field.points().iter().map(|p| (p.x, p.y)).collect();
        log::info!("{} cities: {coords:?}", field.len());
    }

    fn render_route(&mut self, tour: &[usize], field: &CityField) {
        let length = field.tour_length_unchecked(tour);
        log::info!("best route ({length:.2}): {tour:?}");
    }
}

impl ProgressSink for LogSink {
    fn plot_progress(&mut self, label: &str, trace: &[f64]) {
        match (trace.first(), trace.last()) {
            (Some(first), Some(last)) => log::info!(
                "{label}: {} iterations, best distance {first:.2} -> {last:.2}",
                trace.len()
            ),
            _ => log::info!("{label}: no iterations recorded"),
        }
    }
}
