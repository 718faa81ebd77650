//! Mutable state of one annealing run.

use crate::field::CityField;

/// Current and best tours of a running SA search.
///
/// Owned by the run that created it; nothing outside the loop sees it
/// until the best tour is moved into the result.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Tour the walk is currently at.
    pub current: Vec<usize>,

    /// Length of `current`.
    pub current_distance: f64,

    /// Shortest tour visited so far.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_distance: f64,

    /// Current temperature, always positive while the loop runs.
    pub temperature: f64,
}

impl SearchState {
    /// Starts a search at `initial`, which is also the first best tour.
    pub fn new(field: &CityField, initial: Vec<usize>, temperature: f64) -> Self {
        let distance = field.tour_length_unchecked(&initial);
        Self {
            best: initial.clone(),
            best_distance: distance,
            current: initial,
            current_distance: distance,
            temperature,
        }
    }

    /// Moves to `tour`, recording it as best if it is strictly shorter.
    pub fn accept(&mut self, tour: Vec<usize>, distance: f64) {
        self.current = tour;
        self.current_distance = distance;
        if distance < self.best_distance {
            self.best.clone_from(&self.current);
            self.best_distance = distance;
        }
    }

    /// Geometric cooling step.
    pub fn cool(&mut self, rate: f64) {
        self.temperature *= rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> CityField {
        CityField::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_new_starts_best_at_initial() {
        let state = SearchState::new(&square(), vec![0, 2, 1, 3], 5.0);
        assert_eq!(state.best, state.current);
        assert_eq!(state.best_distance, state.current_distance);
        assert!(state.current_distance > 40.0);
    }

    #[test]
    fn test_accept_worse_keeps_best() {
        let field = square();
        let mut state = SearchState::new(&field, vec![0, 1, 2, 3], 5.0);
        let worse = vec![0, 2, 1, 3];
        let worse_len = field.tour_length_unchecked(&worse);
        state.accept(worse.clone(), worse_len);

        assert_eq!(state.current, worse);
        assert_eq!(state.best, vec![0, 1, 2, 3]);
        assert!((state.best_distance - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_accept_better_updates_best() {
        let field = square();
        let mut state = SearchState::new(&field, vec![0, 2, 1, 3], 5.0);
        state.accept(vec![1, 2, 3, 0], 40.0);
        assert_eq!(state.best, vec![1, 2, 3, 0]);
        assert_eq!(state.best_distance, 40.0);
    }

    #[test]
    fn test_cool_is_geometric() {
        let mut state = SearchState::new(&square(), vec![0, 1, 2, 3], 8.0);
        state.cool(0.5);
        state.cool(0.5);
        assert_eq!(state.temperature, 2.0);
    }
}
