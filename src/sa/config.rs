//! SA configuration.

use crate::error::{Result, TspError};

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, one neighbor
/// evaluation per temperature step, until `T <= final_temperature`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(0.001)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The algorithm stops once the temperature is at or below this.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Maximum total steps (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Steps between progress log lines. 0 disables them.
    pub log_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            final_temperature: 1e-8,
            cooling_rate: 0.995,
            max_iterations: 0,
            seed: None,
            log_interval: 1000,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_interval(mut self, steps: usize) -> Self {
        self.log_interval = steps;
        self
    }

    /// Number of cooling steps the schedule allows, ignoring
    /// `max_iterations`.
    ///
    /// Counts by repeated multiplication so the result agrees exactly
    /// with the runner's loop. Returns 0 for a configuration that does
    /// not validate.
    pub fn schedule_steps(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.final_temperature {
            temperature *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    ///
    /// A positive final temperature and a cooling rate in (0, 1) keep the
    /// temperature strictly positive inside the loop.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(TspError::InvalidConfig(
                "initial_temperature must be positive and finite".into(),
            ));
        }
        if self.final_temperature.is_nan() || self.final_temperature <= 0.0 {
            return Err(TspError::InvalidConfig(
                "final_temperature must be positive".into(),
            ));
        }
        if self.final_temperature >= self.initial_temperature {
            return Err(TspError::InvalidConfig(
                "final_temperature must be less than initial_temperature".into(),
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(TspError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
