//! Tabucol search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration parameters for a tabucol run.
///
/// # Examples
///
/// ```
/// use tabu_color::TabucolConfig;
///
/// let config = TabucolConfig::default()
///     .with_tabu_size(7)
///     .with_reps(100)
///     .with_max_iterations(10_000);
/// assert_eq!(config.tabu_size, 7);
/// assert_eq!(config.reps, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabucolConfig {
    /// Maximum `(vertex, color)` entries retained in the tabu list.
    /// Eviction is oldest-first.
    pub tabu_size: usize,

    /// Trial moves attempted per iteration before the iteration gives up
    /// without moving.
    pub reps: usize,

    /// Hard cap on iterations before the run reports exhaustion.
    pub max_iterations: usize,

    /// Random seed for reproducibility (`None` draws a fresh one).
    pub seed: Option<u64>,
}

impl Default for TabucolConfig {
    fn default() -> Self {
        Self {
            tabu_size: 10,
            reps: 500,
            max_iterations: 50_000,
            seed: None,
        }
    }
}

impl TabucolConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }

    /// Sets the per-iteration trial budget.
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every bound is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabu_size == 0 {
            return Err(ConfigError::ZeroTabuSize);
        }
        if self.reps == 0 {
            return Err(ConfigError::ZeroReps);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        Ok(())
    }
}
