//! Optimizer configuration.
//!
//! Fixed when an [`crate::Optimizer`] is constructed and never mutated
//! afterwards. Deserializable so that the hosting application can load
//! it from its own settings file; every field has a default.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Top-level optimizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Quantum-inspired strategy settings.
    pub stochastic: StochasticConfig,
    /// Objective weights for the quantum-inspired strategy.
    pub weights: ObjectiveWeights,
    /// Risk rule thresholds.
    pub risk: RiskThresholds,
}

/// Settings for the annealing search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticConfig {
    /// Whether the quantum-inspired strategy may be used at all.
    pub enabled: bool,
    /// Number of annealing moves.
    pub iterations: u32,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor, in (0, 1).
    pub cooling_rate: f64,
    /// Temperature below which only improving moves are accepted.
    pub min_temperature: f64,
    /// Probability of a reassign move (otherwise swap).
    pub reassign_probability: f64,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Wall-clock limit for one backend call (ms).
    pub timeout_ms: u64,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            iterations: 5_000,
            initial_temperature: 1.0,
            cooling_rate: 0.995,
            min_temperature: 1e-4,
            reassign_probability: 0.7,
            seed: None,
            timeout_ms: 5_000,
        }
    }
}

impl StochasticConfig {
    /// Backend call time limit.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Weights of the annealing energy (lower energy is better).
///
/// ```text
/// energy = - skill            * Σ(pw · match) / Σpw
///          + timeliness       * Σ(pw · finish / deadline) / Σpw
///          + cost             * total_cost / budget
///          + budget_overrun   * max(0, total_cost - budget) / budget
///          + deadline_overrun * max(0, completion - deadline) / deadline
///          + capacity_overrun * Σ max(0, load - capacity) / Σ capacity
/// ```
///
/// `pw` is the project priority divided by 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveWeights {
    pub skill: f64,
    pub timeliness: f64,
    pub cost: f64,
    pub budget_overrun: f64,
    pub deadline_overrun: f64,
    pub capacity_overrun: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            skill: 10.0,
            timeliness: 1.0,
            cost: 2.0,
            budget_overrun: 20.0,
            deadline_overrun: 20.0,
            capacity_overrun: 10.0,
        }
    }
}

impl ObjectiveWeights {
    fn values(&self) -> [(&'static str, f64); 6] {
        [
            ("weights.skill", self.skill),
            ("weights.timeliness", self.timeliness),
            ("weights.cost", self.cost),
            ("weights.budget_overrun", self.budget_overrun),
            ("weights.deadline_overrun", self.deadline_overrun),
            ("weights.capacity_overrun", self.capacity_overrun),
        ]
    }
}

/// Thresholds for the medium-severity risk rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Budget utilization above this fraction is flagged.
    pub budget_utilization: f64,
    /// Time buffer below this fraction of the deadline is flagged.
    pub time_buffer_fraction: f64,
    /// Assignments with a skill match below this are flagged.
    pub min_skill_match: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            budget_utilization: 0.9,
            time_buffer_fraction: 0.1,
            min_skill_match: 0.5,
        }
    }
}

impl OptimizerConfig {
    /// Creates the default configuration (quantum-inspired strategy disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the quantum-inspired strategy.
    pub fn with_stochastic_enabled(mut self, enabled: bool) -> Self {
        self.stochastic.enabled = enabled;
        self
    }

    /// Replaces the annealing settings.
    pub fn with_stochastic(mut self, stochastic: StochasticConfig) -> Self {
        self.stochastic = stochastic;
        self
    }

    /// Fixes the annealing RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.stochastic.seed = Some(seed);
        self
    }

    /// Sets the backend time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.stochastic.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Replaces the objective weights.
    pub fn with_weights(mut self, weights: ObjectiveWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the risk thresholds.
    pub fn with_risk_thresholds(mut self, risk: RiskThresholds) -> Self {
        self.risk = risk;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.stochastic;
        if !(s.cooling_rate > 0.0 && s.cooling_rate < 1.0) {
            return Err(ConfigError::invalid(
                "stochastic.cooling_rate",
                format!("{} is not in (0, 1)", s.cooling_rate),
            ));
        }
        if !(s.initial_temperature.is_finite() && s.initial_temperature > 0.0) {
            return Err(ConfigError::invalid(
                "stochastic.initial_temperature",
                "must be positive",
            ));
        }
        if !(s.min_temperature.is_finite() && s.min_temperature >= 0.0) {
            return Err(ConfigError::invalid(
                "stochastic.min_temperature",
                "must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&s.reassign_probability) {
            return Err(ConfigError::invalid(
                "stochastic.reassign_probability",
                format!("{} is not in [0, 1]", s.reassign_probability),
            ));
        }
        if s.timeout_ms == 0 {
            return Err(ConfigError::invalid("stochastic.timeout_ms", "must be non-zero"));
        }
        for (field, value) in self.weights.values() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, "must be finite and non-negative"));
            }
        }
        let r = &self.risk;
        if !(0.0..=1.0).contains(&r.min_skill_match) {
            return Err(ConfigError::invalid("risk.min_skill_match", "must be in [0, 1]"));
        }
        if !(r.budget_utilization.is_finite() && r.budget_utilization >= 0.0) {
            return Err(ConfigError::invalid(
                "risk.budget_utilization",
                "must be non-negative",
            ));
        }
        if !(r.time_buffer_fraction.is_finite() && r.time_buffer_fraction >= 0.0) {
            return Err(ConfigError::invalid(
                "risk.time_buffer_fraction",
                "must be non-negative",
            ));
        }
        Ok(())
    }
}
