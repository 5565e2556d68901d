//! Error types.
//!
//! Graph defects are fatal for the whole call. Solver failures are
//! recoverable when they come from the quantum-inspired strategy: the
//! optimizer substitutes the deterministic strategy and never surfaces
//! them. Budget and deadline overruns are not errors at all; they are
//! reported as risks.

use std::time::Duration;

/// Structural defects in the project dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("project '{project}' depends on unknown project '{dependency}'")]
    UnknownDependency { project: String, dependency: String },

    #[error("cyclic dependency detected: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },

    #[error("duplicate project name '{name}'")]
    DuplicateProject { name: String },
}

/// Failures of an assignment strategy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("solver exceeded its time budget of {limit:?}")]
    Timeout { limit: Duration },

    #[error("annealing backend '{backend}' unavailable: {reason}")]
    BackendUnavailable { backend: String, reason: String },

    #[error("backend returned an invalid sample: {reason}")]
    InvalidSample { reason: String },
}

impl SolverError {
    /// Whether the optimizer may retry with the deterministic strategy.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SolverError::Timeout { .. }
                | SolverError::BackendUnavailable { .. }
                | SolverError::InvalidSample { .. }
        )
    }
}

/// Invalid optimizer configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

/// The single failure type returned by [`crate::Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    #[error("at least one developer is required")]
    NoDevelopers,

    #[error("at least one project is required")]
    NoProjects,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("deterministic solver failed: {0}")]
    Solver(SolverError),

    #[error("internal fault: {0}")]
    Internal(String),
}
