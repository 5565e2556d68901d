//! Assignment strategies.
//!
//! Two interchangeable strategies produce the same output: a plan giving
//! one developer index per project (indexed by project input position).
//!
//! - **`GreedySolver`**: deterministic. Walks projects in dependency order
//!   and picks the best-fitting developer that still fits capacity and
//!   budget.
//! - **`QuantumInspiredSolver`**: stochastic. Anneals over the weighted
//!   objective of [`AssignmentModel::energy`], starting from the greedy
//!   plan. The search runs on an [`AnnealingBackend`] (in-process
//!   [`SimulatedAnnealer`] by default) bounded by a timeout.
//!
//! # References
//!
//! - Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"
//! - Lucas (2014), "Ising formulations of many NP problems"

mod annealing;
mod greedy;
mod ledger;
mod model;
mod quantum;

pub use annealing::{CoolingSchedule, GeometricCooling, MoveType, SimulatedAnnealer};
pub use greedy::GreedySolver;
pub use ledger::AllocationLedger;
pub use model::AssignmentModel;
pub use quantum::{AnnealingBackend, QuantumInspiredSolver};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Developer index per project, indexed by project input position.
pub type Plan = Vec<usize>;

/// Which strategy produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Greedy dependency-ordered assignment.
    Deterministic,
    /// Annealing search over the weighted objective.
    QuantumInspired,
}

impl Strategy {
    /// Strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Deterministic => "deterministic",
            Strategy::QuantumInspired => "quantum_inspired",
        }
    }

    /// Whether this is the quantum-inspired strategy.
    pub fn is_quantum(&self) -> bool {
        matches!(self, Strategy::QuantumInspired)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An assignment strategy.
///
/// Implementations hold only immutable settings; all working state is
/// local to each `solve` call, so one instance may serve concurrent calls.
pub trait AssignmentStrategy: Send + Sync {
    /// Which strategy this is.
    fn strategy(&self) -> Strategy;

    /// Produces a complete plan for the model.
    fn solve(&self, model: &Arc<AssignmentModel>) -> Result<Plan, SolverError>;
}
