//! Optimization result model.
//!
//! The structured output consumed by downstream collaborators (HTTP
//! layer, insight generation). Field order is stable so that two equal
//! results serialize to identical bytes.

use serde::{Deserialize, Serialize};

use super::{Assignment, Risk, ScheduleEntry, Severity};
use crate::schedule::ResultMetrics;

/// The assembled output of one optimization call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// One assignment per project, in input order.
    pub assignments: Vec<Assignment>,
    /// Sum of assignment costs.
    pub total_cost: f64,
    /// `budget - total_cost`. Negative when over budget.
    pub budget_remaining: f64,
    /// Latest finish day.
    pub completion_time: f64,
    /// `deadline - completion_time`. Negative when late.
    pub time_buffer: f64,
    /// Findings, highest severity first.
    pub risks: Vec<Risk>,
    /// Whether the quantum-inspired strategy produced the assignments.
    pub quantum_powered: bool,
    /// Per-project timeline, in input order.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Efficiency figures derived from the fields above.
    #[serde(default)]
    pub metrics: ResultMetrics,
}

impl OptimizationResult {
    /// Finds the assignment for a project.
    pub fn assignment_for(&self, project: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.project == project)
    }

    /// Finds the timeline entry for a project.
    pub fn entry_for(&self, project: &str) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|e| e.project == project)
    }

    /// Risks of the given severity.
    pub fn risks_with(&self, severity: Severity) -> impl Iterator<Item = &Risk> {
        self.risks.iter().filter(move |r| r.severity == severity)
    }

    /// Whether any high-severity risk was found.
    pub fn has_high_risk(&self) -> bool {
        self.risks.iter().any(|r| r.severity == Severity::High)
    }

    /// Whether the plan fits both budget and deadline.
    pub fn is_feasible(&self) -> bool {
        self.budget_remaining >= 0.0 && self.time_buffer >= 0.0
    }
}
