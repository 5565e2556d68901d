//! Result efficiency metrics.
//!
//! Deterministic figures summarizing a plan for downstream reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Budget efficiency | (budget - total_cost) / budget × 100 |
//! | Time efficiency | (deadline - completion) / deadline × 100 |
//! | Avg skill match | Mean skill match over assignments |
//! | Developer utilization | Booked days / completion time |
//!
//! Percentages are rounded to one decimal place.

use serde::{Deserialize, Serialize};

use super::Evaluation;
use crate::models::{Assignment, Developer};

/// Booked work for one developer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperLoad {
    /// Developer name.
    pub developer: String,
    /// Hours booked.
    pub hours: f64,
    /// Busy days / completion time (0.0..=1.0).
    pub utilization: f64,
}

/// Efficiency figures for a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultMetrics {
    /// Percentage of budget left over (negative when over budget).
    pub budget_efficiency: f64,
    /// Percentage of the deadline left over (negative when late).
    pub time_efficiency: f64,
    /// Mean skill match across assignments.
    pub avg_skill_match: f64,
    /// Per-developer load, in developer input order.
    pub developer_utilization: Vec<DeveloperLoad>,
}

impl ResultMetrics {
    /// Computes metrics from an evaluated plan.
    pub fn calculate(
        evaluation: &Evaluation,
        assignments: &[Assignment],
        developers: &[Developer],
        budget: f64,
        deadline: f64,
    ) -> Self {
        let budget_efficiency = percent(evaluation.budget_remaining(budget), budget);
        let time_efficiency = percent(evaluation.time_buffer(deadline), deadline);

        let avg_skill_match = if assignments.is_empty() {
            0.0
        } else {
            assignments.iter().map(|a| a.skill_match).sum::<f64>() / assignments.len() as f64
        };

        let horizon = evaluation.completion_time;
        let developer_utilization = developers
            .iter()
            .zip(&evaluation.developer_hours)
            .map(|(d, &hours)| DeveloperLoad {
                developer: d.name.clone(),
                hours,
                utilization: if horizon > 0.0 {
                    d.days_for(hours) / horizon
                } else {
                    0.0
                },
            })
            .collect();

        Self {
            budget_efficiency,
            time_efficiency,
            avg_skill_match,
            developer_utilization,
        }
    }

    /// Mean utilization across developers with booked work.
    pub fn avg_utilization(&self) -> f64 {
        let busy: Vec<f64> = self
            .developer_utilization
            .iter()
            .filter(|l| l.hours > 0.0)
            .map(|l| l.utilization)
            .collect();
        if busy.is_empty() {
            0.0
        } else {
            busy.iter().sum::<f64>() / busy.len() as f64
        }
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (part / whole * 1000.0).round() / 10.0
}
