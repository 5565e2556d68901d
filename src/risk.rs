//! Risk assessment.
//!
//! Derives findings from an evaluated plan. Rules, in discovery order:
//!
//! | Rule | Severity |
//! |------|----------|
//! | total cost exceeds budget | high |
//! | completion exceeds deadline | high |
//! | required skill no developer has (one per skill) | high |
//! | budget utilization above threshold, not already over | medium |
//! | time buffer below threshold, not already late | medium |
//! | assignment skill match below threshold (one per assignment) | medium |
//!
//! The output is stably sorted by severity, highest first.

use crate::config::RiskThresholds;
use crate::models::{Assignment, Developer, Project, Risk};
use crate::skills::uncovered_skills;

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct RiskContext<'a> {
    pub budget: f64,
    pub deadline: f64,
    pub developers: &'a [Developer],
    pub projects: &'a [Project],
    pub assignments: &'a [Assignment],
    pub total_cost: f64,
    pub completion_time: f64,
}

/// Applies the risk rules.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessor {
    thresholds: RiskThresholds,
}

impl RiskAssessor {
    /// Creates an assessor with the given thresholds.
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns all findings, highest severity first.
    pub fn assess(&self, ctx: &RiskContext<'_>) -> Vec<Risk> {
        let t = &self.thresholds;
        let mut risks = Vec::new();

        let budget_remaining = ctx.budget - ctx.total_cost;
        let time_buffer = ctx.deadline - ctx.completion_time;
        let over_budget = budget_remaining < 0.0;
        let late = time_buffer < 0.0;

        if over_budget {
            risks.push(Risk::high(format!(
                "Budget exceeded by {:.2} (total cost {:.2} of {:.2})",
                -budget_remaining, ctx.total_cost, ctx.budget
            )));
        }
        if late {
            risks.push(Risk::high(format!(
                "Deadline missed by {:.2} days (completion {:.2} of {:.2})",
                -time_buffer, ctx.completion_time, ctx.deadline
            )));
        }

        for gap in uncovered_skills(ctx.developers, ctx.projects) {
            risks.push(
                Risk::high(format!(
                    "No matching developer has skill '{}' required by project '{}'",
                    gap.skill, gap.project
                ))
                .with_subject(gap.project),
            );
        }

        if !over_budget && ctx.budget > 0.0 {
            let utilization = ctx.total_cost / ctx.budget;
            if utilization > t.budget_utilization {
                risks.push(Risk::medium(format!(
                    "Budget utilization at {:.1}%",
                    utilization * 100.0
                )));
            }
        }

        if !late && time_buffer < ctx.deadline * t.time_buffer_fraction {
            risks.push(Risk::medium(format!(
                "Tight schedule: only {:.2} days of buffer before the deadline",
                time_buffer
            )));
        }

        for a in ctx.assignments {
            if a.skill_match < t.min_skill_match {
                risks.push(
                    Risk::medium(format!(
                        "Developer '{}' covers only {:.0}% of the skills for project '{}'",
                        a.developer,
                        a.skill_match * 100.0,
                        a.project
                    ))
                    .with_subject(a.project.clone()),
                );
            }
        }

        risks.sort_by(|a, b| b.severity.cmp(&a.severity));

        if !risks.is_empty() {
            tracing::debug!(count = risks.len(), "risks identified");
        }
        risks
    }
}
