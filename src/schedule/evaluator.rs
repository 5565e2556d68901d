//! Schedule evaluation.
//!
//! Turns a complete assignment plan into a timeline and cost totals.
//!
//! # Algorithm
//!
//! 1. Walk projects in dependency-graph order.
//! 2. A project starts when all its dependencies have finished and its
//!    developer is free (developers work serially).
//! 3. It finishes `hours / hours_per_day` days later.
//!
//! Completion time is the critical-path finish: the maximum finish over
//! all projects.
//!
//! # Complexity
//! O(n + e) where n = projects, e = dependency edges.

use crate::graph::DependencyGraph;
use crate::models::{Developer, Project, ScheduleEntry};

/// Timeline and totals for one plan.
///
/// Vectors are indexed by project (or developer) input position.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Start day per project.
    pub starts: Vec<f64>,
    /// Finish day per project.
    pub finishes: Vec<f64>,
    /// Sum of assignment costs.
    pub total_cost: f64,
    /// Latest finish day (0 for an empty plan).
    pub completion_time: f64,
    /// Booked hours per developer.
    pub developer_hours: Vec<f64>,
}

impl Evaluation {
    /// `budget - total_cost`. May be negative.
    #[inline]
    pub fn budget_remaining(&self, budget: f64) -> f64 {
        budget - self.total_cost
    }

    /// `deadline - completion_time`. May be negative.
    #[inline]
    pub fn time_buffer(&self, deadline: f64) -> f64 {
        deadline - self.completion_time
    }

    /// Hours booked beyond each developer's capacity over `horizon_days`, summed.
    pub fn capacity_overrun(&self, developers: &[Developer], horizon_days: f64) -> f64 {
        developers
            .iter()
            .zip(&self.developer_hours)
            .map(|(d, &booked)| (booked - d.capacity_hours(horizon_days)).max(0.0))
            .sum()
    }

    /// Timeline entries in project input order.
    pub fn entries(
        &self,
        developers: &[Developer],
        projects: &[Project],
        developer_for: &[usize],
    ) -> Vec<ScheduleEntry> {
        projects
            .iter()
            .enumerate()
            .map(|(p, project)| ScheduleEntry {
                project: project.name.clone(),
                developer: developers[developer_for[p]].name.clone(),
                start: self.starts[p],
                finish: self.finishes[p],
            })
            .collect()
    }
}

/// Evaluates assignment plans against a fixed problem.
///
/// A plan is a slice `developer_for` where `developer_for[p]` is the
/// developer index assigned to project `p`. Plans must cover every
/// project with a valid developer index.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEvaluator<'a> {
    developers: &'a [Developer],
    projects: &'a [Project],
    graph: &'a DependencyGraph,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates an evaluator.
    pub fn new(
        developers: &'a [Developer],
        projects: &'a [Project],
        graph: &'a DependencyGraph,
    ) -> Self {
        Self {
            developers,
            projects,
            graph,
        }
    }

    /// Computes the timeline and totals for a plan. Never fails.
    pub fn evaluate(&self, developer_for: &[usize]) -> Evaluation {
        let n = self.projects.len();
        let mut starts = vec![0.0; n];
        let mut finishes = vec![0.0; n];
        let mut developer_free = vec![0.0_f64; self.developers.len()];
        let mut developer_hours = vec![0.0; self.developers.len()];
        let mut total_cost = 0.0;

        for &p in self.graph.order() {
            let project = &self.projects[p];
            let d = developer_for[p];
            let developer = &self.developers[d];

            let ready = self
                .graph
                .predecessors(p)
                .iter()
                .map(|&q| finishes[q])
                .fold(0.0_f64, f64::max);
            let start = ready.max(developer_free[d]);
            let finish = start + developer.days_for(project.hours);

            starts[p] = start;
            finishes[p] = finish;
            developer_free[d] = finish;
            developer_hours[d] += project.hours;
        }

        // Summed in input order so totals do not depend on graph order.
        for (p, project) in self.projects.iter().enumerate() {
            total_cost += self.developers[developer_for[p]].cost_of(project.hours);
        }

        let completion_time = finishes.iter().copied().fold(0.0_f64, f64::max);

        Evaluation {
            starts,
            finishes,
            total_cost,
            completion_time,
            developer_hours,
        }
    }
}
