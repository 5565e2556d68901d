//! Deterministic greedy assignment.
//!
//! # Algorithm
//!
//! 1. Walk projects in dependency-graph order (priority, then input order,
//!    among ready projects).
//! 2. Split developers into tiers: within capacity and budget, within
//!    capacity only, everyone else.
//! 3. From the best non-empty tier pick the highest skill match, then the
//!    lowest rate, then the earliest input position.
//! 4. Book the hours and cost in the ledger.
//!
//! Identical input always yields the identical plan.
//!
//! # Complexity
//! O(n * m) where n = projects, m = developers, plus the graph order.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::sync::Arc;

use super::{AllocationLedger, AssignmentModel, AssignmentStrategy, Plan, Strategy};
use crate::error::SolverError;

/// Greedy best-fit solver.
///
/// # Example
///
/// ```
/// use u_workforce::graph::DependencyGraph;
/// use u_workforce::models::{Developer, OptimizationRequest, Project};
/// use u_workforce::solver::{AssignmentModel, GreedySolver};
/// use u_workforce::config::ObjectiveWeights;
///
/// let request = OptimizationRequest::new(10_000.0, 10.0)
///     .with_developer(Developer::new("A", 50.0, 8.0).with_skill("python"))
///     .with_developer(Developer::new("B", 30.0, 8.0).with_skill("java"))
///     .with_project(Project::new("P1", 40.0).with_required_skill("python"));
/// let graph = DependencyGraph::build(&request.projects).unwrap();
/// let model = AssignmentModel::new(&request, graph, ObjectiveWeights::default());
///
/// assert_eq!(GreedySolver::new().plan(&model), vec![0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a solver.
    pub fn new() -> Self {
        Self
    }

    /// Builds the plan.
    pub fn plan(&self, model: &AssignmentModel) -> Plan {
        let developers = model.developers();
        let projects = model.projects();
        let mut ledger = AllocationLedger::new(developers, model.budget(), model.deadline());
        let mut plan = vec![0; projects.len()];

        for &p in model.graph().order() {
            let hours = projects[p].hours;
            let tier = |d: usize| -> u8 {
                let within_capacity = ledger.fits_capacity(d, hours);
                let within_budget = ledger.fits_budget(developers[d].cost_of(hours));
                match (within_capacity, within_budget) {
                    (true, true) => 0,
                    (true, false) => 1,
                    _ => 2,
                }
            };

            let best = (0..developers.len())
                .map(|d| (tier(d), d))
                .min_by(|&(ta, a), &(tb, b)| {
                    ta.cmp(&tb)
                        .then_with(|| model.skill_match(p, b).total_cmp(&model.skill_match(p, a)))
                        .then_with(|| developers[a].rate.total_cmp(&developers[b].rate))
                        .then_with(|| a.cmp(&b))
                })
                .map(|(_, d)| d);

            // Pool is non-empty for any model the optimizer builds.
            let Some(d) = best else { continue };
            ledger.book(d, hours, developers[d].cost_of(hours));
            plan[p] = d;
        }

        tracing::debug!(
            projects = projects.len(),
            spent = ledger.spent(),
            "greedy plan built"
        );
        plan
    }
}

impl AssignmentStrategy for GreedySolver {
    fn strategy(&self) -> Strategy {
        Strategy::Deterministic
    }

    fn solve(&self, model: &Arc<AssignmentModel>) -> Result<Plan, SolverError> {
        Ok(self.plan(model))
    }
}
