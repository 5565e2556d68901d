//! Assignment problem definition.
//!
//! Bridges domain models (Developer, Project) to the solvers: owns a
//! per-call copy of the input, the validated dependency graph, and the
//! skill-match matrix, and scores complete plans.

use crate::config::ObjectiveWeights;
use crate::error::SolverError;
use crate::graph::DependencyGraph;
use crate::models::{Developer, OptimizationRequest, Project};
use crate::schedule::{Evaluation, ScheduleEvaluator};
use crate::skills::developer_match;

/// A self-contained assignment problem.
///
/// Owned data only, so it can be shared with a backend worker thread
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AssignmentModel {
    budget: f64,
    deadline: f64,
    developers: Vec<Developer>,
    projects: Vec<Project>,
    graph: DependencyGraph,
    /// `skill_matrix[p][d]`: skill match of developer `d` for project `p`.
    skill_matrix: Vec<Vec<f64>>,
    weights: ObjectiveWeights,
    total_priority_weight: f64,
    total_capacity: f64,
}

impl AssignmentModel {
    /// Creates a model from a request and its validated graph.
    pub fn new(
        request: &OptimizationRequest,
        graph: DependencyGraph,
        weights: ObjectiveWeights,
    ) -> Self {
        let skill_matrix = request
            .projects
            .iter()
            .map(|p| {
                request
                    .developers
                    .iter()
                    .map(|d| developer_match(d, p))
                    .collect()
            })
            .collect();
        let total_priority_weight = request.projects.iter().map(Project::priority_weight).sum();
        let total_capacity = request
            .developers
            .iter()
            .map(|d| d.capacity_hours(request.deadline))
            .sum();

        Self {
            budget: request.budget,
            deadline: request.deadline,
            developers: request.developers.clone(),
            projects: request.projects.clone(),
            graph,
            skill_matrix,
            weights,
            total_priority_weight,
            total_capacity,
        }
    }

    /// Total budget.
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Deadline (days).
    pub fn deadline(&self) -> f64 {
        self.deadline
    }

    /// Developer pool.
    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    /// Projects in input order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// Objective weights.
    pub fn weights(&self) -> &ObjectiveWeights {
        &self.weights
    }

    /// Skill match of developer `d` for project `p`.
    #[inline]
    pub fn skill_match(&self, p: usize, d: usize) -> f64 {
        self.skill_matrix[p][d]
    }

    /// Number of projects.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Number of developers.
    pub fn developer_count(&self) -> usize {
        self.developers.len()
    }

    /// Schedule evaluator bound to this model.
    pub fn evaluator(&self) -> ScheduleEvaluator<'_> {
        ScheduleEvaluator::new(&self.developers, &self.projects, &self.graph)
    }

    /// Evaluates a plan.
    pub fn evaluate(&self, plan: &[usize]) -> Evaluation {
        self.evaluator().evaluate(plan)
    }

    /// Checks that a plan covers every project with a valid developer.
    pub fn check_plan(&self, plan: &[usize]) -> Result<(), SolverError> {
        if plan.len() != self.projects.len() {
            return Err(SolverError::InvalidSample {
                reason: format!(
                    "plan covers {} projects, expected {}",
                    plan.len(),
                    self.projects.len()
                ),
            });
        }
        if let Some((p, &d)) = plan
            .iter()
            .enumerate()
            .find(|&(_, &d)| d >= self.developers.len())
        {
            return Err(SolverError::InvalidSample {
                reason: format!(
                    "project '{}' assigned to developer index {d} of {}",
                    self.projects[p].name,
                    self.developers.len()
                ),
            });
        }
        Ok(())
    }

    /// Objective value of a plan (lower is better).
    ///
    /// See [`ObjectiveWeights`] for the formula. Rewards priority-weighted
    /// skill fit, penalizes late finishes of urgent projects, spend, and
    /// budget, deadline and capacity overruns.
    pub fn energy(&self, plan: &[usize]) -> f64 {
        let eval = self.evaluate(plan);
        self.energy_of(plan, &eval)
    }

    /// Objective value of a plan that has already been evaluated.
    pub fn energy_of(&self, plan: &[usize], eval: &Evaluation) -> f64 {
        let w = &self.weights;
        let budget = positive_or_one(self.budget);
        let deadline = positive_or_one(self.deadline);
        let total_pw = positive_or_one(self.total_priority_weight);

        let mut skill = 0.0;
        let mut lateness = 0.0;
        for (p, project) in self.projects.iter().enumerate() {
            let pw = project.priority_weight();
            skill += pw * self.skill_matrix[p][plan[p]];
            lateness += pw * eval.finishes[p] / deadline;
        }
        skill /= total_pw;
        lateness /= total_pw;

        let spend = eval.total_cost / budget;
        let budget_overrun = (eval.total_cost - self.budget).max(0.0) / budget;
        let deadline_overrun = (eval.completion_time - self.deadline).max(0.0) / deadline;
        let capacity_overrun =
            eval.capacity_overrun(&self.developers, self.deadline) / positive_or_one(self.total_capacity);

        -w.skill * skill
            + w.timeliness * lateness
            + w.cost * spend
            + w.budget_overrun * budget_overrun
            + w.deadline_overrun * deadline_overrun
            + w.capacity_overrun * capacity_overrun
    }
}

#[inline]
fn positive_or_one(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_model() -> AssignmentModel {
        let request = OptimizationRequest::new(10_000.0, 10.0)
            .with_developer(Developer::new("A", 50.0, 8.0).with_skill("python"))
            .with_developer(Developer::new("B", 40.0, 8.0).with_skill("java"))
            .with_project(Project::new("P1", 40.0).with_required_skill("python"))
            .with_project(Project::new("P2", 16.0).with_required_skills(["java", "sql"]));
        let graph = DependencyGraph::build(&request.projects).unwrap();
        AssignmentModel::new(&request, graph, ObjectiveWeights::default())
    }

    #[test]
    fn test_skill_matrix() {
        let model = make_model();
        assert!((model.skill_match(0, 0) - 1.0).abs() < 1e-10);
        assert!((model.skill_match(0, 1) - 0.0).abs() < 1e-10);
        assert!((model.skill_match(1, 1) - 0.5).abs() < 1e-10);
        assert_eq!(model.project_count(), 2);
        assert_eq!(model.developer_count(), 2);
    }

    #[test]
    fn test_check_plan() {
        let model = make_model();
        assert!(model.check_plan(&[0, 1]).is_ok());
        assert!(matches!(
            model.check_plan(&[0]),
            Err(SolverError::InvalidSample { .. })
        ));
        assert!(matches!(
            model.check_plan(&[0, 2]),
            Err(SolverError::InvalidSample { .. })
        ));
    }

    #[test]
    fn test_better_fit_has_lower_energy() {
        let model = make_model();
        let matched = model.energy(&[0, 1]);
        let swapped = model.energy(&[1, 0]);
        assert!(matched < swapped);
    }

    #[test]
    fn test_overrun_penalized() {
        let request = OptimizationRequest::new(1_000.0, 2.0)
            .with_developer(Developer::new("cheap", 10.0, 8.0))
            .with_developer(Developer::new("pricey", 100.0, 8.0))
            .with_project(Project::new("P1", 16.0));
        let graph = DependencyGraph::build(&request.projects).unwrap();
        let model = AssignmentModel::new(&request, graph, ObjectiveWeights::default());

        // pricey: 1600 > 1000 budget
        assert!(model.energy(&[0]) < model.energy(&[1]));
    }
}
