//! Optimization facade.
//!
//! # Pipeline
//!
//! 1. Reject empty developer or project lists.
//! 2. Build the dependency graph; graph errors end the call.
//! 3. Solve with the quantum-inspired strategy when requested and enabled,
//!    otherwise (or on any recoverable failure) with the greedy strategy.
//! 4. Evaluate the plan, assess risks, compute metrics.
//!
//! No state is kept between calls.

use std::sync::Arc;

use crate::config::OptimizerConfig;
use crate::error::{ConfigError, OptimizeError};
use crate::graph::DependencyGraph;
use crate::models::{Assignment, OptimizationRequest, OptimizationResult};
use crate::risk::{RiskAssessor, RiskContext};
use crate::schedule::ResultMetrics;
use crate::solver::{
    AnnealingBackend, AssignmentModel, AssignmentStrategy, GreedySolver, Plan,
    QuantumInspiredSolver,
};

/// Developer-to-project assignment optimizer.
///
/// Immutable after construction; one instance may serve concurrent calls.
///
/// # Example
///
/// ```
/// use u_workforce::{Optimizer, OptimizationRequest};
/// use u_workforce::models::{Developer, Project};
///
/// let request = OptimizationRequest::new(10_000.0, 10.0)
///     .with_developer(Developer::new("A", 50.0, 8.0).with_skill("python"))
///     .with_project(Project::new("P1", 40.0).with_priority(3).with_required_skill("python"));
///
/// let result = Optimizer::default().optimize(&request, false).unwrap();
/// assert_eq!(result.total_cost, 2000.0);
/// assert_eq!(result.completion_time, 5.0);
/// assert!(result.risks.is_empty());
/// assert!(!result.quantum_powered);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
    backend: Option<Arc<dyn AnnealingBackend>>,
}

impl Optimizer {
    /// Creates an optimizer after validating the configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            backend: None,
        })
    }

    /// Replaces the in-process annealer with an external backend.
    pub fn with_backend(mut self, backend: Arc<dyn AnnealingBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Whether the quantum-inspired strategy can be selected.
    pub fn stochastic_available(&self) -> bool {
        self.config.stochastic.enabled
    }

    /// Produces assignments, timeline, risks and metrics for a request.
    ///
    /// `prefer_stochastic` selects the quantum-inspired strategy when it is
    /// enabled in the configuration. Its failures are never surfaced; the
    /// greedy strategy is used instead and `quantum_powered` is `false`.
    ///
    /// # Errors
    /// - [`OptimizeError::NoDevelopers`] / [`OptimizeError::NoProjects`]
    /// - [`OptimizeError::Graph`] for unknown, duplicate or cyclic dependencies
    /// - [`OptimizeError::Internal`] if evaluation produces non-finite totals
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
        prefer_stochastic: bool,
    ) -> Result<OptimizationResult, OptimizeError> {
        if request.developers.is_empty() {
            return Err(OptimizeError::NoDevelopers);
        }
        if request.projects.is_empty() {
            return Err(OptimizeError::NoProjects);
        }

        let graph = DependencyGraph::build(&request.projects)?;
        let model = Arc::new(AssignmentModel::new(
            request,
            graph,
            self.config.weights.clone(),
        ));

        let (plan, quantum_powered) = self.solve(&model, prefer_stochastic)?;
        model
            .check_plan(&plan)
            .map_err(|e| OptimizeError::Internal(e.to_string()))?;

        let evaluation = model.evaluate(&plan);
        if !(evaluation.total_cost.is_finite() && evaluation.completion_time.is_finite()) {
            return Err(OptimizeError::Internal(format!(
                "non-finite evaluation (cost {}, completion {})",
                evaluation.total_cost, evaluation.completion_time
            )));
        }

        let developers = model.developers();
        let projects = model.projects();
        let assignments: Vec<Assignment> = projects
            .iter()
            .enumerate()
            .map(|(p, project)| {
                Assignment::full(&developers[plan[p]], project, model.skill_match(p, plan[p]))
            })
            .collect();

        let risks = RiskAssessor::new(self.config.risk.clone()).assess(&RiskContext {
            budget: request.budget,
            deadline: request.deadline,
            developers,
            projects,
            assignments: &assignments,
            total_cost: evaluation.total_cost,
            completion_time: evaluation.completion_time,
        });
        let metrics = ResultMetrics::calculate(
            &evaluation,
            &assignments,
            developers,
            request.budget,
            request.deadline,
        );
        let schedule = evaluation.entries(developers, projects, &plan);

        tracing::debug!(
            projects = projects.len(),
            total_cost = evaluation.total_cost,
            completion_time = evaluation.completion_time,
            risks = risks.len(),
            quantum_powered,
            "optimization finished"
        );

        Ok(OptimizationResult {
            assignments,
            total_cost: evaluation.total_cost,
            budget_remaining: evaluation.budget_remaining(request.budget),
            completion_time: evaluation.completion_time,
            time_buffer: evaluation.time_buffer(request.deadline),
            risks,
            quantum_powered,
            schedule,
            metrics,
        })
    }

    fn quantum_solver(&self) -> QuantumInspiredSolver {
        match &self.backend {
            Some(backend) => QuantumInspiredSolver::with_backend(
                Arc::clone(backend),
                self.config.stochastic.timeout(),
            ),
            None => QuantumInspiredSolver::new(&self.config.stochastic),
        }
    }

    /// Returns the plan and whether the quantum-inspired strategy produced it.
    fn solve(
        &self,
        model: &Arc<AssignmentModel>,
        prefer_stochastic: bool,
    ) -> Result<(Plan, bool), OptimizeError> {
        if prefer_stochastic && self.stochastic_available() {
            let solver = self.quantum_solver();
            tracing::debug!(backend = solver.backend_name(), "using quantum-inspired strategy");
            match solver.solve(model) {
                Ok(plan) => return Ok((plan, true)),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, "quantum-inspired strategy failed, falling back");
                }
                Err(e) => return Err(OptimizeError::Solver(e)),
            }
        } else if prefer_stochastic {
            tracing::debug!("quantum-inspired strategy disabled, using deterministic");
        }

        GreedySolver::new()
            .solve(model)
            .map(|plan| (plan, false))
            .map_err(OptimizeError::Solver)
    }
}
