//! Quantum-inspired strategy.
//!
//! Formulates assignment as energy minimization and hands it to an
//! [`AnnealingBackend`]. The backend call runs on a dedicated worker
//! thread; the caller waits at most the configured timeout and then
//! abandons it. Every failure mode (timeout, backend error, malformed
//! plan) surfaces as a recoverable [`SolverError`].

use std::fmt::Debug;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use super::{AssignmentModel, AssignmentStrategy, Plan, SimulatedAnnealer, Strategy};
use crate::config::StochasticConfig;
use crate::error::SolverError;

/// A sampler that minimizes [`AssignmentModel::energy`].
///
/// The in-process default is [`SimulatedAnnealer`]. Other implementations
/// may forward the problem to remote annealing hardware; they must honor
/// `time_limit` on a best-effort basis and report unavailability as
/// [`SolverError::BackendUnavailable`].
pub trait AnnealingBackend: Send + Sync + Debug {
    /// Backend name for logs and errors.
    fn name(&self) -> &str;

    /// Returns the lowest-energy plan found.
    fn sample(&self, model: &AssignmentModel, time_limit: Duration) -> Result<Plan, SolverError>;
}

/// Annealing-based strategy bounded by a wall-clock timeout.
#[derive(Debug, Clone)]
pub struct QuantumInspiredSolver {
    backend: Arc<dyn AnnealingBackend>,
    timeout: Duration,
}

impl QuantumInspiredSolver {
    /// Creates a solver around the in-process annealer.
    pub fn new(config: &StochasticConfig) -> Self {
        Self::with_backend(Arc::new(SimulatedAnnealer::new(config.clone())), config.timeout())
    }

    /// Creates a solver around a custom backend.
    pub fn with_backend(backend: Arc<dyn AnnealingBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Backend name.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Time limit for one backend call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn run_bounded(&self, model: &Arc<AssignmentModel>) -> Result<Plan, SolverError> {
        let (tx, rx) = mpsc::channel();
        let backend = Arc::clone(&self.backend);
        let worker_model = Arc::clone(model);
        let limit = self.timeout;

        thread::Builder::new()
            .name(format!("anneal-{}", backend.name()))
            .spawn(move || {
                let outcome = backend.sample(&worker_model, limit);
                // Receiver is gone once the caller has timed out.
                let _ = tx.send(outcome);
            })
            .map_err(|e| SolverError::BackendUnavailable {
                backend: self.backend.name().to_string(),
                reason: format!("failed to spawn worker: {e}"),
            })?;

        match rx.recv_timeout(limit) {
            Ok(outcome) => outcome,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(SolverError::Timeout { limit }),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(SolverError::BackendUnavailable {
                backend: self.backend.name().to_string(),
                reason: "worker exited without a result".into(),
            }),
        }
    }
}

impl AssignmentStrategy for QuantumInspiredSolver {
    fn strategy(&self) -> Strategy {
        Strategy::QuantumInspired
    }

    fn solve(&self, model: &Arc<AssignmentModel>) -> Result<Plan, SolverError> {
        let plan = self.run_bounded(model)?;
        model.check_plan(&plan)?;
        tracing::debug!(
            backend = self.backend.name(),
            projects = plan.len(),
            "quantum-inspired plan accepted"
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObjectiveWeights;
    use crate::graph::DependencyGraph;
    use crate::models::{Developer, OptimizationRequest, Project};

    #[derive(Debug)]
    struct Failing;

    impl AnnealingBackend for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn sample(&self, _: &AssignmentModel, _: Duration) -> Result<Plan, SolverError> {
            Err(SolverError::BackendUnavailable {
                backend: "failing".into(),
                reason: "offline".into(),
            })
        }
    }

    #[derive(Debug)]
    struct Slow;

    impl AnnealingBackend for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        fn sample(&self, model: &AssignmentModel, _: Duration) -> Result<Plan, SolverError> {
            thread::sleep(Duration::from_millis(500));
            Ok(vec![0; model.project_count()])
        }
    }

    #[derive(Debug)]
    struct Malformed;

    impl AnnealingBackend for Malformed {
        fn name(&self) -> &str {
            "malformed"
        }

        fn sample(&self, model: &AssignmentModel, _: Duration) -> Result<Plan, SolverError> {
            Ok(vec![model.developer_count(); model.project_count()])
        }
    }

    #[derive(Debug)]
    struct Panicking;

    impl AnnealingBackend for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        fn sample(&self, _: &AssignmentModel, _: Duration) -> Result<Plan, SolverError> {
            panic!("backend crashed");
        }
    }

    fn make_model() -> Arc<AssignmentModel> {
        let request = OptimizationRequest::new(10_000.0, 10.0)
            .with_developer(Developer::new("A", 50.0, 8.0).with_skill("python"))
            .with_developer(Developer::new("B", 40.0, 8.0).with_skill("java"))
            .with_project(Project::new("P1", 40.0).with_required_skill("python"))
            .with_project(Project::new("P2", 16.0).with_required_skill("java"));
        let graph = DependencyGraph::build(&request.projects).unwrap();
        Arc::new(AssignmentModel::new(&request, graph, ObjectiveWeights::default()))
    }

    #[test]
    fn test_local_backend() {
        let config = StochasticConfig {
            enabled: true,
            seed: Some(42),
            ..StochasticConfig::default()
        };
        let solver = QuantumInspiredSolver::new(&config);
        assert_eq!(solver.strategy(), Strategy::QuantumInspired);
        assert_eq!(solver.backend_name(), "simulated-annealing");

        let plan = solver.solve(&make_model()).unwrap();
        assert_eq!(plan, vec![0, 1]);
    }

    #[test]
    fn test_backend_error_propagates() {
        let solver = QuantumInspiredSolver::with_backend(Arc::new(Failing), Duration::from_secs(1));
        let err = solver.solve(&make_model()).unwrap_err();
        assert!(matches!(err, SolverError::BackendUnavailable { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_timeout_abandons_worker() {
        let solver = QuantumInspiredSolver::with_backend(Arc::new(Slow), Duration::from_millis(20));
        let err = solver.solve(&make_model()).unwrap_err();
        assert_eq!(
            err,
            SolverError::Timeout {
                limit: Duration::from_millis(20)
            }
        );
    }

    #[test]
    fn test_malformed_plan_rejected() {
        let solver =
            QuantumInspiredSolver::with_backend(Arc::new(Malformed), Duration::from_secs(1));
        let err = solver.solve(&make_model()).unwrap_err();
        assert!(matches!(err, SolverError::InvalidSample { .. }));
    }

    #[test]
    fn test_worker_panic_is_unavailable() {
        let solver =
            QuantumInspiredSolver::with_backend(Arc::new(Panicking), Duration::from_secs(1));
        let err = solver.solve(&make_model()).unwrap_err();
        assert!(matches!(err, SolverError::BackendUnavailable { .. }));
    }
}
