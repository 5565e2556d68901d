//! End-to-end optimization scenarios through the public API.

use std::sync::Arc;
use std::time::Duration;

use u_workforce::config::StochasticConfig;
use u_workforce::error::{GraphError, SolverError};
use u_workforce::models::{Developer, OptimizationRequest, Project, Severity};
use u_workforce::solver::{AnnealingBackend, AssignmentModel, Plan};
use u_workforce::validation::{validate_request, ValidationErrorKind};
use u_workforce::{OptimizeError, Optimizer, OptimizerConfig};

fn python_dev() -> Developer {
    Developer::new("A", 50.0, 8.0).with_skill("python")
}

#[test]
fn scenario_single_matched_project() {
    let request = OptimizationRequest::new(10_000.0, 10.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 40.0).with_priority(3).with_required_skill("python"));

    let result = Optimizer::default().optimize(&request, false).unwrap();

    let a = result.assignment_for("P1").unwrap();
    assert_eq!(a.developer, "A");
    assert!((a.hours_allocated - 40.0).abs() < 1e-10);
    assert!((a.cost - 2000.0).abs() < 1e-10);
    assert!((a.skill_match - 1.0).abs() < 1e-10);
    assert!((result.total_cost - 2000.0).abs() < 1e-10);
    assert!((result.budget_remaining - 8000.0).abs() < 1e-10);
    assert!((result.completion_time - 5.0).abs() < 1e-10);
    assert!((result.time_buffer - 5.0).abs() < 1e-10);
    assert!(result.risks.is_empty());
    assert!(!result.quantum_powered);
}

#[test]
fn scenario_missing_skill() {
    let request = OptimizationRequest::new(10_000.0, 10.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 40.0).with_priority(3).with_required_skill("java"));

    let result = Optimizer::default().optimize(&request, false).unwrap();

    assert!((result.assignments[0].skill_match - 0.0).abs() < 1e-10);
    let high: Vec<_> = result.risks_with(Severity::High).collect();
    assert_eq!(high.len(), 1);
    assert!(high[0].message.contains("No matching developer"));
    assert!(high[0].message.contains("java"));
}

#[test]
fn scenario_deadline_too_short() {
    let request = OptimizationRequest::new(10_000.0, 3.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 40.0).with_required_skill("python"));

    let result = Optimizer::default().optimize(&request, false).unwrap();

    assert!(result.time_buffer < 0.0);
    assert!(result.has_high_risk());
    assert!(!result.is_feasible());
}

#[test]
fn scenario_cycle_rejected() {
    let request = OptimizationRequest::new(10_000.0, 10.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 8.0).with_dependency("P3"))
        .with_project(Project::new("P2", 8.0).with_dependency("P1"))
        .with_project(Project::new("P3", 8.0).with_dependency("P2"));

    let err = Optimizer::default().optimize(&request, false).unwrap_err();
    match err {
        OptimizeError::Graph(GraphError::CyclicDependency { path }) => {
            assert_eq!(path.first(), path.last());
            assert_eq!(path.len(), 4);
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn scenario_unknown_dependency_rejected() {
    let request = OptimizationRequest::new(10_000.0, 10.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 8.0).with_dependency("ghost"));

    let err = Optimizer::default().optimize(&request, false).unwrap_err();
    assert_eq!(
        err,
        OptimizeError::Graph(GraphError::UnknownDependency {
            project: "P1".into(),
            dependency: "ghost".into(),
        })
    );
}

#[test]
fn scenario_dependent_work_waits() {
    let request = OptimizationRequest::new(50_000.0, 20.0)
        .with_developer(Developer::new("A", 50.0, 8.0).with_skill("backend"))
        .with_developer(Developer::new("B", 40.0, 8.0).with_skill("frontend"))
        .with_project(Project::new("api", 40.0).with_priority(5).with_required_skill("backend"))
        .with_project(
            Project::new("ui", 24.0)
                .with_priority(4)
                .with_dependency("api")
                .with_required_skill("frontend"),
        );

    let result = Optimizer::default().optimize(&request, false).unwrap();

    let api = result.entry_for("api").unwrap();
    let ui = result.entry_for("ui").unwrap();
    assert_eq!(api.developer, "A");
    assert_eq!(ui.developer, "B");
    assert!((ui.start - 5.0).abs() < 1e-10);
    assert!((ui.finish - 8.0).abs() < 1e-10);
    assert!((result.completion_time - 8.0).abs() < 1e-10);
}

#[test]
fn scenario_json_round_trip() {
    let json = r#"{
        "budget": 10000,
        "deadline": 10,
        "developers": [{ "name": "A", "rate": 50, "hours_per_day": 8, "skills": ["python"] }],
        "projects": [{ "name": "P1", "hours": 40, "priority": 3, "required_skills": ["python"] }]
    }"#;
    let request: OptimizationRequest = serde_json::from_str(json).unwrap();
    assert!(validate_request(&request).is_ok());

    let result = Optimizer::default().optimize(&request, false).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["assignments"][0]["hours"], 40.0);
    assert_eq!(value["total_cost"], 2000.0);
    assert_eq!(value["quantum_powered"], false);
    assert_eq!(value["risks"], serde_json::json!([]));
    assert_eq!(value["schedule"][0]["finish"], 5.0);
    assert_eq!(value["metrics"]["budget_efficiency"], 80.0);
}

#[test]
fn scenario_validation_reports_everything() {
    let request = OptimizationRequest::new(-1.0, 10.0)
        .with_developer(Developer::new("A", 0.0, 8.0))
        .with_project(Project::new("P1", 8.0).with_priority(0).with_dependency("P2"));

    let errors = validate_request(&request).unwrap_err();
    let kinds: Vec<_> = errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValidationErrorKind::InvalidBudget,
            ValidationErrorKind::InvalidRate,
            ValidationErrorKind::InvalidPriority,
            ValidationErrorKind::InvalidDependency,
        ]
    );
}

#[derive(Debug)]
struct Garbage;

impl AnnealingBackend for Garbage {
    fn name(&self) -> &str {
        "garbage"
    }

    fn sample(&self, _: &AssignmentModel, _: Duration) -> Result<Plan, SolverError> {
        Ok(vec![usize::MAX])
    }
}

#[test]
fn scenario_invalid_backend_sample_falls_back() {
    let config = OptimizerConfig::new().with_stochastic(StochasticConfig {
        enabled: true,
        seed: Some(3),
        ..StochasticConfig::default()
    });
    let optimizer = Optimizer::new(config).unwrap().with_backend(Arc::new(Garbage));
    let request = OptimizationRequest::new(10_000.0, 10.0)
        .with_developer(python_dev())
        .with_project(Project::new("P1", 40.0).with_required_skill("python"));

    let result = optimizer.optimize(&request, true).unwrap();
    let baseline = Optimizer::default().optimize(&request, false).unwrap();
    assert!(!result.quantum_powered);
    assert_eq!(result, baseline);
}
