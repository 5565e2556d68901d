//! Input validation for optimization requests.
//!
//! Checks the structural integrity of a request before it is optimized and
//! reports every problem found, not just the first. Detects:
//! - Non-positive budget or deadline
//! - Empty developer or project lists
//! - Non-positive rates, daily hours, or project hours
//! - Priorities outside 1..=5
//! - Duplicate names
//! - Unknown or circular dependencies
//!
//! [`crate::Optimizer::optimize`] does not call this; it is meant for the
//! boundary that accepts requests.

use crate::error::GraphError;
use crate::graph::DependencyGraph;
use crate::models::{OptimizationRequest, MAX_PRIORITY, MIN_PRIORITY};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Budget is not a positive finite number.
    InvalidBudget,
    /// Deadline is not a positive finite number.
    InvalidDeadline,
    /// No developers given.
    EmptyDevelopers,
    /// No projects given.
    EmptyProjects,
    /// A developer's hourly rate is not positive.
    InvalidRate,
    /// A developer's daily hours are not positive.
    InvalidCapacity,
    /// A project's estimated hours are not positive.
    InvalidHours,
    /// A project's priority is outside 1..=5.
    InvalidPriority,
    /// Two entities share the same name.
    DuplicateId,
    /// A project depends on a project that doesn't exist.
    InvalidDependency,
    /// The dependency graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[inline]
fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Validates an optimization request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &OptimizationRequest) -> ValidationResult {
    use ValidationErrorKind::*;
    let mut errors = Vec::new();

    if !positive(request.budget) {
        errors.push(ValidationError::new(
            InvalidBudget,
            format!("Budget must be positive, got {}", request.budget),
        ));
    }
    if !positive(request.deadline) {
        errors.push(ValidationError::new(
            InvalidDeadline,
            format!("Deadline must be positive, got {}", request.deadline),
        ));
    }
    if request.developers.is_empty() {
        errors.push(ValidationError::new(EmptyDevelopers, "No developers given"));
    }
    if request.projects.is_empty() {
        errors.push(ValidationError::new(EmptyProjects, "No projects given"));
    }

    let mut developer_names = HashSet::new();
    for dev in &request.developers {
        if !developer_names.insert(dev.name.as_str()) {
            errors.push(ValidationError::new(
                DuplicateId,
                format!("Duplicate developer name: {}", dev.name),
            ));
        }
        if !positive(dev.rate) {
            errors.push(ValidationError::new(
                InvalidRate,
                format!("Developer '{}' has non-positive rate {}", dev.name, dev.rate),
            ));
        }
        if !positive(dev.hours_per_day) {
            errors.push(ValidationError::new(
                InvalidCapacity,
                format!(
                    "Developer '{}' has non-positive hours per day {}",
                    dev.name, dev.hours_per_day
                ),
            ));
        }
    }

    let mut project_names = HashSet::new();
    let mut structural = false;
    for project in &request.projects {
        if !project_names.insert(project.name.as_str()) {
            structural = true;
            errors.push(ValidationError::new(
                DuplicateId,
                format!("Duplicate project name: {}", project.name),
            ));
        }
        if !positive(project.hours) {
            errors.push(ValidationError::new(
                InvalidHours,
                format!(
                    "Project '{}' has non-positive hours {}",
                    project.name, project.hours
                ),
            ));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&project.priority) {
            errors.push(ValidationError::new(
                InvalidPriority,
                format!(
                    "Project '{}' has priority {} outside {MIN_PRIORITY}..={MAX_PRIORITY}",
                    project.name, project.priority
                ),
            ));
        }
    }

    // Check dependency references
    for project in &request.projects {
        for dep in &project.dependencies {
            if !project_names.contains(dep.as_str()) {
                structural = true;
                errors.push(ValidationError::new(
                    InvalidDependency,
                    format!(
                        "Project '{}' references unknown dependency '{}'",
                        project.name, dep
                    ),
                ));
            }
        }
    }

    // Cycles are only meaningful once names resolve
    if !structural {
        if let Err(GraphError::CyclicDependency { path }) =
            DependencyGraph::build(&request.projects)
        {
            errors.push(ValidationError::new(
                CyclicDependency,
                format!("Circular dependency detected: {}", path.join(" -> ")),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Developer, Project};

    fn sample_request() -> OptimizationRequest {
        OptimizationRequest::new(10_000.0, 10.0)
            .with_developer(Developer::new("A", 50.0, 8.0).with_skill("python"))
            .with_developer(Developer::new("B", 40.0, 6.0).with_skill("java"))
            .with_project(Project::new("P1", 40.0).with_priority(3))
            .with_project(Project::new("P2", 20.0).with_dependency("P1"))
    }

    fn kinds(request: &OptimizationRequest) -> Vec<ValidationErrorKind> {
        validate_request(request)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn test_empty_lists() {
        let request = OptimizationRequest::new(10_000.0, 10.0);
        let kinds = kinds(&request);
        assert!(kinds.contains(&ValidationErrorKind::EmptyDevelopers));
        assert!(kinds.contains(&ValidationErrorKind::EmptyProjects));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut request = sample_request();
        request.budget = 0.0;
        request.deadline = f64::NAN;
        request.developers[0].rate = -1.0;
        request.developers[1].hours_per_day = 0.0;
        request.projects[0].hours = 0.0;
        request.projects[1].priority = 9;

        assert_eq!(
            kinds(&request),
            vec![
                ValidationErrorKind::InvalidBudget,
                ValidationErrorKind::InvalidDeadline,
                ValidationErrorKind::InvalidRate,
                ValidationErrorKind::InvalidCapacity,
                ValidationErrorKind::InvalidHours,
                ValidationErrorKind::InvalidPriority,
            ]
        );
    }

    #[test]
    fn test_duplicate_developer_name() {
        let request = sample_request().with_developer(Developer::new("A", 10.0, 8.0));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("developer")));
    }

    #[test]
    fn test_duplicate_project_name() {
        let request = sample_request().with_project(Project::new("P1", 5.0));

        let errors = validate_request(&request).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("project")));
    }

    #[test]
    fn test_unknown_dependency() {
        let request = sample_request().with_project(Project::new("P3", 5.0).with_dependency("P9"));

        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidDependency);
        assert!(errors[0].message.contains("P9"));
    }

    #[test]
    fn test_cyclic_dependency() {
        let request = OptimizationRequest::new(10_000.0, 10.0)
            .with_developer(Developer::new("A", 50.0, 8.0))
            .with_project(Project::new("P1", 10.0).with_dependency("P2"))
            .with_project(Project::new("P2", 10.0).with_dependency("P1"));

        let errors = validate_request(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CyclicDependency);
        assert!(errors[0].message.contains("P1 -> P2 -> P1"));
    }
}
