//! Optimization request model.

use serde::{Deserialize, Serialize};

use super::{Developer, Project};

/// Input for one optimization call.
///
/// Field-level correctness (positive numbers, priority range, unique
/// names) is checked by [`crate::validation::validate_request`] at the
/// boundary. The optimizer only enforces structural constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Total money available.
    pub budget: f64,
    /// Working days available.
    pub deadline: f64,
    /// Developer pool.
    pub developers: Vec<Developer>,
    /// Projects to staff.
    pub projects: Vec<Project>,
}

impl OptimizationRequest {
    /// Creates an empty request.
    pub fn new(budget: f64, deadline: f64) -> Self {
        Self {
            budget,
            deadline,
            developers: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// Adds a developer.
    pub fn with_developer(mut self, developer: Developer) -> Self {
        self.developers.push(developer);
        self
    }

    /// Adds a project.
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Total effort across all projects (hours).
    pub fn total_hours(&self) -> f64 {
        self.projects.iter().map(|p| p.hours).sum()
    }

    /// Finds a developer by name.
    pub fn developer(&self, name: &str) -> Option<&Developer> {
        self.developers.iter().find(|d| d.name == name)
    }

    /// Finds a project by name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
