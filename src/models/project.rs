//! Project model.
//!
//! A project is a unit of work to be staffed by exactly one developer.
//! Projects may depend on other projects in the same request; those
//! dependencies form a DAG.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowest accepted priority.
pub const MIN_PRIORITY: u8 = 1;
/// Highest accepted priority (most urgent).
pub const MAX_PRIORITY: u8 = 5;

fn default_priority() -> u8 {
    MIN_PRIORITY
}

/// A project to be assigned and scheduled.
///
/// `hours` is the total effort. Dependencies name other projects that
/// must finish before this one can start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name within a request.
    pub name: String,
    /// Required effort (hours).
    pub hours: f64,
    /// Urgency, 1 (lowest) to 5 (highest).
    #[serde(default = "default_priority")]
    pub priority: u8,
    /// Names of projects that must finish first.
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
    /// Skills the assigned developer should have.
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
}

impl Project {
    /// Creates a project with the lowest priority and no constraints.
    pub fn new(name: impl Into<String>, hours: f64) -> Self {
        Self {
            name: name.into(),
            hours,
            priority: MIN_PRIORITY,
            dependencies: BTreeSet::new(),
            required_skills: BTreeSet::new(),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Adds a dependency on another project.
    pub fn with_dependency(mut self, project: impl Into<String>) -> Self {
        self.dependencies.insert(project.into());
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.insert(skill.into());
        self
    }

    /// Adds several required skills.
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills
            .extend(skills.into_iter().map(Into::into));
        self
    }

    /// Priority scaled to (0, 1], used as an objective weight.
    #[inline]
    pub fn priority_weight(&self) -> f64 {
        f64::from(self.priority) / f64::from(MAX_PRIORITY)
    }

    /// Whether this project depends on any other.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
