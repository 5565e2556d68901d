//! Skill matching.
//!
//! Scores how well a developer's skills cover a project's requirements,
//! and finds requirements that no developer in the pool can cover.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Developer, Project};

/// Fraction of `required` covered by `skills`.
///
/// Returns 1.0 when nothing is required.
pub fn skill_match(skills: &BTreeSet<String>, required: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let covered = required.iter().filter(|s| skills.contains(*s)).count();
    covered as f64 / required.len() as f64
}

/// Skill match of a developer for a project.
#[inline]
pub fn developer_match(developer: &Developer, project: &Project) -> f64 {
    skill_match(&developer.skills, &project.required_skills)
}

/// A required skill that no developer has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncoveredSkill {
    /// Skill name.
    pub skill: String,
    /// First project (input order) requiring it.
    pub project: String,
}

/// Lists required skills that no developer in the pool has.
///
/// Each skill is reported once, in order of first appearance across
/// projects in input order.
pub fn uncovered_skills(developers: &[Developer], projects: &[Project]) -> Vec<UncoveredSkill> {
    let available: HashSet<&str> = developers
        .iter()
        .flat_map(|d| d.skills.iter().map(String::as_str))
        .collect();

    let mut seen = HashSet::new();
    let mut uncovered = Vec::new();
    for project in projects {
        for skill in &project.required_skills {
            if !available.contains(skill.as_str()) && seen.insert(skill.as_str()) {
                uncovered.push(UncoveredSkill {
                    skill: skill.clone(),
                    project: project.name.clone(),
                });
            }
        }
    }
    uncovered
}
