//! Developer model.
//!
//! Developers are the resources that carry out projects. Each developer
//! has an hourly rate, a daily working capacity, and a set of skills.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A developer that can be assigned to projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    /// Unique developer name within a request.
    pub name: String,
    /// Cost per hour.
    pub rate: f64,
    /// Working hours available per day.
    pub hours_per_day: f64,
    /// Skill names.
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

impl Developer {
    /// Creates a developer with no skills.
    pub fn new(name: impl Into<String>, rate: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            rate,
            hours_per_day,
            skills: BTreeSet::new(),
        }
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Adds several skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills.extend(skills.into_iter().map(Into::into));
        self
    }

    /// Whether this developer has a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Cost of `hours` of work.
    #[inline]
    pub fn cost_of(&self, hours: f64) -> f64 {
        hours * self.rate
    }

    /// Elapsed working days needed for `hours` of work.
    #[inline]
    pub fn days_for(&self, hours: f64) -> f64 {
        hours / self.hours_per_day
    }

    /// Hours this developer can book before `horizon_days` elapse.
    #[inline]
    pub fn capacity_hours(&self, horizon_days: f64) -> f64 {
        self.hours_per_day * horizon_days
    }
}
