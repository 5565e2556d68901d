//! Assignment and timeline models.
//!
//! An assignment binds one developer to one project. A schedule entry
//! places that assignment on the timeline.

use serde::{Deserialize, Serialize};

use super::{Developer, Project};

/// A developer-project assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned developer name.
    pub developer: String,
    /// Assigned project name.
    pub project: String,
    /// Hours booked on the project.
    #[serde(rename = "hours")]
    pub hours_allocated: f64,
    /// `hours_allocated * rate`.
    pub cost: f64,
    /// Fraction of the project's required skills covered (0.0..=1.0).
    pub skill_match: f64,
}

impl Assignment {
    /// Creates an assignment of the full project effort to a developer.
    pub fn full(developer: &Developer, project: &Project, skill_match: f64) -> Self {
        Self {
            developer: developer.name.clone(),
            project: project.name.clone(),
            hours_allocated: project.hours,
            cost: developer.cost_of(project.hours),
            skill_match,
        }
    }
}

/// Start and finish of one assigned project (days from t=0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Project name.
    pub project: String,
    /// Developer working on it.
    pub developer: String,
    /// Start day.
    pub start: f64,
    /// Finish day.
    pub finish: f64,
}

impl ScheduleEntry {
    /// Elapsed days.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_assignment() {
        let dev = Developer::new("A", 50.0, 8.0).with_skill("python");
        let project = Project::new("P1", 40.0).with_required_skill("python");
        let a = Assignment::full(&dev, &project, 1.0);

        assert_eq!(a.developer, "A");
        assert_eq!(a.project, "P1");
        assert!((a.hours_allocated - 40.0).abs() < 1e-10);
        assert!((a.cost - 2000.0).abs() < 1e-10);
    }

    #[test]
    fn test_wire_field_names() {
        let dev = Developer::new("A", 50.0, 8.0);
        let project = Project::new("P1", 40.0);
        let json = serde_json::to_value(Assignment::full(&dev, &project, 1.0)).unwrap();

        assert_eq!(json["hours"], 40.0);
        assert!(json.get("hours_allocated").is_none());
        assert_eq!(json["skill_match"], 1.0);
    }

    #[test]
    fn test_entry_duration() {
        let e = ScheduleEntry {
            project: "P1".into(),
            developer: "A".into(),
            start: 2.0,
            finish: 7.0,
        };
        assert!((e.duration() - 5.0).abs() < 1e-10);
    }
}
