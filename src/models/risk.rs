//! Risk findings.
//!
//! Risks are reported alongside a normally returned result. Budget and
//! deadline overruns are risks, not errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk severity. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lowercase label used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single risk finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Related project or developer name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Risk {
    /// Creates a risk without a subject.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            subject: None,
        }
    }

    /// Creates a high-severity risk.
    pub fn high(message: impl Into<String>) -> Self {
        Self::new(Severity::High, message)
    }

    /// Creates a medium-severity risk.
    pub fn medium(message: impl Into<String>) -> Self {
        Self::new(Severity::Medium, message)
    }

    /// Attaches the related project or developer name.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}
