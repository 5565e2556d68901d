//! Assignment domain models.
//!
//! Provides the input records supplied by collaborators and the output
//! records returned by the optimizer.
//!
//! # Domain Mappings
//!
//! | u-workforce | Scheduling | Staffing |
//! |-------------|------------|----------|
//! | Developer | Resource | Engineer / Contractor |
//! | Project | Task | Work package |
//! | Assignment | Resource allocation | Staffing decision |
//! | OptimizationResult | Schedule + KPIs | Staffing plan |

mod assignment;
mod developer;
mod project;
mod request;
mod result;
mod risk;

pub use assignment::{Assignment, ScheduleEntry};
pub use developer::Developer;
pub use project::{Project, MAX_PRIORITY, MIN_PRIORITY};
pub use request::OptimizationRequest;
pub use result::OptimizationResult;
pub use risk::{Risk, Severity};
