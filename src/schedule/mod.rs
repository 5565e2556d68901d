//! Schedule evaluation and result metrics.
//!
//! # Evaluation
//!
//! `ScheduleEvaluator` places an assignment plan on a timeline honoring
//! dependency order and developer seriality, and totals its cost.
//!
//! # Metrics
//!
//! `ResultMetrics` summarizes budget and time efficiency, skill fit,
//! and developer utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

mod evaluator;
mod kpi;

pub use evaluator::{Evaluation, ScheduleEvaluator};
pub use kpi::{DeveloperLoad, ResultMetrics};
