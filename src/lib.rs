//! Developer-to-project assignment and scheduling optimizer.
//!
//! Given a budget, a deadline, a developer pool and a set of interdependent
//! projects, decides which developer works on which project, places the
//! work on a timeline, and reports cost, slack, risks and efficiency
//! metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Developer`, `Project`, `Assignment`,
//!   `ScheduleEntry`, `Risk`, `OptimizationRequest`, `OptimizationResult`
//! - **`graph`**: Dependency validation and deterministic topological order
//! - **`skills`**: Skill-match scoring and coverage gaps
//! - **`solver`**: Greedy and quantum-inspired (annealing) assignment strategies
//! - **`schedule`**: Timeline evaluation and result metrics
//! - **`risk`**: Risk rules over an evaluated plan
//! - **`validation`**: Collect-all request integrity checks
//! - **`config`**: Optimizer configuration
//!
//! # Example
//!
//! ```
//! use u_workforce::{Optimizer, OptimizationRequest};
//! use u_workforce::models::{Developer, Project};
//!
//! let request = OptimizationRequest::new(20_000.0, 10.0)
//!     .with_developer(Developer::new("ana", 60.0, 8.0).with_skills(["rust", "sql"]))
//!     .with_developer(Developer::new("bo", 45.0, 6.0).with_skill("sql"))
//!     .with_project(Project::new("schema", 24.0).with_priority(4).with_required_skill("sql"))
//!     .with_project(
//!         Project::new("api", 40.0)
//!             .with_priority(5)
//!             .with_dependency("schema")
//!             .with_required_skill("rust"),
//!     );
//!
//! let result = Optimizer::default().optimize(&request, false).unwrap();
//! assert_eq!(result.assignments.len(), 2);
//! assert_eq!(result.assignment_for("api").unwrap().developer, "ana");
//! let schema = result.entry_for("schema").unwrap();
//! let api = result.entry_for("api").unwrap();
//! assert!(schema.finish <= api.start);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
mod optimizer;
pub mod risk;
pub mod schedule;
pub mod skills;
pub mod solver;
pub mod validation;

pub use config::OptimizerConfig;
pub use error::OptimizeError;
pub use models::{OptimizationRequest, OptimizationResult};
pub use optimizer::Optimizer;
