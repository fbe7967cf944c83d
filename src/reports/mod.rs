//! Reports module for the family planner
//!
//! Report structs built from an evaluation pass: the monthly allocation
//! summary, the savings projection with milestones, and the health check.

pub mod allocation;
pub mod health;
pub mod projection;

pub use allocation::AllocationReport;
pub use health::HealthReport;
pub use projection::{month_label, ProjectionReport};
