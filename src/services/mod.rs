//! Service layer for the family planner
//!
//! The three calculation components (aggregation, projection, health
//! metrics) and the evaluation pass that chains them. Every service is a
//! pure function of its inputs.

pub mod aggregator;
pub mod health;
pub mod plan;
pub mod projector;

pub use aggregator::{
    AllocationKind, AllocationRow, Aggregator, BudgetSnapshot, CategoryTotal, GoalContribution,
};
pub use health::{Advice, HealthMetrics, TIPS};
pub use plan::{evaluate, PlanEvaluation};
pub use projector::{MilestoneOutcome, MilestoneResult, Projection, ProjectionRow, Projector};
