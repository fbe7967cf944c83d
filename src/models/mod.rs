//! Core data models for the family planner
//!
//! This module contains the plain data structures of the planning domain:
//! money amounts, line items, expense categories, savings goals, milestones
//! and the plan input bundle.

pub mod category;
pub mod goal;
pub mod money;
pub mod plan;

pub use category::{Category, CategoryValidationError, DefaultCategory, LineItem};
pub use goal::{Milestone, SavingsGoal};
pub use money::{format_amount, Money, MoneyParseError};
pub use plan::{Income, PlanInputs, ProjectionParams, DEFAULT_HORIZON_MONTHS, MAX_HORIZON_MONTHS};
