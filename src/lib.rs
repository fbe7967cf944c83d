//! Family Planner - household budget allocation and savings projection
//!
//! This library provides the core of the family planner: it aggregates a
//! household budget into a monthly allocation, projects savings month by
//! month with income growth, resolves savings milestones against the
//! projection, and derives financial health ratios with advice.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Plan inputs (money, categories, goals, projection parameters)
//! - `storage`: Plan file reading and atomic writes
//! - `services`: Aggregator, projector and health deriver
//! - `reports`: Terminal and CSV reports over an evaluation
//! - `display`: Terminal formatting helpers
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `planner` binary
//!
//! # Example
//!
//! ```rust
//! use family_planner::models::PlanInputs;
//! use family_planner::services::evaluate;
//!
//! let plan = PlanInputs::household_defaults();
//! let evaluation = evaluate(&plan).unwrap();
//! assert_eq!(evaluation.projection.len(), 12);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::PlannerError;
