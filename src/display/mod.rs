//! Display formatting for terminal output
//!
//! Provides utilities for formatting plan inputs, evaluation results and
//! tables for terminal display.

pub mod plan;
pub mod report;
pub mod table;

pub use plan::{format_advice, format_category_tree, format_goals, format_tips};
pub use table::{allocation_table, milestone_table, projection_table};
