//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the evaluation pass.

pub mod export;
pub mod plan;
pub mod report;

pub use export::{handle_export_command, resolve_output, ExportFormat};
pub use plan::{handle_init_command, PlanContext, ProjectionArgs};
pub use report::{
    handle_health_command, handle_milestones_command, handle_project_command,
    handle_summary_command, handle_tips_command,
};
