//! Export module for the family planner
//!
//! - CSV: the month-by-month projection or the allocation summary
//!   (spreadsheet-compatible)
//! - JSON: the plan inputs with the full evaluation, machine-readable
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_allocations_csv, export_projection_csv};
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
