//! Custom error types for the family planner
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for plan inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Projection horizon outside the supported range
    #[error("Invalid horizon: {months} months (must be between 1 and {max})")]
    InvalidHorizon { months: u32, max: u32 },

    /// Monthly growth rate that is negative or not a number
    #[error("Invalid growth rate: {0}")]
    InvalidGrowthRate(f64),

    /// Value parsing errors (amounts, months)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a validation error for a duplicated name
    pub fn duplicate_name(scope: &str, name: impl Into<String>) -> Self {
        Self::Validation(format!("duplicate name in {}: {}", scope, name.into()))
    }

    /// Create a validation error for a negative amount
    pub fn negative_amount(field: impl Into<String>) -> Self {
        Self::Validation(format!("{} must not be negative", field.into()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidHorizon { .. } | Self::InvalidGrowthRate(_)
        )
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PlannerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
