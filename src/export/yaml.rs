//! YAML Export functionality
//!
//! The same document as the JSON export, in a form that is easier to read
//! and diff by hand.

use std::io::Write;

use super::json::PlanExport;
use crate::error::{PlannerError, PlannerResult};
use crate::models::PlanInputs;
use crate::services::PlanEvaluation;

/// Export a plan and its evaluation to YAML
pub fn export_plan_yaml<W: Write>(
    inputs: &PlanInputs,
    evaluation: &PlanEvaluation,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = PlanExport::new(inputs, evaluation);
    export.validate().map_err(PlannerError::Export)?;

    writeln!(writer, "# Family Planner Export")
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Schema Version: {}", export.schema_version)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "# Exported At: {}", export.exported_at)
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    writeln!(writer, "#").map_err(|e| PlannerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)
        .map_err(|e| PlannerError::Export(format!("YAML serialization failed: {}", e)))?;

    Ok(())
}
