//! JSON Export functionality
//!
//! Writes the plan inputs together with every evaluation output, so an
//! export can be re-read and compared against a later pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::PlanInputs;
use crate::services::PlanEvaluation;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Full plan export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: u32,

    /// When this export was created
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The plan that was evaluated
    pub inputs: PlanInputs,

    /// Every output of the evaluation pass
    pub evaluation: PlanEvaluation,

    /// Summary counts
    pub metadata: ExportMetadata,
}

/// Summary counts for an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub item_count: usize,
    pub goal_count: usize,
    pub horizon_months: u32,
    pub milestones_reached: usize,
}

impl PlanExport {
    /// Build an export from a plan and its evaluation
    pub fn new(inputs: &PlanInputs, evaluation: &PlanEvaluation) -> Self {
        let metadata = ExportMetadata {
            category_count: inputs.categories.len(),
            item_count: inputs.categories.iter().map(|c| c.items.len()).sum(),
            goal_count: inputs.goals.len(),
            horizon_months: evaluation.projection.params.horizon_months,
            milestones_reached: evaluation
                .milestones
                .iter()
                .filter(|m| m.month().is_some())
                .count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs: inputs.clone(),
            evaluation: evaluation.clone(),
            metadata,
        }
    }

    /// Check the export is readable by this version and internally consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version > EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Export schema version {} is newer than supported version {}",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }

        if self.evaluation.projection.len() != self.metadata.horizon_months as usize {
            return Err(format!(
                "Projection has {} months but the horizon is {}",
                self.evaluation.projection.len(),
                self.metadata.horizon_months
            ));
        }

        Ok(())
    }
}

/// Export a plan and its evaluation to JSON
pub fn export_plan_json<W: Write>(
    inputs: &PlanInputs,
    evaluation: &PlanEvaluation,
    writer: &mut W,
    pretty: bool,
) -> PlannerResult<()> {
    let export = PlanExport::new(inputs, evaluation);
    export.validate().map_err(PlannerError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| PlannerError::Export(format!("JSON serialization failed: {}", e)))?;
    } else {
        serde_json::to_writer(writer, &export)
            .map_err(|e| PlannerError::Export(format!("JSON serialization failed: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Milestone;
    use crate::services::evaluate;

    fn plan() -> PlanInputs {
        let mut plan = PlanInputs::household_defaults();
        plan.milestones.push(Milestone::new("Never", 1));
        plan
    }

    #[test]
    fn test_export_metadata() {
        let plan = plan();
        let evaluation = evaluate(&plan).unwrap();
        let export = PlanExport::new(&plan, &evaluation);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.category_count, 8);
        assert_eq!(export.metadata.goal_count, 1);
        assert_eq!(export.metadata.horizon_months, 12);
        // Household defaults overspend, so no milestone is reached
        assert_eq!(export.metadata.milestones_reached, 0);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_export_json_is_readable() {
        let plan = plan();
        let evaluation = evaluate(&plan).unwrap();

        let mut output = Vec::new();
        export_plan_json(&plan, &evaluation, &mut output, true).unwrap();

        let parsed: PlanExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.inputs, plan);
        assert_eq!(parsed.evaluation.projection.len(), 12);
        assert_eq!(parsed.evaluation.advice, evaluation.advice);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let plan = plan();
        let evaluation = evaluate(&plan).unwrap();
        let mut export = PlanExport::new(&plan, &evaluation);
        export.schema_version = EXPORT_SCHEMA_VERSION + 1;

        assert!(export.validate().is_err());
    }
}
