//! CLI commands for data export
//!
//! Writes the evaluation of the current plan in one of the export formats.
//! Without an output path the file goes to the exports directory.

use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::PlannerPaths;
use crate::error::PlannerResult;
use crate::export::{csv, json, yaml};
use crate::storage::write_atomic;

use super::plan::{PlanContext, ProjectionArgs};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (month-by-month projection)
    Csv,
    /// CSV format (allocation summary)
    AllocationCsv,
    /// JSON format (plan plus full evaluation)
    Json,
    /// YAML format (plan plus full evaluation, human-readable)
    Yaml,
}

impl ExportFormat {
    /// File name used when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Csv => "projection.csv",
            Self::AllocationCsv => "allocation.csv",
            Self::Json => "plan-export.json",
            Self::Yaml => "plan-export.yaml",
        }
    }
}

/// Output path for an export: the given path, else the exports directory
pub fn resolve_output(paths: &PlannerPaths, output: Option<&Path>, format: ExportFormat) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.export_dir().join(format.default_file_name()))
}

/// Handle the export command
///
/// The export is rendered in memory first and written atomically, so a
/// failed export never leaves a partial file behind.
pub fn handle_export_command(
    context: &mut PlanContext,
    overrides: &ProjectionArgs,
    output: &Path,
    format: ExportFormat,
    start: Option<&str>,
    pretty: bool,
) -> PlannerResult<()> {
    let evaluation = context.evaluate(overrides)?;
    let start = context.start_month(start)?;

    let mut buffer = Vec::new();
    match format {
        ExportFormat::Csv => csv::export_projection_csv(&evaluation, start, &mut buffer)?,
        ExportFormat::AllocationCsv => csv::export_allocations_csv(&evaluation, &mut buffer)?,
        ExportFormat::Json => {
            json::export_plan_json(&context.inputs, &evaluation, &mut buffer, pretty)?
        }
        ExportFormat::Yaml => yaml::export_plan_yaml(&context.inputs, &evaluation, &mut buffer)?,
    }

    write_atomic(output, &buffer)?;

    match format {
        ExportFormat::Csv => println!(
            "Exported {} months of projection to: {}",
            evaluation.projection.len(),
            output.display()
        ),
        ExportFormat::AllocationCsv => {
            println!("Allocation summary exported to: {}", output.display())
        }
        ExportFormat::Json | ExportFormat::Yaml => {
            println!("Plan and evaluation exported to: {}", output.display())
        }
    }

    info!(path = %output.display(), ?format, bytes = buffer.len(), "export complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::cli::plan::handle_init_command;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> PlanContext {
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        handle_init_command(&paths, &settings, None, false).unwrap();
        PlanContext::load(&paths, &settings, None).unwrap()
    }

    #[test]
    fn test_export_csv_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut context = context(&temp_dir);
        let output = temp_dir.path().join("projection.csv");
        let overrides = ProjectionArgs {
            horizon: Some(3),
            growth: None,
        };

        handle_export_command(&mut context, &overrides, &output, ExportFormat::Csv, Some("2026-01"), false)
            .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.contains("Mar 2026"));
    }

    #[test]
    fn test_failed_export_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut context = context(&temp_dir);
        let output = temp_dir.path().join("bad.csv");
        std::fs::write(&output, "previous export").unwrap();
        let overrides = ProjectionArgs {
            horizon: Some(0),
            growth: None,
        };

        assert!(handle_export_command(&mut context, &overrides, &output, ExportFormat::Csv, None, false)
            .is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous export");

        let overrides = ProjectionArgs::default();
        assert!(handle_export_command(
            &mut context,
            &overrides,
            &output,
            ExportFormat::Csv,
            Some("not-a-month"),
            false
        )
        .is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous export");
        assert!(!temp_dir.path().join("bad.csv.tmp").exists());
    }

    #[test]
    fn test_default_output_in_exports_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            resolve_output(&paths, None, ExportFormat::Yaml),
            temp_dir.path().join("exports").join("plan-export.yaml")
        );
        let explicit = temp_dir.path().join("mine.json");
        assert_eq!(resolve_output(&paths, Some(explicit.as_path()), ExportFormat::Json), explicit);
    }

    #[test]
    fn test_export_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut context = context(&temp_dir);
        let output = temp_dir.path().join("plan.json");

        handle_export_command(
            &mut context,
            &ProjectionArgs::default(),
            &output,
            ExportFormat::Json,
            None,
            true,
        )
        .unwrap();

        let contents = std::fs::read_to_string(&output).unwrap();
        let export: json::PlanExport = serde_json::from_str(&contents).unwrap();
        assert_eq!(export.metadata.category_count, 8);
    }
}
