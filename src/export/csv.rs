//! CSV Export functionality
//!
//! Exports the projection (row per month) and the allocation summary.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::PlannerResult;
use crate::reports::{AllocationReport, ProjectionReport};
use crate::services::PlanEvaluation;

/// Export the projection to CSV
///
/// Columns: month label, income, expenditure, net savings, cumulative savings.
pub fn export_projection_csv<W: Write>(
    evaluation: &PlanEvaluation,
    start: Option<NaiveDate>,
    writer: &mut W,
) -> PlannerResult<()> {
    ProjectionReport::generate(&evaluation.projection, &evaluation.milestones, start)
        .export_csv(writer)
}

/// Export the allocation summary to CSV
pub fn export_allocations_csv<W: Write>(
    evaluation: &PlanEvaluation,
    writer: &mut W,
) -> PlannerResult<()> {
    AllocationReport::generate(&evaluation.snapshot).export_csv(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Income, PlanInputs, ProjectionParams};
    use crate::services::evaluate;

    fn evaluation() -> PlanEvaluation {
        let plan = PlanInputs {
            income: Income::salary(10_000_000),
            categories: vec![Category::new("Living").with_item("All", 8_000_000)],
            projection: ProjectionParams::new(2, 0.1),
            ..PlanInputs::default()
        };
        evaluate(&plan).unwrap()
    }

    #[test]
    fn test_export_projection_csv() {
        let mut output = Vec::new();
        export_projection_csv(&evaluation(), NaiveDate::from_ymd_opt(2026, 3, 1), &mut output)
            .unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Mar 2026,10000000.00,8000000.00,2000000.00,2000000.00");
        assert_eq!(lines[2], "Apr 2026,11000000.00,8000000.00,3000000.00,5000000.00");
    }

    #[test]
    fn test_export_allocations_csv() {
        let mut output = Vec::new();
        export_allocations_csv(&evaluation(), &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("Living,category,8000000.00,80.0"));
        assert!(csv_string.contains("TOTAL,,8000000.00,"));
    }
}
