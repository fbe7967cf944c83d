//! Savings Projection Report
//!
//! The month-by-month projection with display labels, plus the milestone
//! outcomes resolved against it.

use chrono::{Months, NaiveDate};
use std::io::Write;

use crate::display::report::{format_amount_colored, format_rate};
use crate::display::{milestone_table, projection_table};
use crate::error::{PlannerError, PlannerResult};
use crate::models::format_amount;
use crate::services::{MilestoneResult, Projection};

/// Display label for a 1-based projection month
///
/// With a start month the label is calendar based (`Jan 2026`); without one
/// it is `Month N`. Labels never influence the numbers.
pub fn month_label(start: Option<NaiveDate>, month: u32) -> String {
    start
        .and_then(|date| date.checked_add_months(Months::new(month.saturating_sub(1))))
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("Month {}", month))
}

/// Projection report for one evaluation pass
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub projection: Projection,
    /// One label per projection row
    pub labels: Vec<String>,
    pub milestones: Vec<MilestoneResult>,
}

impl ProjectionReport {
    /// Build the report, labelling months from an optional start month
    pub fn generate(
        projection: &Projection,
        milestones: &[MilestoneResult],
        start: Option<NaiveDate>,
    ) -> Self {
        let labels = projection
            .rows
            .iter()
            .map(|row| month_label(start, row.month))
            .collect();

        Self {
            projection: projection.clone(),
            labels,
            milestones: milestones.to_vec(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let params = self.projection.params;
        let mut output = String::new();

        output.push_str(&format!(
            "Savings Projection - {} months, income growth {} / month\n\n",
            params.horizon_months,
            format_rate(params.monthly_growth_rate)
        ));
        output.push_str(&projection_table(&self.projection.rows, &self.labels, symbol));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Cumulative savings after {} months: {}\n",
            self.projection.len(),
            format_amount_colored(self.projection.final_cumulative(), symbol)
        ));

        let deficits = self.projection.deficit_months();
        if deficits > 0 {
            output.push_str(&format!(
                "{} of {} months spend more than they earn.\n",
                deficits,
                self.projection.len()
            ));
        }

        if !self.milestones.is_empty() {
            output.push('\n');
            output.push_str(&milestone_table(&self.milestones, symbol));
            output.push('\n');
        }

        output
    }

    /// Export the projection to CSV format
    ///
    /// One row per month: label, income, expenditure, net savings,
    /// cumulative savings.
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> PlannerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record([
            "Month",
            "Income",
            "Expenditure",
            "Net Savings",
            "Cumulative Savings",
        ])?;

        for (row, label) in self.projection.rows.iter().zip(&self.labels) {
            csv.write_record([
                label.clone(),
                format!("{:.2}", row.income),
                format!("{:.2}", row.expenditure),
                format!("{:.2}", row.net_savings),
                format!("{:.2}", row.cumulative_savings),
            ])?;
        }

        csv.flush()
            .map_err(|e| PlannerError::Export(e.to_string()))?;
        Ok(())
    }
}
