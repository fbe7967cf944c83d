//! Allocation Summary Report
//!
//! Shows every expenditure component with its amount, share of income and a
//! bar, followed by the monthly totals and the overspend status line.

use std::io::Write;

use crate::display::report::{double_separator, format_bar, format_percentage, separator, truncate};
use crate::error::{PlannerError, PlannerResult};
use crate::models::format_amount;
use crate::services::{AllocationRow, BudgetSnapshot};

const BAR_WIDTH: usize = 20;

/// Allocation summary for one evaluation pass
#[derive(Debug, Clone)]
pub struct AllocationReport {
    /// One row per expenditure component
    pub rows: Vec<AllocationRow>,
    pub total_income: f64,
    pub total_expenditure: f64,
    pub residual: f64,
}

impl AllocationReport {
    /// Build the report from a snapshot
    pub fn generate(snapshot: &BudgetSnapshot) -> Self {
        Self {
            rows: snapshot.allocations(),
            total_income: snapshot.total_income.as_f64(),
            total_expenditure: snapshot.grand_total_expenditure,
            residual: snapshot.residual,
        }
    }

    /// Check if expenditure exceeds income
    pub fn is_overspent(&self) -> bool {
        self.residual < 0.0
    }

    /// Status line selected by the residual sign
    pub fn status_line(&self) -> &'static str {
        if self.is_overspent() {
            "⚠ Expenses exceed income! Cut expenses or increase income."
        } else {
            "✓ Allocation fits within monthly income."
        }
    }

    /// The largest allocation, if any
    pub fn largest(&self) -> Option<&AllocationRow> {
        self.rows
            .iter()
            .max_by(|a, b| a.amount.total_cmp(&b.amount))
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Allocation Summary\n");
        output.push_str(&double_separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>18} {:>8}  {}\n",
            "Category", "Amount", "%", "Share"
        ));
        output.push_str(&separator(78));
        output.push('\n');

        let max = self.largest().map_or(0.0, |row| row.amount);
        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>18} {:>8}  {}\n",
                truncate(&row.name, 28),
                format_amount(row.amount, symbol),
                format_percentage(row.percent_of_income),
                format_bar(row.amount, max, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            "Total Income",
            format_amount(self.total_income, symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            "Total Expenditure",
            format_amount(self.total_expenditure, symbol)
        ));
        output.push_str(&format!(
            "{:<28} {:>18}\n",
            "Remaining",
            format_amount(self.residual, symbol)
        ));
        output.push('\n');
        output.push_str(self.status_line());
        output.push('\n');

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> PlannerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Category", "Kind", "Amount", "Percent of Income"])?;
        for row in &self.rows {
            let kind = serde_json::to_value(row.kind)?;
            csv.write_record([
                row.name.clone(),
                kind.as_str().unwrap_or_default().to_string(),
                format!("{:.2}", row.amount),
                format!("{:.1}", row.percent_of_income),
            ])?;
        }
        csv.write_record([
            "TOTAL".to_string(),
            String::new(),
            format!("{:.2}", self.total_expenditure),
            String::new(),
        ])?;

        csv.flush()
            .map_err(|e| PlannerError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanInputs;
    use crate::services::Aggregator;

    fn report() -> AllocationReport {
        AllocationReport::generate(&Aggregator::new(&PlanInputs::household_defaults()).snapshot())
    }

    #[test]
    fn test_generate_report() {
        let report = report();

        assert_eq!(report.rows.len(), 11);
        assert_eq!(report.total_income, 50_000_000.0);
        assert!(report.is_overspent());
        assert_eq!(report.largest().map(|r| r.name.as_str()), Some("Savings & Investment"));
    }

    #[test]
    fn test_terminal_format() {
        let output = report().format_terminal("Rp");

        assert!(output.contains("Monthly Allocation Summary"));
        assert!(output.contains("Essentials"));
        assert!(output.contains("Rp 14,700,000"));
        assert!(output.contains("29.4%"));
        assert!(output.contains("Car Fund"));
        assert!(output.contains("Rp 4,166,667"));
        assert!(output.contains("Expenses exceed income"));
    }

    #[test]
    fn test_csv_export() {
        let mut csv_output = Vec::new();
        report().export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let mut lines = csv_string.lines();
        assert_eq!(lines.next(), Some("Category,Kind,Amount,Percent of Income"));
        assert_eq!(lines.next(), Some("Essentials,category,14700000.00,29.4"));
        assert!(csv_string.contains("Car Fund,goal,4166666.67,8.3"));
        assert!(csv_string.contains("Emergency Fund,emergency_fund,5000000.00,10.0"));
        assert!(csv_string.contains("Health & Insurance"));
    }
}
