//! Table rendering for projections and allocations

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::format_amount;
use crate::services::{AllocationRow, MilestoneResult, ProjectionRow};

use super::report::format_percentage;

#[derive(Tabled)]
struct ProjectionLine {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenditure")]
    expenditure: String,
    #[tabled(rename = "Net Savings")]
    net_savings: String,
    #[tabled(rename = "Cumulative")]
    cumulative: String,
}

#[derive(Tabled)]
struct AllocationLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "% of Income")]
    percent: String,
}

#[derive(Tabled)]
struct MilestoneLine {
    #[tabled(rename = "Milestone")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Reached")]
    outcome: String,
}

/// Render projection rows with their display labels
pub fn projection_table(rows: &[ProjectionRow], labels: &[String], symbol: &str) -> String {
    let lines = rows.iter().zip(labels).map(|(row, label)| ProjectionLine {
        month: label.clone(),
        income: format_amount(row.income, symbol),
        expenditure: format_amount(row.expenditure, symbol),
        net_savings: format_amount(row.net_savings, symbol),
        cumulative: format_amount(row.cumulative_savings, symbol),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Render allocation rows
pub fn allocation_table(rows: &[AllocationRow], symbol: &str) -> String {
    let lines = rows.iter().map(|row| AllocationLine {
        name: row.name.clone(),
        amount: format_amount(row.amount, symbol),
        percent: format_percentage(row.percent_of_income),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Render milestone results
pub fn milestone_table(results: &[MilestoneResult], symbol: &str) -> String {
    let lines = results.iter().map(|result| MilestoneLine {
        name: result.name.clone(),
        target: result.target.format_with_symbol(symbol),
        outcome: result.outcome.to_string(),
    });

    Table::new(lines).with(Style::rounded()).to_string()
}
