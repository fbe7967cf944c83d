//! Financial Health Report

use crate::display::format_advice;
use crate::display::report::{format_amount_colored, format_percentage, separator};
use crate::services::health::{MAX_DEBT_RATIO, MIN_EMERGENCY_MONTHS, MIN_SAVINGS_RATE};
use crate::services::{Advice, HealthMetrics};

/// Health metrics with the advice selected from them
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub metrics: HealthMetrics,
    pub advice: Vec<Advice>,
    pub horizon_months: u32,
}

impl HealthReport {
    /// Build the report
    pub fn generate(metrics: HealthMetrics, advice: &[Advice], horizon_months: u32) -> Self {
        Self {
            metrics,
            advice: advice.to_vec(),
            horizon_months,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let m = &self.metrics;
        let mut output = String::new();

        output.push_str("Financial Health\n");
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>10}   (target ≥ {:.0}%)\n",
            "Savings rate",
            format_percentage(m.savings_rate),
            MIN_SAVINGS_RATE
        ));
        output.push_str(&format!(
            "{:<30} {:>10}   (target ≤ {:.0}%)\n",
            "Debt-to-income",
            format_percentage(m.debt_to_income),
            MAX_DEBT_RATIO
        ));
        output.push_str(&format!(
            "{:<30} {:>10}   (target ≥ {:.0} months)\n",
            format!("Emergency cover ({} mo.)", self.horizon_months),
            format!("{:.1} mo", m.emergency_coverage_months),
            MIN_EMERGENCY_MONTHS
        ));
        output.push_str(&format!(
            "{:<30} {}\n",
            "Monthly residual",
            format_amount_colored(m.residual, symbol)
        ));
        output.push('\n');
        output.push_str(&format_advice(&self.advice));

        output
    }
}
