//! Financial health ratios and advisory selection

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::aggregator::{percent, BudgetSnapshot};

/// Savings rate below this percentage triggers savings advice
pub const MIN_SAVINGS_RATE: f64 = 20.0;

/// Debt-to-income ratio above this percentage triggers debt advice
pub const MAX_DEBT_RATIO: f64 = 30.0;

/// Emergency coverage below this many months triggers emergency-fund advice
pub const MIN_EMERGENCY_MONTHS: f64 = 3.0;

/// Ratios derived from a snapshot and the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// residual / income * 100; 0 when income is 0
    pub savings_rate: f64,
    /// debt / income * 100; 0 when income is 0
    pub debt_to_income: f64,
    /// emergency fund * horizon / expenditure; 0 when expenditure is 0
    pub emergency_coverage_months: f64,
    /// Income minus expenditure
    pub residual: f64,
}

impl HealthMetrics {
    /// Derive the ratios for a snapshot over a horizon
    ///
    /// Emergency coverage scales with the horizon: the monthly emergency fund
    /// contribution accumulated over the horizon, measured in months of
    /// expenditure.
    pub fn derive(snapshot: &BudgetSnapshot, horizon_months: u32) -> Self {
        let income = snapshot.total_income.as_f64();
        let expenditure = snapshot.grand_total_expenditure;

        let emergency_coverage_months = if expenditure == 0.0 {
            0.0
        } else {
            snapshot.emergency_fund.as_f64() * f64::from(horizon_months) / expenditure
        };

        let metrics = Self {
            savings_rate: percent(snapshot.residual, income),
            debt_to_income: percent(snapshot.debt_total.as_f64(), income),
            emergency_coverage_months,
            residual: snapshot.residual,
        };

        debug!(
            savings_rate = metrics.savings_rate,
            debt_to_income = metrics.debt_to_income,
            emergency_months = metrics.emergency_coverage_months,
            "derived health metrics"
        );

        metrics
    }

    /// Apply the advisory rule table
    ///
    /// Every triggered rule contributes one advice, in rule order. When none
    /// triggers the result is a single `OnTrack`.
    pub fn advice(&self) -> Vec<Advice> {
        let mut advice = Vec::new();

        if self.savings_rate < MIN_SAVINGS_RATE {
            advice.push(Advice::IncreaseSavings);
        }
        if self.debt_to_income > MAX_DEBT_RATIO {
            advice.push(Advice::ReduceDebt);
        }
        if self.emergency_coverage_months < MIN_EMERGENCY_MONTHS {
            advice.push(Advice::BuildEmergencyFund);
        }
        if self.residual < 0.0 {
            advice.push(Advice::CutExpenses);
        }

        if advice.is_empty() {
            advice.push(Advice::OnTrack);
        }
        advice
    }
}

/// An advisory message selected from the health metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    IncreaseSavings,
    ReduceDebt,
    BuildEmergencyFund,
    CutExpenses,
    OnTrack,
}

impl Advice {
    /// Human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::IncreaseSavings => {
                "Your savings rate is below 20%. Consider setting aside more of your income."
            }
            Self::ReduceDebt => {
                "Debt payments exceed 30% of income. Prioritise paying down high-interest debt."
            }
            Self::BuildEmergencyFund => {
                "Emergency fund covers less than 3 months of expenses. Keep building it."
            }
            Self::CutExpenses => {
                "Expenses exceed income! Cut expenses or increase income."
            }
            Self::OnTrack => "Your finances look healthy. Keep it up!",
        }
    }

    /// Whether this advice signals a problem
    pub fn is_warning(&self) -> bool {
        !matches!(self, Self::OnTrack)
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// General money-management tips
pub const TIPS: [&str; 5] = [
    "Always set aside at least 10% of income for an emergency fund",
    "Pay off high-interest debt first",
    "Use the 50-30-20 rule (50% needs, 30% wants, 20% savings)",
    "Review monthly spending regularly and adjust to your needs",
    "Use a budgeting app to track daily spending",
];
