//! Savings goals and cumulative-savings milestones

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A named amount to be saved over a fixed number of months
/// (e.g., a car fund of Rp 100,000,000 over 24 months)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    /// Goal name
    pub name: String,

    /// Total amount to save
    pub target: Money,

    /// Months over which the target is saved
    pub duration_months: u32,
}

impl SavingsGoal {
    /// Create a new savings goal
    pub fn new(name: impl Into<String>, target: impl Into<Money>, duration_months: u32) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            duration_months,
        }
    }

    /// Duration used for the contribution, floored at one month
    pub fn effective_duration(&self) -> u32 {
        self.duration_months.max(1)
    }

    /// Whether the configured duration had to be floored
    pub fn is_duration_clamped(&self) -> bool {
        self.duration_months == 0
    }

    /// Monthly contribution = target / duration, unrounded
    pub fn monthly_contribution(&self) -> f64 {
        self.target.as_f64() / f64::from(self.effective_duration())
    }
}

/// A named cumulative-savings target tracked for time-to-reach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Milestone name
    pub name: String,

    /// Cumulative savings that must be reached
    pub target: Money,
}

impl Milestone {
    /// Create a new milestone
    pub fn new(name: impl Into<String>, target: impl Into<Money>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}
