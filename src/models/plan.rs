//! The plan input bundle
//!
//! `PlanInputs` is everything one evaluation pass needs: income, expense
//! categories, savings and debt items, the emergency fund, savings goals,
//! projection parameters and milestones. Amounts are already resolved; the
//! core never sees whether a value came from a default or from the user.

use serde::{Deserialize, Serialize};

use super::category::{total_of, validate_items, Category, DefaultCategory, LineItem};
use super::goal::{Milestone, SavingsGoal};
use super::money::Money;
use crate::error::{PlannerError, PlannerResult};

/// Longest supported projection horizon
pub const MAX_HORIZON_MONTHS: u32 = 36;

/// Horizon used when none is configured
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;

/// Monthly income sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    /// Base monthly salary
    #[serde(default)]
    pub salary: Money,

    /// Monthly bonus
    #[serde(default)]
    pub bonus: Money,

    /// Any other monthly income
    #[serde(default)]
    pub other: Money,
}

impl Income {
    /// Income made of a salary only
    pub fn salary(amount: impl Into<Money>) -> Self {
        Self {
            salary: amount.into(),
            ..Self::default()
        }
    }

    /// Salary + bonus + other income
    pub fn total(&self) -> Money {
        self.salary + self.bonus + self.other
    }
}

/// Projection horizon and income growth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Number of projected months (1..=36)
    #[serde(default = "default_horizon")]
    pub horizon_months: u32,

    /// Fractional monthly income growth (0.05 = 5%)
    #[serde(default)]
    pub monthly_growth_rate: f64,
}

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            monthly_growth_rate: 0.0,
        }
    }
}

impl ProjectionParams {
    /// Create projection parameters
    pub fn new(horizon_months: u32, monthly_growth_rate: f64) -> Self {
        Self {
            horizon_months,
            monthly_growth_rate,
        }
    }

    /// Check the horizon range and growth rate
    pub fn validate(&self) -> PlannerResult<()> {
        if self.horizon_months == 0 || self.horizon_months > MAX_HORIZON_MONTHS {
            return Err(PlannerError::InvalidHorizon {
                months: self.horizon_months,
                max: MAX_HORIZON_MONTHS,
            });
        }

        if !self.monthly_growth_rate.is_finite() || self.monthly_growth_rate < 0.0 {
            return Err(PlannerError::InvalidGrowthRate(self.monthly_growth_rate));
        }

        Ok(())
    }
}

/// Complete input bundle for one evaluation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Monthly income sources
    #[serde(default)]
    pub income: Income,

    /// Expense categories in display order
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Savings and investment items
    #[serde(default)]
    pub savings: Vec<LineItem>,

    /// Monthly emergency fund contribution
    #[serde(default)]
    pub emergency_fund: Money,

    /// Special savings goals
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,

    /// Monthly debt payments
    #[serde(default)]
    pub debts: Vec<LineItem>,

    /// Projection parameters
    #[serde(default)]
    pub projection: ProjectionParams,

    /// Cumulative-savings milestones
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl PlanInputs {
    /// The default household plan
    ///
    /// Salary of Rp 50,000,000, eight expense categories with their default
    /// items, three savings items, an emergency fund contribution and a car
    /// fund goal.
    pub fn household_defaults() -> Self {
        Self {
            income: Income::salary(50_000_000),
            categories: DefaultCategory::all()
                .iter()
                .map(DefaultCategory::to_category)
                .collect(),
            savings: vec![
                LineItem::new("House Savings", 8_000_000),
                LineItem::new("Retirement Savings", 3_000_000),
                LineItem::new("Other Investments", 4_000_000),
            ],
            emergency_fund: Money::new(5_000_000),
            goals: vec![SavingsGoal::new("Car Fund", 100_000_000, 24)],
            debts: Vec::new(),
            projection: ProjectionParams::default(),
            milestones: Vec::new(),
        }
    }

    /// Total of the savings and investment items
    pub fn savings_total(&self) -> Money {
        total_of(&self.savings)
    }

    /// Total of the debt items
    pub fn debt_total(&self) -> Money {
        total_of(&self.debts)
    }

    /// Boundary validation run before an evaluation pass
    ///
    /// Rejects negative amounts, duplicate or empty names and an out-of-range
    /// projection. The calculation itself assumes these hold.
    pub fn validate(&self) -> PlannerResult<()> {
        let income = &self.income;
        for (field, amount) in [
            ("income.salary", income.salary),
            ("income.bonus", income.bonus),
            ("income.other", income.other),
            ("emergency_fund", self.emergency_fund),
        ] {
            if amount.is_negative() {
                return Err(PlannerError::negative_amount(field));
            }
        }

        for (i, category) in self.categories.iter().enumerate() {
            category.validate().map_err(|e| {
                PlannerError::Validation(format!("category '{}': {}", category.name, e))
            })?;
            if self.categories[..i].iter().any(|c| c.name == category.name) {
                return Err(PlannerError::duplicate_name("categories", &category.name));
            }
        }

        validate_items(&self.savings)
            .map_err(|e| PlannerError::Validation(format!("savings: {}", e)))?;
        validate_items(&self.debts)
            .map_err(|e| PlannerError::Validation(format!("debts: {}", e)))?;

        for (i, goal) in self.goals.iter().enumerate() {
            if goal.name.trim().is_empty() {
                return Err(PlannerError::Validation("goal name cannot be empty".into()));
            }
            if goal.target.is_negative() {
                return Err(PlannerError::negative_amount(format!("goal '{}'", goal.name)));
            }
            if self.goals[..i].iter().any(|g| g.name == goal.name) {
                return Err(PlannerError::duplicate_name("goals", &goal.name));
            }
        }

        for milestone in &self.milestones {
            if milestone.target.is_negative() {
                return Err(PlannerError::negative_amount(format!(
                    "milestone '{}'",
                    milestone.name
                )));
            }
        }

        self.check_totals()?;
        self.projection.validate()
    }

    /// Check that income and expenditure can be summed without overflow
    ///
    /// With every amount non-negative, a fitting grand sum means every
    /// partial sum the aggregator takes fits as well.
    pub fn check_totals(&self) -> PlannerResult<()> {
        let income = &self.income;
        let income_total = Money::checked_sum([income.salary, income.bonus, income.other]);

        let items = self
            .categories
            .iter()
            .flat_map(|c| c.items.iter())
            .chain(&self.savings)
            .chain(&self.debts)
            .map(|item| item.amount);
        let expenditure_total =
            Money::checked_sum(items.chain(std::iter::once(self.emergency_fund)));

        match (income_total, expenditure_total) {
            (Some(_), Some(_)) => Ok(()),
            _ => Err(PlannerError::Validation("amount total overflows".into())),
        }
    }
}
