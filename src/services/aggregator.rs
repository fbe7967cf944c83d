//! Aggregation of plan inputs into a budget snapshot
//!
//! Sums each category, folds in savings, the emergency fund, goal
//! contributions and debt payments, and derives the grand-total expenditure
//! and the residual (income minus expenditure).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::models::{Money, PlanInputs};

/// Total of a single expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Money,
}

/// Monthly contribution required by a savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalContribution {
    pub name: String,
    pub target: Money,
    /// Duration after flooring at one month
    pub duration_months: u32,
    /// target / duration_months, unrounded
    pub monthly: f64,
}

/// What an allocation row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    Category,
    Savings,
    EmergencyFund,
    Goal,
    Debt,
}

/// One component of the grand-total expenditure with its share of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    pub name: String,
    pub kind: AllocationKind,
    pub amount: f64,
    /// Percentage of total income, one decimal; 0 when income is 0
    pub percent_of_income: f64,
}

/// Aggregated view of one evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    /// Salary + bonus + other income
    pub total_income: Money,
    /// Per-category totals in input order
    pub category_totals: Vec<CategoryTotal>,
    /// Savings and investment items
    pub savings_total: Money,
    pub emergency_fund: Money,
    pub goal_contributions: Vec<GoalContribution>,
    pub debt_total: Money,
    /// Categories + debt + savings + emergency fund + goal contributions
    pub grand_total_expenditure: f64,
    /// Income minus expenditure; negative when overspent
    pub residual: f64,
}

impl BudgetSnapshot {
    /// Sum of all category totals
    pub fn categories_total(&self) -> Money {
        self.category_totals.iter().map(|c| c.total).sum()
    }

    /// Sum of all goal monthly contributions
    pub fn goals_total(&self) -> f64 {
        self.goal_contributions.iter().map(|g| g.monthly).sum()
    }

    /// The whole-unit part of the expenditure (everything except goals)
    pub fn fixed_expenditure(&self) -> Money {
        self.categories_total() + self.debt_total + self.savings_total + self.emergency_fund
    }

    /// Check if expenditure exceeds income
    pub fn is_overspent(&self) -> bool {
        self.residual < 0.0
    }

    /// Look up a category total by name
    pub fn category_total(&self, name: &str) -> Option<Money> {
        self.category_totals
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.total)
    }

    /// Share of total income for an amount, rounded to one decimal
    pub fn percent_of_income(&self, amount: f64) -> f64 {
        round_to(percent(amount, self.total_income.as_f64()), 1)
    }

    /// Every expenditure component in display order
    ///
    /// Categories first, then savings & investment, the emergency fund, each
    /// goal, and debt payments when there are any.
    pub fn allocations(&self) -> Vec<AllocationRow> {
        let mut rows: Vec<(String, AllocationKind, f64)> = self
            .category_totals
            .iter()
            .map(|c| (c.name.clone(), AllocationKind::Category, c.total.as_f64()))
            .collect();

        rows.push((
            "Savings & Investment".to_string(),
            AllocationKind::Savings,
            self.savings_total.as_f64(),
        ));
        rows.push((
            "Emergency Fund".to_string(),
            AllocationKind::EmergencyFund,
            self.emergency_fund.as_f64(),
        ));
        rows.extend(
            self.goal_contributions
                .iter()
                .map(|g| (g.name.clone(), AllocationKind::Goal, g.monthly)),
        );
        if !self.debt_total.is_zero() {
            rows.push((
                "Debt Payments".to_string(),
                AllocationKind::Debt,
                self.debt_total.as_f64(),
            ));
        }

        rows.into_iter()
            .map(|(name, kind, amount)| AllocationRow {
                percent_of_income: self.percent_of_income(amount),
                name,
                kind,
                amount,
            })
            .collect()
    }
}

/// Builds budget snapshots from plan inputs
pub struct Aggregator<'a> {
    inputs: &'a PlanInputs,
}

impl<'a> Aggregator<'a> {
    /// Create a new aggregator over a set of inputs
    pub fn new(inputs: &'a PlanInputs) -> Self {
        Self { inputs }
    }

    /// Per-category totals in input order
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.inputs
            .categories
            .iter()
            .map(|category| CategoryTotal {
                name: category.name.clone(),
                total: category.total(),
            })
            .collect()
    }

    /// Monthly contribution for each savings goal
    pub fn goal_contributions(&self) -> Vec<GoalContribution> {
        self.inputs
            .goals
            .iter()
            .map(|goal| {
                if goal.is_duration_clamped() {
                    warn!(goal = %goal.name, "goal duration is 0 months; using 1 month");
                }
                GoalContribution {
                    name: goal.name.clone(),
                    target: goal.target,
                    duration_months: goal.effective_duration(),
                    monthly: goal.monthly_contribution(),
                }
            })
            .collect()
    }

    /// Aggregate everything into a snapshot
    pub fn snapshot(&self) -> BudgetSnapshot {
        let total_income = self.inputs.income.total();
        let category_totals = self.category_totals();
        let goal_contributions = self.goal_contributions();

        let mut snapshot = BudgetSnapshot {
            total_income,
            category_totals,
            savings_total: self.inputs.savings_total(),
            emergency_fund: self.inputs.emergency_fund,
            goal_contributions,
            debt_total: self.inputs.debt_total(),
            grand_total_expenditure: 0.0,
            residual: 0.0,
        };

        snapshot.grand_total_expenditure =
            snapshot.fixed_expenditure().as_f64() + snapshot.goals_total();
        snapshot.residual = total_income.as_f64() - snapshot.grand_total_expenditure;

        debug!(
            income = total_income.units(),
            expenditure = snapshot.grand_total_expenditure,
            residual = snapshot.residual,
            categories = snapshot.category_totals.len(),
            "aggregated plan inputs"
        );
        if snapshot.is_overspent() {
            info!(residual = snapshot.residual, "expenditure exceeds income");
        }

        snapshot
    }
}

/// numerator / denominator * 100, or 0 when the denominator is 0
pub fn percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator * 100.0 / denominator
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Income, LineItem, SavingsGoal};

    fn single_category_plan() -> PlanInputs {
        PlanInputs {
            income: Income::salary(50_000_000),
            categories: vec![Category::new("Living").with_item("Everything", 40_000_000)],
            ..PlanInputs::default()
        }
    }

    #[test]
    fn test_single_category_residual() {
        let snapshot = Aggregator::new(&single_category_plan()).snapshot();

        assert_eq!(snapshot.grand_total_expenditure, 40_000_000.0);
        assert_eq!(snapshot.residual, 10_000_000.0);
        assert!(!snapshot.is_overspent());
    }

    #[test]
    fn test_empty_category_totals_zero() {
        let plan = PlanInputs {
            categories: vec![Category::new("Nothing yet")],
            ..PlanInputs::default()
        };
        let snapshot = Aggregator::new(&plan).snapshot();

        assert_eq!(snapshot.category_total("Nothing yet"), Some(Money::zero()));
        assert_eq!(snapshot.grand_total_expenditure, 0.0);
    }

    #[test]
    fn test_grand_total_reconstructs_from_parts() {
        let mut plan = PlanInputs::household_defaults();
        plan.debts = vec![
            LineItem::new("Credit Card", 2_000_000),
            LineItem::new("Car Loan", 3_500_000),
        ];
        plan.goals.push(SavingsGoal::new("Holiday", 10_000_000, 7));

        let snapshot = Aggregator::new(&plan).snapshot();

        let categories: i64 = plan.categories.iter().map(|c| c.total().units()).sum();
        let savings: i64 = plan.savings.iter().map(|s| s.amount.units()).sum();
        let goals = 100_000_000.0 / 24.0 + 10_000_000.0 / 7.0;
        let expected = (categories + 5_500_000 + savings + 5_000_000) as f64 + goals;

        assert_eq!(snapshot.debt_total, Money::new(5_500_000));
        assert_eq!(snapshot.grand_total_expenditure, expected);
        assert_eq!(
            snapshot.residual,
            plan.income.total().as_f64() - snapshot.grand_total_expenditure
        );
    }

    #[test]
    fn test_household_defaults_snapshot() {
        let snapshot = Aggregator::new(&PlanInputs::household_defaults()).snapshot();

        assert_eq!(snapshot.categories_total(), Money::new(29_300_000));
        assert_eq!(snapshot.fixed_expenditure(), Money::new(49_300_000));
        assert_eq!(snapshot.goals_total(), 100_000_000.0 / 24.0);
        assert!(snapshot.is_overspent());
        assert!((snapshot.residual - (700_000.0 - 100_000_000.0 / 24.0)).abs() < 1e-6);
    }

    #[test]
    fn test_negative_residual_is_not_clamped() {
        let plan = PlanInputs {
            income: Income::salary(1_000_000),
            categories: vec![Category::new("Rent").with_item("Rent", 3_000_000)],
            ..PlanInputs::default()
        };
        let snapshot = Aggregator::new(&plan).snapshot();

        assert_eq!(snapshot.residual, -2_000_000.0);
        assert!(snapshot.is_overspent());
    }

    #[test]
    fn test_goal_with_zero_duration_uses_one_month() {
        let plan = PlanInputs {
            goals: vec![SavingsGoal::new("Phone", 6_000_000, 0)],
            ..PlanInputs::default()
        };
        let snapshot = Aggregator::new(&plan).snapshot();

        assert_eq!(snapshot.goal_contributions[0].duration_months, 1);
        assert_eq!(snapshot.goal_contributions[0].monthly, 6_000_000.0);
    }

    #[test]
    fn test_percent_of_income() {
        let snapshot = Aggregator::new(&single_category_plan()).snapshot();
        assert_eq!(snapshot.percent_of_income(40_000_000.0), 80.0);
        assert_eq!(snapshot.percent_of_income(1_234_567.0), 2.5);
    }

    #[test]
    fn test_zero_income_percentages_are_zero() {
        let plan = PlanInputs {
            categories: vec![Category::new("Food").with_item("Rice", 500_000)],
            ..PlanInputs::default()
        };
        let snapshot = Aggregator::new(&plan).snapshot();

        assert!(snapshot
            .allocations()
            .iter()
            .all(|row| row.percent_of_income == 0.0));
    }

    #[test]
    fn test_allocations_order_and_debt_row() {
        let mut plan = single_category_plan();
        plan.goals.push(SavingsGoal::new("Car", 12_000_000, 12));
        let rows = Aggregator::new(&plan).snapshot().allocations();

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Living", "Savings & Investment", "Emergency Fund", "Car"]
        );
        assert_eq!(rows[3].kind, AllocationKind::Goal);
        assert_eq!(rows[3].amount, 1_000_000.0);
        assert_eq!(rows[3].percent_of_income, 2.0);

        plan.debts.push(LineItem::new("Loan", 500_000));
        let rows = Aggregator::new(&plan).snapshot().allocations();
        assert_eq!(rows.last().map(|r| r.kind), Some(AllocationKind::Debt));
    }
}
