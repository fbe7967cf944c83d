//! Month-by-month savings projection and milestone resolution
//!
//! Income compounds monthly at a fixed rate; expenditure is held constant for
//! the whole horizon. Each row carries that month's net savings and the
//! running cumulative total.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::aggregator::BudgetSnapshot;
use crate::error::PlannerResult;
use crate::models::{Milestone, Money, ProjectionParams};

/// One projected month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// 1-based month index
    pub month: u32,
    pub income: f64,
    pub expenditure: f64,
    /// income - expenditure for this month
    pub net_savings: f64,
    /// Net savings summed from month 1 through this month
    pub cumulative_savings: f64,
}

/// An ordered projection over the configured horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub params: ProjectionParams,
    pub rows: Vec<ProjectionRow>,
}

impl Projection {
    /// Number of projected months
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the projection has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cumulative savings at the end of the horizon
    pub fn final_cumulative(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.cumulative_savings)
    }

    /// Months whose net savings are negative
    pub fn deficit_months(&self) -> usize {
        self.rows.iter().filter(|row| row.net_savings < 0.0).count()
    }

    /// Resolve a milestone against this projection
    pub fn resolve(&self, milestone: &Milestone) -> MilestoneResult {
        let target = milestone.target.as_f64();
        let outcome = self
            .rows
            .iter()
            .find(|row| row.cumulative_savings >= target)
            .map_or(MilestoneOutcome::NotReached, |row| MilestoneOutcome::Reached {
                month: row.month,
            });

        MilestoneResult {
            name: milestone.name.clone(),
            target: milestone.target,
            outcome,
        }
    }

    /// Resolve every milestone, preserving input order
    pub fn resolve_all(&self, milestones: &[Milestone]) -> Vec<MilestoneResult> {
        milestones.iter().map(|m| self.resolve(m)).collect()
    }
}

/// Whether and when a milestone is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MilestoneOutcome {
    /// First month (1-based) whose cumulative savings meet the target
    Reached { month: u32 },
    /// Cumulative savings stay below the target for the whole horizon
    NotReached,
}

impl fmt::Display for MilestoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reached { month } => write!(f, "month {}", month),
            Self::NotReached => write!(f, "not reached within horizon"),
        }
    }
}

/// A milestone with its resolved outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneResult {
    pub name: String,
    pub target: Money,
    pub outcome: MilestoneOutcome,
}

impl MilestoneResult {
    /// The month the milestone is reached, if any
    pub fn month(&self) -> Option<u32> {
        match self.outcome {
            MilestoneOutcome::Reached { month } => Some(month),
            MilestoneOutcome::NotReached => None,
        }
    }
}

/// Produces projections for a validated horizon and growth rate
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    params: ProjectionParams,
}

impl Projector {
    /// Create a projector, rejecting a horizon outside 1..=36 or a negative
    /// growth rate
    pub fn new(params: ProjectionParams) -> PlannerResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters this projector runs with
    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    /// Project from a starting income and a constant expenditure
    pub fn project(&self, income: f64, expenditure: f64) -> Projection {
        let growth = 1.0 + self.params.monthly_growth_rate;
        let mut rows = Vec::with_capacity(self.params.horizon_months as usize);
        let mut month_income = income;
        let mut cumulative = 0.0;

        for month in 1..=self.params.horizon_months {
            if month > 1 {
                month_income *= growth;
            }
            let net_savings = month_income - expenditure;
            cumulative += net_savings;

            rows.push(ProjectionRow {
                month,
                income: month_income,
                expenditure,
                net_savings,
                cumulative_savings: cumulative,
            });
        }

        debug!(
            horizon = self.params.horizon_months,
            growth_rate = self.params.monthly_growth_rate,
            final_cumulative = cumulative,
            "projected savings"
        );

        Projection {
            params: self.params,
            rows,
        }
    }

    /// Project from a snapshot's total income and grand-total expenditure
    pub fn project_snapshot(&self, snapshot: &BudgetSnapshot) -> Projection {
        self.project(
            snapshot.total_income.as_f64(),
            snapshot.grand_total_expenditure,
        )
    }
}
