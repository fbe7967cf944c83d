//! One full evaluation pass
//!
//! Chains the aggregator, the projector and the health deriver. A pass either
//! produces every output or fails as a whole; nothing is retained between
//! passes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregator::{Aggregator, BudgetSnapshot};
use super::health::{Advice, HealthMetrics};
use super::projector::{MilestoneResult, Projection, Projector};
use crate::error::PlannerResult;
use crate::models::PlanInputs;

/// Every output of an evaluation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEvaluation {
    pub snapshot: BudgetSnapshot,
    pub projection: Projection,
    pub milestones: Vec<MilestoneResult>,
    pub health: HealthMetrics,
    pub advice: Vec<Advice>,
}

/// Evaluate a plan
///
/// Fails when the projection parameters are invalid or the amounts cannot be
/// summed; every other input is assumed to have passed `PlanInputs::validate`.
pub fn evaluate(inputs: &PlanInputs) -> PlannerResult<PlanEvaluation> {
    let projector = Projector::new(inputs.projection)?;
    inputs.check_totals()?;

    let snapshot = Aggregator::new(inputs).snapshot();
    let projection = projector.project_snapshot(&snapshot);
    let milestones = projection.resolve_all(&inputs.milestones);
    let health = HealthMetrics::derive(&snapshot, projector.params().horizon_months);
    let advice = health.advice();

    debug!(
        months = projection.len(),
        milestones = milestones.len(),
        advice = advice.len(),
        "evaluation pass complete"
    );

    Ok(PlanEvaluation {
        snapshot,
        projection,
        milestones,
        health,
        advice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::{Category, Income, Milestone, Money, ProjectionParams};
    use crate::services::projector::MilestoneOutcome;

    #[test]
    fn test_evaluate_chains_components() {
        let plan = PlanInputs {
            income: Income::salary(10_000_000),
            categories: vec![Category::new("Living").with_item("All", 7_000_000)],
            emergency_fund: Money::new(1_000_000),
            projection: ProjectionParams::new(3, 0.0),
            milestones: vec![
                Milestone::new("First 4M", 4_000_000),
                Milestone::new("Too far", 10_000_000),
            ],
            ..PlanInputs::default()
        };

        let evaluation = evaluate(&plan).unwrap();

        assert_eq!(evaluation.snapshot.residual, 2_000_000.0);
        assert_eq!(evaluation.projection.final_cumulative(), 6_000_000.0);
        assert_eq!(
            evaluation.milestones[0].outcome,
            MilestoneOutcome::Reached { month: 2 }
        );
        assert_eq!(evaluation.milestones[1].outcome, MilestoneOutcome::NotReached);
        assert_eq!(evaluation.health.savings_rate, 20.0);
        assert_eq!(evaluation.advice, vec![Advice::BuildEmergencyFund]);
    }

    #[test]
    fn test_invalid_horizon_rejects_the_pass() {
        let plan = PlanInputs {
            projection: ProjectionParams::new(0, 0.0),
            ..PlanInputs::household_defaults()
        };
        assert!(matches!(
            evaluate(&plan),
            Err(PlannerError::InvalidHorizon { .. })
        ));
    }

    #[test]
    fn test_overflowing_amounts_reject_the_pass() {
        let half = i64::MAX / 2 + 1;
        let plan = PlanInputs {
            categories: vec![Category::new("Huge")
                .with_item("A", half)
                .with_item("B", half)],
            ..PlanInputs::household_defaults()
        };

        assert!(plan.validate().is_err());
        assert!(matches!(evaluate(&plan), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_household_defaults_advice() {
        let evaluation = evaluate(&PlanInputs::household_defaults()).unwrap();

        assert!(evaluation.snapshot.is_overspent());
        assert!(evaluation.advice.contains(&Advice::CutExpenses));
        assert!(evaluation.advice.contains(&Advice::IncreaseSavings));
        assert!(!evaluation.advice.contains(&Advice::OnTrack));
    }
}
