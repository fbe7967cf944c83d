//! CLI commands for the evaluation reports
//!
//! Every command here loads the plan, runs one evaluation pass and prints
//! part of its output.

use crate::display::report::separator;
use crate::display::{
    allocation_table, format_category_tree, format_goals, format_tips, milestone_table,
};
use crate::error::PlannerResult;
use crate::models::format_amount;
use crate::reports::{AllocationReport, HealthReport, ProjectionReport};

use super::plan::{PlanContext, ProjectionArgs};

/// Show the monthly allocation summary
///
/// With `detail` the category items and goal contributions are listed too;
/// with `table` the allocation is rendered as a plain table without bars.
pub fn handle_summary_command(
    context: &mut PlanContext,
    detail: bool,
    table: bool,
) -> PlannerResult<()> {
    let evaluation = context.evaluate(&ProjectionArgs::default())?;
    let report = AllocationReport::generate(&evaluation.snapshot);
    let symbol = context.symbol();

    if table {
        println!("Monthly Allocation Summary");
        println!("{}", allocation_table(&report.rows, symbol));
        println!();
        println!("{}", report.status_line());
    } else {
        print!("{}", report.format_terminal(symbol));
    }

    if detail {
        let inputs = &context.inputs;
        let contributions = &evaluation.snapshot.goal_contributions;

        println!();
        println!("Expense Categories");
        println!("{}", separator(40));
        println!("{}", format_category_tree(&inputs.categories, symbol));
        println!();
        print!("{}", format_goals(&inputs.goals, contributions, symbol));
    }

    Ok(())
}

/// Show the month-by-month projection
pub fn handle_project_command(
    context: &mut PlanContext,
    overrides: &ProjectionArgs,
    start: Option<&str>,
) -> PlannerResult<()> {
    let evaluation = context.evaluate(overrides)?;
    let start = context.start_month(start)?;

    let report = ProjectionReport::generate(&evaluation.projection, &[], start);
    print!("{}", report.format_terminal(context.symbol()));

    Ok(())
}

/// Show when each milestone is first reached
pub fn handle_milestones_command(
    context: &mut PlanContext,
    overrides: &ProjectionArgs,
) -> PlannerResult<()> {
    let evaluation = context.evaluate(overrides)?;

    if evaluation.milestones.is_empty() {
        println!("No milestones defined.");
        println!("Add a 'milestones' list to {}", context.plan_path.display());
        return Ok(());
    }

    let params = evaluation.projection.params;
    println!(
        "Milestones - {} month horizon, final cumulative savings {}",
        params.horizon_months,
        format_amount(evaluation.projection.final_cumulative(), context.symbol())
    );
    println!("{}", milestone_table(&evaluation.milestones, context.symbol()));

    Ok(())
}

/// Show the health ratios and the advice selected from them
pub fn handle_health_command(
    context: &mut PlanContext,
    overrides: &ProjectionArgs,
) -> PlannerResult<()> {
    let evaluation = context.evaluate(overrides)?;

    let report = HealthReport::generate(
        evaluation.health,
        &evaluation.advice,
        evaluation.projection.params.horizon_months,
    );
    print!("{}", report.format_terminal(context.symbol()));

    Ok(())
}

/// Show the fixed money-management tips
pub fn handle_tips_command() -> PlannerResult<()> {
    print!("{}", format_tips());
    Ok(())
}
