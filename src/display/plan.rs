//! Plan input display formatting
//!
//! Formats the resolved inputs of a plan (categories with their items,
//! savings goals) and the advisory output for terminal display.

use crate::models::{Category, SavingsGoal};
use crate::services::{Advice, GoalContribution, TIPS};

/// Format categories as a tree with their items and totals
pub fn format_category_tree(categories: &[Category], symbol: &str) -> String {
    if categories.is_empty() {
        return "No expense categories.\n\nRun 'planner init' to create the default plan."
            .to_string();
    }

    let mut output = String::new();

    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!(
            "{} ({})\n",
            category.name,
            category.total().format_with_symbol(symbol)
        ));

        if category.is_empty() {
            output.push_str("  (no items)\n");
        } else {
            for (j, item) in category.items.iter().enumerate() {
                let prefix = if j == category.items.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                output.push_str(&format!(
                    "  {}{}: {}\n",
                    prefix,
                    item.name,
                    item.amount.format_with_symbol(symbol)
                ));
            }
        }

        if i < categories.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format savings goals with their monthly contributions
pub fn format_goals(goals: &[SavingsGoal], contributions: &[GoalContribution], symbol: &str) -> String {
    if goals.is_empty() {
        return "No savings goals.\n".to_string();
    }

    let mut output = String::from("Savings Goals:\n");
    for (goal, contribution) in goals.iter().zip(contributions) {
        output.push_str(&format!(
            "  {} - {} over {} months = {} / month\n",
            goal.name,
            goal.target.format_with_symbol(symbol),
            contribution.duration_months,
            crate::models::format_amount(contribution.monthly, symbol)
        ));
    }
    output
}

/// Format advisory messages, one per line
pub fn format_advice(advice: &[Advice]) -> String {
    advice
        .iter()
        .map(|a| {
            let marker = if a.is_warning() { "⚠" } else { "✓" };
            format!("{} {}\n", marker, a.message())
        })
        .collect()
}

/// Format the fixed money-management tips
pub fn format_tips() -> String {
    let mut output = String::from("Money Management Tips\n");
    for tip in TIPS {
        output.push_str(&format!("  - {}\n", tip));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tree() {
        let categories = vec![
            Category::new("Transportation")
                .with_item("Fuel", 1_200_000)
                .with_item("Maintenance", 300_000),
            Category::new("Empty"),
        ];
        let output = format_category_tree(&categories, "Rp");

        assert!(output.contains("Transportation (Rp 1,500,000)"));
        assert!(output.contains("├── Fuel: Rp 1,200,000"));
        assert!(output.contains("└── Maintenance: Rp 300,000"));
        assert!(output.contains("(no items)"));
    }

    #[test]
    fn test_empty_tree_hint() {
        assert!(format_category_tree(&[], "Rp").contains("planner init"));
    }

    #[test]
    fn test_advice_markers() {
        let output = format_advice(&[Advice::CutExpenses, Advice::OnTrack]);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with('⚠'));
        assert!(lines[1].starts_with('✓'));
    }

    #[test]
    fn test_tips_lists_all() {
        assert_eq!(format_tips().lines().count(), TIPS.len() + 1);
    }
}
