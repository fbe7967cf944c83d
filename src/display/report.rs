//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report types.

use crate::models::format_amount;

/// Format an amount with color hints for terminal display
pub fn format_amount_colored(amount: f64, symbol: &str) -> String {
    let text = format_amount(amount, symbol);
    if amount.round() < 0.0 {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else if amount.round() > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text) // Green for positive
    } else {
        text
    }
}

/// Format a percentage with one decimal
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a growth rate given as a fraction (0.05 -> "5%")
pub fn format_rate(rate: f64) -> String {
    let pct = rate * 100.0;
    if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
