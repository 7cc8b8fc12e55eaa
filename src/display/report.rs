//! Report formatting utilities for terminal output

use crate::models::Money;

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize, fill: char) -> String {
    if !max_value.is_positive() || !value.is_positive() {
        return " ".repeat(width);
    }

    let ratio = value.cents() as f64 / max_value.cents() as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!(
        "{}{}",
        fill.to_string().repeat(filled),
        " ".repeat(width - filled)
    )
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else {
        let mut out: String = s.chars().take(max_len - 1).collect();
        out.push('…');
        out
    }
}
