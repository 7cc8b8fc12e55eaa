//! Summary model
//!
//! Aggregated result for one scope. Always derived, never stored.

use serde::Serialize;

use super::money::{div_round_wide, Money};

/// Totals, balance and monthly average for a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of `entry` over every record in scope
    pub total_entry: Money,

    /// Sum of `total` over every record in scope
    pub total_expenses: Money,

    /// `total_entry - total_expenses`
    pub balance: Money,

    /// `total_entry / month_count`, zero when there are no months
    pub avg_entry: Money,

    /// Number of monthly records folded
    pub month_count: usize,
}

impl Summary {
    /// Derive balance and average from totals folded in centavos
    ///
    /// A figure that does not fit in `Money` is clamped to its bound.
    pub fn from_wide_totals(total_entry: i128, total_expenses: i128, month_count: usize) -> Self {
        Self {
            total_entry: Money::saturating_from_wide(total_entry),
            total_expenses: Money::saturating_from_wide(total_expenses),
            balance: Money::saturating_from_wide(total_entry - total_expenses),
            avg_entry: Money::saturating_from_wide(div_round_wide(total_entry, month_count)),
            month_count,
        }
    }
}

/// Summary of a single unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSummary {
    pub unit: String,
    #[serde(flatten)]
    pub summary: Summary,
}
