//! Summary Report
//!
//! The four headline figures for a scope plus the per-unit breakdown behind
//! them.

use std::io::Write;

use crate::config::CurrencyFormat;
use crate::display::{format_money, separator};
use crate::error::{RentboardError, RentboardResult};
use crate::models::{Dataset, Money, Scope, Summary, UnitSummary};
use crate::services::{compute_summary, unit_breakdown};

const WIDTH: usize = 80;

/// Summary Report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub scope: Scope,
    pub summary: Summary,
    /// One row per unit in scope, dataset order
    pub units: Vec<UnitSummary>,
}

impl SummaryReport {
    /// Generate the report for a scope
    pub fn generate(dataset: &Dataset, scope: &Scope) -> Self {
        Self {
            scope: scope.clone(),
            summary: compute_summary(dataset, scope),
            units: unit_breakdown(dataset, scope),
        }
    }

    /// The headline cards, in display order
    pub fn cards(&self) -> [(&'static str, Money); 4] {
        summary_cards(&self.summary)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &CurrencyFormat) -> String {
        let mut output = String::new();

        let title = if self.scope.is_all() {
            "All units".to_string()
        } else {
            self.scope.to_string()
        };
        output.push_str(&format!("Financial Summary: {}\n", title));
        output.push_str(&"=".repeat(WIDTH));
        output.push('\n');

        for (label, amount) in self.cards() {
            output.push_str(&format!(
                "{:<18} {:>20}\n",
                format!("{}:", label),
                format_money(amount, currency)
            ));
        }
        output.push_str(&format!("{:<18} {:>20}\n", "Months:", self.summary.month_count));

        if self.units.is_empty() {
            output.push_str("\nNo units in scope.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>7} {:>16} {:>16} {:>16}\n",
            "Unit", "Months", "Income", "Expenses", "Balance"
        ));
        output.push_str(&separator(WIDTH));
        output.push('\n');

        for row in &self.units {
            output.push_str(&format!(
                "{:<16} {:>7} {:>16} {:>16} {:>16}\n",
                row.unit,
                row.summary.month_count,
                format_money(row.summary.total_entry, currency),
                format_money(row.summary.total_expenses, currency),
                format_money(row.summary.balance, currency),
            ));
        }

        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>7} {:>16} {:>16} {:>16}\n",
            "TOTAL",
            self.summary.month_count,
            format_money(self.summary.total_entry, currency),
            format_money(self.summary.total_expenses, currency),
            format_money(self.summary.balance, currency),
        ));

        output
    }

    /// Export the per-unit breakdown and total to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> RentboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| RentboardError::Export(e.to_string());

        csv.write_record([
            "Scope",
            "Unit",
            "Months",
            "Total Income",
            "Total Expenses",
            "Balance",
            "Average Income",
        ])
        .map_err(export_err)?;

        let scope = self.scope.to_string();
        let rows = self
            .units
            .iter()
            .map(|u| (u.unit.as_str(), &u.summary))
            .chain(std::iter::once(("TOTAL", &self.summary)));

        for (unit, summary) in rows {
            csv.write_record([
                scope.clone(),
                unit.to_string(),
                summary.month_count.to_string(),
                format!("{:.2}", summary.total_entry.to_decimal()),
                format!("{:.2}", summary.total_expenses.to_decimal()),
                format!("{:.2}", summary.balance.to_decimal()),
                format!("{:.2}", summary.avg_entry.to_decimal()),
            ])
            .map_err(export_err)?;
        }

        csv.flush()
            .map_err(|e| RentboardError::Export(e.to_string()))?;
        Ok(())
    }
}

/// Label and amount of each headline card
pub fn summary_cards(summary: &Summary) -> [(&'static str, Money); 4] {
    [
        ("Total Income", summary.total_entry),
        ("Total Expenses", summary.total_expenses),
        ("Balance", summary.balance),
        ("Monthly Average", summary.avg_entry),
    ]
}
