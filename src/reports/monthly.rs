//! Monthly Comparison Report
//!
//! One panel per unit in scope comparing each month's income with its total
//! expenses. The TUI draws these as bar charts; the CLI as text bars.

use crate::config::CurrencyFormat;
use crate::display::{format_bar, format_compact, format_money, truncate};
use crate::models::{Dataset, Money, Scope};

/// Income and expenses of one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBar {
    pub month: String,
    pub entry: Money,
    pub total: Money,
}

/// Monthly series of a single unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPanel {
    pub unit: String,
    pub months: Vec<MonthBar>,
}

impl UnitPanel {
    /// Largest income or expense value in the panel
    pub fn max_value(&self) -> Money {
        self.months
            .iter()
            .flat_map(|m| [m.entry, m.total])
            .max()
            .unwrap_or_default()
    }
}

/// Monthly Comparison Report
#[derive(Debug, Clone)]
pub struct MonthlyComparison {
    pub scope: Scope,
    pub panels: Vec<UnitPanel>,
}

impl MonthlyComparison {
    /// Generate one panel per unit in scope, dataset order
    pub fn generate(dataset: &Dataset, scope: &Scope) -> Self {
        let panels = scope
            .resolve(dataset)
            .into_iter()
            .filter_map(|unit| dataset.records(unit).map(|records| (unit, records)))
            .map(|(unit, records)| UnitPanel {
                unit: unit.to_string(),
                months: records
                    .iter()
                    .map(|r| MonthBar {
                        month: r.month.clone(),
                        entry: r.entry,
                        total: r.total,
                    })
                    .collect(),
            })
            .collect();

        Self {
            scope: scope.clone(),
            panels,
        }
    }

    /// Format as paired text bars (income `█`, expenses `░`)
    pub fn format_terminal(&self, currency: &CurrencyFormat, bar_width: usize) -> String {
        let mut output = String::new();

        if self.panels.is_empty() {
            output.push_str("No units in scope.\n");
            return output;
        }

        for panel in &self.panels {
            let max = panel.max_value();
            output.push_str(&format!(
                "{}  (max {})\n",
                panel.unit,
                format_compact(max, currency)
            ));
            output.push_str("Monthly comparison: █ income  ░ expenses\n");

            if panel.months.is_empty() {
                output.push_str("  no months\n\n");
                continue;
            }

            for month in &panel.months {
                let label = truncate(&month.month, 10);
                output.push_str(&format!(
                    "  {:<10} {} {}\n",
                    label,
                    format_bar(month.entry, max, bar_width, '█'),
                    format_money(month.entry, currency)
                ));
                output.push_str(&format!(
                    "  {:<10} {} {}\n",
                    "",
                    format_bar(month.total, max, bar_width, '░'),
                    format_money(month.total, currency)
                ));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyRecord;

    fn record(month: &str, entry: i64, total: i64) -> MonthlyRecord {
        MonthlyRecord::new(
            month,
            Money::from_whole_cents(entry, 0),
            Money::zero(),
            Money::zero(),
            Money::from_whole_cents(total, 0),
        )
    }

    fn dataset() -> Dataset {
        Dataset::from_units([
            ("A101", vec![record("Jan", 1000, 250), record("Feb", 2400, 260)]),
            ("B202", vec![]),
        ])
    }

    #[test]
    fn test_one_panel_per_unit_in_scope() {
        let all = MonthlyComparison::generate(&dataset(), &Scope::All);
        let units: Vec<_> = all.panels.iter().map(|p| p.unit.as_str()).collect();
        assert_eq!(units, vec!["A101", "B202"]);

        let single = MonthlyComparison::generate(&dataset(), &Scope::unit("A101"));
        assert_eq!(single.panels.len(), 1);
        assert_eq!(single.panels[0].months.len(), 2);

        let missing = MonthlyComparison::generate(&dataset(), &Scope::unit("Z999"));
        assert!(missing.panels.is_empty());
    }

    #[test]
    fn test_max_value() {
        let report = MonthlyComparison::generate(&dataset(), &Scope::All);
        assert_eq!(report.panels[0].max_value(), Money::from_whole_cents(2400, 0));
        assert_eq!(report.panels[1].max_value(), Money::zero());
    }

    #[test]
    fn test_format_terminal() {
        let report = MonthlyComparison::generate(&dataset(), &Scope::All);
        let output = report.format_terminal(&CurrencyFormat::default(), 20);

        assert!(output.contains("A101"));
        assert!(output.contains("R$2k"));
        assert!(output.contains("R$ 2.400,00"));
        assert!(output.contains(&"█".repeat(20)));
        assert!(output.contains("no months"));
    }

    #[test]
    fn test_format_terminal_empty_scope() {
        let report = MonthlyComparison::generate(&dataset(), &Scope::unit("Z999"));
        assert_eq!(
            report.format_terminal(&CurrencyFormat::default(), 10),
            "No units in scope.\n"
        );
    }
}
