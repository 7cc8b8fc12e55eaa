//! Month detail card
//!
//! The breakdown shown when a single month of a unit is inspected, labelled
//! the way the dataset documents name the fields (Entrada, Taxas, Aluguel,
//! Total Saídas).

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::money::format_money;
use crate::config::CurrencyFormat;
use crate::models::{Money, MonthlyRecord};

/// Typed month breakdown for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDetail {
    pub unit: String,
    pub month: String,
    pub entry: Money,
    pub taxes: Money,
    pub aluguel: Money,
    pub total: Money,
}

impl MonthDetail {
    pub fn new(unit: &str, record: &MonthlyRecord) -> Self {
        Self {
            unit: unit.to_string(),
            month: record.month.clone(),
            entry: record.entry,
            taxes: record.taxes,
            aluguel: record.aluguel,
            total: record.total,
        }
    }

    /// Title line, e.g. `A101 · Jan`
    pub fn title(&self) -> String {
        format!("{} · {}", self.unit, self.month)
    }

    /// Labelled amounts, in display order; the last one is the total
    pub fn lines(&self) -> [(&'static str, Money); 4] {
        [
            ("Entrada", self.entry),
            ("Taxas", self.taxes),
            ("Aluguel", self.aluguel),
            ("Total Saídas", self.total),
        ]
    }

    /// Render as a two-column table
    pub fn format_table(&self, currency: &CurrencyFormat) -> String {
        let mut builder = Builder::default();
        builder.push_record([self.title(), String::new()]);
        for (label, amount) in self.lines() {
            builder.push_record([label.to_string(), format_money(amount, currency)]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.modify(Columns::single(1), Alignment::right());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> MonthDetail {
        let record = MonthlyRecord::new(
            "Jan",
            Money::from_cents(100000),
            Money::from_cents(5000),
            Money::from_cents(20000),
            Money::from_cents(25000),
        );
        MonthDetail::new("A101", &record)
    }

    #[test]
    fn test_lines_order() {
        let labels: Vec<_> = detail().lines().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Entrada", "Taxas", "Aluguel", "Total Saídas"]);
        assert_eq!(detail().lines()[3].1, Money::from_cents(25000));
    }

    #[test]
    fn test_format_table() {
        let table = detail().format_table(&CurrencyFormat::default());
        assert!(table.contains("A101 · Jan"));
        assert!(table.contains("Total Saídas"));
        assert!(table.contains("R$ 1.000,00"));
        assert!(table.contains("R$ 50,00"));
        assert!(table.contains("R$ 200,00"));
        assert!(table.contains("R$ 250,00"));
    }
}
