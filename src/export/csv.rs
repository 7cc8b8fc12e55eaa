//! CSV Export functionality
//!
//! Exports the raw monthly records of a scope, one row per unit and month.

use std::io::Write;

use crate::error::{RentboardError, RentboardResult};
use crate::models::{Dataset, Scope};

/// Export every record in `scope` to CSV
///
/// Returns the number of records written.
pub fn export_records_csv<W: Write>(
    dataset: &Dataset,
    scope: &Scope,
    writer: W,
) -> RentboardResult<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| RentboardError::Export(e.to_string());

    csv.write_record(["Unit", "Month", "Entry", "Taxes", "Aluguel", "Total"])
        .map_err(export_err)?;

    let mut written = 0;
    for unit in scope.resolve(dataset) {
        for record in dataset.records(unit).unwrap_or_default() {
            csv.write_record([
                unit.to_string(),
                record.month.clone(),
                format!("{:.2}", record.entry.to_decimal()),
                format!("{:.2}", record.taxes.to_decimal()),
                format!("{:.2}", record.aluguel.to_decimal()),
                format!("{:.2}", record.total.to_decimal()),
            ])
            .map_err(export_err)?;
            written += 1;
        }
    }

    csv.flush()
        .map_err(|e| RentboardError::Export(e.to_string()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthlyRecord};

    fn dataset() -> Dataset {
        let record = |month: &str, entry: i64| {
            MonthlyRecord::new(
                month,
                Money::from_cents(entry),
                Money::from_cents(5050),
                Money::from_cents(20000),
                Money::from_cents(25050),
            )
        };
        Dataset::from_units([
            ("Apto 101, bloco A", vec![record("Jan", 100000), record("Feb", 120050)]),
            ("B202", vec![record("Jan", 50000)]),
        ])
    }

    #[test]
    fn test_export_all_records() {
        let mut buffer = Vec::new();
        let written = export_records_csv(&dataset(), &Scope::All, &mut buffer).unwrap();
        assert_eq!(written, 3);

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Unit,Month,Entry,Taxes,Aluguel,Total");
        assert_eq!(lines[1], "\"Apto 101, bloco A\",Jan,1000.00,50.50,200.00,250.50");
        assert_eq!(lines[2], "\"Apto 101, bloco A\",Feb,1200.50,50.50,200.00,250.50");
        assert_eq!(lines[3], "B202,Jan,500.00,50.50,200.00,250.50");
    }

    #[test]
    fn test_export_single_unit() {
        let mut buffer = Vec::new();
        let written =
            export_records_csv(&dataset(), &Scope::unit("B202"), &mut buffer).unwrap();
        assert_eq!(written, 1);
    }

    #[test]
    fn test_export_missing_unit_writes_header_only() {
        let mut buffer = Vec::new();
        let written =
            export_records_csv(&dataset(), &Scope::unit("Z999"), &mut buffer).unwrap();
        assert_eq!(written, 0);
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
