//! JSON Export functionality
//!
//! Exports the summary of a scope, with its per-unit breakdown, to JSON.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{RentboardError, RentboardResult};
use crate::models::{Dataset, Scope, Summary, UnitSummary};
use crate::services::{compute_summary, unit_breakdown};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary export document
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub scope: Scope,

    pub summary: Summary,

    /// Per-unit summaries, dataset order
    pub units: Vec<UnitSummary>,
}

impl SummaryExport {
    /// Build the export for a scope
    pub fn from_dataset(dataset: &Dataset, scope: &Scope) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            scope: scope.clone(),
            summary: compute_summary(dataset, scope),
            units: unit_breakdown(dataset, scope),
        }
    }
}

/// Export the summary of `scope` to JSON
pub fn export_summary_json<W: Write>(
    dataset: &Dataset,
    scope: &Scope,
    writer: &mut W,
    pretty: bool,
) -> RentboardResult<()> {
    let export = SummaryExport::from_dataset(dataset, scope);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| RentboardError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthlyRecord};

    fn dataset() -> Dataset {
        let record = MonthlyRecord::new(
            "Jan",
            Money::from_cents(50000),
            Money::zero(),
            Money::zero(),
            Money::from_cents(10000),
        );
        Dataset::from_units([("A101", vec![record.clone()]), ("B202", vec![record])])
    }

    #[test]
    fn test_export_document() {
        let mut output = Vec::new();
        export_summary_json(&dataset(), &Scope::All, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["scope"], "all");
        assert_eq!(value["summary"]["totalEntry"], 1000);
        assert_eq!(value["summary"]["totalExpenses"], 200);
        assert_eq!(value["summary"]["balance"], 800);
        assert_eq!(value["summary"]["avgEntry"], 500);
        assert_eq!(value["units"][1]["unit"], "B202");
        assert_eq!(value["units"][1]["totalEntry"], 500);
    }

    #[test]
    fn test_export_unit_scope() {
        let export = SummaryExport::from_dataset(&dataset(), &Scope::unit("A101"));
        assert_eq!(export.units.len(), 1);
        assert_eq!(export.summary.month_count, 1);
    }
}
