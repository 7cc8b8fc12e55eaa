//! Summary aggregation
//!
//! Folds the monthly records of a scope into totals. Every function here is
//! pure: the dataset is only read, and the same arguments always give the
//! same result.

use tracing::{debug, warn};

use crate::models::{Dataset, Money, MonthlyRecord, Scope, Summary, UnitSummary};

/// Selectable unit identifiers, in dataset order
pub fn unit_list(dataset: &Dataset) -> Vec<&str> {
    dataset.unit_ids().collect()
}

/// Compute the summary of every record in `scope`
///
/// A unit scope naming a unit the dataset does not have yields an all-zero
/// summary.
pub fn compute_summary(dataset: &Dataset, scope: &Scope) -> Summary {
    let units = scope.resolve(dataset);
    if units.is_empty() && !scope.is_all() {
        debug!(scope = %scope, "scope names a unit absent from the dataset");
    }

    let mut total_entry: i128 = 0;
    let mut total_expenses: i128 = 0;
    let mut month_count = 0;

    for records in units.iter().filter_map(|unit| dataset.records(unit)) {
        for record in records {
            total_entry += i128::from(record.entry.cents());
            total_expenses += i128::from(record.total.cents());
        }
        month_count += records.len();
    }

    let fits = [total_entry, total_expenses, total_entry - total_expenses]
        .into_iter()
        .all(|cents| Money::from_wide(cents).is_some());
    if !fits {
        warn!(scope = %scope, "totals exceed the representable range and were clamped");
    }

    let summary = Summary::from_wide_totals(total_entry, total_expenses, month_count);
    debug!(
        scope = %scope,
        units = units.len(),
        months = month_count,
        "computed summary"
    );
    summary
}

/// One summary per unit in `scope`, in dataset order
pub fn unit_breakdown(dataset: &Dataset, scope: &Scope) -> Vec<UnitSummary> {
    scope
        .resolve(dataset)
        .into_iter()
        .map(|unit| UnitSummary {
            unit: unit.to_string(),
            summary: compute_summary(dataset, &Scope::unit(unit)),
        })
        .collect()
}

/// First record of `unit` whose label is `month`
pub fn find_month<'a>(dataset: &'a Dataset, unit: &str, month: &str) -> Option<&'a MonthlyRecord> {
    dataset
        .records(unit)?
        .iter()
        .find(|record| record.month == month)
}
