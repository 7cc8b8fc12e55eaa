//! Monthly record model
//!
//! One month of income and expenses for one rental unit, exactly as the
//! dataset document carries it.

use serde::{Deserialize, Serialize};

use super::Money;

/// One month's financial activity for one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month label as written in the dataset (e.g. "Jan", "2024-03")
    pub month: String,

    /// Income received in the month
    pub entry: Money,

    /// Tax expense component
    pub taxes: Money,

    /// Rent expense component
    pub aluguel: Money,

    /// Total expenses for the month, taken as-is from the dataset
    pub total: Money,
}

impl MonthlyRecord {
    pub fn new(
        month: impl Into<String>,
        entry: Money,
        taxes: Money,
        aluguel: Money,
        total: Money,
    ) -> Self {
        Self {
            month: month.into(),
            entry,
            taxes,
            aluguel,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_shape() {
        let json = r#"{"month":"Jan","entry":1000,"taxes":50.5,"aluguel":200,"total":250.5}"#;
        let record: MonthlyRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.month, "Jan");
        assert_eq!(record.entry.cents(), 100000);
        assert_eq!(record.taxes.cents(), 5050);
        assert_eq!(record.aluguel.cents(), 20000);
        assert_eq!(record.total.cents(), 25050);
    }

    #[test]
    fn test_total_is_not_recomputed() {
        let json = r#"{"month":"Feb","entry":10,"taxes":1,"aluguel":2,"total":99}"#;
        let record: MonthlyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total.cents(), 9900);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"month":"Jan","entry":1000}"#;
        assert!(serde_json::from_str::<MonthlyRecord>(json).is_err());
    }
}
