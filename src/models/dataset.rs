//! Dataset model
//!
//! A read-only mapping from unit identifier to that unit's ordered monthly
//! records. Units keep the order the document lists them in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::MonthlyRecord;

/// Monthly records grouped by unit, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    units: Vec<(String, Vec<MonthlyRecord>)>,
}

impl Dataset {
    /// Build a dataset from `(unit, records)` pairs
    ///
    /// A unit listed twice keeps its first position and its last records.
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<MonthlyRecord>)>,
        S: Into<String>,
    {
        let mut dataset = Self::default();
        for (unit, records) in units {
            dataset.insert(unit.into(), records);
        }
        dataset
    }

    fn insert(&mut self, unit: String, records: Vec<MonthlyRecord>) {
        match self.units.iter_mut().find(|(id, _)| *id == unit) {
            Some(slot) => slot.1 = records,
            None => self.units.push((unit, records)),
        }
    }

    /// Unit identifiers in dataset order
    pub fn unit_ids(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|(id, _)| id.as_str())
    }

    /// Records of one unit, or `None` if the unit is not in the dataset
    pub fn records(&self, unit: &str) -> Option<&[MonthlyRecord]> {
        self.units
            .iter()
            .find(|(id, _)| id == unit)
            .map(|(_, records)| records.as_slice())
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|(id, _)| id == unit)
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Total number of monthly records across every unit
    pub fn month_count(&self) -> usize {
        self.units.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.units.len()))?;
        for (unit, records) in &self.units {
            map.serialize_entry(unit, records)?;
        }
        map.end()
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = Dataset;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from unit identifier to a list of monthly records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dataset, A::Error> {
        let mut dataset = Dataset::default();
        while let Some((unit, records)) = access.next_entry::<String, Vec<MonthlyRecord>>()? {
            dataset.insert(unit, records);
        }
        Ok(dataset)
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "B202": [{"month":"Jan","entry":800,"taxes":40,"aluguel":100,"total":140}],
        "A101": [
            {"month":"Jan","entry":1000,"taxes":50,"aluguel":200,"total":250},
            {"month":"Feb","entry":1200,"taxes":60,"aluguel":200,"total":260}
        ],
        "C303": []
    }"#;

    #[test]
    fn test_units_keep_document_order() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        let units: Vec<_> = dataset.unit_ids().collect();
        assert_eq!(units, vec!["B202", "A101", "C303"]);
    }

    #[test]
    fn test_records_keep_document_order() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        let months: Vec<_> = dataset
            .records("A101")
            .unwrap()
            .iter()
            .map(|r| r.month.as_str())
            .collect();
        assert_eq!(months, vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_counts() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(dataset.unit_count(), 3);
        assert_eq!(dataset.month_count(), 3);
        assert!(dataset.contains_unit("C303"));
        assert!(!dataset.contains_unit("Z999"));
        assert!(dataset.records("Z999").is_none());
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn test_duplicate_unit_keeps_first_position_last_value() {
        let json = r#"{
            "A": [{"month":"Jan","entry":1,"taxes":0,"aluguel":0,"total":0}],
            "B": [],
            "A": [{"month":"Feb","entry":2,"taxes":0,"aluguel":0,"total":0}]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        let units: Vec<_> = dataset.unit_ids().collect();
        assert_eq!(units, vec!["A", "B"]);
        assert_eq!(dataset.records("A").unwrap()[0].month, "Feb");
    }

    #[test]
    fn test_serialize_keeps_order() {
        let dataset: Dataset = serde_json::from_str(DOCUMENT).unwrap();
        let json = serde_json::to_string(&dataset).unwrap();

        let b = json.find("B202").unwrap();
        let a = json.find("A101").unwrap();
        assert!(b < a);

        let reparsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, dataset);
    }

    #[test]
    fn test_rejects_amount_beyond_money_range() {
        let json = r#"{"A": [{"month":"Jan","entry":1e20,"taxes":0,"aluguel":0,"total":0}]}"#;
        let err = serde_json::from_str::<Dataset>(json).unwrap_err();
        assert!(err.to_string().contains("amount out of range"));
    }

    #[test]
    fn test_rejects_non_map() {
        assert!(serde_json::from_str::<Dataset>("[]").is_err());
    }
}
