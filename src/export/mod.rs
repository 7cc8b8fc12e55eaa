//! Export module for Rentboard
//!
//! - CSV: raw monthly records of a scope (spreadsheet-compatible)
//! - JSON: summary and per-unit breakdown (machine-readable)
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_summary_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
