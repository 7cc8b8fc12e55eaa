//! Reports module for Rentboard
//!
//! Provides the summary report (headline cards and per-unit breakdown) and
//! the monthly income/expense comparison.

pub mod monthly;
pub mod summary;

pub use monthly::{MonthBar, MonthlyComparison, UnitPanel};
pub use summary::{summary_cards, SummaryReport};
