//! Core data models for Rentboard
//!
//! This module contains the data structures the dashboard works with:
//! - Money: centavo-precise currency amounts
//! - MonthlyRecord: one month of one unit
//! - Dataset: records grouped by unit
//! - Scope: which units a computation covers
//! - Summary: aggregated totals for a scope

pub mod dataset;
pub mod money;
pub mod record;
pub mod scope;
pub mod summary;

pub use dataset::Dataset;
pub use money::Money;
pub use record::MonthlyRecord;
pub use scope::{Scope, ALL_UNITS};
pub use summary::{Summary, UnitSummary};
