//! Business logic layer for Rentboard
//!
//! The aggregation the dashboard is built around lives here; reports, the
//! CLI and the TUI all go through these functions.

pub mod summary;

pub use summary::{compute_summary, find_month, unit_breakdown, unit_list};
