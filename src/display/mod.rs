//! Display formatting for terminal output
//!
//! Currency formatting, text bars and the month detail card shared by the
//! CLI reports and the TUI.

pub mod money;
pub mod month;
pub mod report;

pub use money::{format_compact, format_money};
pub use month::MonthDetail;
pub use report::{format_bar, separator, truncate};
