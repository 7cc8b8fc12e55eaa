//! Popup dialogs

pub mod help;
pub mod month_detail;
