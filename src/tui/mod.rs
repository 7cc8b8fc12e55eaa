//! Terminal User Interface module
//!
//! Interactive dashboard built on ratatui: a unit selector, the four summary
//! cards, and a bar chart per unit comparing monthly income with expenses.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
