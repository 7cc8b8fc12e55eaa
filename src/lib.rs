//! Rentboard - Terminal dashboard for rental income and expenses
//!
//! This library loads a per-unit dataset of monthly records and aggregates it
//! into the figures a landlord checks first: total income, total expenses,
//! balance and average monthly income, for every unit or for one.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, dataset, scope, summary)
//! - `services`: Aggregation over a scope
//! - `storage`: JSON file loading and first-run initialization
//! - `reports`: Summary report and monthly comparison
//! - `display`: Currency and text formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use rentboard::models::Scope;
//! use rentboard::services::compute_summary;
//! use rentboard::storage::load_dataset;
//!
//! let dataset = load_dataset("relatorio_por_apartamento.json".as_ref())?;
//! let summary = compute_summary(&dataset, &Scope::All);
//! println!("{}", summary.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::RentboardError;
