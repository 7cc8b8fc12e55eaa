//! Configuration module for Rentboard
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RentboardPaths;
pub use settings::{ChartSettings, CurrencyFormat, Settings};
