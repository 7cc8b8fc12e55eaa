//! User settings for Rentboard
//!
//! Manages user preferences: which dataset to load, how currency amounts are
//! written, and how wide chart bars are drawn.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::RentboardPaths;
use crate::error::RentboardError;
use crate::storage::file_io::write_json_atomic;

/// How currency amounts are written (defaults to Brazilian real, pt-BR)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount
    pub symbol: String,

    /// Separator between groups of three integer digits
    pub thousands_separator: char,

    /// Separator between the integer part and the centavos
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

/// Chart rendering preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Width in cells of the longest text bar
    pub bar_width: usize,

    /// Width in columns of a TUI bar
    pub tui_bar_width: u16,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bar_width: 40,
            tui_bar_width: 5,
        }
    }
}

/// User settings for Rentboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Dataset document to load instead of the one in the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<PathBuf>,

    #[serde(default)]
    pub currency: CurrencyFormat,

    #[serde(default)]
    pub chart: ChartSettings,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dataset_path: None,
            currency: CurrencyFormat::default(),
            chart: ChartSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &RentboardPaths) -> Result<Self, RentboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RentboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RentboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RentboardPaths) -> Result<(), RentboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Pick the dataset document to load
    ///
    /// An explicit path (command line or environment) wins over the
    /// configured one, which wins over the data directory default.
    pub fn resolve_dataset_path(
        &self,
        paths: &RentboardPaths,
        explicit: Option<&Path>,
    ) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.dataset_path.clone())
            .unwrap_or_else(|| paths.default_dataset_file())
    }
}
