//! Path management for Rentboard
//!
//! ## Path Resolution Order
//!
//! 1. `RENTBOARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/rentboard` on Linux, `%APPDATA%\rentboard\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::RentboardError;

/// File name of the default dataset inside the data directory
pub const DEFAULT_DATASET_FILE: &str = "relatorio_por_apartamento.json";

/// Manages all paths used by Rentboard
#[derive(Debug, Clone)]
pub struct RentboardPaths {
    base_dir: PathBuf,
}

impl RentboardPaths {
    /// Create a new RentboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RentboardError> {
        let base_dir = if let Ok(custom) = std::env::var("RENTBOARD_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RentboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (holds the dataset document)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("rentboard.log")
    }

    /// Get the path to the default dataset document
    pub fn default_dataset_file(&self) -> PathBuf {
        self.data_dir().join(DEFAULT_DATASET_FILE)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RentboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentboardError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RentboardError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Rentboard has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RentboardError> {
    ProjectDirs::from("", "", "rentboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RentboardError::Config("Could not determine home directory".into()))
}
