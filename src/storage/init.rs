//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and a sample
//! dataset to explore the dashboard with.

use tracing::info;

use crate::config::paths::RentboardPaths;
use crate::config::settings::Settings;
use crate::error::{RentboardError, RentboardResult};
use crate::models::Dataset;

use super::file_io::write_json_atomic;

/// Sample dataset bundled with the binary
pub const SAMPLE_DATASET: &str = include_str!("../../data/sample_dataset.json");

/// Parse the bundled sample dataset
pub fn sample_dataset() -> RentboardResult<Dataset> {
    serde_json::from_str(SAMPLE_DATASET)
        .map_err(|e| RentboardError::Dataset(format!("Bundled sample is invalid: {}", e)))
}

/// Initialize storage for a fresh installation
///
/// Existing settings and datasets are left untouched.
pub fn initialize_storage(paths: &RentboardPaths) -> RentboardResult<()> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
    }

    let dataset_path = paths.default_dataset_file();
    if !dataset_path.exists() {
        write_json_atomic(&dataset_path, &sample_dataset()?)?;
        info!(path = %dataset_path.display(), "wrote sample dataset");
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &RentboardPaths) -> bool {
    !paths.is_initialized() || !paths.default_dataset_file().exists()
}
