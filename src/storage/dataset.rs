//! Dataset loading
//!
//! The dataset document is read once per session and never written back.

use std::path::Path;

use tracing::info;

use super::file_io::read_json_required;
use crate::error::RentboardResult;
use crate::models::Dataset;

/// Load the dataset document at `path`
pub fn load_dataset(path: &Path) -> RentboardResult<Dataset> {
    let dataset: Dataset = read_json_required(path)?;
    info!(
        path = %path.display(),
        units = dataset.unit_count(),
        months = dataset.month_count(),
        "loaded dataset"
    );
    Ok(dataset)
}
