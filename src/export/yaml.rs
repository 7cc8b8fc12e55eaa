//! YAML Export functionality
//!
//! Same document as the JSON export, in human-readable form.

use std::io::Write;

use crate::error::{RentboardError, RentboardResult};
use crate::export::json::SummaryExport;
use crate::models::{Dataset, Scope};

/// Export the summary of `scope` to YAML
pub fn export_summary_yaml<W: Write>(
    dataset: &Dataset,
    scope: &Scope,
    writer: &mut W,
) -> RentboardResult<()> {
    let export = SummaryExport::from_dataset(dataset, scope);
    let io_err = |e: std::io::Error| RentboardError::Export(e.to_string());

    writeln!(writer, "# Rentboard Summary Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RentboardError::Export(e.to_string()))?;

    Ok(())
}
