//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{RentboardError, RentboardResult};
use crate::export::{export_records_csv, export_summary_json, export_summary_yaml};
use crate::models::{Dataset, Scope};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (monthly records)
    Csv,
    /// JSON format (summary and per-unit breakdown)
    Json,
    /// YAML format (summary and per-unit breakdown, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Restrict to one unit ("all" or omitted for every unit)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(dataset: &Dataset, args: ExportArgs) -> RentboardResult<()> {
    let scope = Scope::from_option(args.unit.as_deref());

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                RentboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(dataset, &scope, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| RentboardError::Export(e.to_string()))?;
            println!("Exported {} to: {}", scope, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(dataset, &scope, &args, &mut writer)?;
            if args.format == ExportFormat::Json {
                writeln!(writer).map_err(|e| RentboardError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    dataset: &Dataset,
    scope: &Scope,
    args: &ExportArgs,
    writer: &mut W,
) -> RentboardResult<()> {
    match args.format {
        ExportFormat::Csv => {
            export_records_csv(dataset, scope, writer)?;
        }
        ExportFormat::Json => export_summary_json(dataset, scope, writer, args.pretty)?,
        ExportFormat::Yaml => export_summary_yaml(dataset, scope, writer)?,
    }
    Ok(())
}
