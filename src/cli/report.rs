//! CLI commands for reports
//!
//! Lists units and prints the summary, the monthly comparison and single
//! month details.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};
use tracing::warn;

use crate::config::settings::Settings;
use crate::display::{format_money, MonthDetail};
use crate::error::{RentboardError, RentboardResult};
use crate::models::{Dataset, Scope};
use crate::reports::{MonthlyComparison, SummaryReport};
use crate::services::{compute_summary, find_month, unit_list};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// List the units in the dataset
    Units,

    /// Show total income, expenses, balance and monthly average
    Summary {
        /// Restrict to one unit ("all" or omitted for every unit)
        #[arg(short, long)]
        unit: Option<String>,

        /// Export the breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare monthly income and expenses per unit
    Chart {
        /// Restrict to one unit ("all" or omitted for every unit)
        #[arg(short, long)]
        unit: Option<String>,

        /// Width of the longest bar
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Show the breakdown of one month of a unit
    Month {
        /// Unit identifier
        unit: String,

        /// Month label as written in the dataset
        month: String,
    },
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Months")]
    months: usize,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Handle report commands
pub fn handle_report_command(
    dataset: &Dataset,
    settings: &Settings,
    cmd: ReportCommands,
) -> RentboardResult<()> {
    match cmd {
        ReportCommands::Units => handle_units(dataset, settings),
        ReportCommands::Summary { unit, output } => {
            handle_summary(dataset, settings, unit.as_deref(), output)
        }
        ReportCommands::Chart { unit, width } => {
            handle_chart(dataset, settings, unit.as_deref(), width)
        }
        ReportCommands::Month { unit, month } => handle_month(dataset, settings, &unit, &month),
    }
}

fn handle_units(dataset: &Dataset, settings: &Settings) -> RentboardResult<()> {
    if dataset.is_empty() {
        println!("No units found in the dataset.");
        return Ok(());
    }

    let rows: Vec<UnitRow> = unit_list(dataset)
        .into_iter()
        .map(|unit| {
            let summary = compute_summary(dataset, &Scope::unit(unit));
            UnitRow {
                unit: unit.to_string(),
                months: summary.month_count,
                income: format_money(summary.total_entry, &settings.currency),
                balance: format_money(summary.balance, &settings.currency),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());
    println!("{}", table);

    Ok(())
}

fn handle_summary(
    dataset: &Dataset,
    settings: &Settings,
    unit: Option<&str>,
    output: Option<PathBuf>,
) -> RentboardResult<()> {
    let scope = Scope::from_option(unit);
    warn_if_missing(dataset, &scope);

    let report = SummaryReport::generate(dataset, &scope);

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            RentboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        report.export_csv(BufWriter::new(file))?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(&settings.currency));
    }

    Ok(())
}

fn handle_chart(
    dataset: &Dataset,
    settings: &Settings,
    unit: Option<&str>,
    width: Option<usize>,
) -> RentboardResult<()> {
    let scope = Scope::from_option(unit);
    warn_if_missing(dataset, &scope);

    let report = MonthlyComparison::generate(dataset, &scope);
    let width = width.unwrap_or(settings.chart.bar_width).max(1);
    print!("{}", report.format_terminal(&settings.currency, width));

    Ok(())
}

fn handle_month(
    dataset: &Dataset,
    settings: &Settings,
    unit: &str,
    month: &str,
) -> RentboardResult<()> {
    if !dataset.contains_unit(unit) {
        return Err(RentboardError::unit_not_found(unit));
    }
    let record =
        find_month(dataset, unit, month).ok_or_else(|| RentboardError::month_not_found(unit, month))?;

    println!("{}", MonthDetail::new(unit, record).format_table(&settings.currency));
    Ok(())
}

fn warn_if_missing(dataset: &Dataset, scope: &Scope) {
    if !scope.exists_in(dataset) {
        warn!(scope = %scope, "unit is not in the dataset, showing an empty scope");
    }
}
