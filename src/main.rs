use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use rentboard::cli::{handle_export_command, handle_report_command, ExportArgs, ReportCommands};
use rentboard::config::{paths::RentboardPaths, settings::Settings};
use rentboard::logging;
use rentboard::models::Scope;
use rentboard::storage::{self, load_dataset};

#[derive(Parser)]
#[command(
    name = "rentboard",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for monthly rental income and expenses",
    long_about = "Rentboard reads a per-unit report of monthly income, taxes and rent, \
                  and shows total income, total expenses, balance and average monthly \
                  income for every unit or for a single one."
)]
struct Cli {
    /// Dataset document to read (defaults to the one in the data directory)
    #[arg(long, global = true, env = "RENTBOARD_DATASET", value_name = "PATH")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Export records or the summary
    Export(ExportArgs),

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        /// Unit to show first ("all" or omitted for every unit)
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Create the data directory, default settings and a sample dataset
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = RentboardPaths::new()?;

    // The dashboard owns the terminal, so its logs go to a file
    match cli.command {
        Some(Commands::Tui { .. }) => logging::init_file(&paths.log_file())?,
        _ => logging::init_stderr(),
    }

    let settings = Settings::load_or_create(&paths)?;
    let dataset_path = settings.resolve_dataset_path(&paths, cli.dataset.as_deref());
    debug!(path = %dataset_path.display(), "resolved dataset");

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Rentboard at: {}", paths.base_dir().display());
            storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Sample dataset: {}", paths.default_dataset_file().display());
            println!("Run 'rentboard summary' to see the totals.");
        }
        Some(Commands::Config) => {
            println!("Rentboard Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!("Dataset:         {}", dataset_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency.symbol);
            println!("  Chart bar width: {}", settings.chart.bar_width);
            if storage::needs_initialization(&paths) {
                println!();
                println!("Run 'rentboard init' to create the data directory and sample dataset.");
            }
        }
        Some(Commands::Report(cmd)) => {
            let dataset = load_dataset(&dataset_path)?;
            handle_report_command(&dataset, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let dataset = load_dataset(&dataset_path)?;
            handle_export_command(&dataset, args)?;
        }
        Some(Commands::Tui { unit }) => {
            let dataset = load_dataset(&dataset_path)?;
            rentboard::tui::run_tui(&dataset, &settings, Scope::from_option(unit.as_deref()))?;
        }
        None => {
            println!("Rentboard - Rental income and expenses dashboard");
            println!();
            println!("Run 'rentboard --help' for usage information.");
            println!("Run 'rentboard tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
