use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_entry_command, handle_layout_command, parse_date_arg, EntryCommands, LayoutArgs,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::services::BudgetStore;
use budget_tracker::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal income and expense tracker",
    long_about = "Track income and expenses from the command line. Entries are kept \
                  in a local JSON file; totals, monthly spending and the most used \
                  category are derived on every run."
)]
struct Cli {
    /// Selected date for this run (YYYY-MM-DD); defaults to today
    #[arg(long, global = true, value_parser = parse_date_arg)]
    view_date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Entry(EntryCommands),

    /// Report whether the terminal is a narrow layout
    Layout(LayoutArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Entry(cmd)) => {
            let mut store = BudgetStore::open(FileStore::from_paths(&paths)?)?;
            if let Some(date) = cli.view_date {
                store.set_selected_date(date);
            }
            handle_entry_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Layout(args)) => {
            handle_layout_command(args)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Initialized budget tracker at: {}", paths.base_dir().display());
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("budget - personal income and expense tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget add 12.50 Groceries' to record an expense.");
        }
    }

    Ok(())
}
