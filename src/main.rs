use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::config::{paths::LedgerPaths, settings::Settings};
use tally_cli::services::{CategoryRegistry, LedgerEngine};
use tally_cli::shell;
use tally_cli::storage::RecordStorage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "tally is a terminal-based personal ledger. It records income \
                  and expense transactions, keeps the balance from going \
                  negative, and answers period- and category-filtered reports \
                  from an interactive menu."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "TALLY_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // First run: persist the defaults so the seeds are editable on disk
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    match cli.command {
        Some(Commands::Config) => {
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Records file:    {}", paths.records_file().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!(
                "Income seeds:    {}",
                settings.default_income_categories.join(", ")
            );
            println!(
                "Expense seeds:   {}",
                settings.default_expense_categories.join(", ")
            );
            Ok(())
        }
        None => {
            let storage = RecordStorage::new(paths.records_file());

            // A corrupt store degrades to an empty ledger with a warning
            let records = match storage.load() {
                Ok(records) => records,
                Err(err) => {
                    eprintln!("Warning: {}", err);
                    eprintln!("Starting with an empty ledger.");
                    Vec::new()
                }
            };

            let registry = CategoryRegistry::new(
                &settings.default_income_categories,
                &settings.default_expense_categories,
            );
            let mut engine = LedgerEngine::new(registry, records, storage);

            shell::run(&mut engine, &settings)?;
            Ok(())
        }
    }
}
