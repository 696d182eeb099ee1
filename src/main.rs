use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_add, handle_export, handle_list, handle_summary};
use spendlog::config::LedgerPaths;
use spendlog::export::ExportFormat;
use spendlog::query::GroupBy;
use spendlog::Ledger;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Command-line personal expense ledger",
    long_about = "spendlog records expenses in a flat CSV file and answers \
                  queries over it: filtered listings, grouped totals, and \
                  CSV/JSON export."
)]
struct Cli {
    /// Ledger file path (defaults to the platform data directory)
    #[arg(long, global = true, env = "SPENDLOG_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Amount, e.g. 12.50
        #[arg(long)]
        amount: String,
        /// Category, e.g. food (defaults to "uncategorized")
        #[arg(short, long)]
        category: Option<String>,
        /// Date YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List expenses, optionally filtered
    List {
        /// Filter by category (case-insensitive exact match)
        #[arg(short, long)]
        category: Option<String>,
        /// Start date YYYY-MM-DD (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date YYYY-MM-DD (inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Show totals grouped by category, day, or month
    Summary {
        /// Grouping dimension
        #[arg(long, value_enum, default_value = "category")]
        by: GroupBy,
        /// Start date YYYY-MM-DD (inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date YYYY-MM-DD (inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Export expenses to CSV or JSON
    Export {
        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,
        /// Output file path (defaults to a sibling of the ledger file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let ledger_file = match cli.file {
        Some(path) => path,
        None => LedgerPaths::new()?.ledger_file(),
    };
    let ledger = Ledger::open(ledger_file);

    match cli.command {
        Commands::Add {
            amount,
            category,
            date,
            note,
        } => handle_add(
            &ledger,
            date.as_deref(),
            &amount,
            category.as_deref(),
            note.as_deref(),
        )?,
        Commands::List { category, from, to } => {
            handle_list(&ledger, category.as_deref(), from.as_deref(), to.as_deref())?
        }
        Commands::Summary { by, from, to } => {
            handle_summary(&ledger, by, from.as_deref(), to.as_deref())?
        }
        Commands::Export { format, output } => {
            handle_export(&ledger, format, output.as_deref())?
        }
    }

    Ok(())
}
