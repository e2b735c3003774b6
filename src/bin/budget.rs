//! Binary entry point for the budget tracker application.
//!
//! A thin wrapper: parse args, open the store, run the menu loop on
//! stdin/stdout.

use clap::Parser;
use daybook::cli::run_budget;
use daybook::ledger::{LedgerStore, DEFAULT_TRANSACTIONS_FILE};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Menu-driven personal budget tracker.
#[derive(Parser, Debug)]
#[command(name = "daybook-budget")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the transactions file.
    #[arg(long, default_value = DEFAULT_TRANSACTIONS_FILE)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut store = match LedgerStore::open(&args.file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading {}: {e}", args.file.display());
            return ExitCode::from(1);
        }
    };

    let mut input = BufReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    match run_budget(&mut store, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
