//! Binary entry point for the to-do list application.
//!
//! A thin wrapper: parse args, open the store, run the menu loop on
//! stdin/stdout.

use clap::Parser;
use daybook::cli::run_todo;
use daybook::tasks::{TaskStore, DEFAULT_TASKS_FILE};
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Menu-driven to-do list manager.
#[derive(Parser, Debug)]
#[command(name = "daybook-todo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the tasks file.
    #[arg(long, default_value = DEFAULT_TASKS_FILE)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut store = match TaskStore::open(&args.file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error loading {}: {e}", args.file.display());
            return ExitCode::from(1);
        }
    };

    let mut input = BufReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();

    match run_todo(&mut store, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
