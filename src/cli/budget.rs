//! Menu loop for the budget tracker application.

use crate::cli::prompt;
use crate::error::Result;
use crate::ledger::{Kind, LedgerStore};
use std::io::{BufRead, Write};

/// Run the budget tracker menu loop until the user selects Exit.
///
/// # Errors
///
/// Returns an error on I/O failure or when an amount prompt receives
/// non-numeric input.
pub fn run<R: BufRead, W: Write>(
    store: &mut LedgerStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Budget Tracker Application")?;
        writeln!(out, "1. Add Income")?;
        writeln!(out, "2. Add Expense")?;
        writeln!(out, "3. Calculate Budget")?;
        writeln!(out, "4. Analyze Expenses")?;
        writeln!(out, "5. List Transactions")?;
        writeln!(out, "6. Exit")?;

        let choice = prompt(input, out, "Choose an option: ")?;
        match choice.as_str() {
            "1" => add_transaction(store, input, out, Kind::Income)?,
            "2" => add_transaction(store, input, out, Kind::Expense)?,
            "3" => writeln!(out, "Remaining Budget: {}", store.balance())?,
            "4" => {
                for (category, amount) in store.expenses_by_category() {
                    writeln!(out, "{category}: {amount}")?;
                }
            }
            "5" => {
                for line in store.display_lines() {
                    writeln!(out, "{line}")?;
                }
            }
            "6" => break,
            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }

    Ok(())
}

fn add_transaction(
    store: &mut LedgerStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
    kind: Kind,
) -> Result<()> {
    let label = match kind {
        Kind::Income => "Income Amount: ",
        Kind::Expense => "Expense Amount: ",
    };
    let amount: f64 = prompt(input, out, label)?.parse()?;
    let category = prompt(input, out, "Category: ")?;
    store.add(amount, &category, kind, None)
}
