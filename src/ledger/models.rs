//! Transaction model for the budget tracker.

use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl Kind {
    /// Capitalized label for display lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dated monetary movement tagged with a category.
///
/// Transactions are append-only: once recorded they are never mutated or
/// removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Monetary amount; always non-negative as entered, the kind carries
    /// the sign.
    pub amount: f64,
    /// Free-text category label.
    pub category: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
}

impl Transaction {
    /// Create a transaction, defaulting the date to today when not given.
    #[must_use]
    pub fn new(amount: f64, category: &str, kind: Kind, date: Option<String>) -> Self {
        let date =
            date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
        Self { amount, category: category.to_string(), kind, date }
    }

    /// Render the transaction as a display line.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{} - {}: {} ({})", self.date, self.kind, self.amount, self.category)
    }
}
