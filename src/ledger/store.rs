//! JSON-backed transaction ledger.

use crate::error::Result;
use crate::ledger::models::{Kind, Transaction};
use crate::store::JsonStore;
use std::path::Path;

/// Default backing file for the budget tracker.
pub const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.json";

/// Append-only transaction history, persisted to a JSON array file.
#[derive(Debug)]
pub struct LedgerStore {
    store: JsonStore<Transaction>,
}

impl LedgerStore {
    /// Open a ledger backed by the given file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self { store: JsonStore::open(path)? })
    }

    /// Record a transaction and persist.
    ///
    /// The date defaults to today when not given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn add(
        &mut self,
        amount: f64,
        category: &str,
        kind: Kind,
        date: Option<String>,
    ) -> Result<()> {
        self.store.push(Transaction::new(amount, category, kind, date))
    }

    /// Total income minus total expenses over the whole history.
    ///
    /// Raw `f64` accumulation; an empty history yields `0.0`.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.store
            .records()
            .iter()
            .map(|t| match t.kind {
                Kind::Income => t.amount,
                Kind::Expense => -t.amount,
            })
            .sum()
    }

    /// Total expense amount per category, in first-occurrence order.
    ///
    /// Only expense transactions contribute; categories with no expenses are
    /// absent rather than zero-valued.
    #[must_use]
    pub fn expenses_by_category(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for t in self.store.records() {
            if t.kind != Kind::Expense {
                continue;
            }
            match totals.iter_mut().find(|(category, _)| *category == t.category) {
                Some((_, total)) => *total += t.amount,
                None => totals.push((t.category.clone(), t.amount)),
            }
        }
        totals
    }

    /// Read-only ordered view of the transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        self.store.records()
    }

    /// Render every transaction as a display line, in stored order.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.transactions().iter().map(Transaction::display_line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let dir = TempDir::new().unwrap();
        let store = LedgerStore::open(dir.path().join("transactions.json")).unwrap();
        (dir, store)
    }

    fn category_total(store: &LedgerStore, category: &str) -> Option<f64> {
        store
            .expenses_by_category()
            .into_iter()
            .find(|(c, _)| c == category)
            .map(|(_, total)| total)
    }

    #[test]
    fn test_empty_balance_is_zero() {
        let (_dir, store) = create_test_store();
        assert_eq!(store.balance(), 0.0);
        assert!(store.expenses_by_category().is_empty());
    }

    #[test]
    fn test_income_minus_expense() {
        let (_dir, mut store) = create_test_store();
        store.add(1000.0, "salary", Kind::Income, None).unwrap();
        store.add(200.0, "food", Kind::Expense, None).unwrap();

        assert_eq!(store.balance(), 800.0);
        assert_eq!(store.expenses_by_category(), vec![("food".to_string(), 200.0)]);
    }

    #[test]
    fn test_expenses_grouped_in_first_occurrence_order() {
        let (_dir, mut store) = create_test_store();
        store.add(10.0, "food", Kind::Expense, None).unwrap();
        store.add(20.0, "rent", Kind::Expense, None).unwrap();
        store.add(5.0, "food", Kind::Expense, None).unwrap();
        store.add(99.0, "salary", Kind::Income, None).unwrap();

        assert_eq!(
            store.expenses_by_category(),
            vec![("food".to_string(), 15.0), ("rent".to_string(), 20.0)]
        );
    }

    #[test]
    fn test_income_categories_absent_from_expense_analysis() {
        let (_dir, mut store) = create_test_store();
        store.add(1000.0, "salary", Kind::Income, None).unwrap();
        assert!(category_total(&store, "salary").is_none());
    }

    #[test]
    fn test_add_expense_increases_category_total() {
        let (_dir, mut store) = create_test_store();
        store.add(10.0, "food", Kind::Expense, None).unwrap();
        let before = category_total(&store, "food").unwrap();

        store.add(7.5, "food", Kind::Expense, None).unwrap();
        let after = category_total(&store, "food").unwrap();
        assert_eq!(after - before, 7.5);
    }

    #[test]
    fn test_history_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");

        let mut store = LedgerStore::open(&path).unwrap();
        store.add(1000.0, "salary", Kind::Income, Some("2024-01-01".to_string())).unwrap();
        store.add(200.0, "food", Kind::Expense, Some("2024-01-02".to_string())).unwrap();

        let reopened = LedgerStore::open(&path).unwrap();
        assert_eq!(reopened.transactions(), store.transactions());
        assert_eq!(reopened.balance(), 800.0);
    }

    #[test]
    fn test_display_lines_in_stored_order() {
        let (_dir, mut store) = create_test_store();
        store.add(1000.0, "salary", Kind::Income, Some("2024-01-01".to_string())).unwrap();
        store.add(200.0, "food", Kind::Expense, Some("2024-01-02".to_string())).unwrap();

        assert_eq!(
            store.display_lines(),
            vec![
                "2024-01-01 - Income: 1000 (salary)",
                "2024-01-02 - Expense: 200 (food)",
            ]
        );
    }

    #[test]
    fn test_balance_idempotent() {
        let (_dir, mut store) = create_test_store();
        store.add(1000.0, "salary", Kind::Income, None).unwrap();
        store.add(200.0, "food", Kind::Expense, None).unwrap();

        assert_eq!(store.balance(), store.balance());
        assert_eq!(store.expenses_by_category(), store.expenses_by_category());
    }

    proptest! {
        #[test]
        fn prop_balance_equals_income_minus_expense(
            amounts in prop::collection::vec((0.0f64..10_000.0, prop::bool::ANY), 0..20)
        ) {
            let (_dir, mut store) = create_test_store();
            let mut income = 0.0;
            let mut expense = 0.0;
            for (amount, is_income) in amounts {
                let kind = if is_income { Kind::Income } else { Kind::Expense };
                store.add(amount, "misc", kind, None).unwrap();
                if is_income {
                    income += amount;
                } else {
                    expense += amount;
                }
            }
            prop_assert!((store.balance() - (income - expense)).abs() < 1e-6);
        }

        #[test]
        fn prop_expense_totals_cover_all_expenses(
            amounts in prop::collection::vec(0.0f64..1_000.0, 1..10)
        ) {
            let (_dir, mut store) = create_test_store();
            for (i, amount) in amounts.iter().enumerate() {
                let category = if i % 2 == 0 { "food" } else { "rent" };
                store.add(*amount, category, Kind::Expense, None).unwrap();
            }
            let grouped: f64 = store.expenses_by_category().iter().map(|(_, t)| t).sum();
            let total: f64 = amounts.iter().sum();
            prop_assert!((grouped - total).abs() < 1e-6);
        }
    }
}
