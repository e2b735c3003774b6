//! Budget tracker domain: transaction records and their store.

mod models;
mod store;

pub use models::{Kind, Transaction};
pub use store::{LedgerStore, DEFAULT_TRANSACTIONS_FILE};
