//! # `daybook`
//!
//! A flat-file to-do list manager and personal budget tracker. Both
//! applications keep their records in memory, write the whole collection
//! back to a JSON file after every mutation, and drive everything through a
//! numbered text menu.

pub mod cli;
pub mod error;
pub mod ledger;
pub mod store;
pub mod tasks;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
