//! Error types for `daybook`.

/// Errors that can occur in the record stores and menu loops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing or serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric menu index could not be parsed.
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// A monetary amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] std::num::ParseFloatError),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
