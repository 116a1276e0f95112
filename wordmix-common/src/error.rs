//! Common error types for wordmix

use thiserror::Error;

/// Common result type for wordmix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while preparing the word bank.
///
/// Every variant is fatal at startup: the service refuses to bind its
/// listener until a non-empty word bank has been built.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Word list is not valid CSV (ragged rows, bad UTF-8, truncated input)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Word list quoting is broken (bare, stray or unclosed `"`)
    #[error("CSV error on line {line}: {reason}")]
    Quote { line: u64, reason: &'static str },

    /// Filtering left nothing to pick from
    #[error("No eligible words after filtering {total} candidates")]
    NoEligibleWords { total: usize },

    /// Remote word source unreachable or returned an error status
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
