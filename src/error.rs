//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. All variants are local validation or I/O
//! failures surfaced directly to the caller; nothing is retried.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Date string does not match `YYYY-MM-DD` or names a non-existent day
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Amount string is not a decimal number
    #[error("Invalid amount '{0}': not a number")]
    InvalidAmount(String),

    /// Amount parsed but is zero or negative
    #[error("Amount must be positive, got '{0}'")]
    NonPositiveAmount(String),

    /// Record id is missing or not a non-negative integer
    #[error("Invalid record id '{0}'")]
    InvalidId(String),

    /// A row in the ledger file failed to decode; aborts the whole load
    #[error("Corrupt record at line {line}: {reason}")]
    CorruptRecord { line: u64, reason: String },

    /// Unknown export format name
    #[error("Unsupported export format '{0}'")]
    UnsupportedFormat(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Ledger file read/write errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Wrap a decode failure as a corrupt record at the given 1-based line
    pub fn corrupt(line: u64, reason: impl std::fmt::Display) -> Self {
        Self::CorruptRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Check if this is a corrupt-record error
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
