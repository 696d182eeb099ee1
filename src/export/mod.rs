//! Export functionality
//!
//! Serializes the full record set for external consumption, either as the
//! same delimited format the store uses or as a JSON document.

pub mod csv;
pub mod json;

pub use self::csv::write_csv;
pub use json::write_json;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::LedgerError;

/// Supported export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// The canonical delimited format, identical to the ledger file
    Csv,
    /// Pretty-printed JSON array of objects
    Json,
}

impl ExportFormat {
    /// Default file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(LedgerError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(LedgerError::UnsupportedFormat(_))
        ));
    }
}
