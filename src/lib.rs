//! spendlog - command-line personal expense ledger
//!
//! Records monetary transactions, persists them in a flat CSV file, and
//! answers queries over that file: filtered listings, grouped totals, and
//! format conversion.
//!
//! # Architecture
//!
//! - `config`: ledger file location
//! - `error`: custom error types
//! - `models`: the expense record, its validation, and its canonical encoding
//! - `storage`: the CSV-backed store
//! - `query`: date/category filtering and grouped totals
//! - `display`: aligned text tables
//! - `export`: CSV and JSON export
//! - `services`: the `Ledger` facade the CLI calls
//! - `cli`: command handlers
//!
//! Amounts are exact decimals end to end; the only binary-float conversion is
//! at the JSON export boundary.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use models::Expense;
pub use services::Ledger;
