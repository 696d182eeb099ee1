//! Core data models for spendlog
//!
//! The ledger domain is small: one entity (the expense record), its
//! validation rules, and its canonical CSV encoding.

pub mod expense;

pub use expense::{
    format_amount, normalize_category, parse_amount, parse_date, Expense, CSV_HEADERS,
    DEFAULT_CATEGORY,
};
