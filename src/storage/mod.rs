//! Persistence layer for the ledger file
//!
//! A single CSV file holds the whole record collection: a header row followed
//! by one row per expense in the canonical 5-field encoding.

pub mod store;

pub use store::{next_id, Store};
