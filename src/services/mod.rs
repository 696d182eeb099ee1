//! Business logic layer
//!
//! The `Ledger` service is the surface the CLI calls into: it owns the store
//! and composes validation, querying, and export.

pub mod ledger;

pub use ledger::Ledger;
