//! Query engine over a loaded record collection
//!
//! Filtering by date range and category, and grouped exact-decimal totals.

pub mod filter;
pub mod summary;

pub use filter::{filter_expenses, DateRange};
pub use summary::{group_totals, GroupBy};
