//! Date-range and category filtering

use chrono::NaiveDate;

use crate::models::Expense;

/// An optional inclusive date range
///
/// An absent bound passes everything on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest date included, if any
    pub from: Option<NaiveDate>,
    /// Latest date included, if any
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from optional bounds
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Check whether a date falls inside the range (both bounds inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Filter records by category and date range, preserving input order
///
/// The category comparison is a case-insensitive exact match, not a
/// substring match; an absent category filter passes everything through.
pub fn filter_expenses(
    expenses: &[Expense],
    category: Option<&str>,
    range: &DateRange,
) -> Vec<Expense> {
    let needle = category.map(|c| c.trim().to_lowercase());

    expenses
        .iter()
        .filter(|e| match &needle {
            Some(needle) => e.category.to_lowercase() == *needle,
            None => true,
        })
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect()
}
