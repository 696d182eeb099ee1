//! Grouped totals
//!
//! Buckets records by a grouping dimension and sums amounts with exact
//! decimal addition, so many small amounts combine without cent-level drift.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::models::{Expense, DEFAULT_CATEGORY};
use crate::query::DateRange;

/// Dimension used to bucket records for summation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    /// Group by normalized category label
    Category,
    /// Group by ISO date
    Day,
    /// Group by `YYYY-MM` month prefix
    Month,
    /// Single bucket covering everything
    All,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "Category"),
            Self::Day => write!(f, "Day"),
            Self::Month => write!(f, "Month"),
            Self::All => write!(f, "All"),
        }
    }
}

/// Sum amounts per grouping key over the records inside the date range
///
/// Records outside the range contribute nothing. An empty map is a valid
/// result meaning "no matches", not an error. The sorted map also fixes the
/// key order for display.
pub fn group_totals(
    expenses: &[Expense],
    range: &DateRange,
    group_by: GroupBy,
) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        if !range.contains(expense.date) {
            continue;
        }
        let key = match group_by {
            // Post-creation categories are never empty, but the file is
            // hand-editable; fall back to the default label rather than
            // emitting an empty key.
            GroupBy::Category if expense.category.is_empty() => DEFAULT_CATEGORY.to_string(),
            GroupBy::Category => expense.category.clone(),
            GroupBy::Day => expense.date.format("%Y-%m-%d").to_string(),
            GroupBy::Month => expense.date.format("%Y-%m").to_string(),
            GroupBy::All => "all".to_string(),
        };
        *totals.entry(key).or_insert(Decimal::ZERO) += expense.amount;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn expense(date_text: &str, amount: &str, category: &str) -> Expense {
        Expense {
            id: 1,
            date: parse_date(date_text).unwrap(),
            amount: amount.parse().unwrap(),
            category: category.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_sums_exactly_by_category() {
        let expenses = vec![
            expense("2024-01-05", "0.10", "food"),
            expense("2024-01-06", "0.10", "food"),
            expense("2024-01-07", "0.10", "food"),
        ];

        let totals = group_totals(&expenses, &DateRange::default(), GroupBy::Category);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["food"], "0.30".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_group_by_day_and_month() {
        let expenses = vec![
            expense("2024-01-05", "1.00", "a"),
            expense("2024-01-05", "2.00", "b"),
            expense("2024-02-10", "3.00", "a"),
        ];

        let by_day = group_totals(&expenses, &DateRange::default(), GroupBy::Day);
        assert_eq!(by_day["2024-01-05"], "3.00".parse::<Decimal>().unwrap());
        assert_eq!(by_day["2024-02-10"], "3.00".parse::<Decimal>().unwrap());

        let by_month = group_totals(&expenses, &DateRange::default(), GroupBy::Month);
        assert_eq!(by_month["2024-01"], "3.00".parse::<Decimal>().unwrap());
        assert_eq!(by_month["2024-02"], "3.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_group_all_single_bucket() {
        let expenses = vec![
            expense("2024-01-05", "1.50", "a"),
            expense("2024-02-10", "2.50", "b"),
        ];

        let totals = group_totals(&expenses, &DateRange::default(), GroupBy::All);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["all"], "4.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_range_excludes_records() {
        let expenses = vec![
            expense("2024-01-05", "1.00", "a"),
            expense("2024-02-10", "2.00", "a"),
        ];
        let range = DateRange::new(Some(parse_date("2024-02-01").unwrap()), None);

        let totals = group_totals(&expenses, &range, GroupBy::Category);
        assert_eq!(totals["a"], "2.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let totals = group_totals(&[], &DateRange::default(), GroupBy::Category);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_empty_category_defaults() {
        let expenses = vec![expense("2024-01-05", "1.00", "")];
        let totals = group_totals(&expenses, &DateRange::default(), GroupBy::Category);
        assert_eq!(totals["uncategorized"], "1.00".parse::<Decimal>().unwrap());
    }
}
