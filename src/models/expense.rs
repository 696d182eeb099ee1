//! Expense record model
//!
//! Defines the `Expense` entity, its validation and normalization rules, and
//! the canonical 5-field CSV encoding used both for persistence and export.
//!
//! Amounts are exact decimals (`rust_decimal`), never binary floats, so that
//! repeated load/save cycles and grouped summation stay bit-exact. Conversion
//! to `f64` happens only at the JSON export boundary.

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Column order of the ledger file and CSV export
pub const CSV_HEADERS: [&str; 5] = ["id", "date", "amount", "category", "note"];

/// Label substituted for an empty category at creation time
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// One recorded transaction
///
/// Records are immutable once created: they are either built by
/// [`crate::services::Ledger::add`] (which assigns the id) or reconstructed
/// from the ledger file via [`Expense::from_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique positive identifier, assigned by the store
    pub id: u64,

    /// Transaction date (no time component, no timezone)
    pub date: NaiveDate,

    /// Exact decimal amount, strictly positive at creation
    pub amount: Decimal,

    /// Trimmed category label, never empty after creation
    pub category: String,

    /// Trimmed free-text note, may be empty
    pub note: String,
}

/// Parse a date in the exact pattern `YYYY-MM-DD`
///
/// Zero-padded, 4-digit year. Rejects both malformed strings and well-formed
/// strings naming a non-existent calendar day (e.g. `2024-02-30`).
pub fn parse_date(text: &str) -> LedgerResult<NaiveDate> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(LedgerError::InvalidDate(text.to_string()));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(text.to_string()))
}

/// Parse an amount as an exact decimal, requiring it to be strictly positive
pub fn parse_amount(text: &str) -> LedgerResult<Decimal> {
    let text = text.trim();
    let amount: Decimal = text
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(text.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(text.to_string()));
    }
    Ok(amount)
}

/// Trim a category label, substituting the default for an empty one
pub fn normalize_category(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format an amount with exactly 2 fractional digits, rounding half-up
pub fn format_amount(amount: &Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

impl Expense {
    /// Encode as the canonical 5 text fields, in [`CSV_HEADERS`] order
    pub fn to_record(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
            format_amount(&self.amount),
            self.category.clone(),
            self.note.clone(),
        ]
    }

    /// Decode from a CSV row, looking fields up by header name
    ///
    /// Missing or reordered columns are tolerated; category and note default
    /// to the empty string. Date and amount go through the same validation as
    /// at creation time, since the file is not trusted to be well-formed. The
    /// category is only trimmed here, not defaulted: the `uncategorized`
    /// substitution happens at creation time.
    pub fn from_record(headers: &StringRecord, record: &StringRecord) -> LedgerResult<Self> {
        let raw_id = field(headers, record, "id").unwrap_or_default();
        let id = raw_id
            .trim()
            .parse::<u64>()
            .map_err(|_| LedgerError::InvalidId(raw_id.to_string()))?;

        let date = parse_date(field(headers, record, "date").unwrap_or_default())?;
        let amount = parse_amount(field(headers, record, "amount").unwrap_or_default())?;
        let category = field(headers, record, "category").unwrap_or_default();
        let note = field(headers, record, "note").unwrap_or_default();

        Ok(Self {
            id,
            date,
            amount,
            category: category.trim().to_string(),
            note: note.trim().to_string(),
        })
    }
}

/// Look up a record field by header name
fn field<'r>(headers: &StringRecord, record: &'r StringRecord, name: &str) -> Option<&'r str> {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|idx| record.get(idx))
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            format_amount(&self.amount),
            self.note
        )
    }
}
