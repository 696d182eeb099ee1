//! JSON export
//!
//! Writes a pretty-printed array of objects with key order
//! `[id, date, amount, category, note]`. The amount is emitted as a JSON
//! number via `f64`; this is the one place the exact decimal leaves its
//! representation, acceptable because the JSON document is an interchange
//! format, not the source of truth.

use std::io::Write;

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Interchange shape of one record; field order fixes the JSON key order
#[derive(Debug, Serialize)]
struct ExpenseJson<'a> {
    id: u64,
    date: String,
    amount: f64,
    category: &'a str,
    note: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseJson<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date.format("%Y-%m-%d").to_string(),
            amount: expense.amount.to_f64().unwrap_or(0.0),
            category: &expense.category,
            note: &expense.note,
        }
    }
}

/// Write all records as pretty-printed JSON, returning the record count
pub fn write_json<W: Write>(expenses: &[Expense], mut writer: W) -> LedgerResult<usize> {
    let objects: Vec<ExpenseJson<'_>> = expenses.iter().map(ExpenseJson::from).collect();
    serde_json::to_writer_pretty(&mut writer, &objects)
        .map_err(|e| LedgerError::Storage(e.to_string()))?;
    writer.write_all(b"\n")?;
    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn sample() -> Vec<Expense> {
        vec![Expense {
            id: 1,
            date: parse_date("2024-01-05").unwrap(),
            amount: "12.5".parse().unwrap(),
            category: "food".to_string(),
            note: "lunch".to_string(),
        }]
    }

    #[test]
    fn test_write_json_shape() {
        let mut output = Vec::new();
        let count = write_json(&sample(), &mut output).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["id"], 1);
        assert_eq!(parsed[0]["date"], "2024-01-05");
        assert_eq!(parsed[0]["amount"], 12.5);
        assert_eq!(parsed[0]["category"], "food");
        assert_eq!(parsed[0]["note"], "lunch");
    }

    #[test]
    fn test_write_json_key_order_and_indent() {
        let mut output = Vec::new();
        write_json(&sample(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let id_pos = text.find("\"id\"").unwrap();
        let date_pos = text.find("\"date\"").unwrap();
        let amount_pos = text.find("\"amount\"").unwrap();
        let category_pos = text.find("\"category\"").unwrap();
        let note_pos = text.find("\"note\"").unwrap();
        assert!(id_pos < date_pos && date_pos < amount_pos);
        assert!(amount_pos < category_pos && category_pos < note_pos);

        // serde_json pretty printing uses 2-space indentation
        assert!(text.contains("\n    \"id\": 1"));
    }

    #[test]
    fn test_write_json_empty() {
        let mut output = Vec::new();
        let count = write_json(&[], &mut output).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }
}
