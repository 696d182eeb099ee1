//! CSV export
//!
//! Writes header plus one canonical row per record, in store order. The
//! output is byte-compatible with the ledger file itself.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::LedgerResult;
use crate::models::{Expense, CSV_HEADERS};

/// Write all records as CSV, returning the number of records written
pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<usize> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for expense in expenses {
        csv_writer.write_record(expense.to_record())?;
    }
    csv_writer.flush()?;
    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn sample() -> Vec<Expense> {
        vec![
            Expense {
                id: 1,
                date: parse_date("2024-01-05").unwrap(),
                amount: "12.5".parse().unwrap(),
                category: "food".to_string(),
                note: "lunch".to_string(),
            },
            Expense {
                id: 2,
                date: parse_date("2024-02-10").unwrap(),
                amount: "800".parse().unwrap(),
                category: "rent".to_string(),
                note: "with, comma".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_csv() {
        let mut output = Vec::new();
        let count = write_csv(&sample(), &mut output).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,date,amount,category,note");
        assert_eq!(lines[1], "1,2024-01-05,12.50,food,lunch");
        assert_eq!(lines[2], "2,2024-02-10,800.00,rent,\"with, comma\"");
    }

    #[test]
    fn test_write_csv_empty() {
        let mut output = Vec::new();
        let count = write_csv(&[], &mut output).unwrap();
        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,date,amount,category,note\n"
        );
    }
}
