//! The ledger service
//!
//! Every operation here starts from a full load of the ledger file, so a
//! single corrupt row fails add, list, summarize, and export with the same
//! `CorruptRecord` error rather than letting any of them compute over an
//! incomplete collection.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use rust_decimal::Decimal;

use crate::error::LedgerResult;
use crate::export::{write_csv, write_json, ExportFormat};
use crate::models::{normalize_category, parse_amount, parse_date, Expense};
use crate::query::{filter_expenses, group_totals, DateRange, GroupBy};
use crate::storage::{next_id, Store};

/// The expense ledger service
pub struct Ledger {
    store: Store,
}

impl Ledger {
    /// Create a ledger over an existing store
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a ledger for the given file path
    pub fn open(path: PathBuf) -> Self {
        Self::new(Store::new(path))
    }

    /// Get the underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Validate inputs, assign the next id, and append one record
    ///
    /// The date defaults to today when absent; the category defaults to
    /// `uncategorized` when absent or blank. The id is recomputed from the
    /// loaded collection, never from a persisted counter.
    pub fn add(
        &self,
        date: Option<&str>,
        amount: &str,
        category: Option<&str>,
        note: Option<&str>,
    ) -> LedgerResult<Expense> {
        let expenses = self.store.load_all()?;

        let expense = Expense {
            id: next_id(&expenses),
            date: match date {
                Some(text) => parse_date(text)?,
                None => Local::now().date_naive(),
            },
            amount: parse_amount(amount)?,
            category: normalize_category(category.unwrap_or("")),
            note: note.unwrap_or("").trim().to_string(),
        };

        self.store.append(&expense)?;
        Ok(expense)
    }

    /// List records filtered by category and date range, in store order
    pub fn list(&self, category: Option<&str>, range: &DateRange) -> LedgerResult<Vec<Expense>> {
        let expenses = self.store.load_all()?;
        Ok(filter_expenses(&expenses, category, range))
    }

    /// Grouped exact-decimal totals over the records inside the range
    pub fn summarize(
        &self,
        group_by: GroupBy,
        range: &DateRange,
    ) -> LedgerResult<BTreeMap<String, Decimal>> {
        let expenses = self.store.load_all()?;
        Ok(group_totals(&expenses, range, group_by))
    }

    /// Export the full record set, returning the destination and count
    ///
    /// Without an explicit destination the export lands next to the ledger
    /// file as `expenses_export.csv` or `expenses_export.json`.
    pub fn export(
        &self,
        format: ExportFormat,
        destination: Option<&Path>,
    ) -> LedgerResult<(PathBuf, usize)> {
        let expenses = self.store.load_all()?;

        let path = match destination {
            Some(path) => path.to_path_buf(),
            None => self
                .store
                .path()
                .with_file_name(format!("expenses_export.{}", format.extension())),
        };

        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        let count = match format {
            ExportFormat::Csv => write_csv(&expenses, &mut writer)?,
            ExportFormat::Json => write_json(&expenses, &mut writer)?,
        };

        Ok((path, count))
    }
}
