//! The ledger file store
//!
//! Single source of truth for the persisted record collection. Every
//! operation opens the file, performs one full read or one append, and
//! releases the handle before returning. No locking is performed: the tool
//! assumes a single process and a single writer at a time, so concurrent
//! invocations against the same file can race (a load-then-append pair is not
//! atomic).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, CSV_HEADERS};

/// Owns the on-disk ledger file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the given ledger file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger file with only the header row if it does not exist
    ///
    /// Idempotent; safe to call before every operation. Also creates missing
    /// parent directories.
    pub fn ensure_initialized(&self) -> LedgerResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut writer = Writer::from_path(&self.path)?;
        writer.write_record(CSV_HEADERS)?;
        writer.flush()?;
        Ok(())
    }

    /// Load every record from the ledger file, preserving file order
    ///
    /// Fails with [`LedgerError::CorruptRecord`] naming the offending 1-based
    /// line (the header is line 1) if any row fails to decode. One bad row
    /// aborts the whole load: silently skipping it would make every
    /// downstream total under-report with no visible signal.
    pub fn load_all(&self) -> LedgerResult<Vec<Expense>> {
        self.ensure_initialized()?;

        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut expenses = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // The reader skips blank lines, so physical line numbers come
            // from the record position; idx + 2 is the fallback.
            let line = (idx + 2) as u64;
            let record = result.map_err(|e| LedgerError::corrupt(line, e))?;
            let line = record.position().map_or(line, |p| p.line());
            let expense = Expense::from_record(&headers, &record)
                .map_err(|e| LedgerError::corrupt(line, e))?;
            expenses.push(expense);
        }

        Ok(expenses)
    }

    /// Encode one record and append it to the ledger file
    pub fn append(&self, expense: &Expense) -> LedgerResult<()> {
        self.ensure_initialized()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(expense.to_record())?;
        writer.flush()?;
        Ok(())
    }
}

/// Compute the next record identifier from the loaded collection
///
/// `1 + max(id)`, or 1 for an empty collection. Recomputed on every add
/// rather than persisted, so hand-edits to the file cannot desynchronize a
/// counter from the ids actually present.
pub fn next_id(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1
}
