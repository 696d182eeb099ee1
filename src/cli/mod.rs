//! CLI command handlers
//!
//! Bridges the clap argument surface in `main.rs` with the service layer:
//! parses the optional date-range flags, calls into [`Ledger`], and turns the
//! results into user-facing text. No business logic lives here.

use std::path::Path;

use crate::display::render_table;
use crate::error::LedgerResult;
use crate::export::ExportFormat;
use crate::models::{format_amount, parse_date};
use crate::query::{DateRange, GroupBy};
use crate::services::Ledger;

/// Build a date range from optional `--from`/`--to` flag values
pub fn parse_range(from: Option<&str>, to: Option<&str>) -> LedgerResult<DateRange> {
    Ok(DateRange::new(
        from.map(parse_date).transpose()?,
        to.map(parse_date).transpose()?,
    ))
}

/// Handle `spendlog add`
pub fn handle_add(
    ledger: &Ledger,
    date: Option<&str>,
    amount: &str,
    category: Option<&str>,
    note: Option<&str>,
) -> LedgerResult<()> {
    let expense = ledger.add(date, amount, category, note)?;
    println!("Added expense #{}: {}", expense.id, expense);
    Ok(())
}

/// Handle `spendlog list`
pub fn handle_list(
    ledger: &Ledger,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> LedgerResult<()> {
    let range = parse_range(from, to)?;
    let expenses = ledger.list(category, &range)?;

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.format("%Y-%m-%d").to_string(),
                format_amount(&e.amount),
                e.category.clone(),
                e.note.clone(),
            ]
        })
        .collect();

    match render_table(&["ID", "Date", "Amount", "Category", "Note"], &rows, Some(2)) {
        Some(table) => println!("{table}"),
        None => println!("No expenses found."),
    }
    Ok(())
}

/// Handle `spendlog summary`
pub fn handle_summary(
    ledger: &Ledger,
    group_by: GroupBy,
    from: Option<&str>,
    to: Option<&str>,
) -> LedgerResult<()> {
    let range = parse_range(from, to)?;
    let totals = ledger.summarize(group_by, &range)?;

    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|(key, total)| vec![key.clone(), format_amount(total)])
        .collect();

    let label = group_by.to_string();
    match render_table(&[label.as_str(), "Total"], &rows, Some(1)) {
        Some(table) => println!("{table}"),
        None => println!("No expenses found."),
    }
    Ok(())
}

/// Handle `spendlog export`
pub fn handle_export(
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<&Path>,
) -> LedgerResult<()> {
    let (path, count) = ledger.export(format, output)?;
    println!("Exported {} expenses to {}", count, path.display());
    Ok(())
}
