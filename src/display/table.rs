//! Aligned text tables
//!
//! Renders pre-stringified rows as a column-aligned block: header, a dash
//! separator line sized per column, then the data rows. All columns are
//! left-justified except the designated amount column, which is
//! right-justified. Columns are joined with a 2-space separator.

/// Render a table, or `None` when there are no data rows
///
/// Callers print their own "no data" message instead of an empty table.
/// Column widths are the maximum cell width across header and data.
pub fn render_table(
    header: &[&str],
    rows: &[Vec<String>],
    amount_column: Option<usize>,
) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() {
                widths[idx] = widths[idx].max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let width = widths.get(idx).copied().unwrap_or(0);
                if amount_column == Some(idx) {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![format_row(&header_cells), separator];
    for row in rows {
        lines.push(format_row(row));
    }

    Some(lines.join("\n"))
}
