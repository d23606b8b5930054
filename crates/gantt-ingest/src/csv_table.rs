use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// An in-memory CSV table: one header row plus string cells.
///
/// Cells are normalized (trimmed, BOM stripped) and every row is padded
/// or truncated to the header width, so downstream lookups by column
/// name never go out of bounds.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a named column, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Cell value at (row, column name). `None` when the column is absent.
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let index = self.column(name)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }

    /// Optional cell value: absent column or empty cell both yield `None`.
    pub fn value_non_empty(&self, row: usize, name: &str) -> Option<&str> {
        self.value(row, name).filter(|cell| !cell.is_empty())
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`CsvTable`].
///
/// The first non-blank line is the header row; fully blank lines are
/// skipped. Quoted cells may contain commas and newlines, which is how
/// the multi-stage format embeds its JSON payload.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_header).collect());
            }
            Some(header_row) => {
                let mut row = Vec::with_capacity(header_row.len());
                for index in 0..header_row.len() {
                    let value = record.get(index).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                rows.push(row);
            }
        }
    }
    let headers = headers.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv table"
    );
    Ok(CsvTable { headers, rows })
}
