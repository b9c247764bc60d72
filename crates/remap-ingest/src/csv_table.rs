use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use remap_model::{CellValue, Column, RemapError, Result, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Reads a CSV file into a [`Table`].
///
/// The first record is the header row. Values stay raw strings; the
/// decimal-comma convention is applied later by the type conversions, not
/// here.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| file_access(path, error))?;

    let mut headers: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| file_access(path, error))?;
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
            for (idx, header) in headers.iter().enumerate() {
                if headers[..idx].contains(header) {
                    return Err(RemapError::DuplicateColumn(header.clone()));
                }
            }
            columns = vec![Vec::new(); headers.len()];
            continue;
        }
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        for (idx, column) in columns.iter_mut().enumerate() {
            let value = record.get(idx).unwrap_or("");
            column.push(normalize_cell(value));
        }
    }

    let mut table = Table::new();
    for (header, values) in headers.into_iter().zip(columns) {
        table.push_column(Column::new(header, values))?;
    }
    info!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "table loaded"
    );
    Ok(table)
}

fn file_access(path: &Path, error: csv::Error) -> RemapError {
    let source = match error.into_kind() {
        csv::ErrorKind::Io(io) => io,
        other => std::io::Error::other(format!("{other:?}")),
    };
    RemapError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
