use std::path::Path;

use tracing::info;

use remap_model::{CellValue, Column, RemapError, Result, Table};

/// Formats a number as fixed two-decimal with thousands grouping,
/// `1234.5` -> `1,234.50`.
pub fn format_numeric(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, decimals) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let digits = integer.as_bytes();
    let mut grouped =
        String::with_capacity(integer.len() + integer.len() / 3 + decimals.len() + 2);
    if value.is_sign_negative() {
        grouped.push('-');
    }
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(char::from(*digit));
    }
    grouped.push('.');
    grouped.push_str(decimals);
    grouped
}

/// True when the column holds at least one number and nothing but numbers
/// among its non-missing cells. Only such columns get the two-decimal
/// formatting; merged mixed columns keep plain rendering.
pub fn is_numeric_column(values: &[CellValue]) -> bool {
    let mut seen_number = false;
    for cell in values {
        match cell {
            CellValue::Number(_) => seen_number = true,
            CellValue::Missing => {}
            _ => return false,
        }
    }
    seen_number
}

fn render_cell(cell: &CellValue, numeric_column: bool) -> String {
    match cell {
        CellValue::Number(value) if numeric_column => format_numeric(*value),
        other => other.string_form().unwrap_or_default(),
    }
}

/// Serializes a table to CSV at `path`.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|error| file_access(path, error))?;
    let numeric: Vec<bool> = table
        .columns()
        .iter()
        .map(|Column { values, .. }| is_numeric_column(values))
        .collect();

    // A zero-column table still truncates the destination, but a header
    // record with no fields is not writable.
    if !table.is_empty() {
        writer
            .write_record(table.column_names())
            .map_err(|error| file_access(path, error))?;
    }
    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .zip(&numeric)
            .map(|(column, &is_numeric)| render_cell(&column.values[row], is_numeric))
            .collect();
        writer
            .write_record(&record)
            .map_err(|error| file_access(path, error))?;
    }
    writer
        .flush()
        .map_err(|source| RemapError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "table written"
    );
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_two_decimals() {
        assert_eq!(format_numeric(1234.5), "1,234.50");
        assert_eq!(format_numeric(1_234_567.891), "1,234,567.89");
        assert_eq!(format_numeric(0.5), "0.50");
        assert_eq!(format_numeric(999.0), "999.00");
    }

    #[test]
    fn formats_negative_values() {
        assert_eq!(format_numeric(-1234.5), "-1,234.50");
        assert_eq!(format_numeric(-0.004), "-0.00");
    }

    #[test]
    fn numeric_column_detection() {
        assert!(is_numeric_column(&[
            CellValue::Number(1.0),
            CellValue::Missing,
        ]));
        assert!(!is_numeric_column(&[
            CellValue::Number(1.0),
            CellValue::Text("x".to_string()),
        ]));
        // All-missing columns are not numeric.
        assert!(!is_numeric_column(&[CellValue::Missing]));
        assert!(!is_numeric_column(&[]));
    }

    #[test]
    fn mixed_column_numbers_render_plainly() {
        assert_eq!(render_cell(&CellValue::Number(1234.5), false), "1234.5");
        assert_eq!(render_cell(&CellValue::Number(1234.5), true), "1,234.50");
        assert_eq!(render_cell(&CellValue::Missing, true), "");
    }
}
