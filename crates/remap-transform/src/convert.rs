//! Per-column type conversion.

use remap_model::{CellValue, ColumnType, RemapError, Result};
use tracing::debug;

use crate::datetime::parse_datetime;
use crate::numeric::parse_decimal_comma;

/// Converts a column's cells to the requested type.
///
/// - `Text` always succeeds; missing cells become the empty string (the
///   writer's missing-rendering), which makes them non-missing for any
///   later merge.
/// - `PositiveNumber` / `NegativeNumber` are all-or-nothing: one
///   unparseable non-missing cell fails the whole column. Missing cells
///   pass through.
/// - `Date` is coercive: unparseable cells become missing, the column
///   itself never fails.
///
/// The output always has the same length as the input.
pub fn convert_column(
    column_name: &str,
    values: &[CellValue],
    column_type: ColumnType,
) -> Result<Vec<CellValue>> {
    let converted = match column_type {
        ColumnType::Text => values
            .iter()
            .map(|cell| CellValue::Text(cell.string_form().unwrap_or_default()))
            .collect(),
        ColumnType::PositiveNumber => convert_numeric(column_name, values, false)?,
        ColumnType::NegativeNumber => convert_numeric(column_name, values, true)?,
        ColumnType::Date => values
            .iter()
            .map(|cell| match cell.string_form() {
                Some(raw) => match parse_datetime(&raw) {
                    Some(parsed) => CellValue::Date(parsed),
                    None => CellValue::Missing,
                },
                None => CellValue::Missing,
            })
            .collect(),
    };
    debug_assert_eq!(converted.len(), values.len());
    Ok(converted)
}

fn convert_numeric(
    column_name: &str,
    values: &[CellValue],
    negate: bool,
) -> Result<Vec<CellValue>> {
    let requested = if negate {
        ColumnType::NegativeNumber
    } else {
        ColumnType::PositiveNumber
    };
    let mut converted = Vec::with_capacity(values.len());
    for cell in values {
        match cell.string_form() {
            None => converted.push(CellValue::Missing),
            Some(raw) => match parse_decimal_comma(&raw) {
                Some(parsed) => {
                    let value = if negate { -parsed } else { parsed };
                    converted.push(CellValue::Number(value));
                }
                None => {
                    debug!(column = column_name, value = %raw, "numeric conversion failed");
                    return Err(RemapError::Conversion {
                        column: column_name.to_string(),
                        requested,
                    });
                }
            },
        }
    }
    Ok(converted)
}
