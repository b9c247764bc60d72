use std::collections::BTreeSet;

use remap_model::Table;
use remap_transform::parse_decimal_comma;

/// Per-column characteristics of a loaded table, shown by the column
/// listing to help the user pick types.
#[derive(Debug, Clone)]
pub struct ColumnHint {
    /// True when every non-missing value parses under the decimal-comma
    /// numeric rule.
    pub is_numeric: bool,
    /// Ratio of missing values to total rows (0.0 to 1.0).
    pub missing_ratio: f64,
    /// Ratio of unique values to non-missing values (0.0 to 1.0).
    pub unique_ratio: f64,
}

/// Computes a hint per table column, in column order.
pub fn build_column_hints(table: &Table) -> Vec<(String, ColumnHint)> {
    let row_count = table.row_count();
    table
        .columns()
        .iter()
        .map(|column| {
            let mut non_missing = 0usize;
            let mut numeric = 0usize;
            let mut uniques = BTreeSet::new();
            for cell in &column.values {
                let Some(raw) = cell.string_form() else {
                    continue;
                };
                non_missing += 1;
                if parse_decimal_comma(&raw).is_some() {
                    numeric += 1;
                }
                uniques.insert(raw);
            }
            let missing_ratio = if row_count == 0 {
                1.0
            } else {
                (row_count - non_missing) as f64 / row_count as f64
            };
            let unique_ratio = if non_missing == 0 {
                0.0
            } else {
                uniques.len() as f64 / non_missing as f64
            };
            let hint = ColumnHint {
                is_numeric: non_missing > 0 && numeric == non_missing,
                missing_ratio,
                unique_ratio,
            };
            (column.name.clone(), hint)
        })
        .collect()
}
