//! Output table assembly.

use remap_model::{CellValue, Column, ColumnSpec, Result, Table};
use tracing::{debug, info, info_span};

use crate::convert::convert_column;
use crate::merge::merge_into;

/// Builds the output table for a spec set.
///
/// Included columns are converted in table-column order; the first
/// conversion failure aborts the whole build and no partial table is
/// produced. Converted columns sharing a target name are folded together
/// with [`merge_into`], earlier columns taking precedence. Output columns
/// appear in the order each target name first occurred among the included
/// specs.
pub fn build_output_table(table: &Table, specs: &[ColumnSpec]) -> Result<Table> {
    let span = info_span!("build_output_table", rows = table.row_count());
    let _guard = span.enter();

    // (target_name, merged values), in first-appearance order.
    let mut outputs: Vec<(String, Vec<CellValue>)> = Vec::new();
    let mut converted_count = 0usize;

    // Walk the table's own column order so merge precedence never depends
    // on the order the caller assembled the specs in.
    for column in table.columns() {
        let Some(spec) = specs
            .iter()
            .find(|s| s.include && s.original_name == column.name)
        else {
            continue;
        };
        let converted = convert_column(&column.name, &column.values, spec.column_type)?;
        converted_count += 1;
        debug!(
            column = %column.name,
            target = %spec.target_name,
            column_type = %spec.column_type,
            "column converted"
        );
        match outputs.iter_mut().find(|(name, _)| *name == spec.target_name) {
            Some((_, accumulator)) => {
                let merged = merge_into(std::mem::take(accumulator), converted);
                *accumulator = merged;
            }
            None => outputs.push((spec.target_name.clone(), converted)),
        }
    }

    let mut output = Table::new();
    for (name, values) in outputs {
        output.push_column(Column::new(name, values))?;
    }
    info!(
        included = converted_count,
        output_columns = output.column_count(),
        "output table built"
    );
    Ok(output)
}
