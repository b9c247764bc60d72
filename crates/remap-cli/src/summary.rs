use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use remap_ingest::ColumnHint;

use crate::types::ConvertResult;

pub fn print_columns(hints: &[(String, ColumnHint)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Numeric"),
        header_cell("Missing"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (name, hint) in hints {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(if hint.is_numeric { "yes" } else { "" }),
            Cell::new(format!("{:.0}%", hint.missing_ratio * 100.0)),
            Cell::new(format!("{:.0}%", hint.unique_ratio * 100.0)),
        ]);
    }
    println!("{table}");
}

pub fn print_convert_summary(result: &ConvertResult) {
    println!("Input:  {}", result.input.display());
    println!("Output: {}", result.output.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Source columns"),
        header_cell("Included"),
        header_cell("Output columns"),
        header_cell("Duration"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(result.source_columns),
        Cell::new(result.included),
        Cell::new(result.output_columns),
        Cell::new(format!("{} ms", result.duration_ms)),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
