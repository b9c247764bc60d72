//! Integration tests for the output table pipeline.

use remap_model::{CellValue, Column, ColumnSpec, ColumnType, RemapError, Table};
use remap_transform::build_output_table;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn table(columns: Vec<(&str, Vec<CellValue>)>) -> Table {
    let mut table = Table::new();
    for (name, values) in columns {
        table.push_column(Column::new(name, values)).unwrap();
    }
    table
}

fn spec(original: &str, target: &str, column_type: ColumnType) -> ColumnSpec {
    ColumnSpec {
        original_name: original.to_string(),
        target_name: target.to_string(),
        include: true,
        column_type,
    }
}

#[test]
fn excluded_columns_are_dropped() {
    let input = table(vec![
        ("A", vec![text("1")]),
        ("B", vec![text("2")]),
    ]);
    let mut excluded = spec("B", "B", ColumnType::Text);
    excluded.include = false;
    let specs = vec![spec("A", "A", ColumnType::Text), excluded];

    let output = build_output_table(&input, &specs).unwrap();
    assert_eq!(output.column_names().collect::<Vec<_>>(), vec!["A"]);
    assert_eq!(output.row_count(), 1);
}

#[test]
fn row_count_is_preserved() {
    let input = table(vec![
        ("Fecha", vec![text("2023-01-15"), text("nope"), CellValue::Missing]),
        ("Importe", vec![text("1,5"), CellValue::Missing, text("2,5")]),
    ]);
    let specs = vec![
        spec("Fecha", "Fecha", ColumnType::Date),
        spec("Importe", "Importe", ColumnType::PositiveNumber),
    ];

    let output = build_output_table(&input, &specs).unwrap();
    assert_eq!(output.row_count(), 3);
    assert_eq!(output.column_count(), 2);
}

#[test]
fn same_target_columns_merge_first_non_null() {
    let input = table(vec![
        (
            "Caja",
            vec![text("1"), CellValue::Missing, text("3")],
        ),
        (
            "Banco",
            vec![CellValue::Missing, text("2"), text("9")],
        ),
    ]);
    let specs = vec![
        spec("Caja", "Importe", ColumnType::PositiveNumber),
        spec("Banco", "Importe", ColumnType::PositiveNumber),
    ];

    let output = build_output_table(&input, &specs).unwrap();
    assert_eq!(output.column_count(), 1);
    let merged = &output.column("Importe").unwrap().values;
    assert_eq!(
        merged,
        &vec![
            CellValue::Number(1.0),
            CellValue::Number(2.0),
            CellValue::Number(3.0),
        ]
    );
}

#[test]
fn merge_precedence_follows_table_order_not_spec_order() {
    let input = table(vec![
        ("Caja", vec![text("1"), CellValue::Missing]),
        ("Banco", vec![text("8"), text("2")]),
    ]);
    // Specs listed Banco-first; the table order still decides precedence.
    let specs = vec![
        spec("Banco", "Importe", ColumnType::PositiveNumber),
        spec("Caja", "Importe", ColumnType::PositiveNumber),
    ];

    let output = build_output_table(&input, &specs).unwrap();
    let merged = &output.column("Importe").unwrap().values;
    assert_eq!(
        merged,
        &vec![CellValue::Number(1.0), CellValue::Number(2.0)]
    );
}

#[test]
fn output_order_is_first_appearance_of_target() {
    let input = table(vec![
        ("C1", vec![text("a")]),
        ("C2", vec![text("b")]),
        ("C3", vec![text("c")]),
    ]);
    let specs = vec![
        spec("C1", "X", ColumnType::Text),
        spec("C2", "Y", ColumnType::Text),
        spec("C3", "X", ColumnType::Text),
    ];

    let output = build_output_table(&input, &specs).unwrap();
    assert_eq!(output.column_names().collect::<Vec<_>>(), vec!["X", "Y"]);
}

#[test]
fn first_failing_column_in_table_order_is_reported() {
    let input = table(vec![
        ("Uno", vec![text("bad")]),
        ("Dos", vec![text("also bad")]),
    ]);
    let specs = vec![
        spec("Dos", "Dos", ColumnType::NegativeNumber),
        spec("Uno", "Uno", ColumnType::PositiveNumber),
    ];

    let err = build_output_table(&input, &specs).unwrap_err();
    assert!(matches!(
        err,
        RemapError::Conversion { column, requested }
            if column == "Uno" && requested == ColumnType::PositiveNumber
    ));
}

#[test]
fn text_converted_missing_blocks_gap_filling() {
    // Text conversion turns missing into "", which is a real value as far
    // as merging is concerned.
    let input = table(vec![
        ("A", vec![CellValue::Missing]),
        ("B", vec![text("fallback")]),
    ]);
    let specs = vec![
        spec("A", "Out", ColumnType::Text),
        spec("B", "Out", ColumnType::Text),
    ];

    let output = build_output_table(&input, &specs).unwrap();
    assert_eq!(output.column("Out").unwrap().values, vec![text("")]);
}

#[test]
fn empty_spec_set_yields_empty_table() {
    let input = table(vec![("A", vec![text("1")])]);
    let output = build_output_table(&input, &[]).unwrap();
    assert!(output.is_empty());
    assert_eq!(output.row_count(), 0);
}
