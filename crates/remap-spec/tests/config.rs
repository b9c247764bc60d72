//! Configuration round-trip and lenient-apply tests.

use std::io::Write;

use remap_model::{ColumnType, RemapError};
use remap_spec::{SpecState, load_config, save_config};

fn edited_state() -> SpecState {
    let mut state = SpecState::from_columns(["Fecha", "Caja", "Banco", "Notas"]);
    state.set_include("Fecha", true);
    state.set_column_type("Fecha", ColumnType::Date);
    state.set_include("Caja", true);
    state.set_target_name("Caja", "Importe");
    state.set_column_type("Caja", ColumnType::PositiveNumber);
    state.set_include("Banco", true);
    state.set_target_name("Banco", "Importe");
    state.set_column_type("Banco", ColumnType::NegativeNumber);
    state
}

#[test]
fn save_then_load_reproduces_every_spec() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");

    let state = edited_state();
    save_config(&state.to_config(), &path).expect("save config");

    let loaded = load_config(&path).expect("load config");
    let mut fresh = SpecState::from_columns(["Fecha", "Caja", "Banco", "Notas"]);
    fresh.apply_config(&loaded);

    assert_eq!(fresh.specs(), state.specs());
}

#[test]
fn config_file_uses_the_original_layout() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.json");
    save_config(&edited_state().to_config(), &path).expect("save config");

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["columns"]["Caja"], "Importe");
    assert_eq!(raw["includes"]["Notas"], false);
    assert_eq!(raw["types"]["Banco"], "Numero negativo");
    assert_eq!(raw["types"]["Notas"], "Texto");
}

#[test]
fn unknown_columns_and_labels_are_ignored() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(
        br#"{
            "columns": { "Fecha": "Dia", "Inexistente": "X" },
            "includes": { "Inexistente": true },
            "types": { "Fecha": "Moneda" }
        }"#,
    )
    .expect("write config");

    let config = load_config(file.path()).expect("load config");
    let mut state = SpecState::from_columns(["Fecha"]);
    state.apply_config(&config);

    let spec = state.get("Fecha").unwrap();
    assert_eq!(spec.target_name, "Dia");
    // Unknown label left the default type in place.
    assert_eq!(spec.column_type, ColumnType::Text);
    assert!(!spec.include);
}

#[test]
fn missing_sections_leave_specs_untouched() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(br#"{ "columns": { "Fecha": "Dia" } }"#)
        .expect("write config");

    let config = load_config(file.path()).expect("load config");
    let mut state = SpecState::from_columns(["Fecha"]);
    state.set_include("Fecha", true);
    state.apply_config(&config);

    let spec = state.get("Fecha").unwrap();
    assert_eq!(spec.target_name, "Dia");
    assert!(spec.include);
}

#[test]
fn malformed_file_is_a_config_format_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"[1, 2, 3]").expect("write config");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, RemapError::ConfigFormat(_)));
}

#[test]
fn missing_file_is_a_file_access_error() {
    let err = load_config(std::path::Path::new("/no/such/config.json")).unwrap_err();
    assert!(matches!(err, RemapError::FileAccess { .. }));
}
