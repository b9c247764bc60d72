use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use remap_ingest::{build_column_hints, read_table};
use remap_report::write_table;
use remap_spec::{SpecState, load_config, save_config};
use remap_transform::build_output_table;

use crate::cli::{ColumnsArgs, ConvertArgs, InitConfigArgs};
use crate::summary::print_columns;
use crate::types::ConvertResult;

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let table = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let hints = build_column_hints(&table);
    println!(
        "{}: {} columns, {} rows",
        args.input.display(),
        table.column_count(),
        table.row_count()
    );
    print_columns(&hints);
    Ok(())
}

pub fn run_init_config(args: &InitConfigArgs) -> Result<()> {
    let table = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let state = SpecState::for_table(&table);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_config_path(&args.input));
    save_config(&state.to_config(), &output)
        .with_context(|| format!("write {}", output.display()))?;
    println!(
        "Wrote configuration for {} columns to {}",
        state.specs().len(),
        output.display()
    );
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let started = Instant::now();
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();

    let table = read_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let mut specs = SpecState::for_table(&table);
    let config = load_config(&args.config)
        .with_context(|| format!("load configuration {}", args.config.display()))?;
    specs.apply_config(&config);

    let summary = specs.summary();
    if summary.included == 0 {
        warn!("configuration includes no columns; the output will be empty");
    }
    info!(
        source_columns = summary.total,
        included = summary.included,
        output_columns = summary.output_columns,
        "configuration applied"
    );

    let output_table = build_output_table(&table, specs.specs())?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    write_table(&output_table, &output_path)
        .with_context(|| format!("write {}", output_path.display()))?;

    Ok(ConvertResult {
        input: args.input.clone(),
        output: output_path,
        rows: output_table.row_count(),
        source_columns: summary.total,
        included: summary.included,
        output_columns: output_table.column_count(),
        duration_ms: started.elapsed().as_millis(),
    })
}

fn default_config_path(input: &Path) -> PathBuf {
    input.with_extension("config.json")
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_remapped.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_derive_from_input() {
        let input = PathBuf::from("/data/ventas.csv");
        assert_eq!(
            default_config_path(&input),
            PathBuf::from("/data/ventas.config.json")
        );
        assert_eq!(
            default_output_path(&input),
            PathBuf::from("/data/ventas_remapped.csv")
        );
    }
}
