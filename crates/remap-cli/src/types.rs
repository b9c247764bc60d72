use std::path::PathBuf;

/// Outcome of a `convert` run, for the end-of-run summary.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub source_columns: usize,
    pub included: usize,
    pub output_columns: usize,
    pub duration_ms: u128,
}
