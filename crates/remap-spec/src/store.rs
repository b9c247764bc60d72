use std::fs;
use std::path::Path;

use tracing::info;

use remap_model::{RemapError, Result};

use crate::config::ColumnConfig;

/// Reads a configuration file.
///
/// I/O problems surface as [`RemapError::FileAccess`]; a file that is not
/// a JSON object of the expected shape surfaces as
/// [`RemapError::ConfigFormat`] and leaves the caller's specs untouched.
pub fn load_config(path: &Path) -> Result<ColumnConfig> {
    let contents = fs::read_to_string(path).map_err(|source| RemapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ColumnConfig = serde_json::from_str(&contents)
        .map_err(|error| RemapError::ConfigFormat(error.to_string()))?;
    info!(
        path = %path.display(),
        columns = config.columns.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Writes a configuration file, pretty-printed.
pub fn save_config(config: &ColumnConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|error| RemapError::ConfigFormat(error.to_string()))?;
    fs::write(path, json).map_err(|source| RemapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "configuration saved");
    Ok(())
}
