use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stored form of a spec set.
///
/// Types are kept as raw label strings so files written by other versions
/// stay loadable; unrecognized labels are simply skipped on apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Original column name to target name.
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
    /// Original column name to include flag.
    #[serde(default)]
    pub includes: BTreeMap<String, bool>,
    /// Original column name to type label.
    #[serde(default)]
    pub types: BTreeMap<String, String>,
}

impl ColumnConfig {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.includes.is_empty() && self.types.is_empty()
    }
}
