use remap_model::{ColumnSpec, ColumnType, Table};
use tracing::debug;

use crate::config::ColumnConfig;

/// The ColumnSpec set for the currently loaded table.
///
/// Specs are kept in table-column order, one per column. The set is
/// replaced wholesale when a new table is loaded.
#[derive(Debug, Clone, Default)]
pub struct SpecState {
    specs: Vec<ColumnSpec>,
}

/// Summary counts over a spec set.
#[derive(Debug, Clone, Copy)]
pub struct SpecSummary {
    /// Total number of specs (one per source column).
    pub total: usize,
    /// Specs with the include flag set.
    pub included: usize,
    /// Distinct target names among included specs, i.e. output columns.
    pub output_columns: usize,
}

impl SpecState {
    /// Default specs for a freshly loaded table: target keeps the original
    /// name, excluded, type text.
    pub fn for_table(table: &Table) -> Self {
        Self::from_columns(table.column_names())
    }

    pub fn from_columns<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            specs: names.into_iter().map(ColumnSpec::new).collect(),
        }
    }

    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    pub fn get(&self, original_name: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|s| s.original_name == original_name)
    }

    fn get_mut(&mut self, original_name: &str) -> Option<&mut ColumnSpec> {
        self.specs
            .iter_mut()
            .find(|s| s.original_name == original_name)
    }

    /// Sets a spec's target name. Returns false when no such column exists.
    pub fn set_target_name(&mut self, original_name: &str, target: impl Into<String>) -> bool {
        match self.get_mut(original_name) {
            Some(spec) => {
                spec.target_name = target.into();
                true
            }
            None => false,
        }
    }

    /// Sets a spec's include flag. Returns false when no such column exists.
    pub fn set_include(&mut self, original_name: &str, include: bool) -> bool {
        match self.get_mut(original_name) {
            Some(spec) => {
                spec.include = include;
                true
            }
            None => false,
        }
    }

    /// Sets a spec's type. Returns false when no such column exists.
    pub fn set_column_type(&mut self, original_name: &str, column_type: ColumnType) -> bool {
        match self.get_mut(original_name) {
            Some(spec) => {
                spec.column_type = column_type;
                true
            }
            None => false,
        }
    }

    /// Applies a stored configuration.
    ///
    /// Per-key: entries naming columns the current table does not have are
    /// skipped, as are type labels that do not parse. Specs the config does
    /// not mention keep their current values.
    pub fn apply_config(&mut self, config: &ColumnConfig) {
        for (original, target) in &config.columns {
            if let Some(spec) = self.get_mut(original) {
                spec.target_name = target.clone();
            } else {
                debug!(column = %original, "config names unknown column, skipped");
            }
        }
        for (original, include) in &config.includes {
            if let Some(spec) = self.get_mut(original) {
                spec.include = *include;
            }
        }
        for (original, label) in &config.types {
            let Some(column_type) = ColumnType::from_label(label) else {
                debug!(column = %original, label = %label, "unknown type label, skipped");
                continue;
            };
            if let Some(spec) = self.get_mut(original) {
                spec.column_type = column_type;
            }
        }
    }

    /// Captures the full spec set as a storable configuration. Every spec
    /// is written, included or not.
    pub fn to_config(&self) -> ColumnConfig {
        let mut config = ColumnConfig::default();
        for spec in &self.specs {
            config
                .columns
                .insert(spec.original_name.clone(), spec.target_name.clone());
            config
                .includes
                .insert(spec.original_name.clone(), spec.include);
            config
                .types
                .insert(spec.original_name.clone(), spec.column_type.label().to_string());
        }
        config
    }

    pub fn summary(&self) -> SpecSummary {
        let mut targets: Vec<&str> = Vec::new();
        for spec in self.specs.iter().filter(|s| s.include) {
            if !targets.contains(&spec.target_name.as_str()) {
                targets.push(&spec.target_name);
            }
        }
        SpecSummary {
            total: self.specs.len(),
            included: self.specs.iter().filter(|s| s.include).count(),
            output_columns: targets.len(),
        }
    }
}
