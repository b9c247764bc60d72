//! Column specification types.
//!
//! A [`ColumnSpec`] describes how one source column maps to an output
//! column: its new name, whether it is included, and the semantic type its
//! values are converted to. Specs sharing a target name form a merge group
//! and produce a single output column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type a column is converted to.
///
/// The serialized labels are the ones the configuration file has always
/// used, so saved configurations stay readable by older builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    #[default]
    #[serde(rename = "Texto")]
    Text,
    #[serde(rename = "Numero positivo")]
    PositiveNumber,
    #[serde(rename = "Numero negativo")]
    NegativeNumber,
    #[serde(rename = "Fecha")]
    Date,
}

impl ColumnType {
    /// The configuration-file label for this type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Texto",
            Self::PositiveNumber => "Numero positivo",
            Self::NegativeNumber => "Numero negativo",
            Self::Date => "Fecha",
        }
    }

    /// Parses a configuration-file label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Texto" => Some(Self::Text),
            "Numero positivo" => Some(Self::PositiveNumber),
            "Numero negativo" => Some(Self::NegativeNumber),
            "Fecha" => Some(Self::Date),
            _ => None,
        }
    }

    /// All selectable types, in presentation order.
    pub fn all() -> [Self; 4] {
        [
            Self::NegativeNumber,
            Self::PositiveNumber,
            Self::Text,
            Self::Date,
        ]
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-editable descriptor of how one source column maps to an output
/// column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique key into the source table. Fixed for the table's lifetime.
    pub original_name: String,
    /// Output column name. Collisions across specs signal a merge.
    pub target_name: String,
    /// Whether this column participates in the output.
    pub include: bool,
    /// Conversion applied to the column's values.
    pub column_type: ColumnType,
}

impl ColumnSpec {
    /// A default spec for a freshly loaded column: target keeps the
    /// original name, excluded, treated as text.
    pub fn new(original_name: impl Into<String>) -> Self {
        let original_name = original_name.into();
        Self {
            target_name: original_name.clone(),
            original_name,
            include: false,
            column_type: ColumnType::default(),
        }
    }
}
