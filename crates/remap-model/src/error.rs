use std::path::PathBuf;

use thiserror::Error;

use crate::spec::ColumnType;

#[derive(Debug, Error)]
pub enum RemapError {
    /// One or more cells in a column could not be parsed as the requested
    /// numeric type. Aborts the whole conversion.
    #[error("Column '{column}' contains invalid data for type '{requested}'.")]
    Conversion {
        column: String,
        requested: ColumnType,
    },

    /// Source file unreadable or destination unwritable.
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not a JSON object of the expected shape.
    #[error("invalid configuration file: {0}")]
    ConfigFormat(String),

    /// Input header appears more than once.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RemapError>;
