pub mod cell;
pub mod error;
pub mod spec;
pub mod table;

pub use cell::CellValue;
pub use error::{RemapError, Result};
pub use spec::{ColumnSpec, ColumnType};
pub use table::{Column, Table};
