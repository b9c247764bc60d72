//! Output table serialization.
//!
//! Columns whose values are all numeric are rendered as fixed two-decimal,
//! thousands-grouped strings (`1234.5` becomes `1,234.50`); everything
//! else keeps its plain string form. Formatting is applied here, at write
//! time — the in-memory table keeps raw values.

mod writer;

pub use writer::{format_numeric, is_numeric_column, write_table};
