//! Column transformation engine.
//!
//! This crate implements the save-time data pipeline:
//!
//! - **numeric**: decimal-comma number parsing (`.` thousands, `,` decimal)
//! - **datetime**: permissive date/time parsing for the `Fecha` type
//! - **convert**: per-column type conversion
//! - **merge**: first-non-null merging of same-named output columns
//! - **pipeline**: assembly of the full output table from a spec set
//!
//! The pipeline is a stateless pure function over a (table, specs) pair and
//! is re-run in full on every conversion request.

pub mod convert;
pub mod datetime;
pub mod merge;
pub mod numeric;
pub mod pipeline;

pub use convert::convert_column;
pub use datetime::parse_datetime;
pub use merge::merge_into;
pub use numeric::parse_decimal_comma;
pub use pipeline::build_output_table;
