//! Column spec session state and configuration persistence.
//!
//! [`SpecState`] owns the ColumnSpec set for the currently loaded table:
//! one spec per column, created with defaults on load, mutated through
//! explicit setters or by applying a stored configuration, and discarded
//! wholesale when a new table replaces the old one.
//!
//! [`ColumnConfig`] is the JSON representation users save and reload:
//! three maps keyed by original column name (`columns`, `includes`,
//! `types`). Application is per-key and lenient — entries for columns the
//! current table does not have, and unrecognized type labels, are ignored.

mod config;
mod state;
mod store;

pub use config::ColumnConfig;
pub use state::{SpecState, SpecSummary};
pub use store::{load_config, save_config};
