//! CLI library components for the CSV remapper.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
