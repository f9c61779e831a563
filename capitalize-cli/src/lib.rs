//! Capitalize CLI library
//!
//! This library provides the command-line interface for the name
//! capitalization engine in `capitalize-core`.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod rule_source;

pub use error::{CliError, CliResult};
