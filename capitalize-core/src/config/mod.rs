//! Built-in rule tables and TOML rule files

pub mod defaults;
mod loader;
mod types;

pub use loader::validate_entry;
pub use types::{Metadata, RuleConfig, WordList};
