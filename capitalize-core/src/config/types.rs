//! Rule file schema
//!
//! ```toml
//! inherit_defaults = true
//!
//! [metadata]
//! name = "Scandinavian particles"
//!
//! [exceptions]
//! words = ["of", "af"]
//!
//! [surnames]
//! words = ["McElroy"]
//! ```

use serde::{Deserialize, Serialize};

/// Root rule file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Start from the built-in lists (`false` uses only this file's words)
    #[serde(default = "default_true")]
    pub inherit_defaults: bool,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub exceptions: WordList,
    #[serde(default)]
    pub surnames: WordList,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            inherit_defaults: true,
            metadata: Metadata::default(),
            exceptions: WordList::default(),
            surnames: WordList::default(),
        }
    }
}

/// Descriptive metadata, not used for matching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_true() -> bool {
    true
}
