//! Rule source management for CLI

use crate::error::CliError;
use anyhow::Result;
use capitalize_core::{Capitalizer, Options, RuleConfig};
use log::info;
use std::path::PathBuf;

/// Where the base rules come from
#[derive(Debug, Clone)]
pub enum RuleSource {
    /// Built-in particles and surnames only
    BuiltIn,
    /// External rule file
    External {
        /// Path to the rule file
        path: PathBuf,
    },
}

impl RuleSource {
    /// Pick a source from an optional `--rules` path
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => RuleSource::External { path },
            None => RuleSource::BuiltIn,
        }
    }

    /// Get the display name for the rule source
    pub fn display_name(&self) -> String {
        match self {
            RuleSource::BuiltIn => "Built-in rules".to_string(),
            RuleSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the rule file, if any
    pub fn load(&self) -> Result<Option<RuleConfig>> {
        match self {
            RuleSource::BuiltIn => Ok(None),
            RuleSource::External { path } => RuleConfig::from_file(path)
                .map(Some)
                .map_err(|e| CliError::RuleFile(e.to_string()).into()),
        }
    }

    /// Build a capitalizer from this source plus command-line entries
    pub fn build_capitalizer(&self, extra: &Options, no_defaults: bool) -> Result<Capitalizer> {
        info!("Using {}", self.display_name());

        let mut builder = Capitalizer::builder();
        if no_defaults {
            builder = builder.without_defaults();
        }
        if let Some(config) = self.load()? {
            builder = builder.rule_config(&config);
        }

        builder
            .options(extra)
            .build()
            .map_err(|e| CliError::InvalidEntry(e.to_string()).into())
    }
}
