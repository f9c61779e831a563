use super::defaults::{DEFAULT_EXCEPTIONS, DEFAULT_SURNAMES};
use super::types::{Metadata, RuleConfig, WordList};
use crate::error::{CapitalizeError, Result};
use log::debug;
use std::fs;
use std::path::Path;

const INLINE_SOURCE: &str = "<inline>";

impl RuleConfig {
    /// Parse and validate a rule file held in memory
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, INLINE_SOURCE)
    }

    /// Read, parse and validate a rule file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content, &path.display().to_string())?;

        debug!(
            "loaded rule file {} ({} exceptions, {} surnames)",
            path.display(),
            config.exceptions.words.len(),
            config.surnames.words.len()
        );

        Ok(config)
    }

    /// The built-in lists expressed as a rule file
    pub fn builtin() -> Self {
        Self {
            inherit_defaults: false,
            metadata: Metadata {
                name: "built-in".to_string(),
                description: Some("Default particles and fixed-casing surnames".to_string()),
            },
            exceptions: WordList {
                words: DEFAULT_EXCEPTIONS.iter().map(|w| w.to_string()).collect(),
            },
            surnames: WordList {
                words: DEFAULT_SURNAMES.iter().map(|w| w.to_string()).collect(),
            },
        }
    }

    /// Check that every entry can match a token
    pub fn validate(&self) -> Result<()> {
        self.exceptions
            .words
            .iter()
            .chain(&self.surnames.words)
            .try_for_each(|word| validate_entry(word))
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CapitalizeError::Configuration {
            path: INLINE_SOURCE.to_string(),
            error: e.to_string(),
        })
    }

    fn parse(content: &str, source: &str) -> Result<Self> {
        let config: RuleConfig =
            toml::from_str(content).map_err(|e| CapitalizeError::Configuration {
                path: source.to_string(),
                error: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|e| CapitalizeError::Configuration {
                path: source.to_string(),
                error: e.to_string(),
            })?;

        Ok(config)
    }
}

/// Reject entries that can never equal a single normalized token.
pub fn validate_entry(word: &str) -> Result<()> {
    let reason = if word.is_empty() {
        "entry is empty"
    } else if word.chars().any(char::is_whitespace) {
        "entry contains whitespace"
    } else {
        return Ok(());
    };

    Err(CapitalizeError::InvalidEntry {
        entry: word.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_file() {
        let config = RuleConfig::from_toml_str(
            r#"
inherit_defaults = false

[metadata]
name = "Scandinavian"
description = "Nordic particles"

[exceptions]
words = ["of", "af"]

[surnames]
words = ["McElroy"]
"#,
        )
        .unwrap();

        assert!(!config.inherit_defaults);
        assert_eq!(config.metadata.name, "Scandinavian");
        assert_eq!(config.exceptions.words, vec!["of", "af"]);
        assert_eq!(config.surnames.words, vec!["McElroy"]);
    }

    #[test]
    fn test_sections_are_optional() {
        let config = RuleConfig::from_toml_str("[exceptions]\nwords = [\"of\"]\n").unwrap();

        assert!(config.inherit_defaults);
        assert!(config.surnames.words.is_empty());
        assert_eq!(config.metadata.name, "");
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = RuleConfig::from_toml_str("").unwrap();
        assert_eq!(config, RuleConfig::default());
    }

    #[test]
    fn test_syntax_error() {
        match RuleConfig::from_toml_str("[exceptions\nwords = 1") {
            Err(CapitalizeError::Configuration { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type() {
        let result = RuleConfig::from_toml_str("[exceptions]\nwords = \"of\"\n");
        assert!(matches!(
            result,
            Err(CapitalizeError::Configuration { .. })
        ));
    }

    #[test]
    fn test_whitespace_entry_rejected() {
        let result = RuleConfig::from_toml_str("[surnames]\nwords = [\"van der Berg\"]\n");
        match result {
            Err(CapitalizeError::Configuration { error, .. }) => {
                assert!(error.contains("van der Berg"));
                assert!(error.contains("whitespace"));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_entry() {
        assert!(validate_entry("af").is_ok());
        assert!(validate_entry("Sant'Ana").is_ok());
        assert!(matches!(
            validate_entry(""),
            Err(CapitalizeError::InvalidEntry { .. })
        ));
        assert!(matches!(
            validate_entry("de\tla"),
            Err(CapitalizeError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[exceptions]\nwords = [\"af\"]\n").unwrap();

        let config = RuleConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.exceptions.words, vec!["af"]);
    }

    #[test]
    fn test_from_missing_file() {
        let result = RuleConfig::from_file("/nonexistent/rules.toml");
        assert!(matches!(result, Err(CapitalizeError::Io(_))));
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "inherit_defaults = \"yes\"\n").unwrap();

        match RuleConfig::from_file(temp_file.path()) {
            Err(CapitalizeError::Configuration { path, .. }) => {
                assert_eq!(path, temp_file.path().display().to_string());
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let builtin = RuleConfig::builtin();
        let toml = builtin.to_toml_string().unwrap();
        let parsed = RuleConfig::from_toml_str(&toml).unwrap();

        assert_eq!(parsed, builtin);
        assert!(toml.contains("McCain"));
    }
}
