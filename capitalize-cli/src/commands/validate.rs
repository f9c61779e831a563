//! Validate command implementation

use anyhow::Result;
use capitalize_core::RuleConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match RuleConfig::from_file(&self.rules) {
            Ok(config) => {
                println!("✓ Rule file is valid!");
                if !config.metadata.name.is_empty() {
                    println!("  Name: {}", config.metadata.name);
                }
                println!("  Inherits defaults: {}", config.inherit_defaults);
                println!("  Exceptions: {}", config.exceptions.words.len());
                println!("  Surnames: {}", config.surnames.words.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules: PathBuf::from("rules.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("rules.toml"));
    }

    #[test]
    fn test_validate_valid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
name = "Nordic"

[exceptions]
words = ["af", "til"]
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_entry_with_space() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[surnames]\nwords = [\"van der\"]\n").unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_validate_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[exceptions\nwords = 3").unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
