//! Error types for name capitalization
//!
//! Capitalizing a `&str` never fails. Errors only arise at the edges:
//! decoding raw bytes, validating builder entries and loading rule files.

use std::str::Utf8Error;
use thiserror::Error;

/// Errors raised by the capitalization library
#[derive(Error, Debug)]
pub enum CapitalizeError {
    /// Input bytes are not valid UTF-8
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] Utf8Error),

    /// A rule entry can never match a token
    #[error("invalid rule entry '{entry}': {reason}")]
    InvalidEntry {
        /// The offending entry
        entry: String,
        /// Why the entry was rejected
        reason: String,
    },

    /// Rule file could not be parsed or validated
    #[error("configuration error in {path}: {error}")]
    Configuration {
        /// Rule file path, or `<inline>` for in-memory TOML
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// I/O error while reading a rule file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for capitalization operations
pub type Result<T> = std::result::Result<T, CapitalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_display() {
        let error = CapitalizeError::InvalidEntry {
            entry: "van der".to_string(),
            reason: "contains whitespace".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid rule entry 'van der': contains whitespace"
        );
    }

    #[test]
    fn test_configuration_display() {
        let error = CapitalizeError::Configuration {
            path: "rules.toml".to_string(),
            error: "missing field `words`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "configuration error in rules.toml: missing field `words`"
        );
    }

    #[test]
    fn test_utf8_conversion() {
        let bytes = [0x66, 0x6f, 0xff];
        let utf8_error = std::str::from_utf8(&bytes).unwrap_err();
        let error: CapitalizeError = utf8_error.into();

        match error {
            CapitalizeError::InvalidEncoding(_) => (),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_io_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "rules.toml");
        let error: CapitalizeError = io_error.into();
        assert!(error.to_string().starts_with("I/O error:"));
    }
}
