//! Per-call rule extensions

use serde::{Deserialize, Serialize};

/// Extra rule entries for a single call
///
/// Options extend the capitalizer's rules for the duration of one call
/// only; nothing is written back into shared state.
///
/// ```
/// use capitalize_core::{capitalize_with, Options};
///
/// let options = Options::new().exception("of");
/// assert_eq!(
///     capitalize_with("gørvel fadersdotter of giske", &options),
///     "Gørvel Fadersdotter of Giske"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Words that keep a fixed casing, e.g. `"of"`, `"af"`
    #[serde(default)]
    pub exceptions: Vec<String>,
    /// Surnames with special casing, e.g. `"McElroy"`
    #[serde(default)]
    pub surnames: Vec<String>,
}

impl Options {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one exception entry
    pub fn exception(mut self, word: impl Into<String>) -> Self {
        self.exceptions.push(word.into());
        self
    }

    /// Add one surname entry
    pub fn surname(mut self, word: impl Into<String>) -> Self {
        self.surnames.push(word.into());
        self
    }

    /// Add several exception entries
    pub fn with_exceptions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add several surname entries
    pub fn with_surnames<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surnames.extend(words.into_iter().map(Into::into));
        self
    }

    /// Whether no entries are set
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty() && self.surnames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let options = Options::new()
            .exception("of")
            .with_exceptions(["af", "zu"])
            .surname("McElroy");

        assert_eq!(options.exceptions, vec!["of", "af", "zu"]);
        assert_eq!(options.surnames, vec!["McElroy"]);
        assert!(!options.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Options::default().is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: Options = serde_json::from_str(r#"{"exceptions": ["of"]}"#).unwrap();
        assert_eq!(options.exceptions, vec!["of"]);
        assert!(options.surnames.is_empty());
    }
}
