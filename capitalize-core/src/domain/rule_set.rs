//! Exception and surname lists used by the rule chain

use super::lexicon::Lexicon;
use crate::config::defaults::{DEFAULT_EXCEPTIONS, DEFAULT_SURNAMES};
use std::sync::{Arc, OnceLock};

static BUILTIN_RULES: OnceLock<Arc<RuleSet>> = OnceLock::new();

/// The word lists consulted while capitalizing
///
/// `exceptions` hold words with a fixed (usually lowercase) casing such as
/// nobiliary particles; `surnames` hold fixed mixed-case forms like
/// `McCain`. Both match case-insensitively and render the stored casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    exceptions: Lexicon,
    surnames: Lexicon,
}

impl RuleSet {
    /// Create a rule set from two lexicons
    pub fn new(exceptions: Lexicon, surnames: Lexicon) -> Self {
        Self {
            exceptions,
            surnames,
        }
    }

    /// Rule set with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared built-in defaults, created once and never mutated
    pub fn builtin() -> Arc<RuleSet> {
        BUILTIN_RULES
            .get_or_init(|| {
                Arc::new(Self::new(
                    Lexicon::from_words(DEFAULT_EXCEPTIONS.iter().copied()),
                    Lexicon::from_words(DEFAULT_SURNAMES.iter().copied()),
                ))
            })
            .clone()
    }

    /// Exception entries
    pub fn exceptions(&self) -> &Lexicon {
        &self.exceptions
    }

    /// Surname entries
    pub fn surnames(&self) -> &Lexicon {
        &self.surnames
    }

    /// Append exception entries. Existing keys keep their casing.
    pub fn add_exceptions<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions.extend(words);
    }

    /// Append surname entries. Existing keys keep their casing.
    pub fn add_surnames<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surnames.extend(words);
    }

    /// Copy of this rule set with extra entries appended
    pub fn extended<'a, E, S>(&self, exceptions: E, surnames: S) -> RuleSet
    where
        E: IntoIterator<Item = &'a str>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut rules = self.clone();
        rules.add_exceptions(exceptions);
        rules.add_surnames(surnames);
        rules
    }

    /// Whether both lists are empty
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty() && self.surnames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contents() {
        let rules = RuleSet::builtin();
        assert_eq!(rules.exceptions().len(), 22);
        assert_eq!(rules.exceptions().lookup("VON"), Some("von"));
        assert_eq!(rules.surnames().lookup("mccain"), Some("McCain"));
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = RuleSet::builtin();
        let second = RuleSet::builtin();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let base = RuleSet::builtin();
        let extended = base.extended(["of", "af"], ["McElroy"]);

        assert!(extended.exceptions().contains("of"));
        assert!(extended.surnames().contains("mcelroy"));
        assert!(!base.exceptions().contains("of"));
        assert!(!base.surnames().contains("mcelroy"));
    }

    #[test]
    fn test_extended_keeps_existing_casing() {
        let base = RuleSet::builtin();
        let extended = base.extended(["De"], std::iter::empty());
        assert_eq!(extended.exceptions().lookup("de"), Some("de"));
    }

    #[test]
    fn test_empty() {
        assert!(RuleSet::empty().is_empty());
        assert!(!RuleSet::builtin().is_empty());
    }
}
