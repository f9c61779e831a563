//! Main entry point for name capitalization

use super::options::Options;
use crate::config::{validate_entry, RuleConfig};
use crate::domain::{normalize, title_case, tokenize, CasingRule, RuleChain, RuleSet, SEPARATOR};
use crate::error::Result;
use std::borrow::Cow;
use std::sync::Arc;

/// Capitalizes personal names
///
/// Holds an immutable base [`RuleSet`] (the built-in lists unless configured
/// otherwise) and a [`RuleChain`]. Every call works on a call-local view of
/// the rules, so one `Capitalizer` can be shared across threads freely.
///
/// ```
/// use capitalize_core::Capitalizer;
///
/// let capitalizer = Capitalizer::new();
/// assert_eq!(capitalizer.capitalize("dom JOÃO vi"), "Dom João VI");
/// ```
#[derive(Debug, Clone)]
pub struct Capitalizer {
    rules: Arc<RuleSet>,
    chain: RuleChain,
}

impl Capitalizer {
    /// Capitalizer with the built-in rules and the standard chain
    pub fn new() -> Self {
        Self {
            rules: RuleSet::builtin(),
            chain: RuleChain::standard(),
        }
    }

    /// Capitalizer with an explicit rule set and the standard chain
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
            chain: RuleChain::standard(),
        }
    }

    /// Capitalizer configured from a rule file
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        Self::builder().rule_config(config).build()
    }

    /// Create a builder
    pub fn builder() -> CapitalizerBuilder {
        CapitalizerBuilder::default()
    }

    /// Base rules consulted on every call
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Rule chain applied to each token
    pub fn chain(&self) -> &RuleChain {
        &self.chain
    }

    /// Capitalize `input` with the base rules.
    ///
    /// Total: any string, including empty or whitespace-only input, yields
    /// a best-effort result.
    pub fn capitalize(&self, input: &str) -> String {
        self.run(input, &self.rules)
    }

    /// Capitalize `input` with the base rules extended by `options`.
    ///
    /// The extension lives only for this call.
    pub fn capitalize_with(&self, input: &str, options: &Options) -> String {
        let rules = self.effective_rules(options);
        self.run(input, &rules)
    }

    /// Decode UTF-8 bytes, then capitalize them.
    ///
    /// Fails with [`CapitalizeError::InvalidEncoding`](crate::CapitalizeError::InvalidEncoding)
    /// on malformed input; no partial output is produced.
    pub fn capitalize_bytes(&self, bytes: &[u8]) -> Result<String> {
        let input = std::str::from_utf8(bytes)?;
        Ok(self.capitalize(input))
    }

    /// Base rules merged with `options`, borrowed when there is nothing to add
    pub fn effective_rules<'a>(&'a self, options: &Options) -> Cow<'a, RuleSet> {
        if options.is_empty() {
            Cow::Borrowed(&*self.rules)
        } else {
            Cow::Owned(self.rules.extended(
                options.exceptions.iter().map(String::as_str),
                options.surnames.iter().map(String::as_str),
            ))
        }
    }

    fn run(&self, input: &str, rules: &RuleSet) -> String {
        let normalized = normalize(input);

        tokenize(&normalized)
            .map(|token| self.chain.apply(title_case(token), rules))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl Default for Capitalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a [`Capitalizer`] with custom base rules
#[derive(Debug)]
pub struct CapitalizerBuilder {
    inherit_defaults: bool,
    exceptions: Vec<String>,
    surnames: Vec<String>,
    chain: RuleChain,
}

impl Default for CapitalizerBuilder {
    fn default() -> Self {
        Self {
            inherit_defaults: true,
            exceptions: Vec::new(),
            surnames: Vec::new(),
            chain: RuleChain::standard(),
        }
    }
}

impl CapitalizerBuilder {
    /// Drop the built-in exception and surname lists
    pub fn without_defaults(mut self) -> Self {
        self.inherit_defaults = false;
        self
    }

    /// Add one exception entry
    pub fn exception(mut self, word: impl Into<String>) -> Self {
        self.exceptions.push(word.into());
        self
    }

    /// Add several exception entries
    pub fn exceptions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add one surname entry
    pub fn surname(mut self, word: impl Into<String>) -> Self {
        self.surnames.push(word.into());
        self
    }

    /// Add several surname entries
    pub fn surnames<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surnames.extend(words.into_iter().map(Into::into));
        self
    }

    /// Add the entries from `options`
    pub fn options(self, options: &Options) -> Self {
        self.exceptions(options.exceptions.iter().cloned())
            .surnames(options.surnames.iter().cloned())
    }

    /// Apply a rule file: its words, and `inherit_defaults = false` if set
    pub fn rule_config(mut self, config: &RuleConfig) -> Self {
        if !config.inherit_defaults {
            self.inherit_defaults = false;
        }
        self.exceptions(config.exceptions.words.iter().cloned())
            .surnames(config.surnames.words.iter().cloned())
    }

    /// Append a custom rule after the standard ones
    pub fn rule(mut self, rule: impl CasingRule + 'static) -> Self {
        self.chain = self.chain.with_rule(rule);
        self
    }

    /// Replace the whole rule chain
    pub fn chain(mut self, chain: RuleChain) -> Self {
        self.chain = chain;
        self
    }

    /// Build the capitalizer
    pub fn build(self) -> Result<Capitalizer> {
        for word in self.exceptions.iter().chain(&self.surnames) {
            validate_entry(word)?;
        }

        let mut rules = if self.inherit_defaults {
            RuleSet::builtin().as_ref().clone()
        } else {
            RuleSet::empty()
        };
        rules.add_exceptions(self.exceptions);
        rules.add_surnames(self.surnames);

        Ok(Capitalizer {
            rules: Arc::new(rules),
            chain: self.chain,
        })
    }
}
