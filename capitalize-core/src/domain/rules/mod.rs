//! Ordered token rewrite rules
//!
//! After title casing, every token runs through a [`RuleChain`]: an explicit
//! priority list of [`CasingRule`]s. Each rule may rewrite the token, and a
//! later rule sees (and may overwrite) the result of an earlier one, so the
//! last matching rule wins. The standard chain is
//!
//! 1. [`ExceptionRule`]: fixed casing from the exception list
//! 2. [`SurnameRule`]: fixed casing from the surname list
//! 3. [`RomanNumeralRule`]: fully uppercase classical numerals
//!
//! New rule kinds are added by appending to the chain.

mod fixed_casing;
mod roman_numeral;

pub use fixed_casing::{ExceptionRule, SurnameRule};
pub use roman_numeral::RomanNumeralRule;

use super::rule_set::RuleSet;
use log::trace;
use std::fmt;
use std::sync::Arc;

/// A single match-and-replace step applied to a title-cased token
pub trait CasingRule: Send + Sync + fmt::Debug {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Return the rewritten token, or `None` to leave it unchanged
    fn apply(&self, token: &str, rules: &RuleSet) -> Option<String>;
}

/// Priority-ordered list of casing rules
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<Arc<dyn CasingRule>>,
}

impl RuleChain {
    /// Chain with no rules; tokens stay title-cased
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Exception, then surname, then Roman numeral
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(ExceptionRule)
            .with_rule(SurnameRule)
            .with_rule(RomanNumeralRule)
    }

    /// Append a rule with the lowest priority so far (it runs last)
    pub fn with_rule(mut self, rule: impl CasingRule + 'static) -> Self {
        self.push(Arc::new(rule));
        self
    }

    /// Append a shared rule
    pub fn push(&mut self, rule: Arc<dyn CasingRule>) {
        self.rules.push(rule);
    }

    /// Rule names in application order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `token` in order
    pub fn apply(&self, token: String, rules: &RuleSet) -> String {
        self.rules
            .iter()
            .fold(token, |current, rule| match rule.apply(&current, rules) {
                Some(rewritten) => {
                    trace!("{}: {:?} -> {:?}", rule.name(), current, rewritten);
                    rewritten
                }
                None => current,
            })
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}
