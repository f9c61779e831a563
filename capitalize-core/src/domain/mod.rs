//! Pure pipeline stages
//!
//! Data flows strictly left to right:
//! raw string → [`normalize`] → [`tokenize`] → [`title_case`] →
//! [`RuleChain`] → rejoined string. No stage keeps state between calls.

pub mod lexicon;
pub mod normalizer;
pub mod roman;
pub mod rule_set;
pub mod rules;
pub mod title_case;
pub mod tokenizer;

pub use lexicon::Lexicon;
pub use normalizer::normalize;
pub use rule_set::RuleSet;
pub use rules::{CasingRule, ExceptionRule, RomanNumeralRule, RuleChain, SurnameRule};
pub use title_case::title_case;
pub use tokenizer::{tokenize, SEPARATOR};
