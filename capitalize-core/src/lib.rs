//! Language-aware capitalization of personal names
//!
//! Names are title-cased word by word, then corrected by an ordered list of
//! rules: nobiliary particles stay lowercase ("de", "van", "von"), surnames
//! with fixed casing keep it ("McCain"), and Roman numerals are fully
//! uppercased ("III", "VI").
//!
//! # Architecture
//!
//! - **Domain layer**: pure pipeline stages (normalizer, tokenizer, title
//!   caser, rule chain) and the word lists they consult
//! - **Config layer**: built-in tables and TOML rule files
//! - **API layer**: [`Capitalizer`], its builder and per-call [`Options`]
//!
//! The built-in rules are created once and never mutated. Per-call options
//! are merged into a call-local copy, so concurrent callers never see each
//! other's extensions.
//!
//! # Example
//!
//! ```rust
//! use capitalize_core::{capitalize, capitalize_with, Options};
//!
//! assert_eq!(capitalize("EDDIE VAN HALEN"), "Eddie van Halen");
//! assert_eq!(capitalize("dom JOÃO vi"), "Dom João VI");
//!
//! let options = Options::new().surname("McElroy");
//! assert_eq!(capitalize_with("john mcelroy", &options), "John McElroy");
//! ```
//!
//! # Known limitation
//!
//! Only the first character of a token is uppercased; internal punctuation
//! does not start a new word, so `"sant'ana"` becomes `"Sant'ana"`. Add an
//! exception or surname entry (or a custom [`CasingRule`]) to change that.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;

pub use api::{Capitalizer, CapitalizerBuilder, Options};
pub use config::RuleConfig;
pub use domain::{CasingRule, Lexicon, RuleChain, RuleSet};
pub use error::{CapitalizeError, Result};

/// Capitalize a name with the built-in rules
pub fn capitalize(input: &str) -> String {
    Capitalizer::new().capitalize(input)
}

/// Capitalize a name with the built-in rules extended by `options`
pub fn capitalize_with(input: &str, options: &Options) -> String {
    Capitalizer::new().capitalize_with(input, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_functions() {
        assert_eq!(capitalize("jonnas fonini"), "Jonnas Fonini");
        assert_eq!(
            capitalize_with(
                "gørvel fadersdotter of giske",
                &Options::new().exception("of")
            ),
            "Gørvel Fadersdotter of Giske"
        );
    }

    #[test]
    fn test_convenience_functions_do_not_leak() {
        let _ = capitalize_with("john mcelroy", &Options::new().surname("McElroy"));
        assert_eq!(capitalize("john mcelroy"), "John Mcelroy");
    }
}
