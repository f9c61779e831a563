use super::CasingRule;
use crate::domain::roman;
use crate::domain::rule_set::RuleSet;

/// Fully uppercase tokens that spell a classical Roman numeral
///
/// Runs after the list rules, so it also wins over list entries that
/// happen to be numerals (`"di"` renders as `"DI"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RomanNumeralRule;

impl CasingRule for RomanNumeralRule {
    fn name(&self) -> &str {
        "roman-numeral"
    }

    fn apply(&self, token: &str, _rules: &RuleSet) -> Option<String> {
        let upper = token.to_uppercase();
        roman::is_roman_numeral(&upper).then_some(upper)
    }
}
