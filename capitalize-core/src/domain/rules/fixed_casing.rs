use super::CasingRule;
use crate::domain::rule_set::RuleSet;

/// Replace tokens found in the exception list with the stored casing
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionRule;

impl CasingRule for ExceptionRule {
    fn name(&self) -> &str {
        "exception"
    }

    fn apply(&self, token: &str, rules: &RuleSet) -> Option<String> {
        rules.exceptions().lookup(token).map(str::to_string)
    }
}

/// Replace tokens found in the surname list with the stored casing
#[derive(Debug, Clone, Copy, Default)]
pub struct SurnameRule;

impl CasingRule for SurnameRule {
    fn name(&self) -> &str {
        "surname"
    }

    fn apply(&self, token: &str, rules: &RuleSet) -> Option<String> {
        rules.surnames().lookup(token).map(str::to_string)
    }
}
