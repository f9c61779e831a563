//! Ordering of the exception, surname and Roman numeral rules

use capitalize_core::{Capitalizer, Lexicon, Options, RuleSet};

#[test]
fn test_exception_casing_ignores_input_casing() {
    let capitalizer = Capitalizer::new();

    for input in ["van", "VAN", "Van", "vAN"] {
        let output = capitalizer.capitalize(&format!("eddie {input} halen"));
        assert_eq!(output, "Eddie van Halen");
    }
}

#[test]
fn test_surname_wins_over_exception() {
    let options = Options::new().exception("mac").surname("MAC");
    let capitalizer = Capitalizer::new();

    assert_eq!(capitalizer.capitalize_with("ian mac", &options), "Ian MAC");
}

#[test]
fn test_roman_numeral_wins_over_exception() {
    // "di" is a built-in exception but also spells 501
    let capitalizer = Capitalizer::new();
    assert_eq!(capitalizer.capitalize("lorenzo di credi"), "Lorenzo DI Credi");
}

#[test]
fn test_roman_numeral_wins_over_surname() {
    let options = Options::new().surname("Mix");
    let capitalizer = Capitalizer::new();

    assert_eq!(capitalizer.capitalize_with("tom mix", &options), "Tom MIX");
}

#[test]
fn test_regnal_numbers() {
    let capitalizer = Capitalizer::new();

    assert_eq!(capitalizer.capitalize("louis xiv"), "Louis XIV");
    assert_eq!(capitalizer.capitalize("HENRY VIII"), "Henry VIII");
    assert_eq!(capitalizer.capitalize("pope john xxiii"), "Pope John XXIII");
    assert_eq!(capitalizer.capitalize("john doe ii"), "John Doe II");
}

#[test]
fn test_invalid_numerals_are_title_cased() {
    let capitalizer = Capitalizer::new();

    assert_eq!(capitalizer.capitalize("iiii"), "Iiii");
    assert_eq!(capitalizer.capitalize("vx"), "Vx");
    assert_eq!(capitalizer.capitalize("ic"), "Ic");
}

#[test]
fn test_first_entry_wins_within_a_list() {
    let rules = RuleSet::new(Lexicon::from_words(["bin", "BIN"]), Lexicon::new());
    let capitalizer = Capitalizer::with_rules(rules);

    assert_eq!(capitalizer.capitalize("ahmad bin ali"), "Ahmad bin Ali");
}

#[test]
fn test_options_cannot_recase_builtin_entries() {
    // Built-in entries come first, so "De" does not replace "de"
    let options = Options::new().exception("De");
    let capitalizer = Capitalizer::new();

    assert_eq!(
        capitalizer.capitalize_with("pedro DE souza", &options),
        "Pedro de Souza"
    );
}
