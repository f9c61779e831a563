//! Per-token title casing

/// Lowercase the token, then uppercase its first character.
///
/// Works on `char`s, not bytes, so multi-byte initials like `"ø"` or
/// `"é"` are handled. The initial maps to exactly one character: when its
/// uppercase form would expand (`'ß'` to `"SS"`), it stays as is.
///
/// Internal punctuation is not treated as a word boundary: `"sant'ana"`
/// becomes `"Sant'ana"`, not `"Sant'Ana"`. Forms like that are only
/// corrected through an explicit exception or surname entry.
pub fn title_case(token: &str) -> String {
    let lower = token.to_lowercase();
    let mut chars = lower.chars();

    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(lower.len());
            out.push(upper_initial(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

fn upper_initial(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
