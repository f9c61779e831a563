//! Token splitting

/// Token separator produced by [`normalize`](super::normalize)
pub const SEPARATOR: &str = " ";

/// Split normalized text into tokens on the single-space separator.
///
/// Leading or trailing separators yield empty tokens. They pass through
/// the rest of the pipeline untouched and rejoin as empty strings.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(SEPARATOR)
}
