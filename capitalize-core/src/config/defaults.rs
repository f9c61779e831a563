//! Built-in rule tables

/// Particles and connectives kept lowercase (Portuguese, Spanish, Italian,
/// Dutch, German, English)
pub const DEFAULT_EXCEPTIONS: &[&str] = &[
    "de", "di", "do", "da", "dos", "das", "dello", "della", "dalla", "dal", "del", "la", "e", "em",
    "na", "no", "nas", "nos", "the", "van", "von", "y",
];

/// Surnames with fixed mixed casing
pub const DEFAULT_SURNAMES: &[&str] = &["McCain"];
