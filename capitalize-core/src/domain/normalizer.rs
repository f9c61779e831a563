//! Whitespace and period normalization

/// Normalize raw input before tokenization.
///
/// Runs of whitespace collapse to a single ASCII space, and a period that
/// is directly followed by a non-whitespace character gets a space inserted
/// after it, so initials like `"J.R."` split into separate tokens. Boundary
/// whitespace is collapsed but not trimmed.
pub fn normalize(input: &str) -> String {
    let mut normalized = String::with_capacity(input.len() + 4);
    let mut chars = input.chars().peekable();
    let mut in_whitespace = false;

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            if !in_whitespace {
                normalized.push(' ');
                in_whitespace = true;
            }
            continue;
        }

        in_whitespace = false;
        normalized.push(ch);

        if ch == '.' {
            if let Some(next) = chars.peek() {
                if !next.is_whitespace() {
                    normalized.push(' ');
                }
            }
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_interior_runs() {
        assert_eq!(normalize("maria   da     conceição"), "maria da conceição");
    }

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(normalize("ana\t\n maria"), "ana maria");
        // NBSP and ideographic space are whitespace too
        assert_eq!(normalize("ana\u{00A0}\u{3000}maria"), "ana maria");
    }

    #[test]
    fn test_boundary_whitespace_is_kept_single() {
        assert_eq!(normalize("   ana  "), " ana ");
        assert_eq!(normalize("\t"), " ");
    }

    #[test]
    fn test_period_spacing() {
        assert_eq!(normalize("j.r.r. tolkien"), "j. r. r. tolkien");
        assert_eq!(normalize("A.B"), "A. B");
        assert_eq!(normalize("jr."), "jr.");
    }

    #[test]
    fn test_consecutive_periods() {
        assert_eq!(normalize("a..b"), "a. . b");
    }

    #[test]
    fn test_period_before_whitespace_run() {
        assert_eq!(normalize("a.   b"), "a. b");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }
}
