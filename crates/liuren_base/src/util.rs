//! Shared helpers for name parsing.

/// Fold a user-supplied name to a comparison key: ASCII lowercase with
/// spaces, hyphens, and underscores removed. Non-ASCII text (Chinese
/// characters) passes through unchanged.
pub fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_separators() {
        assert_eq!(normalize_name(" Great-Peace "), "greatpeace");
        assert_eq!(normalize_name("da_an"), "daan");
    }

    #[test]
    fn keeps_cjk() {
        assert_eq!(normalize_name("大安"), "大安");
    }
}
