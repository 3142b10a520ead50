//! Utility functions for mapping operations.

/// Normalizes text for comparison by lowercasing and replacing separators
/// with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Sum_Insured "), "sum insured");
        assert_eq!(normalize_text("Claim-Status"), "claim status");
        assert_eq!(normalize_text("Date.of/Admission"), "date of admission");
    }
}
