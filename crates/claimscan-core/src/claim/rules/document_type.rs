//! Document type detection by marker substrings.

use crate::models::claim::DocumentType;

/// Literal, case-sensitive markers of an insurance claim form.
pub const DOCUMENT_MARKERS: [&str; 3] = ["Insurance Claim", "Policy", "Claim Form"];

/// Detect the document type.
///
/// Plain substring search, not a regex: "policy" does not count as "Policy".
pub fn detect_document_type(text: &str) -> Option<DocumentType> {
    DOCUMENT_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
        .then_some(DocumentType::InsuranceClaimForm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_marker_matches() {
        for marker in DOCUMENT_MARKERS {
            let text = format!("header\n{} 2024\n", marker);
            assert_eq!(
                detect_document_type(&text),
                Some(DocumentType::InsuranceClaimForm),
                "marker {:?}",
                marker
            );
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(
            detect_document_type("This is a Policy document"),
            Some(DocumentType::InsuranceClaimForm)
        );
        assert_eq!(detect_document_type("this is a policy document"), None);
        assert_eq!(detect_document_type("INSURANCE CLAIM"), None);
        assert_eq!(detect_document_type("claim form"), None);
    }

    #[test]
    fn test_marker_inside_word() {
        // Substring semantics: no word boundaries.
        assert_eq!(
            detect_document_type("SeePolicyholder"),
            Some(DocumentType::InsuranceClaimForm)
        );
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(detect_document_type(""), None);
        assert_eq!(detect_document_type("Invoice\nTotal: 100\n"), None);
    }
}
