//! FPS phone number extraction.

use super::patterns::PHONE;
use super::{labeled_match, strip_whitespace, ExtractionMatch, FieldExtractor};

/// Extractor for the `Phone:` line. Keeps digits only.
#[derive(Debug, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = PHONE.captures(text)?;
        labeled_match(&caps, strip_whitespace)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .captures_iter(text)
            .filter_map(|caps| labeled_match(&caps, strip_whitespace))
            .collect()
    }
}

/// Extract the FPS phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}
