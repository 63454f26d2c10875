//! Rule-based field extractors for insurance claim forms.

pub mod bank;
pub mod document_type;
pub mod patterns;
pub mod payment;
pub mod phone;

pub use bank::{extract_account_number, extract_bank_name, AccountNumberExtractor, BankNameExtractor};
pub use document_type::{detect_document_type, DOCUMENT_MARKERS};
pub use payment::{detect_payment_method, PaymentRule, PAYMENT_RULES};
pub use phone::{extract_phone, PhoneExtractor};
pub use patterns::*;

use regex::Captures;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, top to bottom.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value together with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Build a match from a labeled capture. A blank value is kept as `""`.
pub(crate) fn labeled_match(
    caps: &Captures<'_>,
    normalize: impl Fn(&str) -> String,
) -> Option<ExtractionMatch<String>> {
    let value = normalize(caps.get(1)?.as_str());
    let full_match = caps.get(0)?;
    Some(
        ExtractionMatch::new(value, full_match.as_str())
            .with_position(full_match.start(), full_match.end()),
    )
}

/// Remove every whitespace character, not just the surrounding ones.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
