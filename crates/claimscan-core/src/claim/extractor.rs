//! Rule-based claim extractor.

use tracing::debug;

use crate::models::claim::{BankAccount, ExtractionResult};
use crate::ocr::OcrOutput;

use super::rules::{
    detect_document_type, detect_payment_method, AccountNumberExtractor, BankNameExtractor,
    ExtractionMatch, FieldExtractor, PhoneExtractor,
};
use super::ClaimExtractor;

/// One occurrence of a labeled field in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOccurrence {
    /// Record field the label feeds (`bank_name`, `account_number`, `fps_phone`).
    pub field: &'static str,
    /// Normalized value, matched text and byte span.
    pub found: ExtractionMatch<String>,
    /// Whether this occurrence is the one stored in the record.
    pub used: bool,
}

/// Claim extractor built from the fixed rule set.
///
/// Stateless; one instance can serve any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedExtractor;

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self
    }

    /// List every labeled field occurrence, grouped by field in record order.
    ///
    /// Only the first occurrence of each field is used; later ones are
    /// reported with `used == false`.
    pub fn occurrences(&self, text: &str) -> Vec<FieldOccurrence> {
        let fields: [(&'static str, Vec<ExtractionMatch<String>>); 3] = [
            ("bank_name", BankNameExtractor::new().extract_all(text)),
            ("account_number", AccountNumberExtractor::new().extract_all(text)),
            ("fps_phone", PhoneExtractor::new().extract_all(text)),
        ];

        fields
            .into_iter()
            .flat_map(|(field, found)| {
                found.into_iter().enumerate().map(move |(i, found)| FieldOccurrence {
                    field,
                    found,
                    used: i == 0,
                })
            })
            .collect()
    }
}

impl ClaimExtractor for RuleBasedExtractor {
    fn extract(&self, ocr_output: &OcrOutput) -> ExtractionResult {
        self.extract_from_text(&ocr_output.text)
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        let result = ExtractionResult {
            document_type: detect_document_type(text),
            payment_method: detect_payment_method(text),
            bank_account: BankAccount {
                holder: None,
                bank: BankNameExtractor::new().extract(text).map(|m| m.value),
                number: AccountNumberExtractor::new().extract(text).map(|m| m.value),
                currency: None,
            },
            fps_phone: PhoneExtractor::new().extract(text).map(|m| m.value),
            cheque_method: None,
        };

        debug!(
            "Extracted claim fields from {} chars: type={:?} payment={:?}",
            text.len(),
            result.document_type,
            result.payment_method
        );

        result
    }
}

/// Extract claim fields from OCR text.
///
/// Never fails: fields that cannot be found are left empty.
pub fn extract_claim_info(text: &str) -> ExtractionResult {
    RuleBasedExtractor::new().extract_from_text(text)
}
