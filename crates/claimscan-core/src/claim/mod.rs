//! Claim field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{extract_claim_info, FieldOccurrence, RuleBasedExtractor};

use crate::models::claim::ExtractionResult;
use crate::ocr::OcrOutput;

/// Trait for claim field extractors.
///
/// Extraction is total: text without recognizable fields yields an empty
/// result, never an error.
pub trait ClaimExtractor {
    /// Extract claim data from OCR output.
    fn extract(&self, ocr_output: &OcrOutput) -> ExtractionResult;

    /// Extract claim data from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}
