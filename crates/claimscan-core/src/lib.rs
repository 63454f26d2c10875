//! Core library for insurance claim OCR processing.
//!
//! This crate provides:
//! - Document reading (image or first PDF page to grayscale raster and text)
//! - Rule-based claim field extraction (document type, payment method, bank
//!   details, FPS phone)
//! - Claim data models serializable to JSON

pub mod claim;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;

pub use claim::{extract_claim_info, ClaimExtractor, FieldOccurrence, RuleBasedExtractor};
pub use error::{ClaimScanError, Result};
pub use models::claim::{BankAccount, DocumentType, ExtractionResult, PaymentMethod};
pub use models::config::{ClaimScanConfig, OcrConfig, OcrLanguage, PdfConfig};
pub use ocr::{DocumentKind, DocumentReader, OcrBackend, OcrOutput};
#[cfg(feature = "native")]
pub use ocr::{NativeDocumentReader, TesseractCli};
pub use pdf::{PageRasterizer, PdfDocument};
#[cfg(feature = "native")]
pub use pdf::PdftoppmRasterizer;

/// Per-call scratch directory, removed when dropped.
#[cfg(feature = "native")]
pub(crate) fn scratch_dir(root: Option<&std::path::Path>) -> std::io::Result<tempfile::TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("claimscan-");
    match root {
        Some(root) => builder.tempdir_in(root),
        None => builder.tempdir(),
    }
}
