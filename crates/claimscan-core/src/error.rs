//! Error types for the claimscan-core library.
//!
//! Claim field extraction is total and has no error type; everything here
//! belongs to reading documents (decoding, rasterizing, OCR).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the claimscan library.
#[derive(Error, Debug)]
pub enum ClaimScanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image decoding or encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The input is neither a supported image nor a PDF.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF rasterizer (poppler's pdftoppm) could not be started.
    #[error("pdftoppm not found at '{}' (install poppler-utils or set pdf.converter_path)", path.display())]
    ConverterNotFound { path: PathBuf },

    /// Rendering the page to an image failed.
    #[error("failed to render page: {0}")]
    Render(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR executable could not be started.
    #[error("tesseract not found at '{}' (install tesseract-ocr or set ocr.tesseract_path)", path.display())]
    EngineNotFound { path: PathBuf },

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the claimscan library.
pub type Result<T> = std::result::Result<T, ClaimScanError>;
