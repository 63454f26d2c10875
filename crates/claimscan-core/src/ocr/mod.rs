//! OCR adapter: turns a document into text and a grayscale raster.
//!
//! Recognition itself is delegated to an external engine behind
//! [`OcrBackend`]; the native build drives the `tesseract` executable.

mod reader;
#[cfg(feature = "native")]
mod tesseract;

pub use reader::DocumentReader;
#[cfg(feature = "native")]
pub use reader::NativeDocumentReader;
#[cfg(feature = "native")]
pub use tesseract::TesseractCli;

use std::path::Path;

use image::GrayImage;

use crate::error::{ClaimScanError, OcrError};
use crate::models::config::OcrLanguage;

/// Text recognition engine.
pub trait OcrBackend {
    /// Recognize text in a grayscale image.
    fn recognize(&self, image: &GrayImage, language: OcrLanguage) -> Result<String, OcrError>;
}

/// Result of reading one document.
#[derive(Debug, Clone)]
pub struct OcrOutput {
    /// Recognized text.
    pub text: String,

    /// Grayscale image that was fed to OCR.
    pub image: GrayImage,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Kind of input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Single raster image.
    Image,
    /// PDF; only the first page is read.
    Pdf,
}

impl DocumentKind {
    /// Detect the kind from a file extension (case-insensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" | "webp" => Some(Self::Image),
            _ => None,
        }
    }

    /// Detect the kind from a MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_lowercase();
        if mime == "application/pdf" {
            Some(Self::Pdf)
        } else if mime.starts_with("image/") {
            Some(Self::Image)
        } else {
            None
        }
    }

    /// Detect the kind from a file path.
    pub fn from_path(path: &Path) -> Result<Self, ClaimScanError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_extension(extension).ok_or_else(|| {
            ClaimScanError::UnsupportedFormat(if extension.is_empty() {
                path.display().to_string()
            } else {
                extension.to_string()
            })
        })
    }
}
