//! Configuration structures for the document reading pipeline.
//!
//! Claim field extraction takes no configuration; everything here is passed
//! to the OCR adapter at call time.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClaimScanError;

/// Main configuration for claimscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimScanConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path to the tesseract executable (bare names are looked up on PATH).
    pub tesseract_path: PathBuf,

    /// Language hint passed to tesseract.
    pub language: OcrLanguage,

    /// Tesseract `--oem` value.
    pub engine_mode: u8,

    /// Tesseract `--psm` value (6 = single uniform block of text).
    pub page_segmentation_mode: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: PathBuf::from("tesseract"),
            language: OcrLanguage::default(),
            engine_mode: 3,
            page_segmentation_mode: 6,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Path to poppler's pdftoppm executable.
    pub converter_path: PathBuf,

    /// DPI for rendering the first page.
    pub render_dpi: u32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            converter_path: PathBuf::from("pdftoppm"),
            render_dpi: 200,
        }
    }
}

/// OCR language hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OcrLanguage {
    /// English.
    #[default]
    #[serde(rename = "eng")]
    English,
    /// Traditional Chinese.
    #[serde(rename = "chi_tra")]
    TraditionalChinese,
    /// English and Traditional Chinese.
    #[serde(rename = "eng+chi_tra")]
    Multilingual,
}

impl OcrLanguage {
    /// All supported hints.
    pub const ALL: [OcrLanguage; 3] = [
        OcrLanguage::English,
        OcrLanguage::TraditionalChinese,
        OcrLanguage::Multilingual,
    ];

    /// Tesseract `-l` argument.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::TraditionalChinese => "chi_tra",
            Self::Multilingual => "eng+chi_tra",
        }
    }
}

impl fmt::Display for OcrLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OcrLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eng" | "english" => Ok(Self::English),
            "chi_tra" | "chinese" => Ok(Self::TraditionalChinese),
            "eng+chi_tra" | "multilingual" => Ok(Self::Multilingual),
            other => Err(format!(
                "unknown language '{}' (expected eng, chi_tra or eng+chi_tra)",
                other
            )),
        }
    }
}

impl ClaimScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Check value ranges accepted by tesseract and pdftoppm.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.ocr.engine_mode > 3 {
            return Err(ClaimScanError::Config(format!(
                "ocr.engine_mode must be 0-3, got {}",
                self.ocr.engine_mode
            )));
        }
        if self.ocr.page_segmentation_mode > 13 {
            return Err(ClaimScanError::Config(format!(
                "ocr.page_segmentation_mode must be 0-13, got {}",
                self.ocr.page_segmentation_mode
            )));
        }
        if self.pdf.render_dpi == 0 {
            return Err(ClaimScanError::Config(
                "pdf.render_dpi must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
