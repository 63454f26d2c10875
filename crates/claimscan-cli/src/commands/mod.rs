//! CLI subcommands and shared helpers.

pub mod batch;
pub mod config;
pub mod extract;
pub mod output;
pub mod process;

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use claimscan_core::error::{OcrError, PdfError};
use claimscan_core::{ClaimScanConfig, ClaimScanError, OcrLanguage};

/// OCR options that override the configuration file.
#[derive(Args, Clone, Debug, Default)]
pub struct OcrArgs {
    /// Document language: eng, chi_tra or eng+chi_tra
    #[arg(short, long)]
    lang: Option<OcrLanguage>,

    /// Path to the tesseract executable
    #[arg(long)]
    tesseract: Option<PathBuf>,

    /// Path to poppler's pdftoppm executable
    #[arg(long)]
    pdftoppm: Option<PathBuf>,

    /// DPI for rendering PDF pages
    #[arg(long)]
    dpi: Option<u32>,
}

impl OcrArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: ClaimScanConfig) -> ClaimScanConfig {
        if let Some(lang) = self.lang {
            config.ocr.language = lang;
        }
        if let Some(path) = &self.tesseract {
            config.ocr.tesseract_path = path.clone();
        }
        if let Some(path) = &self.pdftoppm {
            config.pdf.converter_path = path.clone();
        }
        if let Some(dpi) = self.dpi {
            config.pdf.render_dpi = dpi;
        }
        config
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("claimscan")
        .join("config.json")
}

/// Resolve the configuration file path: explicit flag or the default location.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<ClaimScanConfig> {
    if let Some(path) = explicit {
        return Ok(ClaimScanConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(ClaimScanConfig::from_file(&path)?)
    } else {
        Ok(ClaimScanConfig::default())
    }
}

/// Print installation advice when an external tool is missing.
pub fn print_tool_hint(err: &anyhow::Error) {
    let Some(err) = err.downcast_ref::<ClaimScanError>() else {
        return;
    };

    match err {
        ClaimScanError::Ocr(OcrError::EngineNotFound { .. }) => {
            eprintln!("{}", style("Tesseract OCR is not installed or not on PATH:").yellow());
            eprintln!("  Debian/Ubuntu: apt install tesseract-ocr tesseract-ocr-chi-tra");
            eprintln!("  macOS:         brew install tesseract tesseract-lang");
            eprintln!("  Or point to it with --tesseract <path> or 'claimscan config set ocr.tesseract_path <path>'");
        }
        ClaimScanError::Pdf(PdfError::ConverterNotFound { .. }) => {
            eprintln!("{}", style("Poppler (pdftoppm) is required to read PDFs:").yellow());
            eprintln!("  Debian/Ubuntu: apt install poppler-utils");
            eprintln!("  macOS:         brew install poppler");
            eprintln!("  Or point to it with --pdftoppm <path> or 'claimscan config set pdf.converter_path <path>'");
        }
        _ => {}
    }
}
