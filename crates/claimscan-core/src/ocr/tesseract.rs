//! OCR backend that shells out to the tesseract executable.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use image::GrayImage;
use tracing::{debug, info};

use crate::error::OcrError;
use crate::models::config::{OcrConfig, OcrLanguage};
use crate::scratch_dir;

use super::OcrBackend;

/// Tesseract command-line engine.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    path: PathBuf,
    engine_mode: u8,
    page_segmentation_mode: u8,
    temp_root: Option<PathBuf>,
}

impl TesseractCli {
    /// Create an engine for the executable at `path` with `--oem 3 --psm 6`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            engine_mode: 3,
            page_segmentation_mode: 6,
            temp_root: None,
        }
    }

    /// Create an engine from OCR configuration.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(&config.tesseract_path)
            .with_engine_mode(config.engine_mode)
            .with_page_segmentation_mode(config.page_segmentation_mode)
    }

    /// Set the `--oem` value.
    pub fn with_engine_mode(mut self, mode: u8) -> Self {
        self.engine_mode = mode;
        self
    }

    /// Set the `--psm` value.
    pub fn with_page_segmentation_mode(mut self, mode: u8) -> Self {
        self.page_segmentation_mode = mode;
        self
    }

    /// Create scratch directories under `root` instead of the system temp dir.
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(root.into());
        self
    }

    /// Path of the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn command(&self, input: &Path, language: OcrLanguage) -> Command {
        let mut command = Command::new(&self.path);
        command
            .arg(input)
            .arg("stdout")
            .args(["-l", language.code()])
            .args(["--oem", &self.engine_mode.to_string()])
            .args(["--psm", &self.page_segmentation_mode.to_string()]);
        command
    }
}

impl OcrBackend for TesseractCli {
    fn recognize(&self, image: &GrayImage, language: OcrLanguage) -> Result<String, OcrError> {
        let start = Instant::now();

        if image.width() == 0 || image.height() == 0 {
            return Err(OcrError::InvalidImage("image has no pixels".to_string()));
        }

        let temp_dir = scratch_dir(self.temp_root.as_deref())
            .map_err(|e| OcrError::Recognition(format!("failed to create temp dir: {}", e)))?;
        let input = temp_dir.path().join("page.png");

        image
            .save(&input)
            .map_err(|e| OcrError::InvalidImage(format!("failed to write image: {}", e)))?;

        debug!(
            "Running {} on {}x{} image, lang={}",
            self.path.display(),
            image.width(),
            image.height(),
            language
        );

        let output = self
            .command(&input, language)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => OcrError::EngineNotFound {
                    path: self.path.clone(),
                },
                _ => OcrError::Recognition(format!(
                    "failed to run {}: {}",
                    self.path.display(),
                    e
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        info!(
            "OCR complete: {} chars in {}ms",
            text.len(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_arguments() {
        let engine = TesseractCli::new("tesseract").with_page_segmentation_mode(4);
        let command = engine.command(Path::new("page.png"), OcrLanguage::Multilingual);
        let args: Vec<_> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec!["page.png", "stdout", "-l", "eng+chi_tra", "--oem", "3", "--psm", "4"]
        );
    }

    #[test]
    fn test_from_config() {
        let config = OcrConfig {
            tesseract_path: PathBuf::from("/usr/local/bin/tesseract"),
            engine_mode: 1,
            ..OcrConfig::default()
        };
        let engine = TesseractCli::from_config(&config);
        assert_eq!(engine.path(), Path::new("/usr/local/bin/tesseract"));
        assert_eq!(engine.engine_mode, 1);
        assert_eq!(engine.page_segmentation_mode, 6);
    }

    #[test]
    fn test_missing_executable() {
        let engine = TesseractCli::new("/nonexistent/claimscan/tesseract");
        let err = engine
            .recognize(&GrayImage::new(4, 4), OcrLanguage::English)
            .unwrap_err();
        assert!(matches!(err, OcrError::EngineNotFound { .. }));
    }

    #[test]
    fn test_temp_dir_removed_on_success() {
        let root = tempfile::tempdir().unwrap();
        let engine = TesseractCli::new("true").with_temp_root(root.path());

        let text = engine
            .recognize(&GrayImage::new(4, 4), OcrLanguage::English)
            .unwrap();

        assert_eq!(text, "");
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_temp_dir_removed_on_failure() {
        let root = tempfile::tempdir().unwrap();

        let missing = TesseractCli::new("/nonexistent/claimscan/tesseract").with_temp_root(root.path());
        let err = missing
            .recognize(&GrayImage::new(4, 4), OcrLanguage::English)
            .unwrap_err();
        assert!(matches!(err, OcrError::EngineNotFound { .. }));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);

        let failing = TesseractCli::new("false").with_temp_root(root.path());
        let err = failing
            .recognize(&GrayImage::new(4, 4), OcrLanguage::English)
            .unwrap_err();
        assert!(matches!(err, OcrError::Recognition(_)));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_temp_root_is_used() {
        let root = tempfile::tempdir().unwrap();
        let engine = TesseractCli::new("true").with_temp_root(root.path().join("missing"));

        let err = engine
            .recognize(&GrayImage::new(4, 4), OcrLanguage::English)
            .unwrap_err();
        assert!(err.to_string().contains("failed to create temp dir"));
    }

    #[test]
    fn test_empty_image_rejected() {
        let engine = TesseractCli::new("/nonexistent/claimscan/tesseract");
        let err = engine
            .recognize(&GrayImage::new(0, 0), OcrLanguage::English)
            .unwrap_err();
        assert!(matches!(err, OcrError::InvalidImage(_)));
    }
}
