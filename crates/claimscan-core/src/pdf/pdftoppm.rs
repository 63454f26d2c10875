//! First-page rendering through poppler's pdftoppm.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::DynamicImage;
use tracing::debug;

use super::{PageRasterizer, PdfDocument, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::scratch_dir;

/// Rasterizer that runs `pdftoppm`.
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    path: PathBuf,
    dpi: u32,
    temp_root: Option<PathBuf>,
}

impl PdftoppmRasterizer {
    /// Create a rasterizer for the executable at `path`, rendering at 200 DPI.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dpi: 200,
            temp_root: None,
        }
    }

    /// Create a rasterizer from PDF configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(&config.converter_path).with_dpi(config.render_dpi)
    }

    /// Set the rendering resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
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

    fn command(&self, input: &Path, output_prefix: &Path) -> Command {
        let mut command = Command::new(&self.path);
        command
            .args(["-f", "1", "-l", "1"])
            .args(["-r", &self.dpi.to_string()])
            .args(["-png", "-singlefile"])
            .arg(input)
            .arg(output_prefix);
        command
    }
}

impl PageRasterizer for PdftoppmRasterizer {
    fn render_first_page(&self, document: &PdfDocument) -> Result<DynamicImage> {
        let temp_dir = scratch_dir(self.temp_root.as_deref())
            .map_err(|e| PdfError::Render(format!("failed to create temp dir: {}", e)))?;
        let input = temp_dir.path().join("input.pdf");
        let output_prefix = temp_dir.path().join("page");

        std::fs::write(&input, document.data())
            .map_err(|e| PdfError::Render(format!("failed to write PDF: {}", e)))?;

        debug!(
            "Rendering first page with {} at {} DPI",
            self.path.display(),
            self.dpi
        );

        let output = self
            .command(&input, &output_prefix)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => PdfError::ConverterNotFound {
                    path: self.path.clone(),
                },
                _ => PdfError::Render(format!("failed to run {}: {}", self.path.display(), e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdfError::Render(format!(
                "pdftoppm exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // -singlefile writes <prefix>.png without a page suffix.
        let rendered = output_prefix.with_extension("png");
        image::open(&rendered).map_err(|e| {
            PdfError::Render(format!("failed to read rendered page: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::document::tests::blank_pdf;

    #[test]
    fn test_command_arguments() {
        let rasterizer = PdftoppmRasterizer::new("pdftoppm").with_dpi(300);
        let command = rasterizer.command(Path::new("in.pdf"), Path::new("out"));
        let args: Vec<_> = command
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            vec!["-f", "1", "-l", "1", "-r", "300", "-png", "-singlefile", "in.pdf", "out"]
        );
    }

    #[test]
    fn test_from_config() {
        let rasterizer = PdftoppmRasterizer::from_config(&PdfConfig::default());
        assert_eq!(rasterizer.path(), Path::new("pdftoppm"));
        assert_eq!(rasterizer.dpi, 200);
    }

    #[test]
    fn test_missing_executable() {
        let root = tempfile::tempdir().unwrap();
        let document = PdfDocument::load(&blank_pdf(1)).unwrap();
        let rasterizer =
            PdftoppmRasterizer::new("/nonexistent/claimscan/pdftoppm").with_temp_root(root.path());

        let err = rasterizer.render_first_page(&document).unwrap_err();

        assert!(matches!(err, PdfError::ConverterNotFound { .. }));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_temp_dir_removed_after_run() {
        let root = tempfile::tempdir().unwrap();
        let document = PdfDocument::load(&blank_pdf(1)).unwrap();

        // Exits 0 without writing page.png.
        let silent = PdftoppmRasterizer::new("true").with_temp_root(root.path());
        let err = silent.render_first_page(&document).unwrap_err();
        assert!(err.to_string().contains("failed to read rendered page"));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);

        let failing = PdftoppmRasterizer::new("false").with_temp_root(root.path());
        let err = failing.render_first_page(&document).unwrap_err();
        assert!(err.to_string().contains("pdftoppm exited with"));
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
    }
}
