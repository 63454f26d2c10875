//! Document reader: bytes in, OCR text and grayscale raster out.

use std::path::Path;
use std::time::Instant;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::OcrLanguage;
use crate::pdf::{PageRasterizer, PdfDocument};

use super::{DocumentKind, OcrBackend, OcrOutput};

/// Reads images and PDFs through an OCR backend.
pub struct DocumentReader<O, R> {
    ocr: O,
    rasterizer: R,
    language: OcrLanguage,
}

/// Reader backed by the tesseract and pdftoppm executables.
#[cfg(feature = "native")]
pub type NativeDocumentReader = DocumentReader<super::TesseractCli, crate::pdf::PdftoppmRasterizer>;

#[cfg(feature = "native")]
impl NativeDocumentReader {
    /// Build a reader from configuration.
    pub fn from_config(config: &crate::models::config::ClaimScanConfig) -> Self {
        DocumentReader::new(
            super::TesseractCli::from_config(&config.ocr),
            crate::pdf::PdftoppmRasterizer::from_config(&config.pdf),
            config.ocr.language,
        )
    }
}

impl<O: OcrBackend, R: PageRasterizer> DocumentReader<O, R> {
    /// Create a reader.
    pub fn new(ocr: O, rasterizer: R, language: OcrLanguage) -> Self {
        Self {
            ocr,
            rasterizer,
            language,
        }
    }

    /// Language hint used for recognition.
    pub fn language(&self) -> OcrLanguage {
        self.language
    }

    /// Read a document from bytes.
    pub fn read(&self, data: &[u8], kind: DocumentKind) -> Result<OcrOutput> {
        let start = Instant::now();

        info!("Reading {:?} document ({} bytes)", kind, data.len());

        let image = self.load_image(data, kind)?;
        let image = image.to_luma8();

        debug!(
            "Grayscale image: {}x{}",
            image.width(),
            image.height()
        );

        let text = self.ocr.recognize(&image, self.language)?;

        Ok(OcrOutput {
            text,
            image,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Read a document from a file, detecting its kind from the extension.
    pub fn read_file(&self, path: &Path) -> Result<OcrOutput> {
        let kind = DocumentKind::from_path(path)?;
        let data = std::fs::read(path)?;
        self.read(&data, kind)
    }

    fn load_image(&self, data: &[u8], kind: DocumentKind) -> Result<DynamicImage> {
        match kind {
            DocumentKind::Image => Ok(image::load_from_memory(data)?),
            DocumentKind::Pdf => {
                let document = PdfDocument::load(data)?;
                debug!("PDF has {} pages, rendering page 1", document.page_count());
                Ok(self.rasterizer.render_first_page(&document)?)
            }
        }
    }
}
