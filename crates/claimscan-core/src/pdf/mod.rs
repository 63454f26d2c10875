//! PDF processing module.
//!
//! PDFs are parsed with lopdf to reject broken or empty files early, then the
//! first page is rendered to a raster for OCR.

mod document;
#[cfg(feature = "native")]
mod pdftoppm;

pub use document::PdfDocument;
#[cfg(test)]
pub(crate) use document::tests::blank_pdf;
#[cfg(feature = "native")]
pub use pdftoppm::PdftoppmRasterizer;

use crate::error::PdfError;
use image::DynamicImage;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Renders PDF pages to images.
pub trait PageRasterizer {
    /// Render the first page of a loaded PDF.
    fn render_first_page(&self, document: &PdfDocument) -> Result<DynamicImage>;
}
