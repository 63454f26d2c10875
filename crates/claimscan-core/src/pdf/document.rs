//! Loaded PDF document.

use lopdf::Document;
use tracing::debug;

use super::Result;
use crate::error::PdfError;

/// A parsed PDF with at least one page.
pub struct PdfDocument {
    document: Document,
    raw_data: Vec<u8>,
}

impl PdfDocument {
    /// Parse a PDF from bytes.
    ///
    /// Encrypted files are retried with an empty password; `raw_data` then
    /// holds the decrypted bytes so external renderers can read them.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if document.is_encrypted() {
            if document.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            document
                .save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);

        Ok(Self { document, raw_data })
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    /// PDF bytes suitable for external tools.
    pub fn data(&self) -> &[u8] {
        &self.raw_data
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    /// Build a minimal PDF with `pages` blank pages.
    pub(crate) fn blank_pdf(pages: usize) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let kids: Vec<Object> = (0..pages)
            .map(|_| {
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                })
                .into()
            })
            .collect();

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => pages as i64,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_load_counts_pages() {
        let pdf = PdfDocument::load(&blank_pdf(3)).unwrap();
        assert_eq!(pdf.page_count(), 3);
        assert!(pdf.data().starts_with(b"%PDF"));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let err = PdfDocument::load(&blank_pdf(0)).err().unwrap();
        assert!(matches!(err, PdfError::NoPages));
    }

    #[test]
    fn test_garbage_rejected() {
        let err = PdfDocument::load(b"definitely not a pdf").err().unwrap();
        assert!(matches!(err, PdfError::Parse(_)));
    }
}
