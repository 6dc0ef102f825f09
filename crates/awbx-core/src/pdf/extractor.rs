//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text extractor backed by lopdf (structure) and pdf-extract (text).
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Split the full extracted text into per-page line lists.
    ///
    /// pdf-extract separates pages with form feeds when it can tell them
    /// apart; when the form-feed count disagrees with the document's page
    /// count, fall back to an even split of the line list across pages.
    fn split_pages(&self, text: &str) -> Vec<Vec<String>> {
        let page_count = self.page_count() as usize;
        if page_count == 0 {
            return Vec::new();
        }

        let chunks: Vec<&str> = text.split('\u{0c}').collect();
        if chunks.len() == page_count {
            return chunks
                .iter()
                .map(|chunk| chunk.lines().map(str::to_string).collect())
                .collect();
        }

        let lines: Vec<&str> = text.lines().collect();
        let per_page = lines.len() / page_count;

        (0..page_count)
            .map(|i| {
                let start = i * per_page;
                // last page takes the remainder
                let end = if i + 1 == page_count {
                    lines.len()
                } else {
                    (i + 1) * per_page
                };
                lines[start.min(lines.len())..end.min(lines.len())]
                    .iter()
                    .map(|l| l.to_string())
                    .collect()
            })
            .collect()
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_page_lines(&self, page: u32) -> Result<Vec<String>> {
        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        let text = self.extract_text()?;
        let mut pages = self.split_pages(&text);
        Ok(pages.swap_remove((page - 1) as usize))
    }

    fn extract_pages(&self) -> Result<Vec<Vec<String>>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = self.extract_text()?;
        Ok(self.split_pages(&text))
    }
}
