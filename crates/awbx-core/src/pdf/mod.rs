//! PDF text access.

mod extractor;

pub use extractor::PdfExtractor;

use std::fs;
use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text-extraction implementations.
///
/// The extraction pipeline only ever consumes pages as ordered line lists;
/// anything that can produce `Vec<Vec<String>>` can stand in for a real PDF.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract the text lines of a specific page (1-indexed).
    fn extract_page_lines(&self, page: u32) -> Result<Vec<String>>;

    /// Extract every page as an ordered list of text lines.
    fn extract_pages(&self) -> Result<Vec<Vec<String>>>;
}

/// Read a PDF file into pages of text lines.
pub fn read_document(path: &Path) -> crate::error::Result<Vec<Vec<String>>> {
    let data = fs::read(path)?;
    let mut extractor = PdfExtractor::new();
    extractor.load(&data)?;
    Ok(extractor.extract_pages()?)
}
