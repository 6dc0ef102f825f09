//! Core library for freight-document field extraction.
//!
//! This crate provides:
//! - PDF text access (pages -> lines) over lopdf and pdf-extract
//! - text normalization compensating for unreliable PDF line-splitting
//! - rule-based MAWB (master air waybill number) and total-amount extraction
//! - per-document report rows for the batch CSV summary

pub mod error;
pub mod models;
pub mod pdf;
pub mod waybill;

pub use error::{AwbxError, Result};
pub use models::report::{ReportRow, rows_for_document};
pub use pdf::{PdfExtractor, PdfProcessor, read_document};
pub use waybill::rules::{FieldExtractor, extract_mawbs, extract_total_amount, normalize_line};
pub use waybill::{DocumentSummary, TotalCandidate, scan_document};
