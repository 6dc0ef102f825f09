//! Rule-based waybill field extraction.

pub mod rules;
pub mod scanner;

pub use scanner::{DocumentSummary, TotalCandidate, scan_document};
