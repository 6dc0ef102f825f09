//! Shared regex patterns for freight-document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace runs collapsed during normalization
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Digit run, hyphen (optionally spaced), digit run
    pub static ref HYPHEN_PAIR: Regex = Regex::new(
        r"([0-9]+)\s*-\s*([0-9]+)"
    ).unwrap();

    // Bare digit run long enough to hold a 3/8 split
    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"[0-9]{11,}"
    ).unwrap();

    // Standalone word "total" with an optional ':' or '-' separator; the
    // word boundary keeps "subtotal" from matching
    pub static ref TOTAL_LINE: Regex = Regex::new(
        r"(?i)\btotal\b\s*[:-]?\s*(.+)$"
    ).unwrap();

    // Optional currency symbol, number with optional thousands commas and
    // up to two decimals, optional trailing 3-letter currency code
    pub static ref AMOUNT: Regex = Regex::new(
        r"[€£¥$]?\s*([0-9][0-9,]*(?:\.[0-9]{1,2})?)\s*(?:[A-Za-z]{3})?"
    ).unwrap();
}
