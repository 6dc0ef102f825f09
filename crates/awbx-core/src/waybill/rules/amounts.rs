//! Total-amount extraction.

use super::FieldExtractor;
use super::patterns::{AMOUNT, TOTAL_LINE};

/// Total-amount field extractor.
pub struct TotalExtractor;

impl TotalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        extract_total_amount(text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Extract the amount following a standalone "total" on one normalized line.
///
/// The remainder after "total" (and an optional ':' or '-') is searched for
/// an optional currency symbol, a number with optional thousands commas and
/// up to two decimals, and an optional 3-letter currency code. Commas are
/// stripped; the numeric text is returned unrounded. A remainder without any
/// parsable number is returned trimmed as a best-effort value.
pub fn extract_total_amount(line: &str) -> Option<String> {
    let caps = TOTAL_LINE.captures(line)?;
    let rest = &caps[1];

    match AMOUNT.captures(rest) {
        Some(amount) => Some(amount[1].replace(',', "")),
        None => Some(rest.trim().to_string()),
    }
}
