//! Document-level scanning: MAWB collection across redundant passes and
//! first-match total detection.

use serde::Serialize;
use tracing::debug;

use super::rules::{FieldExtractor, MawbExtractor, TotalExtractor, fallback_mawb, normalize_line};

/// The first line matching the total rule, with provenance.
#[derive(Debug, Clone, Serialize)]
pub struct TotalCandidate {
    /// Amount text (numeric when parsable, best-effort otherwise).
    pub amount: String,
    /// Page number (1-indexed).
    pub page: usize,
    /// Line number within the page (1-indexed).
    pub line: usize,
    /// The raw line the amount was taken from.
    pub raw_line: String,
}

/// Extraction result for one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentSummary {
    /// MAWB candidates, deduplicated in first-discovery order.
    pub mawbs: Vec<String>,
    /// First qualifying total line, if any.
    pub total: Option<TotalCandidate>,
}

/// Scan a document (pages of lines) for MAWB candidates and the total.
pub fn scan_document(pages: &[Vec<String>]) -> DocumentSummary {
    let mawbs = scan_mawbs(pages);
    let total = scan_total(pages);

    debug!(
        "document scan: {} MAWB candidate(s), total {:?}",
        mawbs.len(),
        total.as_ref().map(|t| t.amount.as_str())
    );

    DocumentSummary { mawbs, total }
}

/// Per-page scan representations.
///
/// Upstream line-splitting is unreliable: a code intact in one rendering may
/// be broken in another. Each page is therefore searched three times - lines
/// joined with single spaces, lines concatenated with no separator, and each
/// line alone - and the passes are merged with order-preserving dedup. These
/// are three independent search passes, not redundant code.
fn page_representations(page: &[String]) -> Vec<String> {
    let normalized: Vec<String> = page.iter().map(|line| normalize_line(line)).collect();

    let mut reps = Vec::with_capacity(normalized.len() + 2);
    reps.push(normalized.join(" "));
    reps.push(normalized.concat());
    reps.extend(normalized);
    reps
}

fn scan_mawbs(pages: &[Vec<String>]) -> Vec<String> {
    let extractor = MawbExtractor::new();
    let mut found: Vec<String> = Vec::new();

    for page in pages {
        for text in page_representations(page) {
            for candidate in extractor.extract_all(&text) {
                if !found.contains(&candidate) {
                    found.push(candidate);
                }
            }
        }
    }

    // Bare digit-run fallback, document-wide only: a hyphen-rule match
    // anywhere in the document suppresses it.
    if found.is_empty() {
        'pages: for page in pages {
            for text in page_representations(page) {
                if let Some(candidate) = fallback_mawb(&text) {
                    debug!("no hyphen-rule MAWB; digit-run fallback {}", candidate);
                    found.push(candidate);
                    break 'pages;
                }
            }
        }
    }

    found
}

fn scan_total(pages: &[Vec<String>]) -> Option<TotalCandidate> {
    let extractor = TotalExtractor::new();

    for (page_idx, page) in pages.iter().enumerate() {
        for (line_idx, line) in page.iter().enumerate() {
            let normalized = normalize_line(line);
            if normalized.is_empty() {
                continue;
            }

            if let Some(amount) = extractor.extract(&normalized) {
                // first qualifying line wins, scanning stops here
                return Some(TotalCandidate {
                    amount,
                    page: page_idx + 1,
                    line: line_idx + 1,
                    raw_line: line.clone(),
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_total_stops_at_first_match() {
        let pages = vec![page(&[
            "Subtotal: 100.00",
            "Total: 273.52 USD",
            "Total: 999.00",
        ])];

        let summary = scan_document(&pages);
        let total = summary.total.expect("total found");
        assert_eq!(total.amount, "273.52");
        assert_eq!(total.page, 1);
        assert_eq!(total.line, 2);
        assert_eq!(total.raw_line, "Total: 273.52 USD");
    }

    #[test]
    fn test_code_split_across_lines_found_once() {
        // broken upstream line-splitting: the space-joined and concatenated
        // passes both recover the code, dedup keeps one
        let pages = vec![page(&["MAWB 180-", "50446970 net"])];

        let summary = scan_document(&pages);
        assert_eq!(summary.mawbs, vec!["180-50446970".to_string()]);
    }

    #[test]
    fn test_same_code_on_two_pages_deduplicated() {
        let pages = vec![page(&["180-50446970"]), page(&["copy 180-50446970"])];

        let summary = scan_document(&pages);
        assert_eq!(summary.mawbs, vec!["180-50446970".to_string()]);
    }

    #[test]
    fn test_multiple_codes_in_discovery_order() {
        let pages = vec![page(&["111-22222222"]), page(&["333-44444444"])];

        let summary = scan_document(&pages);
        assert_eq!(
            summary.mawbs,
            vec!["111-22222222".to_string(), "333-44444444".to_string()]
        );
    }

    #[test]
    fn test_fallback_fires_only_without_hyphen_match() {
        let pages = vec![page(&["ref 18050446970"])];
        let summary = scan_document(&pages);
        assert_eq!(summary.mawbs, vec!["180-50446970".to_string()]);

        // a hyphen-rule match on a later page suppresses the fallback
        let pages = vec![page(&["ref 18050446970999"]), page(&["607-12345678"])];
        let summary = scan_document(&pages);
        assert_eq!(summary.mawbs, vec!["607-12345678".to_string()]);
    }

    #[test]
    fn test_typographic_dash_normalized_before_matching() {
        let pages = vec![page(&["waybill 180\u{2013}50446970"])];

        let summary = scan_document(&pages);
        assert_eq!(summary.mawbs, vec!["180-50446970".to_string()]);
    }

    #[test]
    fn test_empty_document() {
        let summary = scan_document(&[]);
        assert!(summary.mawbs.is_empty());
        assert!(summary.total.is_none());

        let summary = scan_document(&[page(&["", "   "])]);
        assert!(summary.mawbs.is_empty());
        assert!(summary.total.is_none());
    }
}
