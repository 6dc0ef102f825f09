//! MAWB (master air waybill number) candidate extraction.
//!
//! A MAWB has the fixed shape `DDD-DDDDDDDD`. Candidates are always derived
//! from larger digit runs, never copied verbatim: the last 3 digits of the
//! run left of the hyphen joined to the first 8 digits of the run to its
//! right.

use super::FieldExtractor;
use super::patterns::{DIGIT_RUN, HYPHEN_PAIR};

/// MAWB field extractor.
pub struct MawbExtractor;

impl MawbExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MawbExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MawbExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Every hyphen-rule candidate in left-to-right order, deduplicated by
    /// exact string equality as they accumulate.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in HYPHEN_PAIR.captures_iter(text) {
            let left = &caps[1];
            let right = &caps[2];

            // the right run carries the 8-digit serial, the left the 3-digit
            // airline prefix
            if left.len() >= 3 && right.len() >= 8 {
                let candidate = format!("{}-{}", &left[left.len() - 3..], &right[..8]);
                if !results.contains(&candidate) {
                    results.push(candidate);
                }
            }
        }

        results
    }
}

/// Extract all MAWB candidates from normalized text.
pub fn extract_mawbs(text: &str) -> Vec<String> {
    MawbExtractor::new().extract_all(text)
}

/// Last-resort candidate from a bare digit run of >= 11 digits, split 3/8
/// from its tail.
///
/// Only meaningful document-wide: the scanner applies it when no hyphen-rule
/// candidate exists anywhere in the document, so a true match elsewhere is
/// never masked.
pub fn fallback_mawb(text: &str) -> Option<String> {
    let run = DIGIT_RUN.find(text)?.as_str();
    let tail = &run[run.len() - 11..];
    Some(format!("{}-{}", &tail[..3], &tail[3..]))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hyphen_rule_basic() {
        assert_eq!(
            extract_mawbs("MAWB 180-50446970"),
            vec!["180-50446970".to_string()]
        );
    }

    #[test]
    fn test_derived_from_longer_runs() {
        // last 3 of the left run, first 8 of the right run
        assert_eq!(
            extract_mawbs("60701180-50446970123"),
            vec!["180-50446970".to_string()]
        );
    }

    #[test]
    fn test_spaced_hyphen() {
        assert_eq!(
            extract_mawbs("607 - 50446970"),
            vec!["607-50446970".to_string()]
        );
    }

    #[test]
    fn test_length_requirements() {
        // right run too short
        assert!(extract_mawbs("123-4567").is_empty());
        // left run too short
        assert!(extract_mawbs("12-45678901").is_empty());
    }

    #[test]
    fn test_multiple_candidates_in_order() {
        let text = "first 111-22222222 then 333-44444444";
        assert_eq!(
            extract_mawbs(text),
            vec!["111-22222222".to_string(), "333-44444444".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapsed() {
        let text = "111-22222222 repeated 111-22222222";
        assert_eq!(extract_mawbs(text), vec!["111-22222222".to_string()]);
    }

    #[test]
    fn test_fallback_splits_last_eleven() {
        assert_eq!(
            fallback_mawb("ref 18050446970"),
            Some("180-50446970".to_string())
        );
        // longer run: only its last 11 digits count
        assert_eq!(
            fallback_mawb("99918050446970"),
            Some("180-50446970".to_string())
        );
    }

    #[test]
    fn test_fallback_requires_eleven_digits() {
        assert_eq!(fallback_mawb("1234567890"), None);
        assert_eq!(fallback_mawb("no digits here"), None);
    }
}
