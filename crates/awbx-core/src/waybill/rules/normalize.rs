//! Line-text normalization for robust pattern matching.
//!
//! PDF text extraction leaks typographic dashes, non-breaking spaces and
//! zero-width characters into line text; everything downstream matches
//! against the normalized form only.

use super::patterns::WHITESPACE_RUN;

/// Unicode hyphen/dash variants mapped to ASCII '-'.
const DASH_VARIANTS: [char; 7] = [
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
];

/// Normalize a single line of text.
///
/// Strips zero-width characters and BOMs, turns non-breaking spaces into
/// plain spaces, maps dash variants to '-', collapses whitespace runs to a
/// single space and trims. Never fails; unexpected input is degraded, not
/// rejected.
pub fn normalize_line(s: &str) -> String {
    let mut mapped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\u{00a0}' => mapped.push(' '),
            '\u{200b}' | '\u{feff}' => {}
            c if DASH_VARIANTS.contains(&c) => mapped.push('-'),
            c => mapped.push(c),
        }
    }

    WHITESPACE_RUN.replace_all(&mapped, " ").trim().to_string()
}

/// Normalize a raw byte line, decoding as UTF-8 with lossy substitution.
pub fn normalize_bytes(bytes: &[u8]) -> String {
    normalize_line(&String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dash_variants_mapped() {
        assert_eq!(
            normalize_line("60701180\u{2013}50446970"),
            "60701180-50446970"
        );
        assert_eq!(normalize_line("123\u{2212}456"), "123-456");
    }

    #[test]
    fn test_invisible_chars_stripped() {
        assert_eq!(normalize_line("\u{feff}MAWB\u{200b} 180"), "MAWB 180");
        assert_eq!(normalize_line("a\u{00a0}b"), "a b");
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        assert_eq!(normalize_line("  Total :\t  273.52  "), "Total : 273.52");
        assert_eq!(normalize_line(""), "");
        assert_eq!(normalize_line(" \t "), "");
    }

    #[test]
    fn test_bytes_decoded_lossily() {
        assert_eq!(normalize_bytes(b"total  273.52"), "total 273.52");
        assert_eq!(normalize_bytes(b"total \xff"), "total \u{fffd}");
    }
}
