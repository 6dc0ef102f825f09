//! Rule-based field extractors for freight documents.

pub mod amounts;
pub mod mawb;
pub mod normalize;
pub mod patterns;

pub use amounts::{TotalExtractor, extract_total_amount};
pub use mawb::{MawbExtractor, extract_mawbs, fallback_mawb};
pub use normalize::{normalize_bytes, normalize_line};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
