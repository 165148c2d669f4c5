//! Amount extraction: numeric normalization and the orchestrating extractor.

mod extractor;
pub mod numeric;

pub use extractor::{AmountExtractor, parse_amount};
pub use numeric::{canonical_literal, normalize_numeric};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
