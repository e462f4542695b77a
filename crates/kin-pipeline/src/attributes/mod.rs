//! Variant attribute extraction.

pub mod extractor;
pub mod spec_match;

pub use extractor::AttributeExtractor;
pub use spec_match::match_dimension_to_spec;
