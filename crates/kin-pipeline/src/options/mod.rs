//! Variant option aggregation and selection resolution.

pub mod aggregator;
pub mod matching;

pub use aggregator::{aggregate_options, DIMENSIONAL_ATTRIBUTES};
pub use matching::find_matching_variant;
