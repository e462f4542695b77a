//! Family synthesis — canonical titles and stable ids for clusters.

pub mod id;
pub mod synthesizer;

pub use id::family_id;
pub use synthesizer::TitleSynthesizer;
