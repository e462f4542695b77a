//! The catalog normalization pipeline.
//!
//! Stages, leaves first: vocabulary table → title normalizer → brand
//! clusterer → family title synthesizer → family id assigner → variant
//! attribute extractor → variant option aggregator. `FamilyPipeline` wires
//! them into one run over a brand catalog and produces a family snapshot.

pub mod attributes;
pub mod cluster;
pub mod colors;
pub mod family;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod verify;
pub mod vocabulary;

pub use cluster::{cluster_products, Cluster, Clusters};
pub use family::{family_id, TitleSynthesizer};
pub use normalize::TitleNormalizer;
pub use pipeline::{BuildDiagnostics, BuildOutcome, FamilyPipeline};
pub use vocabulary::{VocabCategory, VocabEntry, Vocabulary};
