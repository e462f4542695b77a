//! Data model: products, variants, families, snapshots, and the external
//! catalog / specification wire shapes.

pub mod attributes;
pub mod catalog;
pub mod family;
pub mod product;
pub mod snapshot;
pub mod spec;

pub use attributes::{AttributeMap, AttributeValue};
pub use catalog::BrandCatalog;
pub use family::{Family, IndexDocument, OptionMap, Variant};
pub use product::Product;
pub use snapshot::{Snapshot, SnapshotMetadata, SnapshotStatistics};
pub use spec::{SpecAttribute, SpecAttributes, SpecGroup, SpecIndex, SpecRecord};
