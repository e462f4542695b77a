//! The family snapshot artifact.

use serde::{Deserialize, Serialize};

use super::family::Family;

/// Aggregate statistics over the snapshot's families.
///
/// Invariants (maintained by the pipeline, checked by `kin verify`):
/// `total_families == families.len()` and `total_products_in_families`
/// equals the sum of every family's `variant_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStatistics {
    pub total_families: usize,
    pub total_products_in_families: usize,
    pub average_variants_per_family: f64,
}

/// Snapshot provenance and statistics, serialized under `_metadata`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    pub version: u32,
    pub description: String,
    /// Unix seconds.
    pub generated_at: u64,
    pub statistics: SnapshotStatistics,
}

/// One complete normalization run's output. Written once, never updated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "_metadata")]
    pub metadata: SnapshotMetadata,
    pub families: Vec<Family>,
}

impl Snapshot {
    /// Build a snapshot from families, deriving self-consistent statistics.
    pub fn new(version: u32, description: String, generated_at: u64, families: Vec<Family>) -> Self {
        let total_families = families.len();
        let total_products: usize = families.iter().map(|f| f.variant_count).sum();
        let average = if total_families > 0 {
            total_products as f64 / total_families as f64
        } else {
            0.0
        };
        Self {
            metadata: SnapshotMetadata {
                version,
                description,
                generated_at,
                statistics: SnapshotStatistics {
                    total_families,
                    total_products_in_families: total_products,
                    average_variants_per_family: average,
                },
            },
            families,
        }
    }
}
