//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the normalization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Minimum cluster size to become a family. Default: 2.
    pub min_family_size: Option<usize>,
    /// Pretty-print the snapshot JSON. Default: true.
    pub pretty_json: Option<bool>,
}

impl PipelineConfig {
    /// Returns the effective minimum family size, defaulting to 2.
    pub fn effective_min_family_size(&self) -> usize {
        self.min_family_size.unwrap_or(2)
    }

    /// Returns whether snapshot output is pretty-printed, defaulting to true.
    pub fn effective_pretty_json(&self) -> bool {
        self.pretty_json.unwrap_or(true)
    }
}
