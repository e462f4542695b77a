//! Color inventory — the distinct color-axis values across a snapshot.

use std::collections::BTreeSet;

use kin_core::types::Snapshot;
use serde::Serialize;

/// All distinct values of every family's `color` axis, sorted.
pub fn collect_colors(snapshot: &Snapshot) -> Vec<String> {
    let mut colors = BTreeSet::new();
    for family in &snapshot.families {
        if let Some(values) = family.variant_options.get("color") {
            colors.extend(values.iter().cloned());
        }
    }
    colors.into_iter().collect()
}

/// The color inventory artifact.
#[derive(Debug, Serialize)]
pub struct ColorInventory {
    #[serde(rename = "_metadata")]
    pub metadata: ColorInventoryMetadata,
    pub colors: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInventoryMetadata {
    pub description: String,
    pub total_colors: usize,
    /// Unix seconds.
    pub generated_at: u64,
}

impl ColorInventory {
    pub fn new(colors: Vec<String>, generated_at: u64) -> Self {
        Self {
            metadata: ColorInventoryMetadata {
                description: "All unique colors from product family variant options".to_string(),
                total_colors: colors.len(),
                generated_at,
            },
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_core::types::{Family, OptionMap, Snapshot};

    fn family_with_colors(brand: &str, colors: &[&str]) -> Family {
        Family {
            family_id: "fam_000000000000".to_string(),
            title: "T".to_string(),
            brand: brand.to_string(),
            variant_count: 2,
            variant_options: OptionMap::from([(
                "color".to_string(),
                colors.iter().map(|c| c.to_string()).collect(),
            )]),
            variants: Vec::new(),
        }
    }

    #[test]
    fn colors_deduplicated_and_sorted() {
        let snapshot = Snapshot::new(
            1,
            "test".into(),
            0,
            vec![
                family_with_colors("A", &["Matte Black", "Chrome"]),
                family_with_colors("B", &["Chrome", "Brushed Nickel"]),
            ],
        );
        assert_eq!(
            collect_colors(&snapshot),
            vec!["Brushed Nickel", "Chrome", "Matte Black"]
        );
    }

    #[test]
    fn inventory_metadata_counts_colors() {
        let inventory = ColorInventory::new(vec!["Chrome".into()], 7);
        assert_eq!(inventory.metadata.total_colors, 1);
        assert_eq!(inventory.metadata.generated_at, 7);
    }
}
