//! Variant option aggregation — collapses per-variant attributes into the
//! distinct option axes a chooser UI exposes.

use std::collections::{BTreeMap, BTreeSet};

use kin_core::types::{OptionMap, Variant};

/// Attribute names that are all "the same size knob under different spec
/// names". When more than one distinct name from this list appears across
/// a family's variants, they coalesce into a single `dimension` axis so
/// the family is not fragmented into single-value pseudo-axes.
pub const DIMENSIONAL_ATTRIBUTES: &[&str] = &[
    "Width",
    "Height",
    "Depth",
    "Length",
    "Diameter",
    "Projection",
    "Reach",
    "Arm Length",
    "Shower Head Width",
    "Fixing Point Distance",
    "Minimum Width",
    "Maximum Width",
    "Minimum Height",
    "Maximum Height",
    "dimensions",
    "dimension",
];

/// Collect the distinct option axes across a family's variants.
///
/// An axis is exposed only when it has 2 or more distinct values;
/// single-valued axes distinguish nothing and are suppressed. The
/// descriptor-only `uniqueDescriptors` key is never an axis. Axis values
/// are sorted lexicographically, except that an axis whose values all
/// start with a digit (dimension/size axes in practice) sorts by leading
/// numeric value first.
pub fn aggregate_options(variants: &[Variant]) -> OptionMap {
    let mut collections: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for variant in variants {
        for (key, value) in &variant.attributes {
            if key == "uniqueDescriptors" {
                continue;
            }
            let set = collections.entry(key.clone()).or_default();
            for v in value.values() {
                set.insert(v.to_string());
            }
        }
    }

    coalesce_dimensional_keys(&mut collections);

    let mut options = OptionMap::new();
    for (key, values) in collections {
        if values.len() < 2 {
            continue;
        }
        let axis = match key.as_str() {
            "sizes" => "size".to_string(),
            "dimensions" => "dimension".to_string(),
            _ => key,
        };
        options.insert(axis, sort_axis_values(values));
    }
    options
}

/// Merge every dimensional spec name into one `dimension` axis when more
/// than one distinct dimensional key is present.
fn coalesce_dimensional_keys(collections: &mut BTreeMap<String, BTreeSet<String>>) {
    let dimensional_keys: Vec<String> = collections
        .keys()
        .filter(|k| DIMENSIONAL_ATTRIBUTES.contains(&k.as_str()))
        .cloned()
        .collect();
    if dimensional_keys.len() <= 1 {
        return;
    }

    let mut merged = BTreeSet::new();
    for key in &dimensional_keys {
        if let Some(values) = collections.remove(key) {
            merged.extend(values);
        }
    }
    collections.insert("dimension".to_string(), merged);
}

/// Sort axis values: numeric-aware when every value leads with a digit,
/// plain lexicographic otherwise.
fn sort_axis_values(values: BTreeSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = values.into_iter().collect();
    let all_numeric_prefixed = sorted
        .iter()
        .all(|v| v.starts_with(|c: char| c.is_ascii_digit()));
    if all_numeric_prefixed {
        sorted.sort_by(|a, b| {
            let na = leading_number(a);
            let nb = leading_number(b);
            na.partial_cmp(&nb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.cmp(b))
        });
    }
    sorted
}

/// Leading decimal number of a value like "600mm" or "3.0 x 1.8m".
fn leading_number(s: &str) -> f64 {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    s[..end].parse().unwrap_or(0.0)
}
