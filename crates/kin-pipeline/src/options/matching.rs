//! Selection resolution — the chooser logic that maps a set of selected
//! option values back to a concrete variant. The snapshot verifier uses
//! this to prove every family is actually selectable.

use std::collections::BTreeMap;

use kin_core::types::{AttributeValue, Family, Variant};

use super::aggregator::DIMENSIONAL_ATTRIBUTES;

/// Find the first variant matching every selected (axis, value) pair.
///
/// Axis names are tried as the exact attribute key, then with a
/// plural/singular fallback ("size" ↔ "sizes"). The coalesced `dimension`
/// axis matches a value held under any dimensional attribute name. Returns
/// `None` for an empty selection.
pub fn find_matching_variant<'a>(
    family: &'a Family,
    selections: &BTreeMap<String, String>,
) -> Option<&'a Variant> {
    if selections.is_empty() {
        return None;
    }
    family
        .variants
        .iter()
        .find(|variant| selections.iter().all(|(key, value)| matches(variant, key, value)))
}

fn matches(variant: &Variant, key: &str, value: &str) -> bool {
    if let Some(attr) = lookup(variant, key) {
        return attr.matches(value);
    }
    if key == "dimension" {
        return DIMENSIONAL_ATTRIBUTES.iter().any(|name| {
            variant
                .attributes
                .get(*name)
                .is_some_and(|attr| attr.matches(value))
        });
    }
    false
}

/// Exact key, then plural, then singular.
fn lookup<'a>(variant: &'a Variant, key: &str) -> Option<&'a AttributeValue> {
    if let Some(attr) = variant.attributes.get(key) {
        return Some(attr);
    }
    if !key.ends_with('s') {
        if let Some(attr) = variant.attributes.get(&format!("{key}s")) {
            return Some(attr);
        }
    } else if let Some(attr) = variant.attributes.get(&key[..key.len() - 1]) {
        return Some(attr);
    }
    None
}
