//! Snapshot verification — proves a written snapshot honors the family
//! invariants and that every family is actually selectable through its
//! option axes, using the same resolution logic the chooser UI applies.

use std::collections::BTreeMap;

use kin_core::types::{Family, Snapshot};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::options::find_matching_variant;

/// A family whose first-value option selection resolves to no variant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemFamily {
    pub family_id: String,
    pub title: String,
    pub brand: String,
    pub variant_count: usize,
    pub selected_options: BTreeMap<String, String>,
}

/// Outcome of verifying one snapshot.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Families with at least one option axis that were selection-checked.
    pub families_checked: usize,
    /// Families whose first-value selection resolved to a variant.
    pub families_matched: usize,
    /// Families that failed selection resolution.
    pub unresolved: Vec<ProblemFamily>,
    /// Violations of the structural invariants.
    pub structural_errors: Vec<String>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty() && self.structural_errors.is_empty()
    }
}

/// Verify a snapshot's invariants:
/// metadata statistics consistent with the family list; per family:
/// `variant_count == variants.len()` and ≥ 2, unique product codes, every
/// axis with ≥ 2 distinct values, non-empty options for multi-variant
/// families; and selecting the first value of every axis resolves to a
/// concrete variant.
pub fn verify_snapshot(snapshot: &Snapshot) -> VerificationReport {
    let mut report = VerificationReport::default();

    let stats = &snapshot.metadata.statistics;
    if stats.total_families != snapshot.families.len() {
        report.structural_errors.push(format!(
            "metadata totalFamilies is {} but snapshot has {} families",
            stats.total_families,
            snapshot.families.len()
        ));
    }
    let product_sum: usize = snapshot.families.iter().map(|f| f.variant_count).sum();
    if stats.total_products_in_families != product_sum {
        report.structural_errors.push(format!(
            "metadata totalProductsInFamilies is {} but variant counts sum to {}",
            stats.total_products_in_families, product_sum
        ));
    }

    for family in &snapshot.families {
        check_structure(family, &mut report.structural_errors);
        check_selection(family, &mut report);
    }

    report
}

fn check_structure(family: &Family, errors: &mut Vec<String>) {
    let label = format!("[{}] {}", family.brand, family.title);

    if family.title.is_empty() {
        errors.push(format!("{label}: empty family title"));
    }
    if family.brand.is_empty() {
        errors.push(format!("{label}: empty brand"));
    }
    if family.variant_count != family.variants.len() {
        errors.push(format!(
            "{label}: variantCount {} != variants length {}",
            family.variant_count,
            family.variants.len()
        ));
    }
    if family.variant_count < 2 {
        errors.push(format!(
            "{label}: families must have 2+ variants, found {}",
            family.variant_count
        ));
    }

    let mut codes = FxHashSet::default();
    for variant in &family.variants {
        if !codes.insert(variant.product_code.as_str()) {
            errors.push(format!(
                "{label}: duplicate product code {}",
                variant.product_code
            ));
        }
    }

    if family.variant_count > 1 && family.variant_options.is_empty() {
        errors.push(format!("{label}: multi-variant family with no option axes"));
    }
    for (axis, values) in &family.variant_options {
        if axis.is_empty() {
            errors.push(format!("{label}: empty option axis name"));
        }
        if values.len() < 2 {
            errors.push(format!(
                "{label}: option axis {axis:?} has {} value(s), need 2+",
                values.len()
            ));
        }
        let distinct: FxHashSet<&str> = values.iter().map(String::as_str).collect();
        if distinct.len() != values.len() {
            errors.push(format!("{label}: option axis {axis:?} repeats values"));
        }
    }
}

/// Select the first value of every axis and resolve a matching variant.
fn check_selection(family: &Family, report: &mut VerificationReport) {
    if family.variant_options.is_empty() {
        return;
    }
    report.families_checked += 1;

    let selections: BTreeMap<String, String> = family
        .variant_options
        .iter()
        .filter_map(|(axis, values)| values.first().map(|v| (axis.clone(), v.clone())))
        .collect();

    if find_matching_variant(family, &selections).is_some() {
        report.families_matched += 1;
    } else {
        report.unresolved.push(ProblemFamily {
            family_id: family.family_id.clone(),
            title: family.title.clone(),
            brand: family.brand.clone(),
            variant_count: family.variant_count,
            selected_options: selections,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_core::config::PipelineConfig;
    use kin_core::events::EventDispatcher;
    use kin_core::types::{BrandCatalog, Product};

    use crate::pipeline::FamilyPipeline;

    fn built_snapshot() -> Snapshot {
        let catalog = BrandCatalog::from_brands([(
            "Mizu",
            vec![
                Product::new("1", "Mizu Drift 600mm Grab Rail Chrome"),
                Product::new("2", "Mizu Drift 700mm Grab Rail Chrome"),
                Product::new("3", "Mizu Drift 900mm Grab Rail Matte Black"),
            ],
        )]);
        FamilyPipeline::new(&PipelineConfig::default())
            .run(&catalog, None, &EventDispatcher::new())
            .into_snapshot(0)
    }

    #[test]
    fn pipeline_output_verifies_clean() {
        let report = verify_snapshot(&built_snapshot());
        assert!(report.is_clean(), "report: {report:?}");
        assert_eq!(report.families_checked, report.families_matched);
    }

    #[test]
    fn inconsistent_statistics_detected() {
        let mut snapshot = built_snapshot();
        snapshot.metadata.statistics.total_families += 1;
        let report = verify_snapshot(&snapshot);
        assert!(!report.is_clean());
    }

    #[test]
    fn variant_count_drift_detected() {
        let mut snapshot = built_snapshot();
        snapshot.families[0].variant_count += 1;
        snapshot.metadata.statistics.total_products_in_families += 1;
        let report = verify_snapshot(&snapshot);
        assert!(report
            .structural_errors
            .iter()
            .any(|e| e.contains("variantCount")));
    }

    #[test]
    fn duplicate_product_codes_detected() {
        let mut snapshot = built_snapshot();
        let clone = snapshot.families[0].variants[0].clone();
        snapshot.families[0].variants.push(clone);
        snapshot.families[0].variant_count += 1;
        snapshot.metadata.statistics.total_products_in_families += 1;
        let report = verify_snapshot(&snapshot);
        assert!(report
            .structural_errors
            .iter()
            .any(|e| e.contains("duplicate product code")));
    }

    #[test]
    fn unresolvable_selection_reported() {
        let mut snapshot = built_snapshot();
        // Corrupt an axis so its first value matches no variant.
        let family = &mut snapshot.families[0];
        if let Some(values) = family.variant_options.values_mut().next() {
            values.insert(0, "does-not-exist".to_string());
            values.push("second".to_string());
        }
        let report = verify_snapshot(&snapshot);
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].brand, "Mizu");
    }
}
