//! End-to-end pipeline scenarios over small inline catalogs.

use kin_core::config::PipelineConfig;
use kin_core::events::EventDispatcher;
use kin_core::types::{BrandCatalog, Product, SpecIndex, SpecRecord};
use kin_pipeline::{family_id, FamilyPipeline};

fn run(catalog: BrandCatalog) -> kin_pipeline::BuildOutcome {
    FamilyPipeline::new(&PipelineConfig::default()).run(&catalog, None, &EventDispatcher::new())
}

#[test]
fn size_variants_become_one_family_with_dimension_axis() {
    let outcome = run(BrandCatalog::from_brands([(
        "Mizu",
        vec![
            Product::new("9505106", "Mizu Drift 600mm Grab Rail Polished Stainless Steel"),
            Product::new("9505107", "Mizu Drift 700mm Grab Rail Polished Stainless Steel"),
        ],
    )]));

    assert_eq!(outcome.families.len(), 1);
    let family = &outcome.families[0];
    assert_eq!(family.title, "Mizu Drift Grab Rail");
    assert_eq!(family.brand, "Mizu");
    assert_eq!(family.variant_count, 2);

    let dimension = family.variant_options.get("dimension").unwrap();
    assert_eq!(dimension, &vec!["600mm".to_string(), "700mm".to_string()]);
}

#[test]
fn material_variants_share_color_axis() {
    let outcome = run(BrandCatalog::from_brands([(
        "Geberit",
        vec![
            Product::new("1", "Geberit Sigma80 Sensor Plate Black Glass"),
            Product::new("2", "Geberit Sigma80 Sensor Plate Reflective Glass"),
        ],
    )]));

    assert_eq!(outcome.families.len(), 1);
    let family = &outcome.families[0];
    let colors = family.variant_options.get("color").unwrap();
    assert_eq!(
        colors,
        &vec!["Black Glass".to_string(), "Reflective Glass".to_string()]
    );
    // The descriptor residue doubles as color but never forms its own axis.
    assert!(!family.variant_options.contains_key("uniqueDescriptors"));
    for variant in &family.variants {
        assert_eq!(
            variant.attributes.get("color"),
            variant.attributes.get("uniqueDescriptors")
        );
    }
}

#[test]
fn temperature_variants_extract_and_stay_out_of_descriptors() {
    let outcome = run(BrandCatalog::from_brands([(
        "Zip",
        vec![
            Product::new("9508241", "Zip HydroTap (Cold) 7 Seconds (6 Star)"),
            Product::new("9508242", "Zip HydroTap (Warm) 7 Seconds (6 Star)"),
        ],
    )]));

    assert_eq!(outcome.families.len(), 1);
    let family = &outcome.families[0];
    let temps = family.variant_options.get("temperature").unwrap();
    assert_eq!(temps, &vec!["Cold".to_string(), "Warm".to_string()]);
    for variant in &family.variants {
        assert!(variant.attributes.get("uniqueDescriptors").is_none());
        assert!(variant.attributes.get("color").is_none());
    }
}

#[test]
fn singleton_clusters_never_reach_the_output() {
    let outcome = run(BrandCatalog::from_brands([(
        "Mizu",
        vec![
            Product::new("1", "Mizu Drift 600mm Grab Rail Chrome"),
            Product::new("2", "Mizu Drift 700mm Grab Rail Chrome"),
            Product::new("3", "Mizu Soothe Overhead Shower Chrome"),
        ],
    )]));

    assert_eq!(outcome.families.len(), 1);
    assert!(outcome.families.iter().all(|f| f.variant_count >= 2));
    assert_eq!(outcome.diagnostics.standalone_clusters, 1);
}

#[test]
fn spec_reconciliation_collapses_min_max_and_names_the_axis() {
    let records: Vec<SpecRecord> = serde_json::from_str(
        r#"[
            {"productCode": "1", "attributes": {"groups": [
                {"name": "Specifications", "attributes": [
                    {"name": "Width", "values": ["420"], "uom": "mm"}
                ]}
            ]}},
            {"productCode": "2", "attributes": {"groups": [
                {"name": "Specifications", "attributes": [
                    {"name": "Minimum Width", "values": ["600"], "uom": "mm"},
                    {"name": "Maximum Width", "values": ["600"], "uom": "mm"}
                ]}
            ]}}
        ]"#,
    )
    .unwrap();
    let specs = SpecIndex::from_records(&records);

    let catalog = BrandCatalog::from_brands([(
        "Avail",
        vec![
            Product::new("1", "Avail Option Grab Rail 420mm Chrome"),
            Product::new("2", "Avail Option Grab Rail 600mm Chrome"),
        ],
    )]);
    let outcome = FamilyPipeline::new(&PipelineConfig::default()).run(
        &catalog,
        Some(&specs),
        &EventDispatcher::new(),
    );

    assert_eq!(outcome.families.len(), 1);
    let family = &outcome.families[0];
    // Both variants expose "Width" — one directly, one via the equal
    // Minimum/Maximum collapse — so the axis keeps the spec name.
    let widths = family.variant_options.get("Width").unwrap();
    assert_eq!(widths, &vec!["420mm".to_string(), "600mm".to_string()]);
    // Source attributes are carried, filtered to the Specifications group.
    assert!(family.variants.iter().all(|v| v
        .source_attributes
        .as_ref()
        .is_some_and(|a| a.groups.len() == 1)));
}

#[test]
fn clusters_synthesizing_the_same_title_merge_into_one_family() {
    // Orientation words keep these in two comparison-key clusters, but the
    // synthesizer strips them, so both clusters resolve to the same title.
    let outcome = run(BrandCatalog::from_brands([(
        "Seima",
        vec![
            Product::new("1", "Seima Arko Basin 500mm White"),
            Product::new("2", "Seima Arko Basin 600mm White"),
            Product::new("3", "Seima Arko Basin Left Hand 700mm White"),
            Product::new("4", "Seima Arko Basin Left Hand 800mm White"),
        ],
    )]));

    assert_eq!(outcome.diagnostics.merged_clusters, 1);
    assert_eq!(outcome.families.len(), 1);
    let family = &outcome.families[0];
    assert_eq!(family.title, "Seima Arko Basin");
    assert_eq!(family.variant_count, 4);
    assert_eq!(family.variants.len(), 4);
    assert_eq!(family.family_id, family_id("Seima", "Seima Arko Basin"));

    // Options are recomputed over the union.
    let dimension = family.variant_options.get("dimension").unwrap();
    assert_eq!(dimension.len(), 4);

    let codes: Vec<&str> = family
        .variants
        .iter()
        .map(|v| v.product_code.as_str())
        .collect();
    assert_eq!(codes, vec!["1", "2", "3", "4"]);
}

#[test]
fn brands_never_cluster_together() {
    let outcome = run(BrandCatalog::from_brands([
        (
            "Mizu",
            vec![Product::new("1", "Drift 600mm Grab Rail Chrome")],
        ),
        (
            "Posh",
            vec![Product::new("2", "Drift 600mm Grab Rail Chrome")],
        ),
    ]));
    // Identical titles under different brands stay singleton clusters.
    assert!(outcome.families.is_empty());
    assert_eq!(outcome.diagnostics.standalone_clusters, 2);
}

#[test]
fn snapshot_invariants_hold_end_to_end() {
    let snapshot = run(BrandCatalog::from_brands([(
        "Mizu",
        vec![
            Product::new("1", "Mizu Drift 600mm Grab Rail Chrome"),
            Product::new("2", "Mizu Drift 700mm Grab Rail Chrome"),
            Product::new("3", "Mizu Bloc Heated Towel Rail 630 (Each) Matte Black"),
            Product::new("4", "Mizu Bloc Heated Towel Rail 630 (Each) Polished Stainless Steel"),
        ],
    )]))
    .into_snapshot(1_700_000_000);

    let report = kin_pipeline::verify::verify_snapshot(&snapshot);
    assert!(report.is_clean(), "verification report: {report:?}");
    assert_eq!(
        snapshot.metadata.statistics.total_families,
        snapshot.families.len()
    );
}
