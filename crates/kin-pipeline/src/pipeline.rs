//! The pipeline orchestrator: catalog → clusters → families → snapshot.

use std::fmt;

use kin_core::config::PipelineConfig;
use kin_core::events::{
    BrandClusteredEvent, BuildCompletedEvent, BuildStartedEvent, EventDispatcher,
};
use kin_core::types::{BrandCatalog, Family, Product, Snapshot, SpecIndex, Variant};
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::attributes::AttributeExtractor;
use crate::cluster::cluster_products;
use crate::family::{family_id, TitleSynthesizer};
use crate::normalize::TitleNormalizer;
use crate::options::aggregate_options;

/// Snapshot format version written by this pipeline.
pub const SNAPSHOT_VERSION: u32 = 3;

const SNAPSHOT_DESCRIPTION: &str = "Product families with variants grouped by normalized base \
     title. Family titles are the longest common word run across the cluster's stripped titles; \
     variant options are derived per title and reconciled against specification attributes \
     where available.";

/// Runs the full normalization pipeline over a brand catalog.
///
/// Single-threaded and side-effect-free: the only outputs are the returned
/// families/diagnostics and progress events.
pub struct FamilyPipeline {
    normalizer: TitleNormalizer,
    synthesizer: TitleSynthesizer,
    extractor: AttributeExtractor,
    min_family_size: usize,
    whitespace: Regex,
}

impl FamilyPipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            normalizer: TitleNormalizer::new(),
            synthesizer: TitleSynthesizer::new(),
            extractor: AttributeExtractor::new(),
            min_family_size: config.effective_min_family_size(),
            whitespace: Regex::new(r"\s+").expect("whitespace regex"),
        }
    }

    /// Run over a catalog. Clusters each brand by comparison key, drops
    /// standalone clusters, synthesizes family titles, extracts variant
    /// attributes (reconciled against `specs` when supplied), and merges
    /// clusters that resolve to the same (brand, title).
    pub fn run(
        &self,
        catalog: &BrandCatalog,
        specs: Option<&SpecIndex>,
        events: &EventDispatcher,
    ) -> BuildOutcome {
        let mut diagnostics = BuildDiagnostics {
            brand_count: catalog.brand_count(),
            product_count: catalog.total_products(),
            ..Default::default()
        };
        events.emit_build_started(&BuildStartedEvent {
            brand_count: diagnostics.brand_count,
            product_count: diagnostics.product_count,
        });

        // Families keyed by "brand:title" for cluster merging, with
        // first-discovery order preserved for the output.
        let mut families: FxHashMap<String, Family> = FxHashMap::default();
        let mut order: Vec<String> = Vec::new();

        for (brand, products) in catalog.brands() {
            let clusters = cluster_products(&self.normalizer, products);
            diagnostics.cluster_count += clusters.len();
            let mut brand_families = 0usize;

            for cluster in clusters.iter() {
                if cluster.products.len() < self.min_family_size {
                    diagnostics.standalone_clusters += 1;
                    continue;
                }

                let titles: Vec<&str> = cluster
                    .products
                    .iter()
                    .map(|p| p.product_title.as_str())
                    .collect();
                let title = self.synthesizer.synthesize(&titles);
                let variants: Vec<Variant> = cluster
                    .products
                    .iter()
                    .map(|p| self.build_variant(p, &title, specs))
                    .collect();

                let merge_key = format!("{brand}:{title}");
                match families.get_mut(&merge_key) {
                    Some(existing) => {
                        // Independently discovered cluster resolving to an
                        // existing family: union the variant lists and
                        // re-aggregate options over the union.
                        existing.variants.extend(variants);
                        existing.variant_count = existing.variants.len();
                        existing.variant_options = aggregate_options(&existing.variants);
                        diagnostics.merged_clusters += 1;
                    }
                    None => {
                        let variant_options = aggregate_options(&variants);
                        let family = Family {
                            family_id: family_id(brand, &title),
                            title,
                            brand: brand.to_string(),
                            variant_count: variants.len(),
                            variant_options,
                            variants,
                        };
                        order.push(merge_key.clone());
                        families.insert(merge_key, family);
                        brand_families += 1;
                    }
                }
            }

            tracing::debug!(
                brand,
                clusters = clusters.len(),
                families = brand_families,
                "brand clustered"
            );
            events.emit_brand_clustered(&BrandClusteredEvent {
                brand: brand.to_string(),
                cluster_count: clusters.len(),
                family_count: brand_families,
            });
        }

        let families: Vec<Family> = order
            .iter()
            .filter_map(|key| families.remove(key))
            .collect();
        diagnostics.family_count = families.len();
        diagnostics.products_in_families = families.iter().map(|f| f.variant_count).sum();

        tracing::info!(
            families = diagnostics.family_count,
            products = diagnostics.products_in_families,
            merged = diagnostics.merged_clusters,
            "pipeline run complete"
        );
        events.emit_build_completed(&BuildCompletedEvent {
            family_count: diagnostics.family_count,
            products_in_families: diagnostics.products_in_families,
            merged_clusters: diagnostics.merged_clusters,
        });

        BuildOutcome {
            families,
            diagnostics,
        }
    }

    fn build_variant(
        &self,
        product: &Product,
        family_title: &str,
        specs: Option<&SpecIndex>,
    ) -> Variant {
        let spec_group = specs.and_then(|s| s.specifications(&product.product_code));
        let attributes =
            self.extractor
                .extract(&product.product_title, family_title, spec_group);
        Variant {
            product_code: product.product_code.clone(),
            product_title: self
                .whitespace
                .replace_all(product.product_title.trim(), " ")
                .into_owned(),
            is_vap: product.is_vap,
            attributes,
            source_attributes: specs.and_then(|s| s.get(&product.product_code)).cloned(),
        }
    }
}

/// Families plus run diagnostics.
#[derive(Debug)]
pub struct BuildOutcome {
    pub families: Vec<Family>,
    pub diagnostics: BuildDiagnostics,
}

impl BuildOutcome {
    /// Wrap the families into a snapshot artifact with self-consistent
    /// statistics. `generated_at` is unix seconds, supplied by the caller
    /// so the pipeline itself stays deterministic.
    pub fn into_snapshot(self, generated_at: u64) -> Snapshot {
        Snapshot::new(
            SNAPSHOT_VERSION,
            SNAPSHOT_DESCRIPTION.to_string(),
            generated_at,
            self.families,
        )
    }
}

/// Diagnostics summary for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct BuildDiagnostics {
    pub brand_count: usize,
    pub product_count: usize,
    /// Clusters discovered across all brands, singletons included.
    pub cluster_count: usize,
    /// Clusters below the family threshold, excluded from output.
    pub standalone_clusters: usize,
    /// Cluster merges applied because two clusters synthesized the same
    /// (brand, title).
    pub merged_clusters: usize,
    pub family_count: usize,
    pub products_in_families: usize,
}

impl fmt::Display for BuildDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BuildDiagnostics {{ brands={}, products={}, clusters={}, standalone={}, merged={}, families={}, products_in_families={} }}",
            self.brand_count,
            self.product_count,
            self.cluster_count,
            self.standalone_clusters,
            self.merged_clusters,
            self.family_count,
            self.products_in_families,
        )
    }
}
