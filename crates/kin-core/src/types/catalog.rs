//! The brand catalog input.
//!
//! Two shapes are accepted per brand: a flat product array, or an
//! array-of-arrays from a previous grouping snapshot. Top-level keys
//! beginning with `_` are metadata and never iterated as brands.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::product::Product;
use crate::errors::CatalogError;

/// One brand's value in the catalog file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BrandEntry {
    Flat(Vec<Product>),
    Grouped(Vec<Vec<Product>>),
}

impl BrandEntry {
    fn into_products(self) -> Vec<Product> {
        match self {
            BrandEntry::Flat(products) => products,
            BrandEntry::Grouped(groups) => groups.into_iter().flatten().collect(),
        }
    }
}

/// Brand name → products, the clustering boundary.
///
/// Brands iterate in sorted order so a run over the same catalog is
/// byte-for-byte reproducible.
#[derive(Debug, Clone, Default)]
pub struct BrandCatalog {
    brands: BTreeMap<String, Vec<Product>>,
}

impl BrandCatalog {
    /// Parse a catalog from JSON text. `path` is used for diagnostics only.
    pub fn from_json(json: &str, path: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let mut brands = BTreeMap::new();
        for (name, value) in raw {
            if name.starts_with('_') {
                continue;
            }
            let entry: BrandEntry =
                serde_json::from_value(value).map_err(|e| CatalogError::ParseError {
                    path: path.to_string(),
                    message: format!("brand {name:?}: {e}"),
                })?;
            brands.insert(name, entry.into_products());
        }
        Ok(Self { brands })
    }

    /// Build a catalog directly from brand → products pairs (tests,
    /// programmatic callers).
    pub fn from_brands<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Product>)>,
        S: Into<String>,
    {
        Self {
            brands: entries
                .into_iter()
                .map(|(name, products)| (name.into(), products))
                .collect(),
        }
    }

    /// Iterate brands in sorted order.
    pub fn brands(&self) -> impl Iterator<Item = (&str, &[Product])> {
        self.brands
            .iter()
            .map(|(name, products)| (name.as_str(), products.as_slice()))
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn total_products(&self) -> usize {
        self.brands.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_brand_arrays() {
        let json = r#"{
            "Mizu": [
                {"productCode": "1", "productTitle": "Mizu Drift 600mm Grab Rail"},
                {"productCode": "2", "productTitle": "Mizu Drift 700mm Grab Rail", "isVap": true}
            ]
        }"#;
        let catalog = BrandCatalog::from_json(json, "test.json").unwrap();
        assert_eq!(catalog.brand_count(), 1);
        assert_eq!(catalog.total_products(), 2);
        let (_, products) = catalog.brands().next().unwrap();
        assert_eq!(products[1].is_vap, Some(true));
    }

    #[test]
    fn parses_pre_grouped_brand_arrays() {
        let json = r#"{
            "Posh": [
                [{"productCode": "1", "productTitle": "A"}],
                [{"productCode": "2", "productTitle": "B"}, {"productCode": "3", "productTitle": "C"}]
            ]
        }"#;
        let catalog = BrandCatalog::from_json(json, "test.json").unwrap();
        assert_eq!(catalog.total_products(), 3);
    }

    #[test]
    fn skips_reserved_metadata_keys() {
        let json = r#"{
            "_algorithmInfo": {"version": 6},
            "Mizu": [{"productCode": "1", "productTitle": "A"}]
        }"#;
        let catalog = BrandCatalog::from_json(json, "test.json").unwrap();
        assert_eq!(catalog.brand_count(), 1);
    }

    #[test]
    fn malformed_catalog_is_fatal() {
        let err = BrandCatalog::from_json("not json", "bad.json").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn brands_iterate_sorted() {
        let json = r#"{
            "Zip": [{"productCode": "1", "productTitle": "A"}],
            "Abey": [{"productCode": "2", "productTitle": "B"}]
        }"#;
        let catalog = BrandCatalog::from_json(json, "test.json").unwrap();
        let names: Vec<&str> = catalog.brands().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Abey", "Zip"]);
    }
}
