//! Brand clustering — groups one brand's products by comparison key.
//!
//! Clustering never crosses brands; callers invoke this once per brand.

use kin_core::types::Product;
use rustc_hash::FxHashMap;

use crate::normalize::TitleNormalizer;

/// One candidate family: the products sharing a comparison key.
#[derive(Debug, Clone)]
pub struct Cluster {
    /// The shared comparison key. May be empty — titles consisting
    /// entirely of size and vocabulary tokens form a valid degenerate
    /// cluster.
    pub key: String,
    /// Members in catalog input order.
    pub products: Vec<Product>,
}

/// Clusters in first-seen key order, so a run over the same input is
/// fully reproducible.
#[derive(Debug, Default)]
pub struct Clusters {
    clusters: Vec<Cluster>,
    index: FxHashMap<String, usize>,
}

impl Clusters {
    /// Append a product to its key's cluster, creating the cluster on
    /// first sight of the key.
    pub fn insert(&mut self, key: String, product: Product) {
        match self.index.get(&key) {
            Some(&i) => self.clusters[i].products.push(product),
            None => {
                self.index.insert(key.clone(), self.clusters.len());
                self.clusters.push(Cluster {
                    key,
                    products: vec![product],
                });
            }
        }
    }

    /// Iterate clusters in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Number of clusters with at least `size` members.
    pub fn count_at_least(&self, size: usize) -> usize {
        self.clusters.iter().filter(|c| c.products.len() >= size).count()
    }
}

/// Cluster one brand's products by normalized comparison key.
///
/// Every product lands in exactly one cluster; insertion order within a
/// cluster equals input order.
pub fn cluster_products(normalizer: &TitleNormalizer, products: &[Product]) -> Clusters {
    let mut clusters = Clusters::default();
    for product in products {
        let key = normalizer.normalize(&product.product_title);
        clusters.insert(key, product.clone());
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str, title: &str) -> Product {
        Product::new(code, title)
    }

    #[test]
    fn size_variants_cluster_together() {
        let normalizer = TitleNormalizer::new();
        let products = vec![
            product("1", "Mizu Drift 600mm Grab Rail Polished Stainless Steel"),
            product("2", "Mizu Drift 700mm Grab Rail Polished Stainless Steel"),
            product("3", "Mizu Soothe Shower Rail Chrome"),
        ];
        let clusters = cluster_products(&normalizer, &products);
        assert_eq!(clusters.len(), 2);
        let first = clusters.iter().next().unwrap();
        assert_eq!(first.products.len(), 2);
        assert_eq!(first.products[0].product_code, "1");
        assert_eq!(first.products[1].product_code, "2");
    }

    #[test]
    fn every_product_lands_in_exactly_one_cluster() {
        let normalizer = TitleNormalizer::new();
        let products = vec![
            product("1", "A Basin"),
            product("2", "B Mixer"),
            product("3", "A Basin Chrome"),
        ];
        let clusters = cluster_products(&normalizer, &products);
        let total: usize = clusters.iter().map(|c| c.products.len()).sum();
        assert_eq!(total, products.len());
    }

    #[test]
    fn empty_keys_form_a_degenerate_cluster() {
        let normalizer = TitleNormalizer::new();
        let products = vec![
            product("1", "600mm Polished Chrome"),
            product("2", "Matte Black 750mm"),
        ];
        let clusters = cluster_products(&normalizer, &products);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.iter().next().unwrap().key, "");
    }

    #[test]
    fn cluster_order_is_first_seen() {
        let normalizer = TitleNormalizer::new();
        let products = vec![
            product("1", "Zeta Rail"),
            product("2", "Alpha Basin"),
            product("3", "Zeta Rail Chrome"),
        ];
        let clusters = cluster_products(&normalizer, &products);
        let keys: Vec<&str> = clusters.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta rail", "alpha basin"]);
    }
}
