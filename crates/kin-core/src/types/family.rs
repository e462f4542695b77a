//! Families and variants — the externally visible output model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::attributes::AttributeMap;
use super::spec::SpecAttributes;

/// Option-axis name → sorted distinct values (each axis has ≥ 2 values).
pub type OptionMap = BTreeMap<String, Vec<String>>;

/// One catalog product as a member of a family, with derived attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub product_code: String,
    /// The raw title with whitespace collapsed to single spaces.
    pub product_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vap: Option<bool>,
    #[serde(default)]
    pub attributes: AttributeMap,
    /// The product's "Specifications" group, when attribute data was
    /// fetched for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_attributes: Option<SpecAttributes>,
}

/// A named grouping of 2+ products that are variants of one base product.
///
/// Families are immutable once built: re-running the pipeline produces a
/// new snapshot rather than updating families in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub family_id: String,
    pub title: String,
    pub brand: String,
    /// Always equals `variants.len()`, and never 1.
    pub variant_count: usize,
    pub variant_options: OptionMap,
    pub variants: Vec<Variant>,
}

impl Family {
    /// Flatten the family into the document shape the external search
    /// index consumes.
    pub fn to_index_document(&self) -> IndexDocument {
        IndexDocument {
            family_id: self.family_id.clone(),
            title: self.title.clone(),
            brand: self.brand.clone(),
            variant_count: self.variant_count,
            product_codes: self
                .variants
                .iter()
                .map(|v| v.product_code.clone())
                .collect(),
            variant_titles: self
                .variants
                .iter()
                .map(|v| v.product_title.clone())
                .collect(),
            variant_options: self.variant_options.clone(),
        }
    }
}

/// Flat, indexable projection of a family for the search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub family_id: String,
    pub title: String,
    pub brand: String,
    pub variant_count: usize,
    pub product_codes: Vec<String>,
    pub variant_titles: Vec<String>,
    pub variant_options: OptionMap,
}
