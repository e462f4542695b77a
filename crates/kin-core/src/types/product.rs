//! The immutable catalog input record.

use serde::{Deserialize, Serialize};

/// One product as it appears in the input catalog.
///
/// `product_code` is unique within the catalog. `is_vap` flags value-added
/// products; it is carried through untouched for downstream filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_code: String,
    pub product_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vap: Option<bool>,
}

impl Product {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            product_code: code.into(),
            product_title: title.into(),
            is_vap: None,
        }
    }
}
