//! Specification-attribute wire shapes, as returned by the remote catalog
//! attribute API and stored by the fetch job.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The group consumed by the pipeline; every other group is ignored.
pub const SPECIFICATIONS_GROUP: &str = "Specifications";

/// One fetched record: a catalog product plus its attribute payload.
/// `attributes` is `None` when the fetch failed; `attribute_error` then
/// carries the failure message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRecord {
    pub product_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_title: Option<String>,
    #[serde(default)]
    pub attributes: Option<SpecAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_error: Option<String>,
}

/// The attribute payload: a list of named groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecAttributes {
    #[serde(default)]
    pub groups: Vec<SpecGroup>,
}

impl SpecAttributes {
    /// The "Specifications" group, if present.
    pub fn specifications(&self) -> Option<&SpecGroup> {
        self.groups.iter().find(|g| g.name == SPECIFICATIONS_GROUP)
    }

    /// A copy reduced to just the "Specifications" group.
    pub fn specifications_only(&self) -> Option<SpecAttributes> {
        self.specifications().map(|g| SpecAttributes {
            groups: vec![g.clone()],
        })
    }
}

/// One named attribute group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecGroup {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<SpecAttribute>,
}

impl SpecGroup {
    /// Look up an attribute by exact name.
    pub fn attribute(&self, name: &str) -> Option<&SpecAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// One specification attribute. Values arrive as strings or numbers
/// depending on the attribute, so they are kept as raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub values: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
}

impl SpecAttribute {
    /// The leading integer of the first value, whether it arrives as a
    /// number or a string like `"420"` or `"420mm"`.
    pub fn first_numeric_value(&self) -> Option<i64> {
        match self.values.first()? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => leading_integer(s),
            _ => None,
        }
    }
}

/// Parse the leading decimal digits of a string, ignoring the rest.
pub fn leading_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Specification lookup by product code, reduced to the "Specifications"
/// group at construction. Products whose fetch failed are simply absent.
#[derive(Debug, Default)]
pub struct SpecIndex {
    by_code: FxHashMap<String, SpecAttributes>,
}

impl SpecIndex {
    /// Build from fetched records, keeping only the Specifications group.
    pub fn from_records(records: &[SpecRecord]) -> Self {
        let mut by_code = FxHashMap::default();
        for record in records {
            if let Some(filtered) = record
                .attributes
                .as_ref()
                .and_then(|a| a.specifications_only())
            {
                by_code.insert(record.product_code.clone(), filtered);
            }
        }
        Self { by_code }
    }

    /// The filtered attributes for a product, if any were fetched.
    pub fn get(&self, product_code: &str) -> Option<&SpecAttributes> {
        self.by_code.get(product_code)
    }

    /// The Specifications group for a product, if any.
    pub fn specifications(&self, product_code: &str) -> Option<&SpecGroup> {
        self.by_code
            .get(product_code)
            .and_then(|a| a.specifications())
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SpecRecord {
        serde_json::from_str(
            r#"{
                "productCode": "9507013",
                "attributes": {
                    "groups": [
                        {"name": "Marketing", "attributes": []},
                        {"name": "Specifications", "attributes": [
                            {"id": "w", "name": "Width", "values": ["420"], "uom": "mm"},
                            {"name": "Depth", "values": [160]}
                        ]}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn index_filters_to_specifications_group() {
        let index = SpecIndex::from_records(&[sample_record()]);
        let attrs = index.get("9507013").unwrap();
        assert_eq!(attrs.groups.len(), 1);
        assert_eq!(attrs.groups[0].name, SPECIFICATIONS_GROUP);
    }

    #[test]
    fn numeric_values_from_string_and_number() {
        let index = SpecIndex::from_records(&[sample_record()]);
        let group = index.specifications("9507013").unwrap();
        assert_eq!(group.attribute("Width").unwrap().first_numeric_value(), Some(420));
        assert_eq!(group.attribute("Depth").unwrap().first_numeric_value(), Some(160));
    }

    #[test]
    fn failed_fetch_is_absent() {
        let record: SpecRecord = serde_json::from_str(
            r#"{"productCode": "1", "attributes": null, "attributeError": "HTTP 404"}"#,
        )
        .unwrap();
        let index = SpecIndex::from_records(&[record]);
        assert!(index.get("1").is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn leading_integer_parsing() {
        assert_eq!(leading_integer("420mm"), Some(420));
        assert_eq!(leading_integer("  75"), Some(75));
        assert_eq!(leading_integer("mm420"), None);
        assert_eq!(leading_integer(""), None);
    }
}
