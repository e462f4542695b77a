//! Derived variant attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single attribute value: a scalar string, or an ordered list for
/// multi-valued fields (e.g. several size tokens in one title).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Iterate the value(s), flattening lists.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            AttributeValue::Scalar(s) => std::slice::from_ref(s),
            AttributeValue::List(v) => v.as_slice(),
        };
        slice.iter().map(String::as_str)
    }

    /// Whether the value equals (scalar) or contains (list) `v`.
    pub fn matches(&self, v: &str) -> bool {
        match self {
            AttributeValue::Scalar(s) => s == v,
            AttributeValue::List(items) => items.iter().any(|i| i == v),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Scalar(s)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::List(v)
    }
}

/// Attribute name → value, ordered for deterministic serialization.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_roundtrip() {
        let v: AttributeValue = serde_json::from_str("\"Left Hand\"").unwrap();
        assert_eq!(v, AttributeValue::Scalar("Left Hand".into()));
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"Left Hand\"");
    }

    #[test]
    fn list_roundtrip() {
        let v: AttributeValue = serde_json::from_str("[\"600mm\",\"750mm\"]").unwrap();
        assert!(v.matches("750mm"));
        assert_eq!(v.values().count(), 2);
    }
}
