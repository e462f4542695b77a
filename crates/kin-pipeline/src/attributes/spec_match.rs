//! Dimension → specification-attribute reconciliation.
//!
//! A dimension token like "420mm" carries no meaning on its own. When the
//! product's specification attributes are available, the token's numeric
//! value is searched among them so the variant can expose "Width" instead
//! of a generic "dimensions" bucket.

use kin_core::types::SpecGroup;

/// Find the specification attribute whose first value equals the
/// dimension token's leading integer, returning its name.
///
/// When both a "Minimum X" and a "Maximum X" attribute exist with equal
/// values, the pair collapses to the bare name "X" — a fixed dimension is
/// not a range.
pub fn match_dimension_to_spec(dimension: &str, spec: &SpecGroup) -> Option<String> {
    let numeric = first_integer(dimension).filter(|&n| n != 0)?;

    let matched = spec
        .attributes
        .iter()
        .find(|attr| attr.first_numeric_value() == Some(numeric))?;
    let name = matched.name.as_str();

    for prefix in ["Minimum ", "Maximum "] {
        if let Some(base) = name.strip_prefix(prefix) {
            let min = spec
                .attribute(&format!("Minimum {base}"))
                .and_then(|a| a.first_numeric_value());
            let max = spec
                .attribute(&format!("Maximum {base}"))
                .and_then(|a| a.first_numeric_value());
            if let (Some(min), Some(max)) = (min, max) {
                if min == max {
                    return Some(base.to_string());
                }
            }
        }
    }

    Some(name.to_string())
}

/// First run of decimal digits anywhere in the string, as an integer.
fn first_integer(s: &str) -> Option<i64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kin_core::types::SpecAttribute;

    fn group(attrs: &[(&str, i64)]) -> SpecGroup {
        SpecGroup {
            name: "Specifications".to_string(),
            attributes: attrs
                .iter()
                .map(|&(name, value)| SpecAttribute {
                    id: None,
                    name: name.to_string(),
                    values: vec![serde_json::json!(value.to_string())],
                    uom: Some("mm".to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn matches_by_first_value() {
        let spec = group(&[("Width", 420), ("Depth", 160)]);
        assert_eq!(
            match_dimension_to_spec("420mm", &spec),
            Some("Width".to_string())
        );
        assert_eq!(
            match_dimension_to_spec("160mm", &spec),
            Some("Depth".to_string())
        );
    }

    #[test]
    fn no_match_returns_none() {
        let spec = group(&[("Width", 420)]);
        assert_eq!(match_dimension_to_spec("999mm", &spec), None);
        assert_eq!(match_dimension_to_spec("no digits", &spec), None);
    }

    #[test]
    fn equal_min_max_collapse_to_base_name() {
        let spec = group(&[("Minimum Width", 420), ("Maximum Width", 420)]);
        assert_eq!(
            match_dimension_to_spec("420mm", &spec),
            Some("Width".to_string())
        );
    }

    #[test]
    fn unequal_min_max_keep_their_names() {
        let spec = group(&[("Minimum Width", 420), ("Maximum Width", 600)]);
        assert_eq!(
            match_dimension_to_spec("420mm", &spec),
            Some("Minimum Width".to_string())
        );
        assert_eq!(
            match_dimension_to_spec("600mm", &spec),
            Some("Maximum Width".to_string())
        );
    }

    #[test]
    fn zero_value_never_matches() {
        let spec = group(&[("Width", 0)]);
        assert_eq!(match_dimension_to_spec("0mm", &spec), None);
    }
}
