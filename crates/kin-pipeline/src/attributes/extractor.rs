//! Per-title variant attribute extraction.
//!
//! Every rule is independent and applied to the same raw title; absence of
//! a pattern simply omits that attribute key. Extraction is total — it
//! never fails on any input string.

use kin_core::types::{AttributeMap, AttributeValue, SpecGroup};
use regex::Regex;
use rustc_hash::FxHashSet;

use super::spec_match::match_dimension_to_spec;

/// Structural-noise words never treated as descriptors: generic
/// product-type nouns, mounting prepositions, and connective words.
const EXCLUDE_WORDS: &[&str] = &[
    "left", "right", "hand", "cold", "warm", "hot", "cool", "grab", "rail", "basin", "tap",
    "mixer", "shower", "bath", "toilet", "vanity", "cabinet", "mirror", "set", "system",
    "corner", "wall", "floor", "ceiling", "counter", "above", "below", "under", "over",
    "mounted", "inset", "flush", "bowl", "taphole", "tapholes", "hole", "holes", "no", "with",
    "without", "overflow", "shelf", "shelves", "acrylic", "base", "button", "plate", "dn80",
    "and", "mk2", "medium", "heating", "pack", "underfloor",
];

const DIM_OPERAND: &str = r"\d+(?:\.\d+)?(?:mm|cm|m)?(?:\s*-\s*\d+(?:\.\d+)?(?:mm|cm|m)?)?";

/// Extracts structured attributes from one raw product title.
pub struct AttributeExtractor {
    /// Multi-dimension sizes: units per operand or trailing, ranges,
    /// decimals ("1200 x 900mm", "600mm x 500mm x 450mm", "3.0 x 1.8m",
    /// "300mm-400mm x 150mm").
    size: Regex,
    /// Single dimension tokens incl. area powers: "420mm", "3.0m", "10m2".
    dimension: Regex,
    /// Coverage: "(10m2)", "5m3", parenthesized or bare.
    coverage: Regex,
    left_hand: Regex,
    right_hand: Regex,
    left: Regex,
    right: Regex,
    cold: Regex,
    warm: Regex,
    hot: Regex,
    slash: Regex,
    // Residual-word classification.
    paren_temp: Regex,
    dim_range: Regex,
    paren_dim: Regex,
    decimal_number: Regex,
    dim_range_units: Regex,
    product_code: Regex,
    pure_number: Regex,
    structural_token: Regex,
    dim_word: Regex,
    size_start: Regex,
    // Descriptor cleanup.
    star_rating: Regex,
    temp_anywhere: Regex,
    punct_only: Regex,
    punct_runs: Regex,
    whitespace: Regex,
    punct_residue: Regex,
    exclude: FxHashSet<&'static str>,
}

impl AttributeExtractor {
    pub fn new() -> Self {
        let size = format!(
            r"(?i)(?:{op})\s*x\s*(?:{op})(?:\s*x\s*(?:{op}))?",
            op = DIM_OPERAND
        );
        Self {
            size: Regex::new(&size).expect("size regex"),
            dimension: Regex::new(r"(?i)\d+(?:\.\d+)?\s*(?:mm|cm|m)\d?").expect("dimension regex"),
            coverage: Regex::new(r"(?i)\(?\d+(?:\.\d+)?\s*m[23]\)?").expect("coverage regex"),
            left_hand: Regex::new(r"(?i)\bleft\s+hand\b").expect("left-hand regex"),
            right_hand: Regex::new(r"(?i)\bright\s+hand\b").expect("right-hand regex"),
            left: Regex::new(r"(?i)\bleft\b").expect("left regex"),
            right: Regex::new(r"(?i)\bright\b").expect("right regex"),
            cold: Regex::new(r"(?i)\bcold\b").expect("cold regex"),
            warm: Regex::new(r"(?i)\bwarm\b").expect("warm regex"),
            hot: Regex::new(r"(?i)\bhot\b").expect("hot regex"),
            slash: Regex::new(r"\s*/\s*").expect("slash regex"),
            paren_temp: Regex::new(r"(?i)^\((?:cold|warm|hot)\)$").expect("paren-temp regex"),
            dim_range: Regex::new(r"^\d+-\d+$").expect("dim-range regex"),
            paren_dim: Regex::new(r"(?i)^\(\d+(?:\.\d+)?\s*m[23]\)$").expect("paren-dim regex"),
            decimal_number: Regex::new(r"^\d+\.\d+$").expect("decimal regex"),
            dim_range_units: Regex::new(
                r"(?i)^\d+(?:\.\d+)?(?:mm|cm|m)-\d+(?:\.\d+)?(?:mm|cm|m)$",
            )
            .expect("dim-range-units regex"),
            product_code: Regex::new(r"(?i)^[a-z]\d+$").expect("product-code regex"),
            pure_number: Regex::new(r"^\d+$").expect("pure-number regex"),
            structural_token: Regex::new(r"(?i)^(?:mm|cm|m|x|\(|\))$").expect("structural regex"),
            dim_word: Regex::new(r"(?i)^\d+(?:\.\d+)?(?:mm|cm|m)[23]?$").expect("dim-word regex"),
            size_start: Regex::new(r"(?i)^\d+(?:\.\d+)?\s*x\s*\d+").expect("size-start regex"),
            star_rating: Regex::new(r"(?i)\(\d+\s+star\)").expect("star-rating regex"),
            temp_anywhere: Regex::new(r"(?i)\(?(?:cold|warm|hot)\)?").expect("temp regex"),
            punct_only: Regex::new(r"^[\s/&]+$").expect("punct-only regex"),
            punct_runs: Regex::new(r"[/&]+").expect("punct-runs regex"),
            whitespace: Regex::new(r"\s+").expect("whitespace regex"),
            punct_residue: Regex::new(r"^[\s/&,.-]+$").expect("punct-residue regex"),
            exclude: EXCLUDE_WORDS.iter().copied().collect(),
        }
    }

    /// Extract this variant's attributes from its raw title, given the
    /// family's canonical title and optionally the product's specification
    /// group for dimension reconciliation.
    pub fn extract(
        &self,
        title: &str,
        family_title: &str,
        spec: Option<&SpecGroup>,
    ) -> AttributeMap {
        let mut attributes = AttributeMap::new();

        // Multi-dimension sizes take precedence over single dimensions.
        let sizes: Vec<String> = self
            .size
            .find_iter(title)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        if !sizes.is_empty() {
            attributes.insert("sizes".to_string(), AttributeValue::List(sizes.clone()));
        }

        if sizes.is_empty() {
            let dims: Vec<String> = self
                .dimension
                .find_iter(title)
                .map(|m| m.as_str().to_string())
                .collect();
            if !dims.is_empty() {
                self.insert_dimensions(&mut attributes, &dims, spec);
            }
        }

        let coverage: Vec<String> = self
            .coverage
            .find_iter(title)
            .map(|m| m.as_str().to_string())
            .collect();
        if !coverage.is_empty() {
            attributes.insert("coverage".to_string(), AttributeValue::List(coverage));
        }

        if let Some(orientation) = self.orientation(title) {
            attributes.insert(
                "orientation".to_string(),
                AttributeValue::Scalar(orientation.to_string()),
            );
        }

        if let Some(temperature) = self.temperature(title) {
            attributes.insert(
                "temperature".to_string(),
                AttributeValue::Scalar(temperature.to_string()),
            );
        }

        if let Some(descriptors) = self.residual_descriptors(title, family_title) {
            attributes.insert(
                "uniqueDescriptors".to_string(),
                AttributeValue::Scalar(descriptors.clone()),
            );
            // The catalog's color and material vocabularies overlap, so
            // this field does double duty under both names.
            attributes.insert("color".to_string(), AttributeValue::Scalar(descriptors));
        }

        attributes
    }

    /// Key dimension tokens by reconciled spec-attribute name; fall back
    /// to one generic `dimensions` bucket when nothing reconciles.
    fn insert_dimensions(
        &self,
        attributes: &mut AttributeMap,
        dims: &[String],
        spec: Option<&SpecGroup>,
    ) {
        let mut reconciled: Vec<(String, String)> = Vec::new();
        if let Some(spec) = spec {
            for dim in dims {
                if let Some(name) = match_dimension_to_spec(dim, spec) {
                    reconciled.push((name, dim.clone()));
                }
            }
        }

        if reconciled.is_empty() {
            attributes.insert(
                "dimensions".to_string(),
                AttributeValue::List(dims.to_vec()),
            );
        } else {
            for (name, dim) in reconciled {
                let entry = attributes
                    .entry(name)
                    .or_insert_with(|| AttributeValue::List(Vec::new()));
                if let AttributeValue::List(values) = entry {
                    values.push(dim);
                }
            }
        }
    }

    /// "left hand"/"right hand" take precedence over bare "left"/"right";
    /// at most one orientation per title.
    fn orientation(&self, title: &str) -> Option<&'static str> {
        if self.left_hand.is_match(title) {
            Some("Left Hand")
        } else if self.right_hand.is_match(title) {
            Some("Right Hand")
        } else if self.left.is_match(title) {
            Some("Left")
        } else if self.right.is_match(title) {
            Some("Right")
        } else {
            None
        }
    }

    /// First of cold / warm / hot, checked in that priority order.
    fn temperature(&self, title: &str) -> Option<&'static str> {
        if self.cold.is_match(title) {
            Some("Cold")
        } else if self.warm.is_match(title) {
            Some("Warm")
        } else if self.hot.is_match(title) {
            Some("Hot")
        } else {
            None
        }
    }

    /// Words of the raw title that are not part of the family title, not
    /// dimensional/numeric, and not structural noise — the
    /// material/color/finish residue.
    fn residual_descriptors(&self, title: &str, family_title: &str) -> Option<String> {
        let common_words: FxHashSet<String> = family_title
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        // Break color combos apart before splitting so "Grey/Chrome"
        // yields two candidate words.
        let despaced = self.slash.replace_all(title, " ");

        let unique: Vec<&str> = despaced
            .split_whitespace()
            .filter(|word| {
                let lower = word.to_lowercase();
                !common_words.contains(&lower)
                    && !self.pure_number.is_match(word)
                    && !self.structural_token.is_match(word)
                    && !self.dim_word.is_match(word)
                    && !self.size_start.is_match(word)
                    && !self.exclude.contains(lower.as_str())
                    && !self.paren_temp.is_match(word)
                    && !self.dim_range.is_match(word)
                    && !self.paren_dim.is_match(word)
                    && !self.decimal_number.is_match(word)
                    && !self.dim_range_units.is_match(word)
                    && !self.product_code.is_match(word)
            })
            .collect();

        let mut descriptors = unique.join(" ");
        descriptors = self
            .star_rating
            .replace_all(&descriptors, "")
            .trim()
            .to_string();
        descriptors = self
            .temp_anywhere
            .replace_all(&descriptors, "")
            .trim()
            .to_string();
        descriptors = self.punct_only.replace_all(&descriptors, "").into_owned();
        descriptors = self.punct_runs.replace_all(&descriptors, " ").into_owned();
        descriptors = self
            .whitespace
            .replace_all(&descriptors, " ")
            .trim()
            .to_string();

        if descriptors.is_empty() || self.punct_residue.is_match(&descriptors) {
            None
        } else {
            Some(descriptors)
        }
    }
}

impl Default for AttributeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
