//! Title normalization — raw title → comparison key.
//!
//! The comparison key is what clusters products into candidate families:
//! two titles that differ only in size, material, finish, color, or
//! temperature reduce to the same key.

use regex::Regex;

use crate::vocabulary::Vocabulary;

/// Reduces a raw product title to its base-product comparison key.
///
/// The step order is load-bearing: whitespace is collapsed *before*
/// vocabulary stripping so multi-word phrases match even when the source
/// title has irregular spacing ("Polished Stainless    Steel"), and word
/// spelling is canonicalized before anything compares words.
pub struct TitleNormalizer {
    vocabulary: Vocabulary,
    /// `N x N [x N] [unit]`, e.g. "1200 x 900mm", "1200x900x600".
    multi_dimension: Regex,
    /// `N unit` with an optional power digit: "10mm", "10m", "10m2", "10m3".
    single_dimension: Regex,
    /// Parenthesized area/volume: "(10m2)", "(5m3)", "(10m)".
    paren_area: Regex,
    /// Color combinations of the shape `word/word`, optionally spaced.
    color_combo: Regex,
    whitespace: Regex,
    underfloor: Regex,
    under_floor: Regex,
}

impl TitleNormalizer {
    /// Build a normalizer over the standard comparison vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::comparison())
    }

    /// Build a normalizer over a specific vocabulary revision.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            multi_dimension: Regex::new(r"(?i)\d+\s*x\s*\d+(?:\s*x\s*\d+)?\s*(?:mm|cm|m)?")
                .expect("multi-dimension regex"),
            single_dimension: Regex::new(r"(?i)\d+\s*(?:mm|cm|m)\d?")
                .expect("single-dimension regex"),
            paren_area: Regex::new(r"(?i)\(\d+m\d?\)").expect("paren-area regex"),
            color_combo: Regex::new(r"(?i)\b\w+\s*/\s*\w+\b").expect("color-combo regex"),
            whitespace: Regex::new(r"\s+").expect("whitespace regex"),
            underfloor: Regex::new(r"(?i)\bunderfloor\b").expect("underfloor regex"),
            under_floor: Regex::new(r"(?i)\bunder\s+floor\b").expect("under-floor regex"),
        }
    }

    /// Normalize a raw title to its comparison key.
    ///
    /// A title consisting entirely of size and vocabulary tokens reduces to
    /// the empty string; that is a valid (degenerate) key, and such
    /// products cluster together within their brand.
    pub fn normalize(&self, title: &str) -> String {
        let mut normalized = title.to_lowercase().trim().to_string();

        // Size and dimension expressions, including m2/m3 area notation.
        normalized = self.multi_dimension.replace_all(&normalized, "").into_owned();
        normalized = self.single_dimension.replace_all(&normalized, "").into_owned();
        normalized = self.paren_area.replace_all(&normalized, "").into_owned();

        // Collapse whitespace before vocabulary matching so multi-word
        // phrases with irregular spacing still match.
        normalized = self
            .whitespace
            .replace_all(&normalized, " ")
            .trim()
            .to_string();

        // Canonicalize known spelling variants of the same word.
        normalized = self
            .underfloor
            .replace_all(&normalized, "under floor")
            .into_owned();
        normalized = self
            .under_floor
            .replace_all(&normalized, "underfloor")
            .into_owned();

        // Color combinations like "Grey/Chrome", "White / Chrome".
        normalized = self.color_combo.replace_all(&normalized, "").into_owned();

        // Vocabulary terms, longest phrases first.
        normalized = self.vocabulary.strip(&normalized);

        self.whitespace
            .replace_all(&normalized, " ")
            .trim()
            .to_string()
    }
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
