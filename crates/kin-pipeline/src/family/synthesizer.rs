//! Family title synthesis.
//!
//! Derives a human-readable canonical title for a cluster by stripping the
//! variable parts of each raw title (sizes, directions, temperatures,
//! colors/materials), then taking the longest contiguous word run common
//! to every stripped title. Unlike the comparison-key normalizer this is
//! meant to leave a readable name, not a bare key.

use regex::Regex;

use crate::vocabulary::Vocabulary;

/// Synthesizes canonical family titles from a cluster's raw titles.
pub struct TitleSynthesizer {
    vocabulary: Vocabulary,
    /// Multi-dimension sizes incl. ranges ("300mm-400mm x 150mm") and
    /// decimals ("3.0 x 1.8m"), units per-operand or trailing.
    multi_dimension: Regex,
    single_dimension: Regex,
    coverage: Regex,
    orphan_x: Regex,
    directional_hand: Regex,
    directional: Regex,
    temperature: Regex,
    star_rating: Regex,
    empty_parens: Regex,
    amp_mid: Regex,
    amp_trailing: Regex,
    amp_leading: Regex,
    and_trailing: Regex,
    and_leading: Regex,
    slash: Regex,
    trailing_ws: Regex,
    whitespace: Regex,
    roman_numeral: Regex,
    frame_for_basin: Regex,
}

const DIM_OPERAND: &str = r"\d+(?:\.\d+)?(?:mm|cm|m)?(?:\s*-\s*\d+(?:\.\d+)?(?:mm|cm|m)?)?";

impl TitleSynthesizer {
    pub fn new() -> Self {
        let multi_dimension = format!(
            r"(?i)(?:{op})\s*x\s*(?:{op})(?:\s*x\s*(?:{op}))?",
            op = DIM_OPERAND
        );
        Self {
            vocabulary: Vocabulary::synthesis(),
            multi_dimension: Regex::new(&multi_dimension).expect("multi-dimension regex"),
            single_dimension: Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:mm|cm|m)\b")
                .expect("single-dimension regex"),
            coverage: Regex::new(r"(?i)\(?\d+(?:\.\d+)?\s*m[23]\)?").expect("coverage regex"),
            orphan_x: Regex::new(r"(?i)\s+x\s+").expect("orphan-x regex"),
            directional_hand: Regex::new(r"(?i)\b(?:left|right)\s+hand\b")
                .expect("directional-hand regex"),
            directional: Regex::new(r"(?i)\b(?:left|right)\b").expect("directional regex"),
            temperature: Regex::new(r"(?i)\(?(?:cold|warm|hot)\)?").expect("temperature regex"),
            star_rating: Regex::new(r"(?i)\(\d+\s+star\)").expect("star-rating regex"),
            empty_parens: Regex::new(r"\(\s*\)").expect("empty-parens regex"),
            amp_mid: Regex::new(r"\s+&\s+").expect("amp-mid regex"),
            amp_trailing: Regex::new(r"\s+&\s*$").expect("amp-trailing regex"),
            amp_leading: Regex::new(r"^\s*&\s+").expect("amp-leading regex"),
            and_trailing: Regex::new(r"(?i)\s+and\s+$").expect("and-trailing regex"),
            and_leading: Regex::new(r"(?i)^\s*and\s+").expect("and-leading regex"),
            slash: Regex::new(r"\s*/\s*").expect("slash regex"),
            trailing_ws: Regex::new(r"\s+$").expect("trailing-ws regex"),
            whitespace: Regex::new(r"\s+").expect("whitespace regex"),
            roman_numeral: Regex::new(r"(?i)^[ivx]+$").expect("roman-numeral regex"),
            frame_for_basin: Regex::new(r"(?i)Frame For Basin").expect("frame-fixup regex"),
        }
    }

    /// Canonical family title for a cluster's raw titles.
    ///
    /// Pure and deterministic for the same input sequence. A single title
    /// is returned unchanged (no family is built from singletons
    /// downstream).
    pub fn synthesize(&self, titles: &[&str]) -> String {
        if titles.is_empty() {
            return String::new();
        }
        if titles.len() == 1 {
            return titles[0].to_string();
        }

        let normalized: Vec<String> = titles.iter().map(|t| self.strip_variants(t)).collect();
        let title_words: Vec<Vec<String>> = normalized
            .iter()
            .map(|t| t.to_lowercase().split_whitespace().map(str::to_string).collect())
            .collect();

        let mut common = longest_common_run(&title_words);
        if common.is_empty() {
            common = common_prefix(&title_words);
        }

        let title = common
            .iter()
            .map(|word| self.capitalize(word))
            .collect::<Vec<_>>()
            .join(" ");

        self.frame_for_basin
            .replace_all(&title, "Basin Frame")
            .into_owned()
    }

    /// Strip the variable parts of one title, leaving the stable words.
    pub fn strip_variants(&self, title: &str) -> String {
        let mut normalized = title.to_string();

        normalized = self.multi_dimension.replace_all(&normalized, "").into_owned();
        normalized = self.single_dimension.replace_all(&normalized, "").into_owned();
        normalized = self.coverage.replace_all(&normalized, "").into_owned();

        // Standalone "x" left behind between removed dimensions.
        normalized = self.orphan_x.replace_all(&normalized, " ").into_owned();

        // "left hand"/"right hand" first so the bare pass cannot orphan
        // the word "hand".
        normalized = self.directional_hand.replace_all(&normalized, "").into_owned();
        normalized = self.directional.replace_all(&normalized, "").into_owned();

        normalized = self.temperature.replace_all(&normalized, "").into_owned();
        normalized = self.star_rating.replace_all(&normalized, "").into_owned();
        normalized = self.empty_parens.replace_all(&normalized, "").into_owned();

        normalized = self.vocabulary.strip(&normalized);

        // Conjunctions and slashes orphaned by the removals above.
        normalized = self.amp_mid.replace_all(&normalized, " ").into_owned();
        normalized = self.amp_trailing.replace_all(&normalized, "").into_owned();
        normalized = self.amp_leading.replace_all(&normalized, "").into_owned();
        normalized = self.and_trailing.replace_all(&normalized, " ").into_owned();
        normalized = self.and_leading.replace_all(&normalized, " ").into_owned();
        normalized = self.slash.replace_all(&normalized, " ").into_owned();
        normalized = self.trailing_ws.replace_all(&normalized, "").into_owned();

        self.whitespace
            .replace_all(&normalized, " ")
            .trim()
            .to_string()
    }

    /// Capitalize a (lowercased) word, upper-casing Roman numerals and
    /// preserving known all-caps brand names.
    fn capitalize(&self, word: &str) -> String {
        if self.roman_numeral.is_match(word) {
            return word.to_uppercase();
        }
        if word.eq_ignore_ascii_case("axa") {
            return "AXA".to_string();
        }
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl Default for TitleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The longest contiguous word run present (case-insensitively; inputs are
/// already lowercased) in every title's token list.
///
/// Scans all start positions and lengths of the first title's tokens and
/// tests containment in the rest; ties break first-found-longest. This is
/// O(len³ × titles), acceptable because catalog titles are short.
fn longest_common_run(title_words: &[Vec<String>]) -> Vec<String> {
    let first = &title_words[0];
    let mut best: Vec<String> = Vec::new();

    for i in 0..first.len() {
        for len in (1..=first.len() - i).rev() {
            if len <= best.len() {
                break;
            }
            let candidate = &first[i..i + len];
            let appears_in_all = title_words[1..]
                .iter()
                .all(|words| words.windows(len).any(|w| w == candidate));
            if appears_in_all {
                best = candidate.to_vec();
            }
        }
    }

    best
}

/// Shared token prefix across all titles, minimum one token of the first
/// title. Defense for clusters with no common run at all.
fn common_prefix(title_words: &[Vec<String>]) -> Vec<String> {
    let first = &title_words[0];
    let mut prefix_len = 0;
    for (i, word) in first.iter().enumerate() {
        if title_words[1..]
            .iter()
            .all(|words| words.get(i) == Some(word))
        {
            prefix_len = i + 1;
        } else {
            break;
        }
    }
    let take = prefix_len.max(1).min(first.len());
    first[..take].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> TitleSynthesizer {
        TitleSynthesizer::new()
    }

    #[test]
    fn size_variants_synthesize_shared_name() {
        let title = synthesizer().synthesize(&[
            "Mizu Drift 600mm Grab Rail Polished Stainless Steel",
            "Mizu Drift 700mm Grab Rail Polished Stainless Steel",
        ]);
        assert_eq!(title, "Mizu Drift Grab Rail");
    }

    #[test]
    fn material_variants_synthesize_shared_name() {
        let title = synthesizer().synthesize(&[
            "Geberit Sigma80 Sensor Plate Black Glass",
            "Geberit Sigma80 Sensor Plate Reflective Glass",
        ]);
        // "glass" survives stripping in both titles, but "reflective"
        // interrupts the second title's run, so the common run stops at
        // "Plate".
        assert_eq!(title, "Geberit Sigma80 Sensor Plate");
    }

    #[test]
    fn single_title_returned_unchanged() {
        let raw = "Mizu Drift 600mm Grab Rail Polished Stainless Steel";
        assert_eq!(synthesizer().synthesize(&[raw]), raw);
    }

    #[test]
    fn common_run_is_contiguous_in_every_stripped_title() {
        let s = synthesizer();
        let titles = [
            "Posh Solus Bath Mixer Chrome",
            "Posh Solus Bath Mixer Matte Black",
        ];
        let result = s.synthesize(&titles);
        for title in titles {
            let stripped = s.strip_variants(title).to_lowercase();
            assert!(stripped.contains(&result.to_lowercase()));
        }
    }

    #[test]
    fn prefix_fallback_when_no_common_run() {
        // No shared word at all — defend with the first token.
        let title = synthesizer().synthesize(&["Foo Bar", "Baz Qux"]);
        assert_eq!(title, "Foo");
    }

    #[test]
    fn roman_numerals_upper_cased() {
        let title = synthesizer().synthesize(&[
            "Caroma Profile II Toilet Suite 600mm",
            "Caroma Profile II Toilet Suite 750mm",
        ]);
        assert_eq!(title, "Caroma Profile II Toilet Suite");
    }

    #[test]
    fn axa_brand_casing_preserved() {
        let title = synthesizer().synthesize(&["AXA Uno Basin 500mm", "AXA Uno Basin 600mm"]);
        assert_eq!(title, "AXA Uno Basin");
    }

    #[test]
    fn frame_for_basin_reordered() {
        let title = synthesizer().synthesize(&[
            "Seima Frame For Basin 500mm",
            "Seima Frame For Basin 600mm",
        ]);
        assert_eq!(title, "Seima Basin Frame");
    }

    #[test]
    fn directional_and_temperature_words_stripped() {
        let title = synthesizer().synthesize(&[
            "Posh Bristol Vanity Left Hand Bowl White",
            "Posh Bristol Vanity Right Hand Bowl White",
        ]);
        assert_eq!(title, "Posh Bristol Vanity Bowl");
    }

    #[test]
    fn range_sizes_stripped() {
        let title = synthesizer().synthesize(&[
            "Avail Option Grab Rail 300mm-400mm x 150mm Chrome",
            "Avail Option Grab Rail 600mm-800mm x 150mm Chrome",
        ]);
        assert_eq!(title, "Avail Option Grab Rail");
    }

    #[test]
    fn orphaned_conjunctions_cleaned() {
        let s = synthesizer();
        let stripped = s.strip_variants("Soap Dish & Chrome Holder");
        // "& " survives mid-phrase only between surviving words.
        assert_eq!(stripped, "Soap Dish Holder");
    }

    #[test]
    fn deterministic_for_same_input() {
        let s = synthesizer();
        let titles = ["Base Acrylic Inset Bath 1520mm", "Base Acrylic Inset Bath 1650mm"];
        assert_eq!(s.synthesize(&titles), s.synthesize(&titles));
    }
}
