//! Vocabulary tables — the ordered material / finish / color / temperature
//! term lists stripped during normalization.
//!
//! Each table is a named, immutable configuration built once. Entries are
//! held longest-first so multi-word phrases ("brushed stainless steel")
//! strip before their single-word substrings ("steel") can partially match.

use regex::Regex;

/// What a vocabulary phrase describes. The tag does not change matching
/// behavior; it documents why the phrase is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabCategory {
    Material,
    Finish,
    Color,
    Temperature,
}

/// One phrase in a vocabulary table.
#[derive(Debug, Clone)]
pub struct VocabEntry {
    pub phrase: &'static str,
    pub category: VocabCategory,
}

/// An immutable, ordered vocabulary with whole-word regexes compiled at
/// construction.
pub struct Vocabulary {
    name: &'static str,
    entries: Vec<(VocabEntry, Regex)>,
}

impl Vocabulary {
    /// Build a named vocabulary from tagged phrases. Entries are sorted
    /// longest-first (stable for equal lengths) and each is compiled to a
    /// case-insensitive whole-word regex.
    fn from_entries(name: &'static str, phrases: &[(&'static str, VocabCategory)]) -> Self {
        let mut tagged: Vec<VocabEntry> = phrases
            .iter()
            .map(|&(phrase, category)| VocabEntry { phrase, category })
            .collect();
        tagged.sort_by_key(|e| std::cmp::Reverse(e.phrase.len()));

        let entries = tagged
            .into_iter()
            .map(|entry| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(entry.phrase));
                // Escaped literals always compile.
                let regex = Regex::new(&pattern).expect("vocabulary phrase regex");
                (entry, regex)
            })
            .collect();

        Self { name, entries }
    }

    /// The comparison-key vocabulary: the full term list used to reduce a
    /// title to its base-product key. This is the most feature-complete
    /// revision of the catalog's term list; earlier, smaller revisions are
    /// not kept.
    pub fn comparison() -> Self {
        use VocabCategory::*;
        Self::from_entries(
            "comparison",
            &[
                // Complex finishes and materials (multi-word combinations)
                ("brushed platinum gold", Finish),
                ("brushed pure gold", Finish),
                ("brushed smoked gunmetal", Finish),
                ("matte opium black", Finish),
                ("brushed oyster nickel", Finish),
                ("polished stainless steel", Finish),
                ("brushed stainless steel", Finish),
                // Standard finishes and materials
                ("stainless steel", Material),
                ("brushed nickel", Finish),
                ("brushed brass", Finish),
                ("brushed bronze", Finish),
                ("brushed gunmetal", Finish),
                ("brushed chrome", Finish),
                ("brushed gold", Finish),
                ("polished brass", Finish),
                ("polished chrome", Finish),
                ("satin chrome", Finish),
                ("matte black", Finish),
                ("matte white", Finish),
                ("gloss white", Finish),
                ("gloss black", Finish),
                // Glass types
                ("reflective glass", Material),
                ("black glass", Material),
                ("white glass", Material),
                ("clear glass", Material),
                ("frosted glass", Material),
                ("smoked glass", Material),
                ("mirror glass", Material),
                ("tinted glass", Material),
                ("glass", Material),
                // Wood types
                ("oak", Material),
                ("walnut", Material),
                ("bamboo", Material),
                ("timber", Material),
                ("wood", Material),
                // Base materials (several double as colors)
                ("gunmetal", Material),
                ("chrome", Material),
                ("black", Color),
                ("white", Color),
                ("brass", Material),
                ("bronze", Material),
                ("nickel", Material),
                ("gold", Material),
                ("silver", Material),
                ("copper", Material),
                ("titanium", Material),
                ("grey", Color),
                ("gray", Color),
                // Additional finishes
                ("matt black", Finish),
                ("matt white", Finish),
                ("matte", Finish),
                ("gloss", Finish),
                ("satin", Finish),
                ("polished", Finish),
                ("brushed", Finish),
                ("bright", Finish),
                ("shiny", Finish),
                ("reflective", Finish),
                ("textured", Finish),
                ("smooth", Finish),
                // Temperature variations
                ("cold", Temperature),
                ("warm", Temperature),
                ("hot", Temperature),
                ("cool", Temperature),
                ("cold water", Temperature),
                ("warm water", Temperature),
                ("hot water", Temperature),
                // Color names (including descriptive colors)
                ("tangerine orange", Color),
                ("opium black", Color),
                ("platinum gold", Color),
                ("pure gold", Color),
                ("smoked gunmetal", Color),
                ("oyster nickel", Color),
                ("tangerine", Color),
                ("platinum", Color),
                ("orange", Color),
                ("green", Color),
                ("fume", Color),
                ("blue", Color),
                ("red", Color),
                ("yellow", Color),
                ("pink", Color),
                ("purple", Color),
                ("beige", Color),
                ("navy", Color),
                ("teal", Color),
                ("mint", Color),
                ("sage", Color),
                ("olive", Color),
                ("cream", Color),
                ("ivory", Color),
                ("pearl", Color),
                ("opium", Color),
                ("oyster", Color),
                ("smoked", Color),
            ],
        )
    }

    /// The synthesis vocabulary: the smaller single-word term list stripped
    /// while deriving a readable family title. Unlike `comparison()` it
    /// keeps base nouns like "steel" separate so structural words survive.
    pub fn synthesis() -> Self {
        use VocabCategory::*;
        Self::from_entries(
            "synthesis",
            &[
                ("chrome", Material),
                ("brass", Material),
                ("bronze", Material),
                ("nickel", Material),
                ("gold", Material),
                ("silver", Material),
                ("copper", Material),
                ("black", Color),
                ("white", Color),
                ("grey", Color),
                ("gray", Color),
                ("green", Color),
                ("blue", Color),
                ("red", Color),
                ("brown", Color),
                ("matte", Finish),
                ("gloss", Finish),
                ("satin", Finish),
                ("polished", Finish),
                ("brushed", Finish),
                ("bright", Finish),
                ("shiny", Finish),
                ("platinum", Color),
                ("gunmetal", Material),
                ("oyster", Color),
                ("smoked", Color),
                ("smoke", Color),
                ("pearl", Color),
                ("oak", Material),
                ("elm", Material),
                ("walnut", Material),
                ("bamboo", Material),
                ("timber", Material),
                ("wood", Material),
                ("acrylic", Material),
                ("ceramic", Material),
                ("porcelain", Material),
                ("steel", Material),
                ("stainless", Material),
            ],
        )
    }

    /// Strip every vocabulary phrase from `text` as a whole-word,
    /// case-insensitive match, longest phrases first. Leftover spacing is
    /// the caller's concern.
    pub fn strip(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (_, regex) in &self.entries {
            result = regex.replace_all(&result, "").into_owned();
        }
        result
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in matching order (longest first).
    pub fn iter(&self) -> impl Iterator<Item = &VocabEntry> {
        self.entries.iter().map(|(entry, _)| entry)
    }
}
