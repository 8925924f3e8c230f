//! Lexicon store.
//!
//! All lookup tables used by the rules live in one immutable [`Lexicon`].
//! The default lexicon is built once per process from the tables in
//! `lexicon/tables.rs` and shared through an `Arc`; callers that need extra
//! entries go through [`LexiconBuilder`], which starts from the defaults and
//! freezes into a new `Lexicon`.
//!
//! Turkish name tables are kept in two forms:
//!
//! - a **diacritic** set, keyed with Turkish casing (`"ışık"`), and
//! - an **ASCII** set, keyed with the transliterated spelling (`"isik"`).
//!
//! Strict lookups only consult the diacritic set; relaxed lookups accept
//! either, which is how anglicized spellings (`Ozturk`) still match.

#[path = "lexicon/tables.rs"]
mod tables;

use crate::normalize::{ascii_key, lookup_key, turkish_key};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Version tag of the built-in tables. Results are reproducible for a given
/// input and lexicon version.
pub const LEXICON_VERSION: &str = "2026.10";

pub(crate) static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::default()));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    #[error("first name '{0}' is listed as both strong and ambiguous")]
    OverlappingFirstNames(String),
    #[error("spelling variant '{0}' is also a strong Turkish first name")]
    VariantIsStrongFirstName(String),
    #[error("empty entry in {0}")]
    EmptyEntry(&'static str),
    #[error("whitelisted surname '{0}' is also a region marker")]
    SurnameIsRegionMarker(String),
    #[error("whitelisted surname '{0}' ends in the non-Turkish suffix '{1}'")]
    SurnameHasForeignMorphology(String, String),
}

/// A Turkish name table stored in diacritic and ASCII form.
#[derive(Debug, Clone, Default)]
struct DualSet {
    diacritic: HashSet<String>,
    ascii: HashSet<String>,
}

impl DualSet {
    fn insert(&mut self, entry: &str) {
        self.diacritic.insert(turkish_key(entry));
        self.ascii.insert(ascii_key(entry));
    }

    fn contains(&self, turkish: &str, ascii: &str, strict: bool) -> bool {
        self.diacritic.contains(turkish) || (!strict && self.ascii.contains(ascii))
    }

    fn len(&self) -> usize {
        self.diacritic.len()
    }
}

/// A non-Turkish surname ending. Guarded suffixes also end genuine Turkish
/// surnames (`Şen`, `Sönmez`) and only count without Turkish corroboration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologySuffix {
    pub suffix: String,
    pub guarded: bool,
}

/// Immutable lookup tables shared by every rule.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    surname_whitelist: DualSet,
    surname_suffixes: Vec<String>,
    strong_first_names: DualSet,
    ambiguous_first_names: HashSet<String>,
    morphology: Vec<MorphologySuffix>,
    region_markers: HashSet<String>,
    region_prefixes: Vec<String>,
    spelling_variants: HashMap<String, String>,
    corporate_markers: HashSet<String>,
    western_first_names: HashSet<String>,
    western_surnames: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        LexiconBuilder::new().freeze()
    }
}

impl Lexicon {
    /// Start a builder seeded with the built-in tables.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// The shared default lexicon.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_whitelisted_surname(&self, turkish: &str, ascii: &str, strict: bool) -> bool {
        self.surname_whitelist.contains(turkish, ascii, strict)
    }

    /// Longest Turkish surname suffix that `ascii` ends with.
    pub fn surname_suffix(&self, ascii: &str) -> Option<&str> {
        self.surname_suffixes.iter().filter(|s| ascii.ends_with(s.as_str())).max_by_key(|s| s.len()).map(String::as_str)
    }

    pub fn is_strong_first_name(&self, turkish: &str, ascii: &str, strict: bool) -> bool {
        self.strong_first_names.contains(turkish, ascii, strict)
    }

    pub fn is_ambiguous_first_name(&self, folded: &str, ascii: &str) -> bool {
        self.ambiguous_first_names.contains(folded) || self.ambiguous_first_names.contains(ascii)
    }

    /// Longest non-Turkish morphology suffix that `ascii` ends with.
    pub fn morphology_suffix(&self, ascii: &str) -> Option<&MorphologySuffix> {
        self.morphology.iter().filter(|m| ascii.ends_with(m.suffix.as_str())).max_by_key(|m| m.suffix.len())
    }

    pub fn is_region_marker(&self, folded: &str) -> bool {
        self.region_markers.contains(folded)
    }

    /// Prefix particle (`al-`) that the folded word starts with, if any.
    pub fn region_prefix(&self, folded_word: &str) -> Option<&str> {
        self.region_prefixes
            .iter()
            .find(|p| folded_word.len() > p.len() && folded_word.starts_with(p.as_str()))
            .map(String::as_str)
    }

    /// Turkish spelling required in place of the non-Turkish `folded` spelling.
    pub fn turkish_spelling(&self, folded: &str) -> Option<&str> {
        self.spelling_variants.get(folded).map(String::as_str)
    }

    pub fn is_corporate_marker(&self, ascii: &str) -> bool {
        self.corporate_markers.contains(ascii)
    }

    pub fn is_western_first_name(&self, folded: &str, ascii: &str) -> bool {
        self.western_first_names.contains(folded) || self.western_first_names.contains(ascii)
    }

    pub fn is_western_surname(&self, folded: &str, ascii: &str) -> bool {
        self.western_surnames.contains(folded) || self.western_surnames.contains(ascii)
    }

    /// Whitelisted surnames, diacritic form.
    pub fn whitelisted_surnames(&self) -> impl Iterator<Item = &str> {
        self.surname_whitelist.diacritic.iter().map(String::as_str)
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            surnames: self.surname_whitelist.len(),
            surname_suffixes: self.surname_suffixes.len(),
            strong_first_names: self.strong_first_names.len(),
            ambiguous_first_names: self.ambiguous_first_names.len(),
            morphology_suffixes: self.morphology.len(),
            region_markers: self.region_markers.len() + self.region_prefixes.len(),
            spelling_variants: self.spelling_variants.len(),
        }
    }
}

/// Table sizes, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconStats {
    pub surnames: usize,
    pub surname_suffixes: usize,
    pub strong_first_names: usize,
    pub ambiguous_first_names: usize,
    pub morphology_suffixes: usize,
    pub region_markers: usize,
    pub spelling_variants: usize,
}

/// Collects table entries before freezing them into a [`Lexicon`].
///
/// # Example
/// ```
/// use turkname::Lexicon;
///
/// let lexicon = Lexicon::builder()
///     .version("custom-1")
///     .surnames(["Karakuş"])
///     .build()
///     .unwrap();
/// assert!(lexicon.is_whitelisted_surname("karakuş", "karakus", true));
/// assert_eq!(lexicon.version(), "custom-1");
/// ```
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    version: String,
    surnames: Vec<String>,
    surname_suffixes: Vec<String>,
    strong_first_names: Vec<String>,
    ambiguous_first_names: Vec<String>,
    morphology: Vec<(String, bool)>,
    region_markers: Vec<String>,
    spelling_variants: Vec<(String, String)>,
}

fn owned(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

impl Default for LexiconBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconBuilder {
    pub fn new() -> Self {
        LexiconBuilder {
            version: LEXICON_VERSION.to_string(),
            surnames: owned(tables::SURNAME_WHITELIST),
            surname_suffixes: owned(tables::SURNAME_SUFFIXES),
            strong_first_names: owned(tables::STRONG_FIRST_NAMES),
            ambiguous_first_names: owned(tables::AMBIGUOUS_FIRST_NAMES),
            morphology: tables::NON_TURKISH_MORPHOLOGY.iter().map(|(s, g)| (s.to_string(), *g)).collect(),
            region_markers: owned(tables::REGION_MARKERS),
            spelling_variants: tables::SPELLING_VARIANTS.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn surnames<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surnames.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn surname_suffixes<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.surname_suffixes.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn strong_first_names<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strong_first_names.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn ambiguous_first_names<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ambiguous_first_names.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn morphology_suffix(mut self, suffix: impl Into<String>, guarded: bool) -> Self {
        self.morphology.push((suffix.into(), guarded));
        self
    }

    /// Add a region marker; entries ending in `-` are prefix particles.
    pub fn region_markers<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.region_markers.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn spelling_variant(mut self, foreign: impl Into<String>, turkish: impl Into<String>) -> Self {
        self.spelling_variants.push((foreign.into(), turkish.into()));
        self
    }

    /// Validate the collected entries and freeze them.
    pub fn build(self) -> Result<Lexicon, LexiconError> {
        let checks: [(&'static str, &[String]); 5] = [
            ("surnames", &self.surnames),
            ("surname suffixes", &self.surname_suffixes),
            ("strong first names", &self.strong_first_names),
            ("ambiguous first names", &self.ambiguous_first_names),
            ("region markers", &self.region_markers),
        ];
        for (table, entries) in checks {
            if entries.iter().any(|e| lookup_key(e).is_empty()) {
                return Err(LexiconError::EmptyEntry(table));
            }
        }
        if self.morphology.iter().any(|(s, _)| ascii_key(s).is_empty()) {
            return Err(LexiconError::EmptyEntry("morphology suffixes"));
        }

        let surname_keys: Vec<(String, String)> = self.surnames.iter().map(|s| (lookup_key(s), ascii_key(s))).collect();
        let lexicon = self.freeze();

        // Whitelisted surnames must survive the veto rules.
        for (folded, ascii) in &surname_keys {
            if lexicon.is_region_marker(folded) {
                return Err(LexiconError::SurnameIsRegionMarker(folded.clone()));
            }
            if let Some(morph) = lexicon.morphology_suffix(ascii) {
                if !morph.guarded && ascii.chars().count() > morph.suffix.chars().count() {
                    return Err(LexiconError::SurnameHasForeignMorphology(folded.clone(), morph.suffix.clone()));
                }
            }
        }

        let mut overlap: Vec<&String> = lexicon
            .ambiguous_first_names
            .iter()
            .filter(|name| lexicon.strong_first_names.ascii.contains(*name))
            .collect();
        overlap.sort();
        if let Some(name) = overlap.first() {
            return Err(LexiconError::OverlappingFirstNames(name.to_string()));
        }

        let mut variants: Vec<&String> = lexicon
            .spelling_variants
            .keys()
            .filter(|key| lexicon.strong_first_names.contains(key, &ascii_key(key), false))
            .collect();
        variants.sort();
        if let Some(key) = variants.first() {
            return Err(LexiconError::VariantIsStrongFirstName(key.to_string()));
        }

        Ok(lexicon)
    }

    fn freeze(self) -> Lexicon {
        let mut surname_whitelist = DualSet::default();
        for entry in &self.surnames {
            surname_whitelist.insert(entry);
        }

        let mut strong_first_names = DualSet::default();
        for entry in &self.strong_first_names {
            strong_first_names.insert(entry);
        }

        let mut ambiguous_first_names = HashSet::new();
        for entry in &self.ambiguous_first_names {
            ambiguous_first_names.insert(lookup_key(entry));
            ambiguous_first_names.insert(ascii_key(entry));
        }

        let mut surname_suffixes: Vec<String> = self.surname_suffixes.iter().map(|s| ascii_key(s)).collect();
        surname_suffixes.sort();
        surname_suffixes.dedup();

        let mut morphology: Vec<MorphologySuffix> =
            self.morphology.iter().map(|(s, guarded)| MorphologySuffix { suffix: ascii_key(s), guarded: *guarded }).collect();
        morphology.sort_by(|a, b| a.suffix.cmp(&b.suffix));
        morphology.dedup_by(|a, b| a.suffix == b.suffix);

        let mut region_markers = HashSet::new();
        let mut region_prefixes = Vec::new();
        for entry in &self.region_markers {
            if entry.ends_with('-') {
                region_prefixes.push(fold_prefix(entry));
            } else {
                region_markers.insert(lookup_key(entry));
            }
        }
        for prefix in tables::REGION_PREFIXES {
            region_prefixes.push(fold_prefix(prefix));
        }
        region_prefixes.sort();
        region_prefixes.dedup();

        let spelling_variants = self.spelling_variants.iter().map(|(from, to)| (lookup_key(from), turkish_key(to))).collect();

        Lexicon {
            version: self.version,
            surname_whitelist,
            surname_suffixes,
            strong_first_names,
            ambiguous_first_names,
            morphology,
            region_markers,
            region_prefixes,
            spelling_variants,
            corporate_markers: tables::CORPORATE_MARKERS.iter().map(|s| s.to_string()).collect(),
            western_first_names: both_forms(tables::WESTERN_FIRST_NAMES),
            western_surnames: both_forms(tables::WESTERN_SURNAMES),
        }
    }
}

fn fold_prefix(entry: &str) -> String {
    crate::normalize::fold_case(entry.trim())
}

fn both_forms(entries: &[&str]) -> HashSet<String> {
    entries.iter().flat_map(|e| [lookup_key(e), ascii_key(e)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_pass_validation() {
        let lexicon = Lexicon::builder().build().unwrap();
        assert_eq!(lexicon.version(), LEXICON_VERSION);
        assert_eq!(lexicon.stats(), Lexicon::default().stats());
    }

    #[test]
    fn whitelist_matches_both_forms() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_whitelisted_surname("yılmaz", "yilmaz", false));
        assert!(lexicon.is_whitelisted_surname("yilmaz", "yilmaz", false));
        assert!(lexicon.is_whitelisted_surname("yılmaz", "yilmaz", true));
        assert!(!lexicon.is_whitelisted_surname("yilmaz", "yilmaz", true));
        assert!(lexicon.is_whitelisted_surname("ışık", "isik", true));
    }

    #[test]
    fn suffix_lookup_prefers_longest_match() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.surname_suffix("karaoglu"), Some("oglu"));
        assert_eq!(lexicon.surname_suffix("kaya"), Some("kaya"));
        assert_eq!(lexicon.surname_suffix("ozturk"), Some("turk"));
        assert_eq!(lexicon.surname_suffix("yilmaz"), None);

        assert_eq!(lexicon.morphology_suffix("ivanova").map(|m| m.suffix.as_str()), Some("ova"));
        assert_eq!(lexicon.morphology_suffix("hansen").map(|m| m.guarded), Some(true));
        assert_eq!(lexicon.morphology_suffix("sahin"), None);
    }

    #[test]
    fn region_prefixes_need_a_stem() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.region_prefix("al-rashid"), Some("al-"));
        assert_eq!(lexicon.region_prefix("al-"), None);
        assert_eq!(lexicon.region_prefix("alper"), None);
        assert!(lexicon.is_region_marker("khan"));
        assert!(!lexicon.is_region_marker("abdullah"));
    }

    #[test]
    fn spelling_variants_point_at_turkish_spelling() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.turkish_spelling("mohammed"), Some("mehmet"));
        assert_eq!(lexicon.turkish_spelling("omar"), Some("ömer"));
        assert_eq!(lexicon.turkish_spelling("mehmet"), None);
    }

    #[test]
    fn builder_rejects_overlapping_first_names() {
        let err = Lexicon::builder().ambiguous_first_names(["Mehmet"]).build().unwrap_err();
        assert_eq!(err, LexiconError::OverlappingFirstNames("mehmet".to_string()));

        let err = Lexicon::builder().spelling_variant("Burak", "burak").build().unwrap_err();
        assert_eq!(err, LexiconError::VariantIsStrongFirstName("burak".to_string()));

        let err = Lexicon::builder().surnames(["  "]).build().unwrap_err();
        assert_eq!(err, LexiconError::EmptyEntry("surnames"));
    }

    #[test]
    fn builder_rejects_surnames_the_vetoes_would_catch() {
        let err = Lexicon::builder().surnames(["Pehlivanov"]).build().unwrap_err();
        assert_eq!(err, LexiconError::SurnameHasForeignMorphology("pehlivanov".to_string(), "ov".to_string()));

        let err = Lexicon::builder().surnames(["Khan"]).build().unwrap_err();
        assert_eq!(err, LexiconError::SurnameIsRegionMarker("khan".to_string()));

        let err = Lexicon::builder().morphology_suffix("can", false).build().unwrap_err();
        assert!(matches!(err, LexiconError::SurnameHasForeignMorphology(_, ref suffix) if suffix == "can"));

        // Guarded suffixes are skipped for whitelisted surnames at run time.
        assert!(Lexicon::builder().surnames(["Karasen"]).build().is_ok());
    }

    #[test]
    fn builder_extends_default_tables() {
        let lexicon =
            Lexicon::builder().region_markers(["bte-", "Mirza"]).morphology_suffix("ini", false).build().unwrap();
        assert!(lexicon.is_region_marker("mirza"));
        assert_eq!(lexicon.region_prefix("bte-ali"), Some("bte-"));
        assert!(lexicon.morphology_suffix("tortellini").is_some());
        assert!(lexicon.is_whitelisted_surname("kaya", "kaya", true));
    }
}
