//! Name normalization.
//!
//! Every raw input string is turned into a [`NameRecord`] before any rule
//! looks at it. The record keeps two parallel views of the name:
//!
//! - the **diacritic form**: NFC-composed, trimmed, whitespace-collapsed,
//!   with Turkish letters (`ç ğ ı İ ö ş ü`) left intact, and
//! - the **ASCII form**: the same text with Turkish letters replaced by
//!   their nearest Latin letter through a fixed one-to-one table.
//!
//! Case is preserved in both views. Rules compare through lookup keys
//! ([`lookup_key`], [`turkish_key`], [`ascii_key`]) which fold case and strip
//! punctuation around a token.
//!
//! ```text
//! "  Mehmet   Yılmaz-Kaya "
//!      │ nfc + trim + collapse
//!      ▼
//! diacritic_form: "Mehmet Yılmaz-Kaya"
//! ascii_form:     "Mehmet Yilmaz-Kaya"
//! tokens:         ["Mehmet", "Yılmaz", "Kaya"]
//! ```

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Turkish letters and their Latin replacements.
///
/// The circumflex letters are part of Turkish orthography (`Kâmil`,
/// `Hâkan`) but are not counted as Turkish diacritics for scoring.
const TRANSLITERATION: &[(char, char)] = &[
    ('ç', 'c'),
    ('Ç', 'C'),
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ı', 'i'),
    ('İ', 'I'),
    ('ö', 'o'),
    ('Ö', 'O'),
    ('ş', 's'),
    ('Ş', 'S'),
    ('ü', 'u'),
    ('Ü', 'U'),
    ('â', 'a'),
    ('Â', 'A'),
    ('î', 'i'),
    ('Î', 'I'),
    ('û', 'u'),
    ('Û', 'U'),
];

/// Returned by [`normalize`] when the input has no tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("name is empty after trimming")]
pub struct EmptyNameError;

/// Immutable, normalized view of one input name.
///
/// `tokens` is never empty: [`normalize`] refuses to build a record without
/// at least one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    raw: String,
    diacritic_form: String,
    ascii_form: String,
    tokens: Vec<String>,
    ascii_tokens: Vec<String>,
}

impl NameRecord {
    /// The original input, untouched.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn diacritic_form(&self) -> &str {
        &self.diacritic_form
    }

    pub fn ascii_form(&self) -> &str {
        &self.ascii_form
    }

    /// Tokens in diacritic form, split on whitespace and hyphens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens in ASCII form, aligned with [`NameRecord::tokens`].
    pub fn ascii_tokens(&self) -> &[String] {
        &self.ascii_tokens
    }

    pub fn first_name(&self) -> &str {
        &self.tokens[0]
    }

    pub fn last_name(&self) -> &str {
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn ascii_first_name(&self) -> &str {
        &self.ascii_tokens[0]
    }

    pub fn ascii_last_name(&self) -> &str {
        &self.ascii_tokens[self.ascii_tokens.len() - 1]
    }

    /// Tokens between the first and the last one.
    pub fn middle_names(&self) -> &[String] {
        if self.tokens.len() <= 2 { &[] } else { &self.tokens[1..self.tokens.len() - 1] }
    }

    /// Whitespace-separated words of the diacritic form (hyphens kept).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.diacritic_form.split(' ')
    }
}

/// Normalize `raw` into a [`NameRecord`].
///
/// # Example
/// ```
/// use turkname::normalize;
///
/// let record = normalize("  Ayşe   Öztürk-Kaya ").unwrap();
/// assert_eq!(record.diacritic_form(), "Ayşe Öztürk-Kaya");
/// assert_eq!(record.ascii_form(), "Ayse Ozturk-Kaya");
/// assert_eq!(record.tokens(), ["Ayşe", "Öztürk", "Kaya"]);
/// assert_eq!(record.last_name(), "Kaya");
/// ```
pub fn normalize(raw: &str) -> Result<NameRecord, EmptyNameError> {
    let composed: String = raw.nfc().collect();
    let diacritic_form = composed.split_whitespace().collect::<Vec<_>>().join(" ");

    let tokens: Vec<String> = diacritic_form
        .split(|c: char| c == ' ' || is_hyphen(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        return Err(EmptyNameError);
    }

    let ascii_tokens = tokens.iter().map(|t| transliterate(t)).collect();

    Ok(NameRecord {
        raw: raw.to_string(),
        ascii_form: transliterate(&diacritic_form),
        diacritic_form,
        tokens,
        ascii_tokens,
    })
}

/// ASCII hyphen-minus, U+2010 HYPHEN and U+2011 NON-BREAKING HYPHEN.
pub(crate) fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Replace Turkish letters with their Latin equivalents; everything else
/// passes through unchanged.
pub fn transliterate(s: &str) -> String {
    s.chars().map(transliterate_char).collect()
}

fn transliterate_char(c: char) -> char {
    TRANSLITERATION.iter().find(|(from, _)| *from == c).map(|(_, to)| *to).unwrap_or(c)
}

/// Returns true for the Turkish-specific letters `ÇĞİÖŞÜçğıöşü`.
pub fn is_turkish_diacritic(c: char) -> bool {
    matches!(c, 'Ç' | 'Ğ' | 'İ' | 'Ö' | 'Ş' | 'Ü' | 'ç' | 'ğ' | 'ı' | 'ö' | 'ş' | 'ü')
}

/// Lowercase with `I` and `İ` both folding to `i`.
///
/// This is the right fold for text that is not known to be Turkish
/// (Western names, corporate markers, Arabic transliterations).
pub fn fold_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' | 'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Lowercase using Turkish casing: `I` folds to `ı`, `İ` to `i`.
pub fn turkish_fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

fn trim_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Case-folded, punctuation-trimmed key (`"Inc."` → `"inc"`).
pub fn lookup_key(token: &str) -> String {
    fold_case(trim_punctuation(token))
}

/// Like [`lookup_key`] but with Turkish casing (`"IŞIK"` → `"ışık"`).
pub fn turkish_key(token: &str) -> String {
    turkish_fold(trim_punctuation(token))
}

/// Transliterated, case-folded, punctuation-trimmed key (`"Öztürk"` → `"ozturk"`).
pub fn ascii_key(token: &str) -> String {
    fold_case(&transliterate(trim_punctuation(token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        let record = normalize("\t Mehmet \u{00A0}  Yılmaz \n").unwrap();
        assert_eq!(record.diacritic_form(), "Mehmet Yılmaz");
        assert_eq!(record.ascii_form(), "Mehmet Yilmaz");
        assert_eq!(record.first_name(), "Mehmet");
        assert_eq!(record.last_name(), "Yılmaz");
        assert_eq!(record.ascii_last_name(), "Yilmaz");

        let record = normalize("Gökçe Şahin").unwrap();
        assert_eq!(record.ascii_first_name(), "Gokce");
        assert_eq!(record.ascii_tokens(), ["Gokce", "Sahin"]);
    }

    #[test]
    fn splits_on_hyphens_and_drops_empty_tokens() {
        let record = normalize("Zeynep  Kaya--Demir -").unwrap();
        assert_eq!(record.tokens(), ["Zeynep", "Kaya", "Demir"]);
        assert_eq!(record.middle_names(), ["Kaya"]);
        assert_eq!(record.words().collect::<Vec<_>>(), ["Zeynep", "Kaya--Demir", "-"]);
    }

    #[test]
    fn empty_and_separator_only_inputs_fail() {
        assert_eq!(normalize(""), Err(EmptyNameError));
        assert_eq!(normalize("   \t "), Err(EmptyNameError));
        assert_eq!(normalize(" - -- "), Err(EmptyNameError));
    }

    #[test]
    fn composes_decomposed_diacritics() {
        // "s" + COMBINING CEDILLA, "u" + COMBINING DIAERESIS
        let record = normalize("Aye\u{0301} S\u{0327}en Gu\u{0308}l").unwrap();
        assert_eq!(record.tokens()[1], "Şen");
        assert_eq!(record.last_name(), "Gül");
        assert_eq!(record.ascii_last_name(), "Gul");
    }

    #[test]
    fn transliteration_covers_both_cases() {
        assert_eq!(transliterate("ÇĞİÖŞÜ çğıöşü Kâmil"), "CGIOSU cgiosu Kamil");
        assert_eq!(transliterate("Müller José"), "Muller José");
    }

    #[test]
    fn keys_fold_case_and_trim_punctuation() {
        assert_eq!(lookup_key("Inc."), "inc");
        assert_eq!(lookup_key("(İSTANBUL)"), "istanbul");
        assert_eq!(turkish_key("IŞIK"), "ışık");
        assert_eq!(turkish_key("İrem,"), "irem");
        assert_eq!(ascii_key("Öztürk"), "ozturk");
        assert_eq!(ascii_key("YILMAZ"), "yilmaz");
        assert_eq!(lookup_key("O'Brien"), "o'brien");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["  Ayşe  Nur   Çelik ", "Jean-Luc  Picard", "MEHMET\tYILMAZ", "a - b"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.diacritic_form()).unwrap();
            assert_eq!(once.tokens(), twice.tokens());
            assert_eq!(once.diacritic_form(), twice.diacritic_form());
        }
    }
}
