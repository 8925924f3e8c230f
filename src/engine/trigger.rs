//! Trait scanning (input pre-classification).
//!
//! Before any rule runs, the normalized record is scanned once for cheap,
//! coarse features: an `@`, a URL scheme, digits, Turkish letters, hyphens,
//! code-like tokens, token count. The hard-reject rules consult the contact,
//! hyphen, code and single-token traits instead of re-scanning the text;
//! digits, all-caps and middle names only describe the input in the verbose
//! report.
//!
//! ## Design notes
//!
//! - The scan is intentionally shallow. It never decides anything on its own;
//!   a trait only makes a rule's full check cheaper or skippable.
//! - Codes are counted here because the non-person rule needs the ratio of
//!   code tokens to all tokens.

use crate::NameRecord;
use crate::normalize::{is_hyphen, is_turkish_diacritic};

bitflags::bitflags! {
    /// Coarse features of a normalized name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NameTraits: u16 {
        const HAS_AT                = 1 << 0;
        const HAS_URL               = 1 << 1;
        const HAS_DIGITS            = 1 << 2;
        const HAS_TURKISH_DIACRITIC = 1 << 3;
        const HAS_HYPHEN            = 1 << 4;
        const HAS_CODE_TOKEN        = 1 << 5;
        const ALL_CAPS              = 1 << 6;
        const SINGLE_TOKEN          = 1 << 7;
        const HAS_MIDDLE_NAMES      = 1 << 8;
    }
}

/// Traits of one record plus the number of code-like tokens.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub traits: NameTraits,
    pub code_tokens: usize,
}

impl TriggerInfo {
    /// Scan `record` for coarse traits.
    pub fn scan(record: &NameRecord) -> Self {
        let mut traits = NameTraits::empty();
        let raw = record.raw();
        let text = record.diacritic_form();

        if raw.contains('@') {
            traits |= NameTraits::HAS_AT;
        }

        if regex!(r"(?i)\b[a-z][a-z0-9+.\-]*://|\bwww\.").is_match(raw) {
            traits |= NameTraits::HAS_URL;
        }

        if text.chars().any(|c| c.is_ascii_digit()) {
            traits |= NameTraits::HAS_DIGITS;
        }

        if text.chars().any(is_turkish_diacritic) {
            traits |= NameTraits::HAS_TURKISH_DIACRITIC;
        }

        if text.contains(is_hyphen) {
            traits |= NameTraits::HAS_HYPHEN;
        }

        let code_tokens = record.tokens().iter().filter(|t| is_code(t)).count();
        if code_tokens > 0 {
            traits |= NameTraits::HAS_CODE_TOKEN;
        }

        let letters = || text.chars().filter(|c| c.is_alphabetic());
        if letters().next().is_some() && letters().all(char::is_uppercase) {
            traits |= NameTraits::ALL_CAPS;
        }

        match record.tokens().len() {
            1 => traits |= NameTraits::SINGLE_TOKEN,
            2 => {}
            _ => traits |= NameTraits::HAS_MIDDLE_NAMES,
        }

        TriggerInfo { traits, code_tokens }
    }
}

/// A token that looks like an identifier rather than a name part: it carries
/// a digit, or it is two or more upper-case ASCII characters without a vowel
/// (`XJ`, `BRK`, `A7`).
pub(crate) fn is_code(token: &str) -> bool {
    if token.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    regex!(r"^[A-Z0-9]{2,}$").is_match(token) && !token.chars().any(|c| matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn scan(raw: &str) -> TriggerInfo {
        TriggerInfo::scan(&normalize(raw).unwrap())
    }

    #[test]
    fn detects_contact_strings() {
        assert!(scan("info@acme.com").traits.contains(NameTraits::HAS_AT));
        assert!(scan("https://acme.com").traits.contains(NameTraits::HAS_URL));
        assert!(scan("visit www.acme.com").traits.contains(NameTraits::HAS_URL));
        assert!(!scan("Mehmet Yılmaz").traits.intersects(NameTraits::HAS_AT | NameTraits::HAS_URL));
    }

    #[test]
    fn counts_code_tokens() {
        let info = scan("XJ 4567 BRK");
        assert_eq!(info.code_tokens, 3);
        assert!(info.traits.contains(NameTraits::HAS_CODE_TOKEN | NameTraits::HAS_DIGITS));

        let info = scan("MEHMET YILMAZ");
        assert_eq!(info.code_tokens, 0);
        assert!(info.traits.contains(NameTraits::ALL_CAPS));
    }

    #[test]
    fn token_shape_traits() {
        assert!(scan("Ayşe").traits.contains(NameTraits::SINGLE_TOKEN | NameTraits::HAS_TURKISH_DIACRITIC));
        assert!(scan("Ayşe Nur Kaya").traits.contains(NameTraits::HAS_MIDDLE_NAMES));
        assert!(scan("Al-Rashid Omar").traits.contains(NameTraits::HAS_HYPHEN));
        assert!(scan("Al\u{2010}Rashid Omar").traits.contains(NameTraits::HAS_HYPHEN));
        assert!(scan("Al\u{2011}Rashid Omar").traits.contains(NameTraits::HAS_HYPHEN));
        assert!(!scan("Ayşe Kaya").traits.contains(NameTraits::ALL_CAPS));
    }

    #[test]
    fn code_shapes() {
        assert!(is_code("A7"));
        assert!(is_code("BRK"));
        assert!(!is_code("ALI"));
        assert!(!is_code("K"));
        assert!(!is_code("Brk"));
    }
}
