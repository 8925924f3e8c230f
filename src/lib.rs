#[macro_use]
mod macros;
mod api;
mod engine;
mod lexicon;
mod normalize;
mod rules;

pub use api::{
    ClassificationDetails, ClassificationResult, ClassificationVerbose, Context, Options, Partition, RuleInfo,
    RuleTrace, StageTimings, Verdict, check_hard_reject, classify, classify_batch, classify_batch_parallel,
    classify_batch_parallel_with, classify_batch_with, classify_verbose_with, classify_with, collect_signals,
    full_name, rule_catalog,
};
pub use engine::score::{ACCEPT_THRESHOLD, score};
pub use engine::{NameTraits, Stage};
pub use lexicon::{LEXICON_VERSION, Lexicon, LexiconBuilder, LexiconError, LexiconStats, MorphologySuffix};
pub use normalize::{EmptyNameError, NameRecord, ascii_key, lookup_key, normalize, transliterate, turkish_key};

use crate::engine::TriggerInfo;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- Signals -----------------------------------------------------------------

/// A positive or negative piece of evidence about a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    DiacriticPresent,
    SurnameWhitelistMatch,
    SurnameSuffixMatch,
    StrongFirstNameMatch,
    AmbiguousFirstNamePenalty,
}

impl Signal {
    /// All signals, in evaluation order.
    pub const ALL: [Signal; 5] = [
        Signal::DiacriticPresent,
        Signal::SurnameWhitelistMatch,
        Signal::SurnameSuffixMatch,
        Signal::StrongFirstNameMatch,
        Signal::AmbiguousFirstNamePenalty,
    ];

    pub fn reason_code(self) -> ReasonCode {
        match self {
            Signal::DiacriticPresent => ReasonCode::TrDiacritic,
            Signal::SurnameWhitelistMatch => ReasonCode::TrSurnameWhitelist,
            Signal::SurnameSuffixMatch => ReasonCode::TrSurnameSuffix,
            Signal::StrongFirstNameMatch => ReasonCode::TrFirstnameStrong,
            Signal::AmbiguousFirstNamePenalty => ReasonCode::AmbiguousFirstnameNeedsSurname,
        }
    }

    pub fn flag(self) -> SignalSet {
        match self {
            Signal::DiacriticPresent => SignalSet::DIACRITIC_PRESENT,
            Signal::SurnameWhitelistMatch => SignalSet::SURNAME_WHITELIST,
            Signal::SurnameSuffixMatch => SignalSet::SURNAME_SUFFIX,
            Signal::StrongFirstNameMatch => SignalSet::STRONG_FIRST_NAME,
            Signal::AmbiguousFirstNamePenalty => SignalSet::AMBIGUOUS_FIRST_NAME,
        }
    }
}

bitflags::bitflags! {
    /// Set of [`Signal`]s that fired for one name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SignalSet: u8 {
        const DIACRITIC_PRESENT    = 1 << 0;
        const SURNAME_WHITELIST    = 1 << 1;
        const SURNAME_SUFFIX       = 1 << 2;
        const STRONG_FIRST_NAME    = 1 << 3;
        const AMBIGUOUS_FIRST_NAME = 1 << 4;

        /// Evidence that comes from the surname or the spelling itself.
        const SURNAME_OR_SPELLING = Self::DIACRITIC_PRESENT.bits()
            | Self::SURNAME_WHITELIST.bits()
            | Self::SURNAME_SUFFIX.bits();
        const TURKISH = Self::SURNAME_OR_SPELLING.bits() | Self::STRONG_FIRST_NAME.bits();
    }
}

impl SignalSet {
    pub fn has(self, signal: Signal) -> bool {
        self.contains(signal.flag())
    }

    /// Signals in evaluation order.
    pub fn signals(self) -> impl Iterator<Item = Signal> {
        Signal::ALL.into_iter().filter(move |s| self.has(*s))
    }
}

impl From<Signal> for SignalSet {
    fn from(signal: Signal) -> Self {
        signal.flag()
    }
}

impl FromIterator<Signal> for SignalSet {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        iter.into_iter().fold(SignalSet::empty(), |set, s| set | s.flag())
    }
}

// --- Reason codes ------------------------------------------------------------

/// Stable reason codes attached to every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    EmptyInput,
    NontrNonperson,
    NontrSurnameMorph,
    ArabicParticle,
    ArabicSpellingVariant,
    WesternPair,
    TrDiacritic,
    TrSurnameWhitelist,
    TrSurnameSuffix,
    TrFirstnameStrong,
    AmbiguousFirstnameNeedsSurname,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 11] = [
        ReasonCode::EmptyInput,
        ReasonCode::NontrNonperson,
        ReasonCode::NontrSurnameMorph,
        ReasonCode::ArabicParticle,
        ReasonCode::ArabicSpellingVariant,
        ReasonCode::WesternPair,
        ReasonCode::TrDiacritic,
        ReasonCode::TrSurnameWhitelist,
        ReasonCode::TrSurnameSuffix,
        ReasonCode::TrFirstnameStrong,
        ReasonCode::AmbiguousFirstnameNeedsSurname,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::EmptyInput => "EMPTY_INPUT",
            ReasonCode::NontrNonperson => "NONTR_NONPERSON",
            ReasonCode::NontrSurnameMorph => "NONTR_SURNAME_MORPH",
            ReasonCode::ArabicParticle => "ARABIC_PARTICLE",
            ReasonCode::ArabicSpellingVariant => "ARABIC_SPELLING_VARIANT",
            ReasonCode::WesternPair => "WESTERN_PAIR",
            ReasonCode::TrDiacritic => "TR_DIACRITIC",
            ReasonCode::TrSurnameWhitelist => "TR_SURNAME_WHITELIST",
            ReasonCode::TrSurnameSuffix => "TR_SURNAME_SUFFIX",
            ReasonCode::TrFirstnameStrong => "TR_FIRSTNAME_STRONG",
            ReasonCode::AmbiguousFirstnameNeedsSurname => "AMBIGUOUS_FIRSTNAME_NEEDS_SURNAME",
        }
    }

    /// True for codes that veto a name outright.
    pub fn is_hard_reject(self) -> bool {
        matches!(
            self,
            ReasonCode::EmptyInput
                | ReasonCode::NontrNonperson
                | ReasonCode::NontrSurnameMorph
                | ReasonCode::ArabicParticle
                | ReasonCode::ArabicSpellingVariant
                | ReasonCode::WesternPair
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reason code '{0}'")]
pub struct UnknownReasonCode(pub String);

impl FromStr for ReasonCode {
    type Err = UnknownReasonCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReasonCode::ALL.into_iter().find(|c| c.as_str() == s).ok_or_else(|| UnknownReasonCode(s.to_string()))
    }
}

// --- Rules -------------------------------------------------------------------

/// What a rule contributes when its check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Reject(ReasonCode),
    Signal(Signal),
}

pub(crate) type Check = fn(&Facts<'_>) -> bool;

/// A classification rule: a name, an `order` within its stage, a `check`
/// over the precomputed [`Facts`] and the `outcome` it contributes.
pub(crate) struct Rule {
    pub name: &'static str,
    pub outcome: Outcome,
    /// Position within the stage; lower runs first.
    pub order: u16,
    pub check: Check,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("outcome", &self.outcome)
            .field("order", &self.order)
            .field("check", &"<function>")
            .finish()
    }
}

/// Lookup keys of one name token.
#[derive(Debug, Clone)]
pub(crate) struct NameKeys {
    /// Case-folded with `I` → `i`.
    pub folded: String,
    /// Case-folded with Turkish casing (`I` → `ı`).
    pub turkish: String,
    /// Transliterated and case-folded.
    pub ascii: String,
}

impl NameKeys {
    fn of(token: &str) -> Self {
        NameKeys {
            folded: normalize::lookup_key(token),
            turkish: normalize::turkish_key(token),
            ascii: normalize::ascii_key(token),
        }
    }
}

/// Everything a rule may look at for one name.
///
/// Keys and traits are computed once; the Turkish evidence set is computed
/// on first use because only some hard-reject rules need it.
pub(crate) struct Facts<'a> {
    pub record: &'a NameRecord,
    pub lexicon: &'a Lexicon,
    pub options: &'a Options,
    pub trigger: TriggerInfo,
    pub first: NameKeys,
    pub last: NameKeys,
    evidence: OnceCell<SignalSet>,
}

impl<'a> Facts<'a> {
    pub fn new(record: &'a NameRecord, lexicon: &'a Lexicon, options: &'a Options) -> Self {
        Facts {
            record,
            lexicon,
            options,
            trigger: TriggerInfo::scan(record),
            first: NameKeys::of(record.first_name()),
            last: NameKeys::of(record.last_name()),
            evidence: OnceCell::new(),
        }
    }

    /// Positive Turkish signals, without the ambiguity penalty.
    pub fn evidence(&self) -> SignalSet {
        *self.evidence.get_or_init(|| rules::signals::positive_evidence(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_parse_back_from_their_display_form() {
        for code in ReasonCode::ALL {
            let text = code.to_string();
            assert_eq!(text, code.as_str());
            assert_eq!(text.parse::<ReasonCode>(), Ok(code));

            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{text}\""));
            assert_eq!(serde_json::from_str::<ReasonCode>(&json).unwrap(), code);
        }
    }

    #[test]
    fn unknown_reason_code_is_an_error() {
        assert_eq!("TR_SOMETHING".parse::<ReasonCode>(), Err(UnknownReasonCode("TR_SOMETHING".to_string())));
        assert_eq!("tr_diacritic".parse::<ReasonCode>(), Err(UnknownReasonCode("tr_diacritic".to_string())));
        assert_eq!(UnknownReasonCode("X".to_string()).to_string(), "unknown reason code 'X'");
    }

    #[test]
    fn hard_reject_codes_are_the_veto_codes() {
        let vetoes: Vec<ReasonCode> = ReasonCode::ALL.into_iter().filter(|c| c.is_hard_reject()).collect();
        assert_eq!(vetoes.len(), 6);
        assert!(Signal::ALL.into_iter().all(|s| !s.reason_code().is_hard_reject()));
    }
}
