use crate::rules::predicates::{
    ambiguous_first_name_uncorroborated, has_turkish_diacritic, strong_first_name, surname_has_turkish_suffix,
    surname_whitelisted,
};
use crate::{Facts, Rule, Signal, SignalSet};

/// Signal rules, in evaluation order. All of them run.
pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "Turkish diacritic present",
            signal: Signal::DiacriticPresent,
            order: 10,
            check: has_turkish_diacritic,
        },
        rule! {
            name: "whitelisted Turkish surname",
            signal: Signal::SurnameWhitelistMatch,
            order: 20,
            check: surname_whitelisted,
        },
        rule! {
            name: "Turkish surname suffix",
            signal: Signal::SurnameSuffixMatch,
            order: 30,
            check: surname_has_turkish_suffix,
        },
        rule! {
            name: "strong Turkish first name",
            signal: Signal::StrongFirstNameMatch,
            order: 40,
            check: strong_first_name,
        },
        rule! {
            name: "ambiguous first name without Turkish surname",
            signal: Signal::AmbiguousFirstNamePenalty,
            order: 50,
            check: ambiguous_first_name_uncorroborated,
        },
    ]
}

/// The positive signals alone. Hard-reject rules consult this before the
/// signal stage runs, so it must not depend on the penalty.
pub(crate) fn positive_evidence(f: &Facts<'_>) -> SignalSet {
    let mut set = SignalSet::empty();
    if has_turkish_diacritic(f) {
        set |= SignalSet::DIACRITIC_PRESENT;
    }
    if surname_whitelisted(f) {
        set |= SignalSet::SURNAME_WHITELIST;
    }
    if surname_has_turkish_suffix(f) {
        set |= SignalSet::SURNAME_SUFFIX;
    }
    if strong_first_name(f) {
        set |= SignalSet::STRONG_FIRST_NAME;
    }
    set
}
