use crate::normalize::{ascii_key, fold_case, is_hyphen, is_turkish_diacritic, lookup_key};
use crate::{Facts, NameTraits, SignalSet};

// --- Hard-reject checks -------------------------------------------------------

/// E-mail addresses, URLs, company names and strings made of codes.
pub fn is_non_person(f: &Facts<'_>) -> bool {
    if f.trigger.traits.intersects(NameTraits::HAS_AT | NameTraits::HAS_URL) {
        return true;
    }

    if f.record.tokens().iter().any(|t| f.lexicon.is_corporate_marker(&ascii_key(t))) {
        return true;
    }

    f.trigger.traits.contains(NameTraits::HAS_CODE_TOKEN) && f.trigger.code_tokens * 2 > f.record.tokens().len()
}

/// The surname ends in a non-Turkish morphology suffix.
///
/// Guarded suffixes are skipped when the surname is whitelisted or written
/// with Turkish letters, so `Şen` and `Sönmez` survive while `Hansen` and
/// `Lopez` do not.
pub fn has_foreign_surname_morphology(f: &Facts<'_>) -> bool {
    let Some(morph) = f.lexicon.morphology_suffix(&f.last.ascii) else {
        return false;
    };

    if f.last.ascii.chars().count() <= morph.suffix.chars().count() {
        return false;
    }

    if morph.guarded {
        let strict = f.options.strict_diacritics;
        let whitelisted = f.lexicon.is_whitelisted_surname(&f.last.turkish, &f.last.ascii, strict);
        let turkish_letters = f.record.last_name().chars().any(is_turkish_diacritic);
        if whitelisted || turkish_letters {
            return false;
        }
    }

    true
}

/// A particle (`bin`, `abu`, `al-`) or a regional surname (`Khan`, `Patel`).
pub fn has_region_marker(f: &Facts<'_>) -> bool {
    if f.record.tokens().iter().any(|t| f.lexicon.is_region_marker(&lookup_key(t))) {
        return true;
    }

    f.trigger.traits.contains(NameTraits::HAS_HYPHEN)
        && f.record.words().any(|w| f.lexicon.region_prefix(&fold_case(&w.replace(is_hyphen, "-"))).is_some())
}

/// Non-Turkish spelling of a first name (`Mohammed` for `Mehmet`) without a
/// Turkish surname to back it up.
pub fn is_uncorroborated_spelling_variant(f: &Facts<'_>) -> bool {
    f.lexicon.turkish_spelling(&f.first.folded).is_some()
        && !f.evidence().intersects(SignalSet::SURNAME_WHITELIST | SignalSet::SURNAME_SUFFIX)
}

/// Western first name with a Western surname and nothing Turkish about it.
pub fn is_western_pair(f: &Facts<'_>) -> bool {
    !f.trigger.traits.contains(NameTraits::SINGLE_TOKEN)
        && f.lexicon.is_western_first_name(&f.first.folded, &f.first.ascii)
        && f.lexicon.is_western_surname(&f.last.folded, &f.last.ascii)
        && !f.evidence().intersects(SignalSet::TURKISH)
}

// --- Signal checks ------------------------------------------------------------

pub fn has_turkish_diacritic(f: &Facts<'_>) -> bool {
    f.trigger.traits.contains(NameTraits::HAS_TURKISH_DIACRITIC)
}

pub fn surname_whitelisted(f: &Facts<'_>) -> bool {
    f.lexicon.is_whitelisted_surname(&f.last.turkish, &f.last.ascii, f.options.strict_diacritics)
}

pub fn surname_has_turkish_suffix(f: &Facts<'_>) -> bool {
    f.lexicon.surname_suffix(&f.last.ascii).is_some()
}

pub fn strong_first_name(f: &Facts<'_>) -> bool {
    f.lexicon.is_strong_first_name(&f.first.turkish, &f.first.ascii, f.options.strict_diacritics)
}

/// Ambiguous first name with no surname or spelling evidence.
pub fn ambiguous_first_name_uncorroborated(f: &Facts<'_>) -> bool {
    f.lexicon.is_ambiguous_first_name(&f.first.folded, &f.first.ascii)
        && !f.evidence().intersects(SignalSet::SURNAME_OR_SPELLING)
}
