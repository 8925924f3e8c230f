use crate::rules::predicates::{
    has_foreign_surname_morphology, has_region_marker, is_non_person, is_uncorroborated_spelling_variant,
    is_western_pair,
};
use crate::{ReasonCode, Rule};

/// Veto rules, in evaluation order. The first one that fires decides.
pub fn get() -> Vec<Rule> {
    vec![
        rule! {
            name: "non-person string",
            reject: ReasonCode::NontrNonperson,
            order: 10,
            check: is_non_person,
        },
        rule! {
            name: "non-Turkish surname morphology",
            reject: ReasonCode::NontrSurnameMorph,
            order: 20,
            check: has_foreign_surname_morphology,
        },
        rule! {
            name: "regional particle or surname",
            reject: ReasonCode::ArabicParticle,
            order: 30,
            check: has_region_marker,
        },
        rule! {
            name: "non-Turkish spelling variant",
            reject: ReasonCode::ArabicSpellingVariant,
            order: 40,
            check: is_uncorroborated_spelling_variant,
        },
        rule! {
            name: "obvious Western pair",
            reject: ReasonCode::WesternPair,
            order: 50,
            check: is_western_pair,
        },
    ]
}
