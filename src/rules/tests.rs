use crate::ReasonCode::*;
use crate::{Context, Lexicon, Options, ReasonCode, Verdict, classify, classify_batch, classify_with};

#[test]
fn name_examples_matching() {
    // (input, expected verdict, expected reason codes)
    let cases: Vec<(&str, Verdict, Vec<ReasonCode>)> = vec![
        ("Mehmet Yılmaz", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist, TrFirstnameStrong]),
        ("Ahmet Yilmaz", Verdict::Rejected, vec![TrSurnameWhitelist, TrFirstnameStrong]),
        ("Mohammed Asharaf", Verdict::Rejected, vec![ArabicSpellingVariant]),
        ("Sara Smith", Verdict::Rejected, vec![WesternPair]),
        ("Ali Khan", Verdict::Rejected, vec![ArabicParticle]),
        ("", Verdict::Rejected, vec![EmptyInput]),
        ("   \t ", Verdict::Rejected, vec![EmptyInput]),
        // ambiguous first names
        ("Ali Kaya", Verdict::Accepted, vec![TrSurnameWhitelist, TrSurnameSuffix]),
        ("Ali Johnson", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Deniz Smith", Verdict::Rejected, vec![AmbiguousFirstnameNeedsSurname]),
        ("Deniz", Verdict::Rejected, vec![AmbiguousFirstnameNeedsSurname]),
        ("Smith", Verdict::Rejected, vec![]),
        ("Can Demirtaş", Verdict::Accepted, vec![TrDiacritic, TrSurnameSuffix]),
        // surname morphology
        ("Hans Hansen", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Sevgi Hansen", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Lars Eriksson", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Ivan Petrov", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Maria Lopez", Verdict::Rejected, vec![NontrSurnameMorph]),
        ("Ayşe Şen", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist, TrFirstnameStrong]),
        ("Özge Ersen", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist, TrFirstnameStrong]),
        ("Emine Sönmez", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist, TrFirstnameStrong]),
        // particles and regional surnames
        ("Omar Al-Rashid", Verdict::Rejected, vec![ArabicParticle]),
        ("Omar Al\u{2010}Rashid", Verdict::Rejected, vec![ArabicParticle]),
        ("Nasser El\u{2011}Sayed", Verdict::Rejected, vec![ArabicParticle]),
        ("Mehmet bin Salman", Verdict::Rejected, vec![ArabicParticle]),
        ("Raj Patel", Verdict::Rejected, vec![ArabicParticle]),
        // spelling variants
        ("Mohammed Kaya", Verdict::Accepted, vec![TrSurnameWhitelist, TrSurnameSuffix]),
        ("Aisha Brown", Verdict::Rejected, vec![ArabicSpellingVariant]),
        // non-person strings
        ("info@acme.com", Verdict::Rejected, vec![NontrNonperson]),
        ("www.example.com", Verdict::Rejected, vec![NontrNonperson]),
        ("Acme Trading LLC", Verdict::Rejected, vec![NontrNonperson]),
        ("Yıldız Holding", Verdict::Rejected, vec![NontrNonperson]),
        ("XJ 4567 BRK", Verdict::Rejected, vec![NontrNonperson]),
        ("MEHMET YILMAZ", Verdict::Rejected, vec![TrSurnameWhitelist, TrFirstnameStrong]),
        // Turkish names
        ("Gökhan Öztürk", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist, TrSurnameSuffix, TrFirstnameStrong]),
        ("Zeynep Karakaya", Verdict::Accepted, vec![TrSurnameWhitelist, TrSurnameSuffix, TrFirstnameStrong]),
        ("ışık", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist]),
        ("John Smith-Yılmaz", Verdict::Accepted, vec![TrDiacritic, TrSurnameWhitelist]),
        ("  Fatma   Nur   Çelik ", Verdict::Accepted, vec![
            TrDiacritic,
            TrSurnameWhitelist,
            TrSurnameSuffix,
            TrFirstnameStrong,
        ]),
    ];

    let mut failures = Vec::new();
    for (input, verdict, codes) in &cases {
        let result = classify(input);
        if result.verdict != *verdict || &result.reason_codes != codes {
            failures.push(format!(
                "{input:?}: expected {verdict:?} {codes:?}, got {:?} {:?} (score {})",
                result.verdict, result.reason_codes, result.score
            ));
        }
        assert_eq!(result.name, *input);
    }
    assert!(failures.is_empty(), "{} case(s) failed:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn scores_and_confidence_for_known_names() {
    let cases: Vec<(&str, f64, f64)> = vec![
        ("Ali Kaya", 0.60, 0.0),
        ("Ahmet Yilmaz", 0.55, 0.05),
        ("Deniz Smith", -0.25, 0.85),
        ("Mehmet Yılmaz", 1.10, 0.0),
        ("Ali Khan", 0.0, 1.0),
        ("", 0.0, 1.0),
        ("Burak", 0.20, 0.40),
    ];

    for (input, score, confidence) in cases {
        let result = classify(input);
        assert_eq!(result.score, score, "score of {input:?}");
        assert_eq!(result.confidence, confidence, "confidence of {input:?}");
    }
}

#[test]
fn classification_is_deterministic() {
    let names = ["Mehmet Yılmaz", "Ahmet Yilmaz", "Mohammed Asharaf", "Sara Smith", "Ali Khan", "", "Ayşe Şen"];
    for name in names {
        assert_eq!(classify(name), classify(name));
    }
    assert_eq!(classify_batch(&names), classify_batch(&names));
}

#[test]
fn batch_entries_depend_only_on_their_input() {
    let alone = classify("Ali Kaya");
    let batch = classify_batch(&["Ali Khan", "Ali Kaya", "info@acme.com"]);
    assert_eq!(batch[1], alone);
}

#[test]
fn every_whitelisted_surname_is_accepted_with_a_strong_first_name() {
    let lexicon = Lexicon::shared();
    let mut count = 0;
    for surname in lexicon.whitelisted_surnames() {
        let name = format!("Gökhan {surname}");
        let result = classify(&name);
        assert_eq!(result.verdict, Verdict::Accepted, "{name}: {:?}", result.reason_codes);
        assert!(result.reason_codes.contains(&TrSurnameWhitelist), "{name}");
        count += 1;
    }
    assert_eq!(count, lexicon.stats().surnames);
}

#[test]
fn hard_rejects_override_positive_signals() {
    // Each of these carries Turkish evidence that would otherwise pass.
    let inputs = ["Mehmet Özkan LLC", "ayşe.kaya@örnek.com.tr", "Gökhan Andersson", "Gökhan Al-Kaya", "Mehmet Khan"];
    for input in inputs {
        let result = classify(input);
        assert_eq!(result.verdict, Verdict::Rejected, "{input}");
        assert_eq!(result.confidence, 1.0, "{input}");
        assert_eq!(result.score, 0.0, "{input}");
        assert_eq!(result.reason_codes.len(), 1, "{input}");
        assert!(result.reason_codes[0].is_hard_reject(), "{input}");
        assert!(result.signals.is_empty(), "{input}");
    }
}

#[test]
fn strict_diacritics_only_changes_list_lookups() {
    let strict = Options { strict_diacritics: true };
    let ctx = Context::default();

    // Diacritic spellings classify the same either way.
    for name in ["Mehmet Yılmaz", "Ayşe Şen", "Gökhan Öztürk"] {
        assert_eq!(classify_with(name, &ctx, &strict), classify(name), "{name}");
    }

    // Entries without Turkish letters match as before.
    let out = classify_with("Ali Kaya", &ctx, &strict);
    assert_eq!(out.reason_codes, vec![TrSurnameWhitelist, TrSurnameSuffix]);

    // Anglicized spellings lose the list match; suffixes still apply.
    let out = classify_with("Ahmet Ozturk", &ctx, &strict);
    assert_eq!(out.reason_codes, vec![TrSurnameSuffix, TrFirstnameStrong]);
}
