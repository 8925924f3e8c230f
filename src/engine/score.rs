//! Scoring and verdicts.
//!
//! Once the stages have run, the pipeline hands its outcome here to be turned
//! into a [`ClassificationResult`]:
//!
//! ```text
//! EmptyNameError      ──▶ Rejected, EMPTY_INPUT, confidence 1.0
//! hard reject (code)  ──▶ Rejected, code,        confidence 1.0
//! signals             ──▶ score ──┬─ ≥ 0.60 ──▶ Accepted
//!                                 └─ < 0.60 ──▶ Rejected, confidence 0.60 - score
//! ```
//!
//! Weights are held in hundredths so that sums and the threshold comparison
//! are exact integer arithmetic; `0.35 + 0.25` is exactly the threshold.

use crate::api::{ClassificationResult, Verdict};
use crate::{ReasonCode, Signal, SignalSet};

/// Minimum score for a name to be accepted.
pub const ACCEPT_THRESHOLD: f64 = 0.60;

const THRESHOLD_POINTS: i32 = 60;

impl Signal {
    /// Fixed weight of this signal.
    pub fn weight(self) -> f64 {
        f64::from(weight_points(self)) / 100.0
    }
}

fn weight_points(signal: Signal) -> i32 {
    match signal {
        Signal::DiacriticPresent => 55,
        Signal::SurnameWhitelistMatch => 35,
        Signal::SurnameSuffixMatch => 25,
        Signal::StrongFirstNameMatch => 20,
        Signal::AmbiguousFirstNamePenalty => -25,
    }
}

fn score_points(signals: SignalSet) -> i32 {
    signals.signals().map(weight_points).sum()
}

/// Weighted sum of `signals`. Not clamped: it may exceed 1.0 or go negative.
///
/// # Example
/// ```
/// use turkname::{Signal, SignalSet, score};
///
/// let signals: SignalSet = [Signal::SurnameWhitelistMatch, Signal::StrongFirstNameMatch].into_iter().collect();
/// assert_eq!(score(signals), 0.55);
/// ```
pub fn score(signals: SignalSet) -> f64 {
    f64::from(score_points(signals)) / 100.0
}

pub(crate) fn empty(name: &str) -> ClassificationResult {
    ClassificationResult {
        name: name.to_string(),
        verdict: Verdict::Rejected,
        score: 0.0,
        signals: SignalSet::empty(),
        reason_codes: vec![ReasonCode::EmptyInput],
        confidence: 1.0,
    }
}

pub(crate) fn hard_rejected(name: &str, code: ReasonCode) -> ClassificationResult {
    ClassificationResult {
        name: name.to_string(),
        verdict: Verdict::Rejected,
        score: 0.0,
        signals: SignalSet::empty(),
        reason_codes: vec![code],
        confidence: 1.0,
    }
}

pub(crate) fn scored(name: &str, signals: SignalSet) -> ClassificationResult {
    let points = score_points(signals);
    let accepted = points >= THRESHOLD_POINTS;

    let confidence =
        if accepted { 0.0 } else { (f64::from((THRESHOLD_POINTS - points).max(0)) / 100.0).clamp(0.0, 1.0) };

    ClassificationResult {
        name: name.to_string(),
        verdict: if accepted { Verdict::Accepted } else { Verdict::Rejected },
        score: f64::from(points) / 100.0,
        signals,
        reason_codes: signals.signals().map(Signal::reason_code).collect(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(signals: &[Signal]) -> SignalSet {
        signals.iter().copied().collect()
    }

    #[test]
    fn weights_sum_without_clamping() {
        assert_eq!(score(SignalSet::empty()), 0.0);
        assert_eq!(score(set(&[Signal::AmbiguousFirstNamePenalty])), -0.25);
        assert_eq!(score(SignalSet::TURKISH), 1.35);
    }

    #[test]
    fn signal_weights() {
        let weights: Vec<f64> = Signal::ALL.into_iter().map(Signal::weight).collect();
        assert_eq!(weights, vec![0.55, 0.35, 0.25, 0.20, -0.25]);
        for signal in Signal::ALL {
            assert_eq!(score(signal.into()), signal.weight());
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let result = scored("Ali Kaya", set(&[Signal::SurnameWhitelistMatch, Signal::SurnameSuffixMatch]));
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.score, ACCEPT_THRESHOLD);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn rejection_confidence_is_distance_to_threshold() {
        let result = scored("Ahmet Yilmaz", set(&[Signal::SurnameWhitelistMatch, Signal::StrongFirstNameMatch]));
        assert_eq!(result.verdict, Verdict::Rejected);
        assert_eq!(result.confidence, 0.05);

        let result = scored("Deniz Smith", set(&[Signal::AmbiguousFirstNamePenalty]));
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.reason_codes, vec![ReasonCode::AmbiguousFirstnameNeedsSurname]);
    }

    #[test]
    fn reason_codes_follow_evaluation_order() {
        let result = scored("x", set(&[Signal::StrongFirstNameMatch, Signal::DiacriticPresent]));
        assert_eq!(result.reason_codes, vec![ReasonCode::TrDiacritic, ReasonCode::TrFirstnameStrong]);
    }
}
