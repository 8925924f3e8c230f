//! Classification pipeline.
//!
//! This module is the operational core of the engine: it runs one name
//! through every stage and hands the outcome to `score.rs`.
//!
//! ```text
//! (0) normalize            -> NameRecord (or EmptyNameError)
//! (1) trait scan           -> NameTraits (see trigger.rs)
//! (2) hard-reject stage    -> first vetoing rule, short-circuits
//! (3) signal stage         -> SignalSet
//! (4) score + verdict      -> ClassificationResult
//! ```
//!
//! Stages read the shared [`Lexicon`] and the compiled rule tables; nothing is
//! written outside the current call, so any number of pipelines may run at
//! once.
//!
//! ## Debugging
//!
//! Rule evaluations are logged at `trace` level and stage outcomes at `debug`
//! level under the `turkname` target (`RUST_LOG=turkname=trace`).

use super::compiled_rules::{CompiledRules, Stage};
use super::metrics::{RuleEvaluation, RunMetrics, RunResult};
use super::score;
use super::trigger::NameTraits;
use crate::api::ClassificationResult;
use crate::{Context, Facts, Lexicon, Options, Outcome, ReasonCode, Rule, SignalSet, normalize};
use std::time::Instant;
use tracing::{debug, trace};

/// Runs the stages for one input string.
///
/// Usage: create with `Pipeline::new(raw, &rules)` then call `run(context, options)`.
#[derive(Debug)]
pub struct Pipeline<'a> {
    raw: &'a str,
    compiled: &'a CompiledRules,
    record_evaluations: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(raw: &'a str, compiled: &'a CompiledRules) -> Self {
        Pipeline { raw, compiled, record_evaluations: false }
    }

    /// Classify and return the full trace with timings.
    pub fn run_with_metrics(mut self, context: &Context, options: &Options) -> RunResult {
        self.record_evaluations = true;
        self.execute(context, options)
    }

    /// Classify and return only the result.
    pub fn run(self, context: &Context, options: &Options) -> ClassificationResult {
        self.execute(context, options).result
    }

    fn execute(&self, context: &Context, options: &Options) -> RunResult {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut evaluations = Vec::new();

        let normalize_start = Instant::now();
        let record = match normalize(self.raw) {
            Ok(record) => record,
            Err(err) => {
                debug!(name = self.raw, %err, "rejected empty input");
                metrics.normalize = normalize_start.elapsed();
                metrics.total = total_start.elapsed();
                return RunResult {
                    result: score::empty(self.raw),
                    record: None,
                    traits: NameTraits::empty(),
                    evaluations,
                    spelling_hint: None,
                    metrics,
                };
            }
        };
        let lexicon: &Lexicon = &context.lexicon;
        let facts = Facts::new(&record, lexicon, options);
        metrics.normalize = normalize_start.elapsed();

        let spelling_hint = lexicon.turkish_spelling(&facts.first.folded).map(str::to_string);

        let hard_start = Instant::now();
        let rejected = hard_reject_stage(&facts, &self.compiled.hard_reject, self.recorder(&mut evaluations));
        metrics.hard_reject = hard_start.elapsed();

        let result = match rejected {
            Some(code) => {
                debug!(name = self.raw, code = %code, "hard reject");
                score::hard_rejected(self.raw, code)
            }
            None => {
                let signal_start = Instant::now();
                let signals = signal_stage(&facts, &self.compiled.signals, self.recorder(&mut evaluations));
                metrics.signals = signal_start.elapsed();

                let score_start = Instant::now();
                let result = score::scored(self.raw, signals);
                metrics.score = score_start.elapsed();
                debug!(name = self.raw, score = result.score, verdict = ?result.verdict, "scored");
                result
            }
        };

        let traits = facts.trigger.traits;
        drop(facts);

        metrics.total = total_start.elapsed();
        RunResult { result, traits, record: Some(record), evaluations, spelling_hint, metrics }
    }

    fn recorder<'v>(&self, evaluations: &'v mut Vec<RuleEvaluation>) -> Option<&'v mut Vec<RuleEvaluation>> {
        if self.record_evaluations { Some(evaluations) } else { None }
    }
}

/// Walk the hard-reject rules in order and return the first code that fires.
pub(crate) fn hard_reject_stage(
    facts: &Facts<'_>,
    rules: &[Rule],
    mut evaluations: Option<&mut Vec<RuleEvaluation>>,
) -> Option<ReasonCode> {
    for rule in rules {
        let fired = (rule.check)(facts);
        trace!(rule = rule.name, fired, "hard-reject rule evaluated");
        if let Some(evaluations) = evaluations.as_deref_mut() {
            evaluations.push(RuleEvaluation { rule: rule.name, stage: Stage::HardReject, fired });
        }
        if fired {
            if let Outcome::Reject(code) = rule.outcome {
                return Some(code);
            }
        }
    }
    None
}

/// Run every signal rule and collect the signals that fired.
pub(crate) fn signal_stage(
    facts: &Facts<'_>,
    rules: &[Rule],
    mut evaluations: Option<&mut Vec<RuleEvaluation>>,
) -> SignalSet {
    let mut signals = SignalSet::empty();
    for rule in rules {
        let fired = (rule.check)(facts);
        trace!(rule = rule.name, fired, "signal rule evaluated");
        if let Some(evaluations) = evaluations.as_deref_mut() {
            evaluations.push(RuleEvaluation { rule: rule.name, stage: Stage::Signal, fired });
        }
        if fired {
            if let Outcome::Signal(signal) = rule.outcome {
                signals |= signal.flag();
            }
        }
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verdict;

    fn compiled() -> CompiledRules {
        CompiledRules::new(crate::rules::all())
    }

    #[test]
    fn hard_reject_short_circuits_signal_stage() {
        let rules = compiled();
        let run = Pipeline::new("Ali Khan", &rules).run_with_metrics(&Context::default(), &Options::default());

        assert_eq!(run.result.reason_codes, vec![ReasonCode::ArabicParticle]);
        assert!(run.evaluations.iter().all(|e| e.stage == Stage::HardReject));
        assert_eq!(run.evaluations.iter().filter(|e| e.fired).count(), 1);
        assert_eq!(run.evaluations.last().map(|e| e.rule), Some("regional particle or surname"));
    }

    #[test]
    fn accepted_run_records_every_rule() {
        let rules = compiled();
        let run = Pipeline::new("Mehmet Yılmaz", &rules).run_with_metrics(&Context::default(), &Options::default());

        assert_eq!(run.result.verdict, Verdict::Accepted);
        assert_eq!(run.evaluations.len(), rules.metas().len());
        assert!(run.traits.contains(NameTraits::HAS_TURKISH_DIACRITIC));
        assert!(run.metrics.total >= run.metrics.hard_reject);
        assert_eq!(run.record.as_ref().map(|r| r.ascii_form()), Some("Mehmet Yilmaz"));
    }

    #[test]
    fn plain_run_skips_the_trace() {
        let rules = compiled();
        let result = Pipeline::new("   ", &rules).run(&Context::default(), &Options::default());
        assert_eq!(result.reason_codes, vec![ReasonCode::EmptyInput]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn spelling_hint_names_the_turkish_form() {
        let rules = compiled();
        let run = Pipeline::new("Mohammed Asharaf", &rules).run_with_metrics(&Context::default(), &Options::default());
        assert_eq!(run.spelling_hint.as_deref(), Some("mehmet"));
        assert_eq!(run.result.reason_codes, vec![ReasonCode::ArabicSpellingVariant]);
    }
}
