use crate::engine::{self, CompiledRules, NameTraits, RuleEvaluation, Stage};
use crate::lexicon::DEFAULT_LEXICON;
use crate::{Facts, Lexicon, NameRecord, ReasonCode, SignalSet};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

static DEFAULT_RULES: Lazy<CompiledRules> = Lazy::new(|| CompiledRules::new(crate::rules::all()));

/// Classification context.
///
/// Holds the lexicon every rule reads. Cloning is cheap; the lexicon is
/// shared.
#[derive(Debug, Clone)]
pub struct Context {
    pub lexicon: Arc<Lexicon>,
}

impl Default for Context {
    fn default() -> Self {
        Self { lexicon: Arc::clone(&DEFAULT_LEXICON) }
    }
}

impl Context {
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon: Arc::new(lexicon) }
    }
}

/// Options that affect matching.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Match whitelisted surnames and strong first names only when written
    /// with Turkish letters (`Öztürk`), not anglicized (`Ozturk`).
    pub strict_diacritics: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

/// Outcome of classifying one name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// The input exactly as given.
    pub name: String,
    pub verdict: Verdict,
    /// Weighted signal sum; `0.0` when a hard reject fired.
    pub score: f64,
    #[serde(skip)]
    pub signals: SignalSet,
    /// Fired rule and signal codes, in evaluation order.
    pub reason_codes: Vec<ReasonCode>,
    /// How far the name is from being accepted, in `[0, 1]`. `1.0` for hard
    /// rejects, `0.0` for accepted names.
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// True when a veto rule (or empty input) decided the result.
    pub fn is_hard_rejected(&self) -> bool {
        self.reason_codes.first().is_some_and(|c| c.is_hard_reject())
    }
}

/// One rule evaluation in a verbose trace.
#[derive(Debug, Clone)]
pub struct RuleTrace {
    pub rule: String,
    pub stage: Stage,
    pub fired: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    pub total: Duration,
    pub normalize: Duration,
    pub hard_reject: Duration,
    pub signals: Duration,
    pub score: Duration,
}

/// Extra detail returned by [`classify_verbose_with`].
#[derive(Debug, Clone)]
pub struct ClassificationDetails {
    /// `None` when the input was empty.
    pub record: Option<NameRecord>,
    pub traits: NameTraits,
    pub rules: Vec<RuleTrace>,
    /// Turkish spelling of a non-Turkish first-name spelling, if any.
    pub spelling_hint: Option<String>,
    pub lexicon_version: String,
    pub timings: StageTimings,
}

#[derive(Debug, Clone)]
pub struct ClassificationVerbose {
    pub result: ClassificationResult,
    pub details: ClassificationDetails,
}

/// Name and stage of a rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub name: &'static str,
    pub stage: Stage,
    pub order: u16,
}

/// Accepted names and rejected results of one batch, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Partition {
    pub accepted: Vec<String>,
    pub rejected: Vec<ClassificationResult>,
}

impl Partition {
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = ClassificationResult>,
    {
        let mut partition = Partition::default();
        for result in results {
            if result.is_accepted() {
                partition.accepted.push(result.name);
            } else {
                partition.rejected.push(result);
            }
        }
        partition
    }

    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

/// Classify `name` with the default lexicon and options.
///
/// # Example
/// ```
/// use turkname::{ReasonCode, Verdict, classify};
///
/// let out = classify("Mehmet Yılmaz");
/// assert_eq!(out.verdict, Verdict::Accepted);
/// assert!(out.reason_codes.contains(&ReasonCode::TrDiacritic));
///
/// let out = classify("Ali Khan");
/// assert_eq!(out.reason_codes, vec![ReasonCode::ArabicParticle]);
/// ```
pub fn classify(name: &str) -> ClassificationResult {
    classify_with(name, &Context::default(), &Options::default())
}

pub fn classify_with(name: &str, context: &Context, options: &Options) -> ClassificationResult {
    engine::Pipeline::new(name, &DEFAULT_RULES).run(context, options)
}

/// Classify each name independently, preserving input order.
pub fn classify_batch<S: AsRef<str>>(names: &[S]) -> Vec<ClassificationResult> {
    classify_batch_with(names, &Context::default(), &Options::default())
}

pub fn classify_batch_with<S: AsRef<str>>(names: &[S], context: &Context, options: &Options) -> Vec<ClassificationResult> {
    names.iter().map(|n| classify_with(n.as_ref(), context, options)).collect()
}

/// Like [`classify_batch`], spread over the rayon thread pool. Results are
/// identical to the sequential form.
pub fn classify_batch_parallel<S: AsRef<str> + Sync>(names: &[S]) -> Vec<ClassificationResult> {
    classify_batch_parallel_with(names, &Context::default(), &Options::default())
}

pub fn classify_batch_parallel_with<S: AsRef<str> + Sync>(
    names: &[S],
    context: &Context,
    options: &Options,
) -> Vec<ClassificationResult> {
    debug!(count = names.len(), "classifying batch in parallel");
    names.par_iter().map(|n| classify_with(n.as_ref(), context, options)).collect()
}

/// Classify `name` and return the per-rule trace and stage timings.
pub fn classify_verbose_with(name: &str, context: &Context, options: &Options) -> ClassificationVerbose {
    let run = engine::Pipeline::new(name, &DEFAULT_RULES).run_with_metrics(context, options);

    let details = ClassificationDetails {
        record: run.record,
        traits: run.traits,
        rules: run.evaluations.iter().map(evaluation_to_trace).collect(),
        spelling_hint: run.spelling_hint,
        lexicon_version: context.lexicon.version().to_string(),
        timings: StageTimings {
            total: run.metrics.total,
            normalize: run.metrics.normalize,
            hard_reject: run.metrics.hard_reject,
            signals: run.metrics.signals,
            score: run.metrics.score,
        },
    };

    ClassificationVerbose { result: run.result, details }
}

/// Run only the hard-reject stage on an already normalized record.
pub fn check_hard_reject(record: &NameRecord, context: &Context, options: &Options) -> Option<ReasonCode> {
    let facts = Facts::new(record, &context.lexicon, options);
    engine::hard_reject_stage(&facts, &DEFAULT_RULES.hard_reject, None)
}

/// Run only the signal stage on an already normalized record.
pub fn collect_signals(record: &NameRecord, context: &Context, options: &Options) -> SignalSet {
    let facts = Facts::new(record, &context.lexicon, options);
    engine::signal_stage(&facts, &DEFAULT_RULES.signals, None)
}

/// Every rule, in evaluation order.
pub fn rule_catalog() -> Vec<RuleInfo> {
    DEFAULT_RULES.metas().into_iter().map(|m| RuleInfo { name: m.name, stage: m.stage, order: m.order }).collect()
}

/// Join a first-name and a last-name column into one input string.
///
/// ```
/// assert_eq!(turkname::full_name(" Ayşe ", "Kaya"), "Ayşe Kaya");
/// assert_eq!(turkname::full_name("Ayşe", ""), "Ayşe");
/// ```
pub fn full_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()].into_iter().filter(|p| !p.is_empty()).collect::<Vec<_>>().join(" ")
}

fn evaluation_to_trace(e: &RuleEvaluation) -> RuleTrace {
    RuleTrace { rule: e.rule.to_string(), stage: e.stage, fired: e.fired }
}
