//! Engine run metrics.
//!
//! Small structs used to observe a single classification:
//!
//! - `Pipeline::run` for normal operation (no per-rule trace).
//! - `Pipeline::run_with_metrics` for the verbose report, which also records
//!   every rule evaluation.
//!
//! Timings are wall-clock and only meant for inspection; they never feed into
//! the verdict.

use super::compiled_rules::Stage;
use super::trigger::NameTraits;
use crate::NameRecord;
use crate::api::ClassificationResult;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Pipeline::run_with_metrics`].
    pub total: Duration,
    /// Normalization and trait scan.
    pub normalize: Duration,
    pub hard_reject: Duration,
    pub signals: Duration,
    /// Scoring and verdict.
    pub score: Duration,
}

/// One rule evaluation.
#[derive(Debug, Clone)]
pub struct RuleEvaluation {
    pub rule: &'static str,
    pub stage: Stage,
    pub fired: bool,
}

/// Pipeline output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub result: ClassificationResult,
    /// `None` when the input was empty.
    pub record: Option<NameRecord>,
    pub traits: NameTraits,
    /// Rule evaluations in order; empty unless recording was requested.
    pub evaluations: Vec<RuleEvaluation>,
    /// Turkish spelling suggested by the spelling-variant table, if any.
    pub spelling_hint: Option<String>,
    pub metrics: RunMetrics,
}
