//! Classification engine.
//!
//! This module is the entry point for the rule engine. The engine is split
//! into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all)  ──┐
//!               │  CompiledRules::new           (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! raw ── normalize ─────────────┤
//!        TriggerInfo::scan      │  (trigger.rs)
//!                               v
//!                     Pipeline::execute (pipeline.rs)
//!                       - hard-reject stage (first veto wins)
//!                       - signal stage (all rules run)
//!                               │
//!                               v
//!                     score::scored (score.rs)
//!                       - fixed weights
//!                       - 0.60 threshold
//!                               │
//!                               v
//!                       ClassificationResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: splits `Rule`s into ordered stage tables.
//! - `trigger.rs`: scans a normalized record for coarse traits.
//! - `pipeline.rs`: runs the stages for one name, optionally recording a
//!   per-rule trace.
//! - `score.rs`: weights, threshold, confidence and result construction.
//! - `metrics.rs`: timing and trace data for verbose runs.
//!
//! ## Adding new rules
//!
//! - New rules go in `src/rules/hard_reject.rs` or `src/rules/signals.rs`,
//!   with their check in `src/rules/predicates.rs`.
//! - A new signal also needs a `Signal` variant, a `SignalSet` bit, a reason
//!   code and a weight in `score.rs`.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/score.rs"]
pub(crate) mod score;
#[path = "engine/trigger.rs"]
mod trigger;

pub use compiled_rules::{CompiledRules, Stage};
pub use metrics::RuleEvaluation;
pub use pipeline::Pipeline;
pub(crate) use pipeline::{hard_reject_stage, signal_stage};
pub use trigger::{NameTraits, TriggerInfo};
