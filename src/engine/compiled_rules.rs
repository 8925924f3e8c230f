//! Rule compilation.
//!
//! This module holds the *static* side of the engine: the stage tables
//! derived once from the full rule list.
//!
//! Classification is split into two phases:
//!
//! 1. **Compile** (this module): split the rules by [`Stage`], order each
//!    stage by `Rule::order`, and check that the tables are well formed.
//! 2. **Run** (see `pipeline.rs`): normalize one name, scan its traits, then
//!    walk the hard-reject table followed by the signal table.
//!
//! ## Invariants
//!
//! - Hard-reject rules only carry `Outcome::Reject`, signal rules only
//!   `Outcome::Signal`.
//! - Within a stage, `order` values are unique, so evaluation order (and
//!   therefore the order of reason codes) never depends on declaration order.

use crate::{Outcome, Rule};

/// Pipeline stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    HardReject,
    Signal,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::HardReject => "hard-reject",
            Stage::Signal => "signal",
        }
    }
}

/// Per-rule metadata kept next to the stage tables.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub name: &'static str,
    pub stage: Stage,
    pub order: u16,
}

/// Ordered stage tables.
#[derive(Debug)]
pub struct CompiledRules {
    pub hard_reject: Vec<Rule>,
    pub signals: Vec<Rule>,
}

impl CompiledRules {
    /// Split `rules` into stages and order each stage.
    ///
    /// Panics in debug builds when two rules of one stage share an `order`.
    pub fn new(rules: Vec<Rule>) -> Self {
        let (mut hard_reject, mut signals): (Vec<Rule>, Vec<Rule>) =
            rules.into_iter().partition(|r| matches!(r.outcome, Outcome::Reject(_)));

        hard_reject.sort_by_key(|r| r.order);
        signals.sort_by_key(|r| r.order);

        debug_assert!(hard_reject.windows(2).all(|w| w[0].order != w[1].order), "duplicate hard-reject order");
        debug_assert!(signals.windows(2).all(|w| w[0].order != w[1].order), "duplicate signal order");

        CompiledRules { hard_reject, signals }
    }

    /// Metadata for every rule, hard-reject stage first.
    pub fn metas(&self) -> Vec<RuleMeta> {
        let hard = self.hard_reject.iter().map(|r| RuleMeta { name: r.name, stage: Stage::HardReject, order: r.order });
        let signals = self.signals.iter().map(|r| RuleMeta { name: r.name, stage: Stage::Signal, order: r.order });
        hard.chain(signals).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReasonCode, Signal};

    #[test]
    fn default_rules_are_split_and_ordered() {
        let compiled = CompiledRules::new(crate::rules::all());
        assert_eq!(compiled.metas().len(), 10);

        let codes: Vec<Outcome> = compiled.hard_reject.iter().map(|r| r.outcome).collect();
        assert_eq!(
            codes,
            vec![
                Outcome::Reject(ReasonCode::NontrNonperson),
                Outcome::Reject(ReasonCode::NontrSurnameMorph),
                Outcome::Reject(ReasonCode::ArabicParticle),
                Outcome::Reject(ReasonCode::ArabicSpellingVariant),
                Outcome::Reject(ReasonCode::WesternPair),
            ]
        );

        let signals: Vec<Outcome> = compiled.signals.iter().map(|r| r.outcome).collect();
        let expected: Vec<Outcome> = Signal::ALL.into_iter().map(Outcome::Signal).collect();
        assert_eq!(signals, expected);
    }

    #[test]
    fn order_wins_over_declaration_order() {
        let mut rules = crate::rules::signals::get();
        rules.reverse();
        let compiled = CompiledRules::new(rules);
        assert_eq!(compiled.signals.first().map(|r| r.name), Some("Turkish diacritic present"));
        assert!(compiled.metas().iter().all(|m| m.stage == Stage::Signal));
    }
}
