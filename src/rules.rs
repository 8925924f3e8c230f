//! Rule sets.
//!
//! Rules are grouped by stage. Each stage module exposes `get()`, returning
//! its rules in declaration order; `engine::CompiledRules` sorts them by
//! `order` and keeps the stages apart.

pub(crate) mod hard_reject;
pub(crate) mod predicates;
pub(crate) mod signals;

#[cfg(test)]
mod tests;

use crate::Rule;

/// Every rule of every stage.
pub(crate) fn all() -> Vec<Rule> {
    let mut rules = hard_reject::get();
    rules.extend(signals::get());
    rules
}
