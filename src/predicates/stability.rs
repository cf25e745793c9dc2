// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StabilityPredicate - runs the configured stability check on a full candidate.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::validator::{StabilityCheck, StabilityRule};
use tracing::trace;

/// Succeeds when the complete candidate in the context is stable, fails otherwise.
///
/// Every invocation on a complete candidate is counted under
/// [`Counters::CandidatesChecked`].
#[derive(Debug)]
pub struct StabilityPredicate {
    check: Box<dyn StabilityCheck>,
}

impl StabilityPredicate {
    pub fn new(rule: StabilityRule) -> Self {
        Self { check: rule.check() }
    }

    /// Use a custom check instead of one of the built-in rules.
    pub fn with_check(check: Box<dyn StabilityCheck>) -> Self {
        Self { check }
    }
}

impl Predicate for StabilityPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let Some(candidate) = ctx.state.candidate() else {
            return PredicateResult::Failure;
        };

        ctx.statistics.increment_counter(Counters::CandidatesChecked);
        let stable = self.check.is_stable(&ctx.problem, &candidate);
        trace!(?candidate, stable, "candidate checked");

        if stable {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Stability"
    }
}
