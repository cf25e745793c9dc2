// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AssignSlotPredicate - fills the candidate matching one slot per round.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Fills slot `round` of the candidate matching.
///
/// Each round offers one choice per participant, in ascending index order. A
/// participant already placed in an earlier slot fails that choice; otherwise they
/// are assigned (on the trail) and the predicate moves on to the next slot. After
/// the last slot it advances to the next predicate.
///
/// The nested ascending order means complete candidates are produced in
/// lexicographic order, starting with `[0, 1, ..., n - 1]`. There is no pruning
/// besides the visited check.
#[derive(Debug, Default)]
pub struct AssignSlotPredicate;

impl Predicate for AssignSlotPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let count = ctx.participant_count();
        if round >= count {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(count)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        if ctx.state.is_visited(choice) {
            return PredicateResult::Failure;
        }
        ctx.assign(round, choice);

        if round + 1 < ctx.participant_count() {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Success
        }
    }

    fn name(&self) -> &str {
        "AssignSlot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Problem;

    fn ctx() -> SearchContext {
        let problem = Problem::new(3, vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap();
        SearchContext::new(problem)
    }

    #[test]
    fn test_offers_one_choice_per_participant() {
        let mut ctx = ctx();
        let mut pred = AssignSlotPredicate;
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Choices(3));
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Failure);
    }

    #[test]
    fn test_visited_choice_fails() {
        let mut ctx = ctx();
        let mut pred = AssignSlotPredicate;
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::Failure);
        assert_eq!(ctx.state.slot(1), None);
    }

    #[test]
    fn test_last_slot_advances() {
        let mut ctx = ctx();
        let mut pred = AssignSlotPredicate;
        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.retry_pred(&mut ctx, 1, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.retry_pred(&mut ctx, 2, 1), PredicateResult::Success);
        assert_eq!(ctx.state.candidate(), Some(vec![2, 0, 1]));
        assert_eq!(ctx.trail.len(), 3);
    }
}
