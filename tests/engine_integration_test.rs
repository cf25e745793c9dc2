// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Enumerates arrangements in lexicographic order
//! - Backtracks on failure and restores state via the trail
//! - Suspends execution when requested

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{index_order, permutations, two_stable_pairings};
use roommates_search::context::SearchContext;
use roommates_search::engine::{EngineBuilder, Predicate, PredicateResult};
use roommates_search::predicates::{
    AssignSlotPredicate, FailPredicate, StabilityPredicate, SuspendPredicate,
};
use roommates_search::state::statistics::{Counters, Statistics};
use roommates_search::state::CandidateState;
use roommates_search::StabilityRule;

/// Records every complete arrangement it is reached with.
#[derive(Debug, Default)]
struct RecordPredicate {
    seen: Rc<RefCell<Vec<Vec<usize>>>>,
}

impl Predicate for RecordPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if let Some(candidate) = ctx.state.candidate() {
            self.seen.borrow_mut().push(candidate);
        }
        PredicateResult::Success
    }
}

#[test]
fn test_assign_and_suspend_statistics() {
    let mut ctx = SearchContext::new(index_order(2));
    let engine = EngineBuilder::new()
        .add(Box::new(AssignSlotPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let engine = engine.search(&mut ctx).expect("should suspend");
    // Two AssignSlot rounds plus Suspend; slot 1 retries the visited 0 before 1
    assert_eq!(engine.statistics(), (3, 3));
    assert_eq!(ctx.state.candidate(), Some(vec![0, 1]));
}

#[test]
fn test_enumerates_in_lexicographic_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = SearchContext::new(index_order(4));
    let engine = EngineBuilder::new()
        .add(Box::new(AssignSlotPredicate))
        .add(Box::new(RecordPredicate { seen: Rc::clone(&seen) }))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(*seen.borrow(), permutations(4));
}

#[test]
fn test_exhaustive_count() {
    let mut ctx = SearchContext::new(index_order(4));
    let engine = EngineBuilder::new()
        .add(Box::new(AssignSlotPredicate))
        .add(Statistics::counting_predicate(Counters::StableCandidates, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::StableCandidates), 24);
}

#[test]
fn test_state_restored_after_exhaustion() {
    let mut ctx = SearchContext::new(two_stable_pairings());
    let engine = EngineBuilder::new()
        .add(Box::new(AssignSlotPredicate))
        .add(Box::new(StabilityPredicate::new(StabilityRule::BlockingPair)))
        .add(Statistics::counting_predicate(Counters::StableCandidates, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::StableCandidates), 16);
    assert!(ctx.trail.is_empty());
    assert_eq!(ctx.state, CandidateState::new(4));
}

#[test]
fn test_suspend_leaves_first_stable_candidate() {
    let mut ctx = SearchContext::new(two_stable_pairings());
    let engine = EngineBuilder::new()
        .add(Box::new(AssignSlotPredicate))
        .add(Box::new(StabilityPredicate::new(StabilityRule::BlockingPair)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(engine.search(&mut ctx).is_some());
    assert_eq!(ctx.state.candidate(), Some(vec![0, 2, 1, 3]));
    assert_eq!(ctx.trail.len(), 4);
    assert_eq!(ctx.statistics.get(Counters::CandidatesChecked), 3);
}
