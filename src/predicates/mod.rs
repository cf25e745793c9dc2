// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the search algorithm.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `assign`: AssignSlotPredicate, the backtracking enumeration of arrangements
//! - `stability`: StabilityPredicate, the check applied to each full arrangement
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod assign;
pub mod stability;

// Re-export main predicates for convenience
pub use assign::AssignSlotPredicate;
pub use stability::StabilityPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As the terminal predicate
/// of a program it makes the engine visit every alternative, which is how
/// exhaustive counts are taken.
///
/// # Example
///
/// ```
/// use roommates_search::context::SearchContext;
/// use roommates_search::engine::EngineBuilder;
/// use roommates_search::predicates::{AssignSlotPredicate, FailPredicate};
/// use roommates_search::problem::Problem;
/// use roommates_search::state::statistics::{Counters, Statistics};
///
/// let problem = Problem::new(3, vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap();
/// let mut ctx = SearchContext::new(problem);
/// let engine = EngineBuilder::new()
///     .add(Box::new(AssignSlotPredicate))
///     .add(Statistics::counting_predicate(Counters::StableCandidates, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Every one of the 3! arrangements is reached before the engine gives up
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.statistics.get(Counters::StableCandidates), 6);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Predicate that suspends execution, leaving the current state in the context.
///
/// Used as the terminal predicate when only the first solution is wanted.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
