// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The engine follows a WAM-like execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use roommates_search::context::SearchContext;
//! use roommates_search::engine::EngineBuilder;
//! use roommates_search::predicates::{AssignSlotPredicate, SuspendPredicate};
//! use roommates_search::problem::Problem;
//!
//! let problem = Problem::new(2, vec![vec![1], vec![0]]).unwrap();
//! let mut ctx = SearchContext::new(problem);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(AssignSlotPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Suspended with the first full arrangement in place
//! assert!(engine.search(&mut ctx).is_some());
//! assert_eq!(ctx.state.candidate(), Some(vec![0, 1]));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use tracing::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. The search terminates when:
    /// - A predicate returns Suspend (paused for inspection)
    /// - All choices are exhausted and we backtrack past the first predicate (failure)
    ///
    /// Prefer [`EngineBuilder`], which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search to find one solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - the solution is the state left in `ctx`
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Success is indicated via side effects (state in `ctx`), not by the return
    /// value: programs never "complete", they either fail or suspend.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or
    /// SUSPEND), or if `retry_pred` returns `Choices` or `Suspend`.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return None; // Empty is exhausted
        }

        self.stack.push(StackEntry::new(0, 0, ctx.trail.checkpoint()));

        // Main execution loop
        while let Some(entry) = self.stack.last_mut() {
            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            let pred_idx = entry.predicate_index;
            let round = entry.round;

            let result = if !entry.in_choice_mode {
                // Call mode: try_pred
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);
                if matches!(
                    result,
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate
                ) {
                    // A deterministic success has no alternatives: on backtrack
                    // this entry is popped, not tried again.
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = 0;
                }
                result
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    // Exhausted all choices: backtrack
                    self.stack.pop();
                    continue;
                }
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);
                if matches!(result, PredicateResult::Choices(_) | PredicateResult::Suspend) {
                    panic!("retry_pred returned invalid result: {:?}", result);
                }
                result
            };

            match result {
                PredicateResult::Success => self.push_next_predicate(ctx),
                PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                PredicateResult::Failure => {
                    // In choice mode the loop moves on to the next choice
                    if !self.in_choice_mode() {
                        self.stack.pop();
                    }
                }
                PredicateResult::Choices(n) => {
                    let checkpoint = ctx.trail.checkpoint();
                    if let Some(entry) = self.stack.last_mut() {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = checkpoint;
                    }
                }
                PredicateResult::Suspend => {
                    trace!(
                        tries = self.try_count,
                        retries = self.retry_count,
                        "search suspended"
                    );
                    return Some(self);
                }
            }
        }

        trace!(
            tries = self.try_count,
            retries = self.retry_count,
            "search exhausted"
        );
        None
    }

    fn in_choice_mode(&self) -> bool {
        self.stack.last().is_some_and(|entry| entry.in_choice_mode)
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |entry| (entry.predicate_index, entry.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.checkpoint()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate program ending in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Finish the program with a terminal (FAIL or SUSPEND) predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(self, predicate: Box<T>) -> TerminatedBuilder {
        let mut predicates = self.predicates;
        predicates.push(predicate);
        TerminatedBuilder { predicates }
    }
}

/// An [`EngineBuilder`] whose program is complete.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
