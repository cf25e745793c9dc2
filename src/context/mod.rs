// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining problem data and dynamic state.
//!
//! The SearchContext is the core data structure passed to every predicate:
//! - The [`Problem`]: immutable participants and rankings
//! - The [`CandidateState`]: the matching being assembled, tracked on the trail
//! - The [`Trail`]: undo log for backtracking
//! - The [`Statistics`]: counters updated as the search runs

use crate::problem::Problem;
use crate::state::statistics::{Counters, Statistics};
use crate::state::CandidateState;
use crate::trail::Trail;

/// Search context combining problem data and mutable search state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     problem: Problem,          // Immutable, read by the validator
///     trail: Trail,              // Mutable, undo log
///     state: CandidateState,     // Mutable, restored via trail
///     statistics: Statistics,    // Mutable, never rewound
/// }
/// ```
///
/// # Example
///
/// ```
/// use roommates_search::context::SearchContext;
/// use roommates_search::problem::Problem;
///
/// let problem = Problem::new(2, vec![vec![1], vec![0]]).unwrap();
/// let mut ctx = SearchContext::new(problem);
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.assign(0, 1);
/// assert!(ctx.state.is_visited(1));
/// ctx.rewind_to(checkpoint);
/// assert!(!ctx.state.is_visited(1));
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Participants and rankings
    pub problem: Problem,
    /// Undo log of assignments
    pub trail: Trail,
    /// Candidate matching under construction
    pub state: CandidateState,
    /// Search counters
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a fresh context with every slot unset.
    pub fn new(problem: Problem) -> Self {
        let count = problem.participant_count();
        Self {
            problem,
            trail: Trail::with_capacity(count),
            state: CandidateState::new(count),
            statistics: Statistics::new(),
        }
    }

    /// Place `participant` in `slot`, recording the change on the trail.
    pub fn assign(&mut self, slot: usize, participant: usize) {
        self.state.assign(slot, participant);
        self.trail.record_assignment(slot, participant);
        self.statistics.increment_counter(Counters::Assignments);
    }

    /// Undo all assignments made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }

    /// Number of participants (and slots).
    pub fn participant_count(&self) -> usize {
        self.problem.participant_count()
    }
}
