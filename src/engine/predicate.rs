// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The predicate protocol the engine drives.
//!
//! A roommates program is a short chain: one predicate fills the candidate
//! matching slot by slot, the next judges the complete candidate, a counter
//! records the verdict and a terminal predicate ends the run.
//!
//! # Example
//!
//! A predicate that places participant `round` in slot `round` with no choice,
//! so the identity arrangement is the only candidate:
//!
//! ```
//! use roommates_search::context::SearchContext;
//! use roommates_search::engine::{Predicate, PredicateResult};
//!
//! #[derive(Debug)]
//! struct Identity;
//!
//! impl Predicate for Identity {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
//!         ctx.assign(round, round);
//!         if round + 1 < ctx.participant_count() {
//!             PredicateResult::SuccessSamePredicate
//!         } else {
//!             PredicateResult::Success
//!         }
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// What a predicate tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Move on to the next predicate.
    Success,

    /// Run this predicate again with `round + 1`. Used to fill one slot per round.
    SuccessSamePredicate,

    /// Nothing here works; the engine backtracks.
    Failure,

    /// `n` alternatives, explored through `retry_pred(round, 0..n)` in order.
    /// The slot filler offers one per participant.
    Choices(usize),

    /// Stop and hand control back with the candidate still in the context.
    Suspend,
}

/// Marks the predicates allowed to end a program: they only fail or suspend.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) accepts nothing
/// else.
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// State changes go through [`SearchContext::assign`], which records them on the
/// trail. The engine rewinds to the entry's checkpoint before every call, so each
/// choice sees the candidate as it was before any sibling choice ran, and a
/// predicate that succeeds from `try_pred` is never re-entered on backtracking.
pub trait Predicate: Debug {
    /// First call for `round`. Rounds start at 0 and advance on
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Explore alternative `choice` after `try_pred` returned `Choices(n)`.
    ///
    /// Only `Success`, `SuccessSamePredicate` or `Failure` are valid here.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Label used in panics and logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
