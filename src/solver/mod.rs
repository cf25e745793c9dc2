// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver entry points.
//!
//! The solver assembles a predicate program and runs it on a fresh
//! [`SearchContext`]:
//!
//! ```text
//! AssignSlot (one round per slot, one choice per participant)
//!   -> Stability (configured rule)
//!   -> count StableCandidates
//!   -> Suspend (first match) | Fail (exhaustive count)
//! ```
//!
//! The search walks every arrangement of participant indices in lexicographic
//! order, so for `N` participants it may check up to `N!` candidates. The first
//! accepted arrangement is the one returned.

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine, TerminalPredicate};
use crate::matching::Matching;
use crate::predicates::{AssignSlotPredicate, FailPredicate, StabilityPredicate, SuspendPredicate};
use crate::problem::{Problem, ProblemError};
use crate::state::statistics::{Counters, Statistics};
use crate::validator::StabilityRule;
use serde::Deserialize;
use tracing::{debug, info, info_span};

/// Solver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Stability rule applied to each complete candidate.
    pub rule: StabilityRule,
}

/// Outcome of one search, with the counters it accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The first accepted arrangement, if the search stopped at one.
    pub matching: Option<Matching>,
    pub statistics: Statistics,
}

impl SearchReport {
    /// Shorthand for the stable-candidate counter.
    pub fn stable_candidates(&self) -> u64 {
        self.statistics.get(Counters::StableCandidates)
    }

    /// Shorthand for the number of validator invocations.
    pub fn candidates_checked(&self) -> u64 {
        self.statistics.get(Counters::CandidatesChecked)
    }
}

/// Brute-force stable roommates solver.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for the first stable arrangement in ascending enumeration order.
    ///
    /// A single participant short-circuits to the placeholder matching `[0]`
    /// without searching.
    pub fn find_stable_matching(&self, problem: &Problem) -> SearchReport {
        let _span = info_span!(
            "find_stable_matching",
            participants = problem.participant_count(),
            rule = ?self.config.rule
        )
        .entered();

        if problem.participant_count() == 1 {
            debug!("single participant, skipping search");
            return SearchReport {
                matching: Some(Matching::new(vec![0])),
                statistics: Statistics::new(),
            };
        }

        let mut ctx = SearchContext::new(problem.clone());
        let engine = self.program(SuspendPredicate);
        let matching = engine
            .search(&mut ctx)
            .and_then(|_suspended| ctx.state.candidate())
            .map(Matching::new);

        match &matching {
            Some(found) => info!(matching = ?found.as_slice(), checked = ctx.statistics.get(Counters::CandidatesChecked), "stable matching found"),
            None => info!(checked = ctx.statistics.get(Counters::CandidatesChecked), "no stable matching"),
        }

        SearchReport {
            matching,
            statistics: ctx.statistics,
        }
    }

    /// Visit every arrangement and count those the rule accepts.
    ///
    /// The count is of arrangements, not of distinct pairings: each pairing of
    /// `2n` participants appears `n! * 2^n` times. A single participant counts as
    /// one placeholder arrangement.
    pub fn count_stable(&self, problem: &Problem) -> SearchReport {
        let _span = info_span!(
            "count_stable",
            participants = problem.participant_count(),
            rule = ?self.config.rule
        )
        .entered();

        if problem.participant_count() == 1 {
            let mut statistics = Statistics::new();
            statistics.increment_counter(Counters::StableCandidates);
            return SearchReport {
                matching: None,
                statistics,
            };
        }

        let mut ctx = SearchContext::new(problem.clone());
        let engine = self.program(FailPredicate);
        // A Fail-terminated program only ever exhausts.
        let _ = engine.search(&mut ctx);

        info!(
            stable = ctx.statistics.get(Counters::StableCandidates),
            checked = ctx.statistics.get(Counters::CandidatesChecked),
            "exhaustive count complete"
        );

        SearchReport {
            matching: None,
            statistics: ctx.statistics,
        }
    }

    fn program<T: TerminalPredicate + 'static>(&self, terminal: T) -> SearchEngine {
        EngineBuilder::new()
            .add(Box::new(AssignSlotPredicate))
            .add(Box::new(StabilityPredicate::new(self.config.rule)))
            .add(Statistics::counting_predicate(Counters::StableCandidates, None))
            .terminal(Box::new(terminal))
            .build()
    }
}

/// Validate the input and return the first stable matching, if any.
///
/// Uses the default (room-local) rule. Malformed preferences are rejected before
/// any search starts.
///
/// # Example
///
/// ```
/// use roommates_search::solve;
///
/// let matching = solve(4, vec![
///     vec![1, 2, 3],
///     vec![0, 2, 3],
///     vec![0, 1, 3],
///     vec![0, 1, 2],
/// ]).unwrap();
/// assert_eq!(matching.unwrap().as_slice(), &[0, 1, 2, 3]);
///
/// assert!(solve(4, vec![vec![1, 2]; 4]).is_err());
/// ```
pub fn solve(participant_count: usize, preferences: Vec<Vec<usize>>) -> Result<Option<Matching>, ProblemError> {
    let problem = Problem::new(participant_count, preferences)?;
    Ok(Solver::default().find_stable_matching(&problem).matching)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_order(count: usize) -> Problem {
        let prefs = (0..count)
            .map(|i| (0..count).filter(|&j| j != i).collect())
            .collect();
        Problem::new(count, prefs).unwrap()
    }

    #[test]
    fn test_single_participant_shortcut() {
        let report = Solver::default().find_stable_matching(&index_order(1));
        assert_eq!(report.matching.as_ref().unwrap().as_slice(), &[0]);
        assert_eq!(report.candidates_checked(), 0);
    }

    #[test]
    fn test_two_participants() {
        let report = Solver::default().find_stable_matching(&index_order(2));
        assert_eq!(report.matching.as_ref().unwrap().as_slice(), &[0, 1]);
        assert_eq!(report.candidates_checked(), 1);
        assert_eq!(report.stable_candidates(), 1);
        assert_eq!(report.statistics.get(Counters::Assignments), 2);
    }

    #[test]
    fn test_odd_count_exhausts_room_local() {
        let report = Solver::default().find_stable_matching(&index_order(3));
        assert!(report.matching.is_none());
        assert_eq!(report.candidates_checked(), 6);
        assert_eq!(report.stable_candidates(), 0);
    }

    #[test]
    fn test_count_stable_room_local() {
        let report = Solver::default().count_stable(&index_order(4));
        assert!(report.matching.is_none());
        assert_eq!(report.candidates_checked(), 24);
        assert_eq!(report.stable_candidates(), 24);
    }

    #[test]
    fn test_count_stable_two_participants() {
        // [0, 1] and [1, 0] both pass, and the search still terminates.
        let report = Solver::default().count_stable(&index_order(2));
        assert_eq!(report.stable_candidates(), 2);
        assert_eq!(report.candidates_checked(), 2);
    }

    #[test]
    fn test_count_stable_single() {
        assert_eq!(Solver::default().count_stable(&index_order(1)).stable_candidates(), 1);
    }

    #[test]
    fn test_config_deserializes() {
        let config: SolverConfig = serde_json::from_str(r#"{"rule": "blocking-pair"}"#).unwrap();
        assert_eq!(config.rule, StabilityRule::BlockingPair);
        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_solve_rejects_invalid_input() {
        let err = solve(4, vec![vec![1, 2, 3], vec![0, 2], vec![0, 1, 3], vec![0, 1, 2]]).unwrap_err();
        assert_eq!(
            err,
            ProblemError::WrongRankingLength {
                participant: 1,
                expected: 3,
                found: 2
            }
        );
    }
}
