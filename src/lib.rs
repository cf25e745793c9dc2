// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force search for stable roommates matchings.
//!
//! Given `2n` participants who each rank all the others, the solver looks for a
//! split into `n` rooms of two that the configured stability rule accepts. It does
//! not use Irving's algorithm: it enumerates every arrangement of participant
//! indices and returns the first one accepted.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Problem Data (Immutable)
//!
//! - [`Problem`]: participants and rankings, validated once on construction
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - [`Trail`] - records slot assignments for O(1) undo per step
//! - [`state::CandidateState`] - the candidate matching and its visited marks
//!
//! # Search Algorithm
//!
//! The search is a predicate program run by the backtracking [`SearchEngine`]:
//!
//! 1. **AssignSlotPredicate**: one round per slot, one choice per participant in
//!    ascending order, skipping anyone already placed
//! 2. **StabilityPredicate**: checks the complete candidate
//! 3. **Suspend** at the first accepted candidate, or **Fail** to count them all
//!
//! Candidates are therefore visited in lexicographic order and the result is
//! deterministic. The cost is up to `N!` candidates for `N` participants.
//!
//! # Stability rules
//!
//! The default [`StabilityRule::RoomLocal`] reproduces the solver's long-standing
//! per-room test. That test cannot fail on well-formed input, so any even-sized
//! problem is solved by `[0, 1, ..., N - 1]`. [`StabilityRule::BlockingPair`]
//! applies the textbook blocking-pair definition and must be asked for explicitly.
//! See the [`validator`] module.
//!
//! # Example
//!
//! ```
//! use roommates_search::{Problem, Solver, SolverConfig, StabilityRule};
//!
//! let problem = Problem::new(4, vec![
//!     vec![2, 3, 1],
//!     vec![3, 2, 0],
//!     vec![1, 0, 3],
//!     vec![0, 1, 2],
//! ]).unwrap();
//!
//! let solver = Solver::new(SolverConfig { rule: StabilityRule::BlockingPair });
//! let report = solver.find_stable_matching(&problem);
//! assert_eq!(report.matching.unwrap().as_slice(), &[0, 2, 1, 3]);
//! ```

pub mod context;
pub mod engine;
pub mod input;
pub mod matching;
pub mod predicates;
pub mod problem;
pub mod solver;
pub mod state;
pub mod trail;
pub mod validator;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use matching::{Matching, Room};
pub use problem::{Participant, Problem, ProblemError};
pub use solver::{solve, SearchReport, Solver, SolverConfig};
pub use trail::Trail;
pub use validator::{StabilityCheck, StabilityRule};
