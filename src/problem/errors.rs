// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for problem construction.

use thiserror::Error;

/// Ways in which preference data can fail to describe a roommates problem.
///
/// All of these are detected when a [`Problem`](super::Problem) is built, so the
/// search itself never sees malformed rankings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// A problem needs at least one participant.
    #[error("participant count must be at least 1")]
    NoParticipants,

    /// The number of preference lists does not match the participant count.
    #[error("expected {expected} preference lists, found {found}")]
    WrongListCount { expected: usize, found: usize },

    /// A participant's ranking has the wrong number of entries.
    #[error("participant {participant} ranks {found} others, expected {expected}")]
    WrongRankingLength {
        participant: usize,
        expected: usize,
        found: usize,
    },

    /// A ranking names an index outside `[0, participant_count)`.
    #[error("participant {participant} ranks unknown participant {ranked} (count is {count})")]
    OutOfRange {
        participant: usize,
        ranked: usize,
        count: usize,
    },

    /// A participant ranks themself.
    #[error("participant {participant} ranks themself")]
    SelfReference { participant: usize },

    /// A ranking mentions the same participant twice.
    #[error("participant {participant} ranks participant {ranked} more than once")]
    Duplicate { participant: usize, ranked: usize },
}
