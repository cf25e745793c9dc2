// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable problem data.
//!
//! A [`Problem`] plays the role of precomputed, never-changing search data: the
//! participants and their rankings. It is built once, validated eagerly, and then
//! only read by the search. Mutable search state lives in
//! [`CandidateState`](crate::state::CandidateState).

mod errors;
mod participant;

pub use errors::ProblemError;
pub use participant::Participant;

use tracing::debug;

/// A validated stable roommates instance.
///
/// # Example
///
/// ```
/// use roommates_search::problem::Problem;
///
/// let problem = Problem::new(4, vec![
///     vec![1, 2, 3],
///     vec![0, 2, 3],
///     vec![0, 1, 3],
///     vec![0, 1, 2],
/// ]).unwrap();
/// assert_eq!(problem.participant_count(), 4);
/// assert_eq!(problem.room_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    participants: Vec<Participant>,
}

impl Problem {
    /// Build a problem from one ranking per participant.
    ///
    /// `preferences[i]` must contain every index in `[0, participant_count)`
    /// except `i`, exactly once.
    pub fn new(participant_count: usize, preferences: Vec<Vec<usize>>) -> Result<Self, ProblemError> {
        if participant_count == 0 {
            return Err(ProblemError::NoParticipants);
        }
        if preferences.len() != participant_count {
            return Err(ProblemError::WrongListCount {
                expected: participant_count,
                found: preferences.len(),
            });
        }

        let mut seen = vec![false; participant_count];
        for (participant, ranking) in preferences.iter().enumerate() {
            check_ranking(participant, ranking, &mut seen)?;
        }

        let participants = preferences
            .into_iter()
            .enumerate()
            .map(|(id, ranking)| Participant::new(id, ranking))
            .collect();

        debug!(participant_count, "problem validated");
        Ok(Self { participants })
    }

    /// Total number of participants.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Number of complete rooms a full matching would fill.
    pub fn room_count(&self) -> usize {
        self.participants.len() / 2
    }

    /// All participants, in index order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The participant with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn participant(&self, id: usize) -> &Participant {
        &self.participants[id]
    }
}

/// Check that `ranking` is a permutation of every index but `participant`.
///
/// `seen` is scratch space of length `participant_count`; it is left cleared.
fn check_ranking(participant: usize, ranking: &[usize], seen: &mut [bool]) -> Result<(), ProblemError> {
    let count = seen.len();
    if ranking.len() != count - 1 {
        return Err(ProblemError::WrongRankingLength {
            participant,
            expected: count - 1,
            found: ranking.len(),
        });
    }

    let mut result = Ok(());
    for &ranked in ranking {
        if ranked >= count {
            result = Err(ProblemError::OutOfRange { participant, ranked, count });
            break;
        }
        if ranked == participant {
            result = Err(ProblemError::SelfReference { participant });
            break;
        }
        if seen[ranked] {
            result = Err(ProblemError::Duplicate { participant, ranked });
            break;
        }
        seen[ranked] = true;
    }

    seen.iter_mut().for_each(|s| *s = false);
    result
}
