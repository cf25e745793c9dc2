// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single participant and their ranking of everyone else.

/// A participant, identified by a zero-based index, with a strict ranking of all
/// other participants from most to least preferred.
///
/// Participants are only built through [`Problem::new`](super::Problem::new),
/// which checks that the ranking is a permutation of every other index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: usize,
    preferences: Vec<usize>,
}

impl Participant {
    pub(crate) fn new(id: usize, preferences: Vec<usize>) -> Self {
        Self { id, preferences }
    }

    /// The participant's index.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Ranking of the other participants, most preferred first.
    pub fn preferences(&self) -> &[usize] {
        &self.preferences
    }
}
