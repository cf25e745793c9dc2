// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the roommates search.
//!
//! Every slot assignment is recorded on the trail. When the engine backtracks it
//! rewinds the trail to a checkpoint, which pops the newer assignments in reverse
//! order and restores the candidate state: the slot becomes unset and the
//! participant's visited mark is cleared.

use crate::state::CandidateState;

/// A single entry in the trail, recording one slot assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: usize,
    participant: usize,
}

/// Undo log of slot assignments.
///
/// # Memory Model
///
/// - DYNAMIC: the trail changes during search
/// - Capacity is the participant count; the trail never holds more entries than
///   there are slots, so it is allocated once per search and reused
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail sized for `participant_count` assignments.
    pub fn with_capacity(participant_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(participant_count),
        }
    }

    /// Current position, usable with [`rewind_to`](Self::rewind_to).
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record that `participant` was placed in `slot`.
    pub(crate) fn record_assignment(&mut self, slot: usize, participant: usize) {
        self.entries.push(TrailEntry { slot, participant });
    }

    /// Undo every assignment recorded after `checkpoint`, newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to(&mut self, checkpoint: usize, state: &mut CandidateState) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                state.unassign(entry.slot, entry.participant);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
