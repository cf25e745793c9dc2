// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, tracked on trail).
//!
//! The candidate matching being assembled by the search, plus the parallel
//! `visited` marks that keep assigned values pairwise distinct. All changes go
//! through [`SearchContext::assign`](crate::context::SearchContext::assign) so that
//! the trail can undo them on backtrack.

pub mod statistics;

/// Partially or fully assigned candidate matching.
///
/// Slot `2k` and `2k + 1` hold the two occupants of room `k`. Unassigned slots are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateState {
    slots: Vec<Option<usize>>,
    visited: Vec<bool>,
    assigned: usize,
}

impl CandidateState {
    /// Empty candidate for `participant_count` participants.
    pub fn new(participant_count: usize) -> Self {
        Self {
            slots: vec![None; participant_count],
            visited: vec![false; participant_count],
            assigned: 0,
        }
    }

    /// Number of slots (equal to the participant count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if there are no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `participant` already occupies some slot.
    pub fn is_visited(&self, participant: usize) -> bool {
        self.visited[participant]
    }

    /// Occupant of `slot`, if assigned.
    pub fn slot(&self, slot: usize) -> Option<usize> {
        self.slots[slot]
    }

    /// True once every slot holds a participant.
    pub fn is_complete(&self) -> bool {
        self.assigned == self.slots.len()
    }

    /// The full candidate, or `None` while any slot is unassigned.
    pub fn candidate(&self) -> Option<Vec<usize>> {
        self.slots.iter().copied().collect()
    }

    /// Place `participant` in `slot` and mark them visited.
    pub(crate) fn assign(&mut self, slot: usize, participant: usize) {
        debug_assert!(self.slots[slot].is_none(), "slot {} already assigned", slot);
        debug_assert!(!self.visited[participant], "participant {} already placed", participant);
        self.slots[slot] = Some(participant);
        self.visited[participant] = true;
        self.assigned += 1;
    }

    /// Undo an [`assign`](Self::assign).
    pub(crate) fn unassign(&mut self, slot: usize, participant: usize) {
        debug_assert_eq!(self.slots[slot], Some(participant));
        self.slots[slot] = None;
        self.visited[participant] = false;
        self.assigned -= 1;
    }
}
