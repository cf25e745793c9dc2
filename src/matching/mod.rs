// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search results and their room view.

use serde::Serialize;
use std::fmt;

/// A complete arrangement returned by the solver.
///
/// Consecutive pairs of entries share a room. For the single-participant
/// shortcut the matching is just `[0]` and has no rooms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Matching(Vec<usize>);

impl Matching {
    pub(crate) fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// Participant indices in slot order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rooms in order, numbered from 1.
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
    /// ]).unwrap().unwrap();
    /// let rooms: Vec<String> = matching.rooms().map(|room| room.to_string()).collect();
    /// assert_eq!(rooms, ["Room 1: Person 0 and Person 1", "Room 2: Person 2 and Person 3"]);
    /// ```
    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        self.0
            .chunks_exact(2)
            .enumerate()
            .map(|(k, pair)| Room {
                number: k + 1,
                occupants: [pair[0], pair[1]],
            })
    }
}

impl AsRef<[usize]> for Matching {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Two participants sharing a numbered room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Room {
    /// Room number, starting at 1.
    pub number: usize,
    pub occupants: [usize; 2],
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}: Person {} and Person {}",
            self.number, self.occupants[0], self.occupants[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms() {
        let matching = Matching::new(vec![0, 2, 1, 3]);
        let rooms: Vec<Room> = matching.rooms().collect();
        assert_eq!(
            rooms,
            vec![
                Room { number: 1, occupants: [0, 2] },
                Room { number: 2, occupants: [1, 3] },
            ]
        );
    }

    #[test]
    fn test_singleton_has_no_rooms() {
        let matching = Matching::new(vec![0]);
        assert_eq!(matching.len(), 1);
        assert_eq!(matching.rooms().count(), 0);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let matching = Matching::new(vec![1, 0]);
        assert_eq!(serde_json::to_string(&matching).unwrap(), "[1,0]");
    }
}
