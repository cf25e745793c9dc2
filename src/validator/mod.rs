// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stability checks for complete candidate matchings.
//!
//! A candidate is a sequence of participant indices where slots `2k` and `2k + 1`
//! are the occupants of room `k`. Two rules are available:
//!
//! - [`RoomLocalCheck`] (the default): each room is accepted when
//!   `is_preferred_over(a, b, b)` or `is_preferred_over(b, a, b)` holds for its
//!   occupants `a`, `b`, and every participant must appear in some room. For a
//!   well-formed problem the room test always passes, so any complete arrangement
//!   of an even number of participants is accepted. This is the historical
//!   behaviour of the solver and is kept exactly.
//! - [`BlockingPairCheck`]: the textbook definition. A perfect pairing is stable
//!   when no two participants who are not roommates each prefer the other over
//!   their own roommate. Only used when selected explicitly.

use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;

/// Which stability rule the solver applies to complete candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StabilityRule {
    /// Per-room preference test plus coverage check.
    #[default]
    RoomLocal,
    /// No blocking pair anywhere in the matching.
    BlockingPair,
}

impl StabilityRule {
    /// The check implementing this rule.
    pub fn check(self) -> Box<dyn StabilityCheck> {
        match self {
            StabilityRule::RoomLocal => Box::new(RoomLocalCheck),
            StabilityRule::BlockingPair => Box::new(BlockingPairCheck),
        }
    }
}

/// Decides whether a complete candidate matching is stable.
pub trait StabilityCheck: Debug {
    /// `matching` must hold every slot; it is not modified.
    fn is_stable(&self, problem: &Problem, matching: &[usize]) -> bool;
}

/// Whether `participant` meets `a` before `b` when scanning their ranking.
///
/// Returns `true` on first meeting `a`, `false` on first meeting `b`, and `false`
/// if neither appears.
pub fn is_preferred_over(problem: &Problem, participant: usize, a: usize, b: usize) -> bool {
    for &pref in problem.participant(participant).preferences() {
        if pref == a {
            return true;
        }
        if pref == b {
            return false;
        }
    }
    false
}

/// Per-room check, matching the solver's historical behaviour.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomLocalCheck;

impl StabilityCheck for RoomLocalCheck {
    fn is_stable(&self, problem: &Problem, matching: &[usize]) -> bool {
        let count = problem.participant_count();
        let mut seen = HashSet::with_capacity(matching.len());

        // A trailing odd slot forms no room and is never added to `seen`.
        for room in matching.chunks_exact(2) {
            let (first, second) = (room[0], room[1]);
            if first >= count || second >= count {
                return false;
            }
            if !is_preferred_over(problem, first, second, second)
                && !is_preferred_over(problem, second, first, second)
            {
                return false;
            }
            seen.insert(first);
            seen.insert(second);
        }

        seen.len() == count
    }
}

/// Textbook stable roommates check: perfect pairing with no blocking pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPairCheck;

impl StabilityCheck for BlockingPairCheck {
    fn is_stable(&self, problem: &Problem, matching: &[usize]) -> bool {
        let count = problem.participant_count();
        if matching.len() != count || count % 2 != 0 {
            return false;
        }

        let mut partner = vec![None; count];
        for room in matching.chunks_exact(2) {
            let (first, second) = (room[0], room[1]);
            if first >= count || second >= count || partner[first].is_some() || partner[second].is_some() {
                return false;
            }
            partner[first] = Some(second);
            partner[second] = Some(first);
        }
        let partner: Option<Vec<usize>> = partner.into_iter().collect();
        let Some(partner) = partner else {
            return false;
        };

        for x in 0..count {
            for y in (x + 1)..count {
                if partner[x] == y {
                    continue;
                }
                if is_preferred_over(problem, x, y, partner[x])
                    && is_preferred_over(problem, y, x, partner[y])
                {
                    return false;
                }
            }
        }
        true
    }
}
