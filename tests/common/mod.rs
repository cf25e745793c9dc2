// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roommates_search::Problem;

/// Everyone ranks the others in ascending index order.
pub fn index_order(count: usize) -> Problem {
    let prefs = (0..count)
        .map(|i| (0..count).filter(|&j| j != i).collect())
        .collect();
    Problem::new(count, prefs).expect("index order is a valid problem")
}

/// Rankings shuffled with a seeded RNG. Same seed = same problem.
pub fn random_problem(count: usize, seed: u64) -> Problem {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let prefs = (0..count)
        .map(|i| {
            let mut others: Vec<usize> = (0..count).filter(|&j| j != i).collect();
            others.shuffle(&mut rng);
            others
        })
        .collect();
    Problem::new(count, prefs).expect("shuffled rankings are a valid problem")
}

/// Participant 3 is everyone's last choice and 0, 1, 2 chase each other in a
/// cycle, so every pairing has a blocking pair.
pub fn odd_cycle() -> Problem {
    Problem::new(
        4,
        vec![vec![1, 2, 3], vec![2, 0, 3], vec![0, 1, 3], vec![0, 1, 2]],
    )
    .expect("odd cycle is a valid problem")
}

/// Two stable pairings, {0-2, 1-3} and {0-3, 1-2}; the index-order pairing
/// {0-1, 2-3} is blocked by 0 and 2.
pub fn two_stable_pairings() -> Problem {
    Problem::new(
        4,
        vec![vec![2, 3, 1], vec![3, 2, 0], vec![1, 0, 3], vec![0, 1, 2]],
    )
    .expect("two stable pairings is a valid problem")
}

/// True if `matching` holds each of `0..count` exactly once.
pub fn is_permutation(matching: &[usize], count: usize) -> bool {
    let mut sorted = matching.to_vec();
    sorted.sort_unstable();
    sorted == (0..count).collect::<Vec<_>>()
}

/// All permutations of `0..count` in lexicographic order.
pub fn permutations(count: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; count], &mut out);
    out
}
