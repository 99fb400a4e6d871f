//! Shared helpers for tilepath benchmark suites.

use tilepath_harness::worlds::eight_puzzle::EightPuzzleProblem;
use tilepath_kernel::carrier::board::Board;

/// A named benchmark puzzle.
pub struct Regime {
    pub name: &'static str,
    pub problem: EightPuzzleProblem,
}

/// Start boards of increasing difficulty, all towards [`Board::GOAL`].
const REGIMES: [(&str, &str); 4] = [
    ("one_move", "1_2/345/678"),
    ("row_shift", "123/_45/678"),
    ("scrambled_26", "724/5_6/831"),
    ("hard_27", "867/254/3_1"),
];

/// The solvable benchmark puzzles.
///
/// # Panics
///
/// Panics if a built-in board fails to parse. Benchmark setup failures are fatal.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    REGIMES
        .iter()
        .map(|&(name, text)| Regime {
            name,
            problem: EightPuzzleProblem::towards_standard_goal(Board::parse(text).expect("regime board")),
        })
        .collect()
}

/// A board in the other parity class: search must exhaust 181 440 states.
///
/// # Panics
///
/// Panics if the built-in board fails to parse.
#[must_use]
pub fn unsolvable() -> EightPuzzleProblem {
    EightPuzzleProblem::towards_standard_goal(Board::parse("_21/345/678").expect("unsolvable board"))
}

/// Every board within `depth` moves of the goal, breadth-first order.
///
/// # Panics
///
/// Panics if the kernel rejects a move reported as legal.
#[must_use]
pub fn boards_near_goal(depth: usize) -> Vec<Board> {
    use std::collections::HashSet;

    use tilepath_kernel::operators::apply::{apply, legal_moves};

    let mut seen = HashSet::from([Board::GOAL]);
    let mut layer = vec![Board::GOAL];
    let mut all = layer.clone();
    for _ in 0..depth {
        let mut next = Vec::new();
        for board in &layer {
            for mv in legal_moves(board) {
                let child = apply(board, mv).expect("legal move applies");
                if seen.insert(child) {
                    next.push(child);
                }
            }
        }
        all.extend_from_slice(&next);
        layer = next;
    }
    all
}
