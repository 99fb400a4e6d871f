//! Heuristic estimators.
//!
//! A heuristic maps a state to a non-negative estimate of the remaining
//! path cost. The engine's optimality guarantee needs it admissible (never
//! overestimates); the explored set without re-opening needs it consistent
//! (`h(s) <= 1 + h(s')` for every move `s -> s'`).

use tilepath_kernel::carrier::board::{Board, CELL_COUNT, MAX_TILE, WIDTH};

/// Trait for cost-to-go estimation.
pub trait Heuristic<S> {
    /// Estimate the remaining path cost from `state`.
    fn estimate(&self, state: &S) -> u32;
}

/// The zero heuristic. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> u32 {
        0
    }
}

/// Sum of per-tile Manhattan distances to a fixed goal board.
///
/// The blank is excluded. Each move changes exactly one tile's row or column
/// by one, so the estimate is both admissible and consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManhattanDistance {
    /// `goal_positions[label]` is the row-major goal index of tile `label`.
    /// Index 0 (the blank) is unused.
    goal_positions: [usize; CELL_COUNT],
}

impl ManhattanDistance {
    /// Build the goal table for `goal`.
    #[must_use]
    pub fn new(goal: &Board) -> Self {
        let mut goal_positions = [0usize; CELL_COUNT];
        for label in 1..=MAX_TILE {
            if let Some(index) = goal.position_of(label) {
                goal_positions[usize::from(label)] = index;
            }
        }
        Self { goal_positions }
    }

    /// The goal index recorded for `label`.
    #[must_use]
    pub fn goal_position(&self, label: u8) -> Option<usize> {
        (1..=MAX_TILE)
            .contains(&label)
            .then(|| self.goal_positions[usize::from(label)])
    }
}

impl Default for ManhattanDistance {
    /// Goal table for [`Board::GOAL`].
    fn default() -> Self {
        Self::new(&Board::GOAL)
    }
}

impl Heuristic<Board> for ManhattanDistance {
    fn estimate(&self, state: &Board) -> u32 {
        let mut total = 0usize;
        for index in 0..CELL_COUNT {
            let Some(label) = state.cell(index) else {
                continue;
            };
            let goal = self.goal_positions[usize::from(label)];
            total += (index / WIDTH).abs_diff(goal / WIDTH) + (index % WIDTH).abs_diff(goal % WIDTH);
        }
        // At most 8 tiles x 4 steps.
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}
