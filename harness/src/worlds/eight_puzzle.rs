//! `EightPuzzleProblem`: the sliding-tile problem definition.
//!
//! Adapts kernel boards and moves to the search contract. Actions are the
//! legal blank moves in [`Move::ALL`] order; results come from the kernel
//! dispatch table.

use tilepath_kernel::carrier::board::{Board, BoardError, CELL_COUNT};
use tilepath_kernel::operators::apply::{apply, legal_moves};
use tilepath_kernel::operators::moves::Move;
use tilepath_kernel::proof::hash::{board_fingerprint, ContentHash};

use tilepath_search::contract::{ReportableProblem, SearchProblem};
use tilepath_search::heuristic::ManhattanDistance;
use tilepath_search::search::solution;

/// Problem identifier bound into search reports.
pub const PROBLEM_ID: &str = "eight_puzzle:v1";

/// An eight-puzzle instance: start board, goal board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzleProblem {
    initial_state: Board,
    goal_state: Board,
}

impl EightPuzzleProblem {
    /// Construct from validated boards.
    #[must_use]
    pub fn new(initial_state: Board, goal_state: Board) -> Self {
        Self {
            initial_state,
            goal_state,
        }
    }

    /// Construct towards the conventional goal [`Board::GOAL`].
    #[must_use]
    pub fn towards_standard_goal(initial_state: Board) -> Self {
        Self::new(initial_state, Board::GOAL)
    }

    /// Construct from raw cells, `None` marking the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if either cell sequence is malformed.
    pub fn from_cells(
        initial: [Option<u8>; CELL_COUNT],
        goal: [Option<u8>; CELL_COUNT],
    ) -> Result<Self, BoardError> {
        Ok(Self::new(Board::from_cells(initial)?, Board::from_cells(goal)?))
    }

    /// Whether the goal is in the same parity class as the start.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.initial_state.is_solvable_towards(&self.goal_state)
    }

    /// Manhattan-distance heuristic for this instance's goal.
    #[must_use]
    pub fn heuristic(&self) -> ManhattanDistance {
        ManhattanDistance::new(&self.goal_state)
    }

    /// Optimal move sequence from start to goal; empty if none exists.
    #[must_use]
    pub fn solve(&self) -> Vec<Move> {
        solution(self, &self.heuristic())
    }
}

impl SearchProblem for EightPuzzleProblem {
    type State = Board;
    type Action = Move;

    fn initial_state(&self) -> &Board {
        &self.initial_state
    }

    fn goal_state(&self) -> &Board {
        &self.goal_state
    }

    fn actions(&self, state: &Board) -> Vec<Move> {
        legal_moves(state)
    }

    /// # Panics
    ///
    /// Panics if `action` is not legal in `state`. The search engine only
    /// passes actions returned by [`SearchProblem::actions`].
    fn result(&self, state: &Board, action: &Move) -> Board {
        match apply(state, *action) {
            Ok(next) => next,
            Err(failure) => panic!("eight puzzle contract violation: {failure}"),
        }
    }
}

impl ReportableProblem for EightPuzzleProblem {
    fn problem_id(&self) -> &str {
        PROBLEM_ID
    }

    fn state_fingerprint(&self, state: &Board) -> ContentHash {
        board_fingerprint(state)
    }

    fn action_label(&self, action: &Move) -> String {
        action.name().to_string()
    }
}
