//! `apply()`: apply a [`Move`] to a [`Board`], producing the successor board.
//!
//! The move set is closed, so dispatch is a fixed table indexed by the
//! `Move` discriminant rather than a registry lookup. Each handler checks its
//! own edge precondition and fails closed.

use crate::carrier::board::{Board, WIDTH};
use crate::operators::moves::Move;

/// Typed failure for move application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyFailure {
    /// The blank is on the edge the move would push it across.
    #[error("cannot move blank {mv} from index {blank_index}")]
    IllegalMove { mv: Move, blank_index: usize },
}

/// Result type for apply.
pub type ApplyResult = Result<Board, ApplyFailure>;

/// Type alias for dispatch handler functions.
type DispatchHandler = fn(&Board) -> ApplyResult;

/// Handlers indexed by `Move as usize`. Order must match [`Move::ALL`].
const DISPATCH_TABLE: [DispatchHandler; 4] = [move_left, move_right, move_up, move_down];

/// Apply `mv` to `board`.
///
/// # Errors
///
/// Returns [`ApplyFailure::IllegalMove`] if the blank would leave the grid.
pub fn apply(board: &Board, mv: Move) -> ApplyResult {
    let handler = DISPATCH_TABLE[mv as usize];
    handler(board)
}

/// Whether `mv` keeps the blank on the grid.
#[must_use]
pub fn is_legal(board: &Board, mv: Move) -> bool {
    let blank = board.blank_index();
    let (row, col) = (blank / WIDTH, blank % WIDTH);
    match mv {
        Move::Left => col > 0,
        Move::Right => col + 1 < WIDTH,
        Move::Up => row > 0,
        Move::Down => row + 1 < WIDTH,
    }
}

/// Legal moves from `board`, in [`Move::ALL`] order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .into_iter()
        .filter(|&mv| is_legal(board, mv))
        .collect()
}

fn slide(board: &Board, mv: Move, offset: isize) -> ApplyResult {
    let blank_index = board.blank_index();
    if !is_legal(board, mv) {
        return Err(ApplyFailure::IllegalMove { mv, blank_index });
    }
    let target = blank_index
        .checked_add_signed(offset)
        .ok_or(ApplyFailure::IllegalMove { mv, blank_index })?;
    Ok(board.swap_blank_with(target))
}

fn move_left(board: &Board) -> ApplyResult {
    slide(board, Move::Left, -1)
}

fn move_right(board: &Board) -> ApplyResult {
    slide(board, Move::Right, 1)
}

#[allow(clippy::cast_possible_wrap)]
fn move_up(board: &Board) -> ApplyResult {
    slide(board, Move::Up, -(WIDTH as isize))
}

#[allow(clippy::cast_possible_wrap)]
fn move_down(board: &Board) -> ApplyResult {
    slide(board, Move::Down, WIDTH as isize)
}
