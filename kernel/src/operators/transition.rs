//! Transition model: the per-move contract an agent replays against.

use crate::carrier::board::Board;
use crate::operators::apply::{apply, ApplyResult};
use crate::operators::moves::Move;

/// Computes successor boards, one operation per move direction.
///
/// [`TransitionModel::result`] dispatches a [`Move`] to the matching
/// operation; implementors only provide the four directional operations.
pub trait TransitionModel {
    /// Slide the blank one cell left.
    ///
    /// # Errors
    ///
    /// Fails if the blank is in the leftmost column.
    fn move_left(&self, board: &Board) -> ApplyResult;

    /// Slide the blank one cell right.
    ///
    /// # Errors
    ///
    /// Fails if the blank is in the rightmost column.
    fn move_right(&self, board: &Board) -> ApplyResult;

    /// Slide the blank one cell up.
    ///
    /// # Errors
    ///
    /// Fails if the blank is in the top row.
    fn move_up(&self, board: &Board) -> ApplyResult;

    /// Slide the blank one cell down.
    ///
    /// # Errors
    ///
    /// Fails if the blank is in the bottom row.
    fn move_down(&self, board: &Board) -> ApplyResult;

    /// Apply `mv` by delegating to the matching directional operation.
    ///
    /// # Errors
    ///
    /// Propagates the directional operation's failure.
    fn result(&self, board: &Board, mv: Move) -> ApplyResult {
        match mv {
            Move::Left => self.move_left(board),
            Move::Right => self.move_right(board),
            Move::Up => self.move_up(board),
            Move::Down => self.move_down(board),
        }
    }
}

/// The standard sliding-tile rules, backed by the kernel dispatch table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingTileModel;

impl TransitionModel for SlidingTileModel {
    fn move_left(&self, board: &Board) -> ApplyResult {
        apply(board, Move::Left)
    }

    fn move_right(&self, board: &Board) -> ApplyResult {
        apply(board, Move::Right)
    }

    fn move_up(&self, board: &Board) -> ApplyResult {
        apply(board, Move::Up)
    }

    fn move_down(&self, board: &Board) -> ApplyResult {
        apply(board, Move::Down)
    }
}
