//! `EightPuzzleAgent`: replays a precomputed move sequence.
//!
//! The agent does no search. It holds the current board, a FIFO queue of
//! moves and a [`TransitionModel`]; each performed move replaces the board
//! with the model's successor.

use std::collections::VecDeque;

use tilepath_kernel::carrier::board::Board;
use tilepath_kernel::operators::apply::ApplyFailure;
use tilepath_kernel::operators::moves::Move;
use tilepath_kernel::operators::transition::{SlidingTileModel, TransitionModel};

/// Goal-based agent that emits and performs the moves of a solution.
#[derive(Debug, Clone)]
pub struct EightPuzzleAgent<M = SlidingTileModel> {
    current_state: Board,
    model: M,
    actions: VecDeque<Move>,
}

impl<M: TransitionModel> EightPuzzleAgent<M> {
    /// Create an agent at `initial_state` that will emit `actions` in order.
    pub fn new(initial_state: Board, model: M, actions: impl IntoIterator<Item = Move>) -> Self {
        Self {
            current_state: initial_state,
            model,
            actions: actions.into_iter().collect(),
        }
    }

    /// The board the agent currently believes it is in.
    #[must_use]
    pub fn current_state(&self) -> &Board {
        &self.current_state
    }

    /// Whether any queued moves remain.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Number of queued moves.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }

    /// Dequeue the next move, if any. Does not change the board.
    pub fn next_action(&mut self) -> Option<Move> {
        self.actions.pop_front()
    }

    /// Perform `mv` through the transition model.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyFailure`] if the model rejects the move. The current
    /// board is left unchanged.
    pub fn perform(&mut self, mv: Move) -> Result<&Board, ApplyFailure> {
        self.current_state = self.model.result(&self.current_state, mv)?;
        log::debug!("performed {mv}: {:?}", self.current_state);
        Ok(&self.current_state)
    }

    /// Slide the blank left.
    ///
    /// # Errors
    ///
    /// See [`EightPuzzleAgent::perform`].
    pub fn move_left(&mut self) -> Result<&Board, ApplyFailure> {
        self.perform(Move::Left)
    }

    /// Slide the blank right.
    ///
    /// # Errors
    ///
    /// See [`EightPuzzleAgent::perform`].
    pub fn move_right(&mut self) -> Result<&Board, ApplyFailure> {
        self.perform(Move::Right)
    }

    /// Slide the blank up.
    ///
    /// # Errors
    ///
    /// See [`EightPuzzleAgent::perform`].
    pub fn move_up(&mut self) -> Result<&Board, ApplyFailure> {
        self.perform(Move::Up)
    }

    /// Slide the blank down.
    ///
    /// # Errors
    ///
    /// See [`EightPuzzleAgent::perform`].
    pub fn move_down(&mut self) -> Result<&Board, ApplyFailure> {
        self.perform(Move::Down)
    }

    /// Dequeue and perform the next move. `Ok(None)` once the queue is empty.
    ///
    /// # Errors
    ///
    /// See [`EightPuzzleAgent::perform`].
    pub fn step(&mut self) -> Result<Option<Move>, ApplyFailure> {
        let Some(mv) = self.next_action() else {
            return Ok(None);
        };
        self.perform(mv)?;
        Ok(Some(mv))
    }

    /// Perform every queued move and return the final board.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move; moves after it stay queued.
    pub fn run_to_completion(&mut self) -> Result<Board, ApplyFailure> {
        while self.step()?.is_some() {}
        Ok(self.current_state)
    }
}
