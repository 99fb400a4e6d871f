//! Tic-tac-toe: game rules and a minimax agent.
//!
//! Positions are row-major indices `0..9`. `X` always moves first, so the
//! player to move follows from the mark counts.

use std::fmt;

/// Board side length.
const SIDE: usize = 3;

/// Number of positions.
const POSITIONS: usize = SIDE * SIDE;

/// The eight winning lines.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Typed failure for game construction and moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The position is already marked.
    #[error("position {position} is already taken")]
    Occupied { position: usize },
    /// The position is off the board.
    #[error("position {position} is outside 0..9")]
    OutOfRange { position: usize },
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// Unparseable board text.
    #[error("invalid board text {text:?}")]
    InvalidBoard { text: String },
}

/// A tic-tac-toe position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    cells: [Option<Mark>; POSITIONS],
}

impl GameState {
    /// The empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse nine cells of `X`, `O` or `_`/`.`; `/` and whitespace are ignored.
    ///
    /// The mark counts are not checked against turn order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoard`] on any other character or a
    /// cell count other than nine.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let invalid = || GameError::InvalidBoard {
            text: text.to_string(),
        };
        let mut cells = [None; POSITIONS];
        let mut count = 0usize;
        for ch in text.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '_' | '.' => None,
                '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(invalid()),
            };
            *cells.get_mut(count).ok_or_else(invalid)? = cell;
            count += 1;
        }
        if count != POSITIONS {
            return Err(invalid());
        }
        Ok(Self { cells })
    }

    /// The mark at `position`, if any.
    #[must_use]
    pub fn mark_at(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied().flatten()
    }

    fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Option<Mark> {
        if self.is_terminal() {
            return None;
        }
        Some(if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        })
    }

    /// Empty positions, ascending.
    #[must_use]
    pub fn actions(&self) -> Vec<usize> {
        (0..POSITIONS).filter(|&p| self.cells[p].is_none()).collect()
    }

    /// The position after the player to move marks `position`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the position is off the board, taken, or the
    /// game is over.
    pub fn result(&self, position: usize) -> Result<Self, GameError> {
        let mover = self.to_move().ok_or(GameError::GameOver)?;
        let cell = self
            .cells
            .get(position)
            .ok_or(GameError::OutOfRange { position })?;
        if cell.is_some() {
            return Err(GameError::Occupied { position });
        }
        let mut next = *self;
        next.cells[position] = Some(mover);
        Ok(next)
    }

    /// Whether `mark` holds a complete line.
    #[must_use]
    pub fn is_win(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&p| self.cells[p] == Some(mark)))
    }

    /// A win for either player, or a full board.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.cells.iter().all(Option::is_some) || self.is_win(Mark::X) || self.is_win(Mark::O)
    }

    /// `1` if `mark` has won, `-1` if its opponent has, `0` otherwise.
    #[must_use]
    pub fn utility(&self, mark: Mark) -> i8 {
        if self.is_win(mark) {
            1
        } else if self.is_win(mark.opponent()) {
            -1
        } else {
            0
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let rendered: Vec<String> = cells
                .iter()
                .map(|c| c.map_or_else(|| "_".to_string(), |m| m.to_string()))
                .collect();
            write!(f, "{}", rendered.join(" "))?;
        }
        Ok(())
    }
}

/// Plays optimally for `symbol` by exhaustive minimax.
///
/// The agent always maximizes its own utility, whichever mark it holds.
/// On equal values the first move in [`GameState::actions`] order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxAgent {
    symbol: Mark,
}

impl MinimaxAgent {
    #[must_use]
    pub const fn new(symbol: Mark) -> Self {
        Self { symbol }
    }

    #[must_use]
    pub const fn symbol(&self) -> Mark {
        self.symbol
    }

    /// The chosen position, or `None` if the game is over.
    #[must_use]
    pub fn action(&self, state: &GameState) -> Option<usize> {
        self.minimax(state).1
    }

    /// Game value for this agent under optimal play, and the move achieving it.
    #[must_use]
    pub fn minimax(&self, state: &GameState) -> (i8, Option<usize>) {
        match state.to_move() {
            None => (state.utility(self.symbol), None),
            Some(mover) if mover == self.symbol => self.max_value(state),
            Some(_) => self.min_value(state),
        }
    }

    fn max_value(&self, state: &GameState) -> (i8, Option<usize>) {
        if state.is_terminal() {
            return (state.utility(self.symbol), None);
        }
        let mut best = (i8::MIN, None);
        for position in state.actions() {
            let Ok(next) = state.result(position) else {
                continue;
            };
            let (value, _) = self.min_value(&next);
            if value > best.0 {
                best = (value, Some(position));
            }
        }
        best
    }

    fn min_value(&self, state: &GameState) -> (i8, Option<usize>) {
        if state.is_terminal() {
            return (state.utility(self.symbol), None);
        }
        let mut best = (i8::MAX, None);
        for position in state.actions() {
            let Ok(next) = state.result(position) else {
                continue;
            };
            let (value, _) = self.max_value(&next);
            if value < best.0 {
                best = (value, Some(position));
            }
        }
        best
    }
}
