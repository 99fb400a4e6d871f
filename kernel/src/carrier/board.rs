//! `Board`: the 3x3 sliding-tile state.
//!
//! # Layout
//!
//! Nine cells in row-major order. Each cell holds a tile label in `1..=8`
//! or the blank. Internally the blank is stored as `0`, which is also the
//! byte used for it in [`Board::identity_bytes`].
//!
//! # Equality semantics
//!
//! Boards compare by full positional match and derive `Hash`, so they can be
//! used directly as keys in explored sets. There is no identity beyond the
//! nine cell values.

use std::fmt;

/// Grid width (and height).
pub const WIDTH: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = WIDTH * WIDTH;

/// Largest tile label.
pub const MAX_TILE: u8 = 8;

/// Internal encoding of the blank cell.
const BLANK: u8 = 0;

/// Typed failure for board construction. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The cell sequence does not have exactly [`CELL_COUNT`] entries.
    #[error("board must have {expected} cells, got {got}")]
    WrongLength { expected: usize, got: usize },
    /// A tile label outside `1..=8`.
    #[error("tile label {label} at index {index} is outside 1..={MAX_TILE}")]
    TileOutOfRange { label: u8, index: usize },
    /// A tile label appears more than once.
    #[error("tile {label} appears more than once")]
    DuplicateTile { label: u8 },
    /// More than one blank cell.
    #[error("board has more than one blank cell")]
    DuplicateBlank,
    /// A character that is neither a tile digit, a blank marker nor a separator.
    #[error("unexpected character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },
}

/// A validated 3x3 board: every label in `1..=8` and the blank appear exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [u8; CELL_COUNT],
}

impl Board {
    /// The conventional goal: blank in the top-left corner, tiles ascending.
    pub const GOAL: Self = Self {
        cells: [BLANK, 1, 2, 3, 4, 5, 6, 7, 8],
    };

    /// Construct from nine cells, `None` marking the blank.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if a label is out of range or a label/blank is repeated.
    pub fn from_cells(cells: [Option<u8>; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut raw = [BLANK; CELL_COUNT];
        for (index, cell) in cells.iter().enumerate() {
            raw[index] = match *cell {
                None => BLANK,
                Some(label) if (1..=MAX_TILE).contains(&label) => label,
                Some(label) => return Err(BoardError::TileOutOfRange { label, index }),
            };
        }
        Self::from_raw(raw)
    }

    /// Construct from a slice of cells of any length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] unless the slice has exactly nine
    /// cells, otherwise the same errors as [`Board::from_cells`].
    pub fn from_slice(cells: &[Option<u8>]) -> Result<Self, BoardError> {
        let fixed: [Option<u8>; CELL_COUNT] =
            cells.try_into().map_err(|_| BoardError::WrongLength {
                expected: CELL_COUNT,
                got: cells.len(),
            })?;
        Self::from_cells(fixed)
    }

    /// Parse a compact textual board.
    ///
    /// Digits `1`-`8` are tiles; `_`, `.` and `0` are the blank. Whitespace,
    /// `/`, `,` and `|` are separators and ignored. `"_12/345/678"` is the goal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidCharacter`] for anything else, or the
    /// validation errors of [`Board::from_slice`].
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (offset, ch) in text.char_indices() {
            match ch {
                '_' | '.' | '0' => cells.push(None),
                '1'..='8' => {
                    #[allow(clippy::cast_possible_truncation)]
                    let label = ch.to_digit(10).unwrap_or_default() as u8;
                    cells.push(Some(label));
                }
                c if c.is_whitespace() => {}
                '/' | ',' | '|' => {}
                _ => return Err(BoardError::InvalidCharacter { ch, offset }),
            }
        }
        Self::from_slice(&cells)
    }

    fn from_raw(cells: [u8; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for &value in &cells {
            let slot = &mut seen[usize::from(value)];
            if *slot {
                return Err(if value == BLANK {
                    BoardError::DuplicateBlank
                } else {
                    BoardError::DuplicateTile { label: value }
                });
            }
            *slot = true;
        }
        Ok(Self { cells })
    }

    /// The cell at `index` (`None` for the blank).
    ///
    /// # Panics
    ///
    /// Panics if `index >= CELL_COUNT`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<u8> {
        match self.cells[index] {
            BLANK => None,
            label => Some(label),
        }
    }

    /// All cells, `None` marking the blank.
    #[must_use]
    pub fn cells(&self) -> [Option<u8>; CELL_COUNT] {
        let mut out = [None; CELL_COUNT];
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = self.cell(index);
        }
        out
    }

    /// Row-major index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.index_of_raw(BLANK)
    }

    /// Row-major index of `label`, or `None` if it is not a tile label.
    #[must_use]
    pub fn position_of(&self, label: u8) -> Option<usize> {
        if (1..=MAX_TILE).contains(&label) {
            Some(self.index_of_raw(label))
        } else {
            None
        }
    }

    fn index_of_raw(&self, value: u8) -> usize {
        // Validated boards contain every value exactly once.
        self.cells.iter().position(|&c| c == value).unwrap_or(0)
    }

    /// Swap the blank with the cell at `target`. Caller guarantees adjacency.
    pub(crate) fn swap_blank_with(&self, target: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(self.blank_index(), target);
        Self { cells }
    }

    /// Canonical identity bytes: one byte per cell, blank = 0.
    #[must_use]
    pub fn identity_bytes(&self) -> [u8; CELL_COUNT] {
        self.cells
    }

    /// Whether `goal` is reachable from `self` by sliding moves.
    ///
    /// On an odd-width board a move never changes the parity of the tile
    /// permutation, so two boards are connected exactly when the tile order
    /// of one (read row-major, blank skipped) is an even permutation of the
    /// other's.
    #[must_use]
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        let mut rank = [0usize; CELL_COUNT];
        for (order, &label) in goal.cells.iter().filter(|&&c| c != BLANK).enumerate() {
            rank[usize::from(label)] = order;
        }
        let sequence: Vec<usize> = self
            .cells
            .iter()
            .filter(|&&c| c != BLANK)
            .map(|&c| rank[usize::from(c)])
            .collect();
        let mut inversions = 0usize;
        for (i, a) in sequence.iter().enumerate() {
            inversions += sequence[i + 1..].iter().filter(|b| *b < a).count();
        }
        inversions % 2 == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::GOAL
    }
}

impl TryFrom<[Option<u8>; CELL_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(cells: [Option<u8>; CELL_COUNT]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    /// Three rows of three cells, blank rendered as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &value) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if value == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (row, chunk) in self.cells.chunks(WIDTH).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for &value in chunk {
                if value == BLANK {
                    write!(f, "_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        write!(f, ")")
    }
}
