//! Run configuration: which puzzles to solve, under which policy.
//!
//! # JSON layout
//!
//! ```json
//! {
//!   "puzzles": [
//!     { "name": "one-move", "initial": [1, null, 2, 3, 4, 5, 6, 7, 8] },
//!     { "initial": "724/5_6/831", "goal": "_12/345/678" }
//!   ],
//!   "policy": { "max_expansions": 100000, "frontier_dedup": "best_cost" }
//! }
//! ```
//!
//! Boards are either a nine-element array (`null` is the blank) or the
//! compact text form accepted by [`Board::parse`]. `goal` defaults to
//! [`Board::GOAL`]. Every policy field is optional; omitted fields take
//! the [`SearchPolicy`] defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tilepath_kernel::carrier::board::{Board, BoardError};
use tilepath_search::error::SearchError;
use tilepath_search::policy::{FrontierDedup, SearchPolicy};

use crate::worlds::eight_puzzle::EightPuzzleProblem;

/// Error loading or resolving a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the layout.
    #[error("invalid run config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A puzzle's initial or goal board is malformed.
    #[error("puzzle {index} ({field}): {source}")]
    Board {
        index: usize,
        field: &'static str,
        #[source]
        source: BoardError,
    },
    /// `frontier_dedup` names no known mode.
    #[error("unknown frontier_dedup mode {name:?}")]
    UnknownDedup { name: String },
    /// The resolved policy fails validation.
    #[error(transparent)]
    Policy(#[from] SearchError),
}

/// A board as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardSpec {
    /// Row-major cells, `None` for the blank.
    Cells(Vec<Option<u8>>),
    /// Compact text such as `"1_2/345/678"`.
    Text(String),
}

impl BoardSpec {
    /// Validate into a [`Board`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the cells or text are malformed.
    pub fn to_board(&self) -> Result<Board, BoardError> {
        match self {
            Self::Cells(cells) => Board::from_slice(cells),
            Self::Text(text) => Board::parse(text),
        }
    }
}

impl From<&Board> for BoardSpec {
    fn from(board: &Board) -> Self {
        Self::Cells(board.cells().to_vec())
    }
}

/// One puzzle entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub initial: BoardSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<BoardSpec>,
}

/// Optional overrides for [`SearchPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frontier_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontier_dedup: Option<String>,
}

/// A full run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub puzzles: Vec<PuzzleConfig>,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl RunConfig {
    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text does not match the layout.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve every puzzle into a problem, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Board`] for the first malformed board.
    pub fn problems(&self) -> Result<Vec<EightPuzzleProblem>, ConfigError> {
        self.puzzles
            .iter()
            .enumerate()
            .map(|(index, puzzle)| {
                let initial = puzzle.initial.to_board().map_err(|source| ConfigError::Board {
                    index,
                    field: "initial",
                    source,
                })?;
                let goal = match &puzzle.goal {
                    Some(spec) => spec.to_board().map_err(|source| ConfigError::Board {
                        index,
                        field: "goal",
                        source,
                    })?,
                    None => Board::GOAL,
                };
                Ok(EightPuzzleProblem::new(initial, goal))
            })
            .collect()
    }

    /// Resolve the policy block, filling defaults, and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDedup`] or [`ConfigError::Policy`].
    pub fn search_policy(&self) -> Result<SearchPolicy, ConfigError> {
        let defaults = SearchPolicy::default();
        let frontier_dedup = match &self.policy.frontier_dedup {
            Some(name) => FrontierDedup::from_name(name)
                .ok_or_else(|| ConfigError::UnknownDedup { name: name.clone() })?,
            None => defaults.frontier_dedup,
        };
        let policy = SearchPolicy {
            max_expansions: self.policy.max_expansions.unwrap_or(defaults.max_expansions),
            max_frontier_size: self
                .policy
                .max_frontier_size
                .unwrap_or(defaults.max_frontier_size),
            frontier_dedup,
        };
        policy.validate()?;
        Ok(policy)
    }
}

impl Default for RunConfig {
    /// The four demonstration puzzles, all towards [`Board::GOAL`].
    fn default() -> Self {
        let demo = [
            ("one-move", [Some(1), None, Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), Some(8)]),
            ("row-shift", [Some(1), Some(2), Some(3), None, Some(4), Some(5), Some(6), Some(7), Some(8)]),
            ("scrambled", [Some(7), Some(2), Some(4), Some(5), None, Some(6), Some(8), Some(3), Some(1)]),
            ("hard", [Some(8), Some(6), Some(7), Some(2), Some(5), Some(4), Some(3), None, Some(1)]),
        ];
        Self {
            puzzles: demo
                .into_iter()
                .map(|(name, cells)| PuzzleConfig {
                    name: Some(name.to_string()),
                    initial: BoardSpec::Cells(cells.to_vec()),
                    goal: None,
                })
                .collect(),
            policy: PolicyConfig::default(),
        }
    }
}
