//! Harness runner: solve, replay, report.
//!
//! # Pipeline
//!
//! ```text
//! parity check (warn only) → search() → SearchReport::build()
//!   → agent replay through a TransitionModel → goal check
//!   → canonical report bytes + digest
//! ```
//!
//! The runner never second-guesses the search result. A goal-reached run
//! whose replay does not land on the goal is a [`RunError::ReplayDivergence`].

use tilepath_kernel::carrier::board::Board;
use tilepath_kernel::operators::apply::ApplyFailure;
use tilepath_kernel::operators::moves::Move;
use tilepath_kernel::operators::transition::{SlidingTileModel, TransitionModel};
use tilepath_kernel::proof::canon::CanonError;
use tilepath_kernel::proof::hash::ContentHash;

use tilepath_search::contract::SearchProblem;
use tilepath_search::error::SearchError;
use tilepath_search::policy::SearchPolicy;
use tilepath_search::report::SearchReport;
use tilepath_search::search::{search, SearchResult, TerminationReason};

use crate::agent::EightPuzzleAgent;
use crate::worlds::eight_puzzle::EightPuzzleProblem;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Pre-flight search failure (invalid policy).
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Report serialization or hashing failed.
    #[error("report canonicalization failed: {0}")]
    Canon(#[from] CanonError),
    /// The transition model rejected a solution move during replay.
    #[error("replay step {step} rejected: {source}")]
    Replay {
        step: usize,
        #[source]
        source: ApplyFailure,
    },
    /// Replay finished on a board other than the goal.
    #[error("replay ended on {reached:?}, expected {expected:?}")]
    ReplayDivergence { reached: Board, expected: Board },
}

/// Everything produced by one solved (or unsolved) puzzle.
#[derive(Debug)]
pub struct SolveRun {
    /// Raw search outcome.
    pub result: SearchResult<Board, Move>,
    /// Solution moves, earliest first. Empty unless the goal was reached.
    pub moves: Vec<Move>,
    /// Board after replaying `moves` from the initial state.
    pub final_state: Board,
    /// Canonical report.
    pub report: SearchReport,
    /// Canonical JSON bytes of `report`.
    pub report_bytes: Vec<u8>,
    /// Content hash of `report_bytes`.
    pub report_digest: ContentHash,
}

impl SolveRun {
    /// Why the search stopped.
    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.result.termination_reason
    }

    /// Whether a solution was found and replayed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.result.is_goal_reached()
    }
}

/// Solve `problem` under `policy`, replay the solution against the standard
/// sliding-tile rules and build the report.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is invalid, the report cannot be
/// canonicalized, or the replay does not reproduce the goal.
pub fn run_eight_puzzle(
    problem: &EightPuzzleProblem,
    policy: &SearchPolicy,
) -> Result<SolveRun, RunError> {
    run_eight_puzzle_with(problem, policy, SlidingTileModel)
}

/// [`run_eight_puzzle`] with the replay performed through `model`.
///
/// # Errors
///
/// As [`run_eight_puzzle`]. A model that disagrees with the kernel rules
/// surfaces as [`RunError::Replay`] or [`RunError::ReplayDivergence`].
pub fn run_eight_puzzle_with<M: TransitionModel>(
    problem: &EightPuzzleProblem,
    policy: &SearchPolicy,
    model: M,
) -> Result<SolveRun, RunError> {
    if !problem.is_solvable() {
        log::warn!(
            "{:?} is not solvable towards {:?}; the search will exhaust the reachable half",
            problem.initial_state(),
            problem.goal_state()
        );
    }

    let result = search(problem, &problem.heuristic(), policy)?;
    let report = SearchReport::build(problem, policy, &result)?;
    let moves = result.actions();

    let mut agent = EightPuzzleAgent::new(*problem.initial_state(), model, moves.iter().copied());
    let mut step = 0usize;
    while agent.has_actions() {
        agent.step().map_err(|source| RunError::Replay { step, source })?;
        step += 1;
    }
    let final_state = *agent.current_state();

    if result.is_goal_reached() && final_state != *problem.goal_state() {
        return Err(RunError::ReplayDivergence {
            reached: final_state,
            expected: *problem.goal_state(),
        });
    }

    let report_bytes = report.to_canonical_json_bytes()?;
    let report_digest = report.digest()?;

    match result.termination_reason {
        TerminationReason::GoalReached => log::info!(
            "solved {:?} in {} moves ({} expansions)",
            problem.initial_state(),
            moves.len(),
            result.stats.expansions
        ),
        reason => log::info!(
            "no solution for {:?}: {} after {} expansions",
            problem.initial_state(),
            reason.as_str(),
            result.stats.expansions
        ),
    }

    Ok(SolveRun {
        result,
        moves,
        final_state,
        report,
        report_bytes,
        report_digest,
    })
}
