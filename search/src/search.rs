//! Search entry point and expansion loop.

use std::rc::Rc;

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, ExploredSet, PushOutcome};
use crate::heuristic::Heuristic;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node whose state equals the goal was popped.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// A node still needed expanding after `max_expansions` expansions.
    /// The search was aborted, not exhausted.
    ExpansionBudgetExceeded { limit: u64 },
    /// The frontier grew past `max_frontier_size`. The search was aborted.
    FrontierBudgetExceeded { limit: u64 },
}

impl TerminationReason {
    /// Whether a budget stopped the search before it could conclude.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded { .. } | Self::FrontierBudgetExceeded { .. }
        )
    }

    /// Stable snake-case tag used in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::FrontierBudgetExceeded { .. } => "frontier_budget_exceeded",
        }
    }
}

/// Counters collected over one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pop and stale pops excluded).
    pub expansions: u64,
    /// Child nodes built during expansion, including ones later dropped.
    pub nodes_generated: u64,
    /// Children not queued because their state was already explored.
    pub explored_suppressed: u64,
    /// Children not queued by best-cost frontier dedup.
    pub dedup_suppressed: u64,
    /// Popped nodes skipped because their state had been expanded already.
    pub stale_pops: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Distinct states expanded.
    pub explored_states: u64,
}

/// Result of a search execution.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// Why the loop stopped.
    pub termination_reason: TerminationReason,
    /// The goal node, present only for [`TerminationReason::GoalReached`].
    pub goal_node: Option<Rc<SearchNode<S, A>>>,
    /// Run counters.
    pub stats: SearchStats,
}

impl<S, A: Clone> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination_reason == TerminationReason::GoalReached
    }

    /// The solution's actions, earliest first. Empty without a goal node.
    #[must_use]
    pub fn actions(&self) -> Vec<A> {
        self.goal_node
            .as_ref()
            .map(|node| node.actions_to_reach())
            .unwrap_or_default()
    }

    /// Number of moves in the solution, if one was found.
    #[must_use]
    pub fn solution_cost(&self) -> Option<u32> {
        self.goal_node.as_ref().map(|node| node.path_cost)
    }
}

/// Run A* from `problem.initial_state()` to `problem.goal_state()`.
///
/// The node popped with the lowest `f = g + h` is goal-tested first, then
/// its state is marked explored and each legal action yields a child that is
/// queued unless its state is already explored. With an admissible and
/// consistent heuristic the first goal popped has minimal path cost.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Every runtime outcome, including budget aborts, is
/// an `Ok` with the matching [`TerminationReason`].
pub fn search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    policy.validate()?;

    let mut frontier: BestFirstFrontier<P::State, P::Action> =
        BestFirstFrontier::new(policy.frontier_dedup);
    let mut explored: ExploredSet<P::State> = ExploredSet::new();
    let mut stats = SearchStats::default();

    let root_state = problem.initial_state().clone();
    let root_h = heuristic.estimate(&root_state);
    log::debug!(
        "search start: root h={root_h}, dedup={}",
        policy.frontier_dedup.as_str()
    );
    frontier.push(Rc::new(SearchNode::root(root_state, root_h)));

    let (termination_reason, goal_node) = loop {
        let Some((key, current)) = frontier.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };

        if problem.is_goal(&current.state) {
            break (TerminationReason::GoalReached, Some(current));
        }

        if explored.contains(&current.state) {
            stats.stale_pops += 1;
            continue;
        }

        // Only real expansions count against the budget.
        if stats.expansions >= policy.max_expansions {
            break (
                TerminationReason::ExpansionBudgetExceeded {
                    limit: policy.max_expansions,
                },
                None,
            );
        }
        explored.insert(current.state.clone());

        log::trace!(
            "expand #{}: f={} g={} seq={} frontier={}",
            stats.expansions,
            key.f_cost,
            current.path_cost,
            key.sequence,
            frontier.len()
        );

        for action in problem.actions(&current.state) {
            let child_state = problem.result(&current.state, &action);
            stats.nodes_generated += 1;
            if explored.contains(&child_state) {
                stats.explored_suppressed += 1;
                continue;
            }
            let h = heuristic.estimate(&child_state);
            let child = SearchNode::child(&current, child_state, action, h);
            if frontier.push(Rc::new(child)) == PushOutcome::Suppressed {
                stats.dedup_suppressed += 1;
            }
        }
        stats.expansions += 1;

        if frontier.len() as u64 > policy.max_frontier_size {
            break (
                TerminationReason::FrontierBudgetExceeded {
                    limit: policy.max_frontier_size,
                },
                None,
            );
        }
    };

    stats.frontier_high_water = frontier.high_water();
    stats.explored_states = explored.len() as u64;

    log::debug!(
        "search end: {} after {} expansions (generated={}, high_water={}, cost={:?})",
        termination_reason.as_str(),
        stats.expansions,
        stats.nodes_generated,
        stats.frontier_high_water,
        goal_node.as_ref().map(|n| n.path_cost),
    );

    Ok(SearchResult {
        termination_reason,
        goal_node,
        stats,
    })
}

/// Solve `problem` with an unbounded search and return the action sequence.
///
/// Empty when the goal is unreachable, and also when the initial state is
/// already the goal. Callers that need to tell the two apart should compare
/// the states or call [`search`].
#[must_use]
pub fn solution<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    search(problem, heuristic, &SearchPolicy::default())
        .map(|result| result.actions())
        .unwrap_or_default()
}
