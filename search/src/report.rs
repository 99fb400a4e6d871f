//! `SearchReport`: canonical JSON audit of one search run.
//!
//! The report binds the problem identity, the policy digest and the run's
//! counters to the solution path. Its canonical bytes are what determinism
//! checks compare, in-process and across processes.

use tilepath_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tilepath_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};

use crate::contract::ReportableProblem;
use crate::policy::SearchPolicy;
use crate::search::{SearchResult, SearchStats, TerminationReason};

/// One step of the solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    /// Action label (`None` for the initial state).
    pub action: Option<String>,
    /// Fingerprint of the state reached.
    pub state_fingerprint: ContentHash,
}

/// Summary of a search run, ready for canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub problem_id: String,
    pub initial_fingerprint: ContentHash,
    pub goal_fingerprint: ContentHash,
    pub policy_digest: ContentHash,
    pub termination_reason: TerminationReason,
    pub stats: SearchStats,
    /// Root-first path to the goal. Empty when no goal was reached.
    pub path: Vec<PathStep>,
}

impl SearchReport {
    /// Build the report for `result`, produced by searching `problem` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the policy digest cannot be computed.
    pub fn build<P: ReportableProblem>(
        problem: &P,
        policy: &SearchPolicy,
        result: &SearchResult<P::State, P::Action>,
    ) -> Result<Self, CanonError> {
        let path = match &result.goal_node {
            Some(goal) => {
                let actions = goal.actions_to_reach();
                let states = goal.path_states();
                // states has one more entry than actions: the initial state.
                states
                    .iter()
                    .enumerate()
                    .map(|(i, state)| PathStep {
                        action: i
                            .checked_sub(1)
                            .and_then(|a| actions.get(a))
                            .map(|a| problem.action_label(a)),
                        state_fingerprint: problem.state_fingerprint(state),
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Ok(Self {
            problem_id: problem.problem_id().to_string(),
            initial_fingerprint: problem.state_fingerprint(problem.initial_state()),
            goal_fingerprint: problem.state_fingerprint(problem.goal_state()),
            policy_digest: policy.digest()?,
            termination_reason: result.termination_reason,
            stats: result.stats,
            path,
        })
    }

    /// Action labels of the solution, earliest first.
    #[must_use]
    pub fn action_labels(&self) -> Vec<&str> {
        self.path.iter().filter_map(|s| s.action.as_deref()).collect()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "metadata": {
                "goal_fingerprint": self.goal_fingerprint.as_str(),
                "initial_fingerprint": self.initial_fingerprint.as_str(),
                "policy_digest": self.policy_digest.as_str(),
                "problem_id": self.problem_id,
                "termination_reason": termination_reason_to_json(&self.termination_reason),
            },
            "path": self.path.iter().map(path_step_to_json).collect::<Vec<_>>(),
            "stats": stats_to_json(&self.stats),
        })
    }
}

fn path_step_to_json(step: &PathStep) -> serde_json::Value {
    serde_json::json!({
        "action": step.action,
        "state_fingerprint": step.state_fingerprint.as_str(),
    })
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "dedup_suppressed": s.dedup_suppressed,
        "expansions": s.expansions,
        "explored_states": s.explored_states,
        "explored_suppressed": s.explored_suppressed,
        "frontier_high_water": s.frontier_high_water,
        "nodes_generated": s.nodes_generated,
        "stale_pops": s.stale_pops,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached | TerminationReason::FrontierExhausted => {
            serde_json::json!({"type": r.as_str()})
        }
        TerminationReason::ExpansionBudgetExceeded { limit }
        | TerminationReason::FrontierBudgetExceeded { limit } => {
            serde_json::json!({"limit": limit, "type": r.as_str()})
        }
    }
}
