//! Search problem contract traits.

use std::hash::Hash;

use tilepath_kernel::proof::hash::ContentHash;

/// The problem definition consumed by the search engine.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order. The engine's tie-break is only as deterministic as this order.
/// - `result` must be total over `(state, action)` pairs where `action` came
///   from `actions(state)`. The engine never calls it with anything else.
/// - `initial_state` and `goal_state` are assumed well-formed; the engine
///   does not validate them.
pub trait SearchProblem {
    /// A full problem state. Compared by value and hashed into the explored set.
    type State: Clone + Eq + Hash;
    /// An action identifier.
    type Action: Clone;

    /// The state the search starts from.
    fn initial_state(&self) -> &Self::State;

    /// The single goal state.
    fn goal_state(&self) -> &Self::State;

    /// Actions legal from `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state produced by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Goal test: positional equality with [`SearchProblem::goal_state`].
    fn is_goal(&self, state: &Self::State) -> bool {
        state == self.goal_state()
    }
}

/// A problem whose states and actions have stable, canonical encodings.
///
/// Required to build a [`crate::report::SearchReport`].
pub trait ReportableProblem: SearchProblem {
    /// Stable identifier for the problem family (e.g., `"eight_puzzle:v1"`).
    fn problem_id(&self) -> &str;

    /// Content hash of a state's identity.
    fn state_fingerprint(&self, state: &Self::State) -> ContentHash;

    /// Stable lowercase label for an action.
    fn action_label(&self, action: &Self::Action) -> String;
}
