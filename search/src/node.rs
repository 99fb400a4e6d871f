//! Search tree nodes and the frontier ordering key.

use std::rc::Rc;

/// An immutable node in the search tree.
///
/// Children own a reference-counted handle to their parent; parents never
/// point at children. The tree is dropped with the last frontier handle or
/// goal node that reaches it.
#[derive(Debug)]
pub struct SearchNode<S, A> {
    /// The state this node represents.
    pub state: S,
    /// Predecessor node (`None` for the root).
    pub parent: Option<Rc<SearchNode<S, A>>>,
    /// The action applied to the parent's state (`None` for the root).
    pub action: Option<A>,
    /// Moves from the initial state (root = 0, +1 per expansion).
    pub path_cost: u32,
    /// Heuristic estimate of remaining cost, fixed at creation.
    pub h_cost: u32,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node for `state`.
    #[must_use]
    pub fn root(state: S, h_cost: u32) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            h_cost,
        }
    }

    /// Create the child reached from `parent` by `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, state: S, action: A, h_cost: u32) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            path_cost: parent.path_cost.saturating_add(1),
            h_cost,
        }
    }

    /// Evaluation key `f = g + h`.
    #[must_use]
    pub fn f_cost(&self) -> u64 {
        u64::from(self.path_cost) + u64::from(self.h_cost)
    }

    /// Whether this node is the root of its tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S, A: Clone> SearchNode<S, A> {
    /// Actions from the root to this node, earliest first.
    ///
    /// Empty when called on the root.
    #[must_use]
    pub fn actions_to_reach(&self) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.path_cost as usize);
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent.as_deref();
        }
        actions.reverse();
        actions
    }
}

impl<S: Clone, A> SearchNode<S, A> {
    /// States from the root to this node inclusive, earliest first.
    #[must_use]
    pub fn path_states(&self) -> Vec<S> {
        let mut states = Vec::with_capacity(self.path_cost as usize + 1);
        let mut current = Some(self);
        while let Some(node) = current {
            states.push(node.state.clone());
            current = node.parent.as_deref();
        }
        states.reverse();
        states
    }
}

/// The frontier ordering key: `(f_cost, sequence)`.
///
/// Lower `f_cost` first, then the earlier insertion. `sequence` is assigned
/// by the frontier on push and is unique per frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f_cost: u64,
    pub sequence: u64,
}
