//! Best-first frontier and explored set.
//!
//! The frontier is a min-heap on [`FrontierKey`]; the explored set records
//! expanded states. The two are independent: a state may sit on the
//! frontier several times at different costs unless best-cost dedup is on.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::rc::Rc;

use crate::node::{FrontierKey, SearchNode};
use crate::policy::FrontierDedup;

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest `f_cost` first. Entries are compared by key only.
struct FrontierEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode<S, A>>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Outcome of [`BestFirstFrontier::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The node was inserted with this key.
    Inserted(FrontierKey),
    /// Best-cost dedup dropped the node: its state is already queued at
    /// an equal or lower path cost.
    Suppressed,
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best node
/// - A monotonically increasing insertion sequence for tie-breaking
/// - With [`FrontierDedup::BestCost`], the best queued path cost per state
pub struct BestFirstFrontier<S, A> {
    heap: BinaryHeap<FrontierEntry<S, A>>,
    next_sequence: u64,
    dedup: FrontierDedup,
    best_cost: HashMap<S, u32>,
    high_water: u64,
}

impl<S: Clone + Eq + Hash, A> BestFirstFrontier<S, A> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new(dedup: FrontierDedup) -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            dedup,
            best_cost: HashMap::new(),
            high_water: 0,
        }
    }

    /// Push a node, assigning it the next insertion sequence number.
    pub fn push(&mut self, node: Rc<SearchNode<S, A>>) -> PushOutcome {
        if self.dedup == FrontierDedup::BestCost {
            match self.best_cost.entry(node.state.clone()) {
                Entry::Occupied(mut queued) => {
                    if *queued.get() <= node.path_cost {
                        return PushOutcome::Suppressed;
                    }
                    queued.insert(node.path_cost);
                }
                Entry::Vacant(slot) => {
                    slot.insert(node.path_cost);
                }
            }
        }

        let key = FrontierKey {
            f_cost: node.f_cost(),
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        PushOutcome::Inserted(key)
    }

    /// Pop the best (lowest `f_cost`, then earliest inserted) node.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, Rc<SearchNode<S, A>>)> {
        self.heap.pop().map(|e| (e.key.0, e.node))
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of insertions so far.
    #[must_use]
    pub fn pushes(&self) -> u64 {
        self.next_sequence
    }
}

/// States already expanded in this search run.
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    /// Create an empty explored set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Mark `state` explored. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Whether `state` has been expanded.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of explored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing has been explored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
