//! Tilepath Search: deterministic best-first (A*) graph search.
//!
//! This crate provides the search layer. It depends only on
//! `tilepath_kernel`. It does NOT depend on `tilepath_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tilepath_kernel  ←  tilepath_search  ←  tilepath_harness
//! (board, moves)      (frontier, nodes)    (problems, agent, runner)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`](contract::SearchProblem) — the problem definition boundary
//! - [`SearchNode`](node::SearchNode) — immutable tree node with a parent back-reference
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) — `f`-ordered frontier with insertion tie-break
//! - [`Heuristic`](heuristic::Heuristic) — admissible cost-to-go estimate
//! - [`SearchPolicy`](policy::SearchPolicy) — optional budgets and frontier dedup
//! - [`SearchReport`](report::SearchReport) — canonical JSON audit of one run

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
