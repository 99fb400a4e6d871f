//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget aborts) are expressed via
//! [`crate::search::TerminationReason`].

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A policy field holds a value the engine cannot run with.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
