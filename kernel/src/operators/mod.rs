//! Operators module: the move set, the dispatch table and the transition model.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod apply;
pub mod moves;
pub mod transition;
