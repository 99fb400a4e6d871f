//! Shared helpers for the lock test suite.
//!
//! Breadth-first reference distances and seeded scrambles. Test-only code;
//! helpers panic on violated fixture invariants.

pub mod scramble_helpers;
