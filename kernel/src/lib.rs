//! Tilepath Kernel: the deterministic sliding-tile core.
//!
//! # API Surface
//!
//! - [`carrier::board::Board`] -- the 3x3 puzzle state (8 tiles + blank)
//! - [`operators::apply::apply`] -- apply a [`operators::moves::Move`] to a board
//! - [`operators::transition::TransitionModel`] -- the per-move transition contract
//! - [`proof::hash::canonical_hash`] -- domain-separated sha256 content hashing
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
