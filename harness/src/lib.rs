//! Tilepath Harness: problem adapters and run orchestration.
//!
//! The harness wires a concrete problem (the eight puzzle) into the search
//! engine, replays the solution through an agent against the kernel
//! transition model, and packages the canonical search report.
//!
//! The harness does NOT implement search logic; it delegates to
//! `tilepath_search`. Worlds provide domain adapters only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod bundle_dir;
pub mod config;
pub mod runner;
pub mod worlds;
