//! Carrier module: the board state and its validation boundary.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod board;
