//! Proof module: canonical hashing and canonical JSON bytes.
//!
//! Depends on `carrier`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
