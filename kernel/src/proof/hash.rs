//! Canonical hashing types and domain separation constants.
//!
//! Algorithm: SHA-256. Every digest is computed over `domain || data`, where
//! `domain` is a null-terminated prefix naming what is being hashed.
//!
//! **Exactly one place defines canonical hashing.**

use sha2::{Digest, Sha256};

use crate::carrier::board::Board;

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string contains a `:` separator with non-empty
/// substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for board identity hashing.
pub const DOMAIN_BOARD: &[u8] = b"TILEPATH::BOARD::V1\0";

/// Domain prefix for search policy snapshots.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"TILEPATH::SEARCH_POLICY::V1\0";

/// Domain prefix for search report artifacts.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"TILEPATH::SEARCH_REPORT::V1\0";

/// Compute the canonical hash of `data` under `domain`.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    let full = format!("sha256:{}", hex::encode(digest));
    ContentHash { full, colon: 6 }
}

/// Fingerprint of a board's identity bytes.
#[must_use]
pub fn board_fingerprint(board: &Board) -> ContentHash {
    canonical_hash(DOMAIN_BOARD, &board.identity_bytes())
}
