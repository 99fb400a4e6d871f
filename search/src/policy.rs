//! Search policy types.

use tilepath_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tilepath_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY};

use crate::error::SearchError;

/// Optional safety valves and frontier dedup configuration.
///
/// The default is unbounded with dedup off, which is the plain A* contract:
/// the search only stops on the goal or an empty frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: u64,
    /// Hard cap on frontier size after an expansion.
    pub max_frontier_size: u64,
    /// Whether the frontier keeps redundant entries for the same state.
    pub frontier_dedup: FrontierDedup,
}

impl SearchPolicy {
    /// A policy with both budgets set.
    #[must_use]
    pub fn bounded(max_expansions: u64, max_frontier_size: u64) -> Self {
        Self {
            max_expansions,
            max_frontier_size,
            ..Self::default()
        }
    }

    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if either budget is zero: the
    /// root could never be expanded (or even queued).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether neither budget can ever trip.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max_expansions == u64::MAX && self.max_frontier_size == u64::MAX
    }

    /// JSON form used for the policy digest.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "frontier_dedup": self.frontier_dedup.as_str(),
            "max_expansions": self.max_expansions,
            "max_frontier_size": self.max_frontier_size,
        })
    }

    /// Content hash of the canonical policy bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: u64::MAX,
            max_frontier_size: u64::MAX,
            frontier_dedup: FrontierDedup::Off,
        }
    }
}

/// Frontier dedup policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierDedup {
    /// Every unexplored child is queued, even if its state is already queued.
    #[default]
    Off,
    /// A child is queued only if its state is not already queued at an equal
    /// or lower path cost.
    BestCost,
}

impl FrontierDedup {
    /// Stable name used in canonical JSON and configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::BestCost => "best_cost",
        }
    }

    /// Parse a name produced by [`FrontierDedup::as_str`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(Self::Off),
            "best_cost" => Some(Self::BestCost),
            _ => None,
        }
    }
}
