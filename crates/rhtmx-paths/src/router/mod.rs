/// Best-match routing over paths
///
/// - [`comparator`]: how competing matches are ranked
/// - [`builder`]: registration ([`RouterBuilder`]) and dispatch ([`Router`])
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod comparator;

pub use builder::{Router, RouterBuilder};
pub use comparator::{best_match, longest_match, ComparatorKind, MatchComparator};

/// Whether partial matches may win a dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Any successful match is a candidate
    #[default]
    Partial,
    /// Only matches leaving nothing but an optional trailing `/`
    Exact,
}

/// Per-call overrides for [`Router::dispatch_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Overrides the router's policy for this call
    pub policy: Option<MatchPolicy>,
}

impl DispatchOptions {
    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self {
            policy: Some(policy),
        }
    }
}

/// Starts a router with the best-match comparator
pub fn router<R>() -> RouterBuilder<R> {
    RouterBuilder::new()
}
