/// Match comparators
///
/// When several routes match one input, a comparator decides which match is
/// more desirable. `Ordering::Less` means the first argument is better.
use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::definition::MatchSuccess;

/// Shared three-way comparison between two successful matches
pub type MatchComparator =
    Arc<dyn Fn(&MatchSuccess<'_>, &MatchSuccess<'_>) -> Ordering + Send + Sync>;

/// Prefers the match that consumed more of the input
///
/// Equal consumption is a tie, whatever the capture counts.
pub fn longest_match(a: &MatchSuccess<'_>, b: &MatchSuccess<'_>) -> Ordering {
    a.remaining.len().cmp(&b.remaining.len())
}

/// Prefers more consumption, then fewer captures
///
/// For `/users/all`, both `path!("/users/all")` and
/// `path!("/users", string("id"))` consume everything; the static one wins.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{best_match, path, string};
/// use std::cmp::Ordering;
///
/// let all = path!("/users/all").match_path("/users/all").unwrap();
/// let by_id = path!("/users", string("id")).match_path("/users/all").unwrap();
/// assert_eq!(best_match(&all, &by_id), Ordering::Less);
/// ```
pub fn best_match(a: &MatchSuccess<'_>, b: &MatchSuccess<'_>) -> Ordering {
    longest_match(a, b).then_with(|| a.captures.cmp(&b.captures))
}

/// Built-in comparator selection, as named in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparatorKind {
    /// [`best_match`]
    #[default]
    Best,
    /// [`longest_match`]
    Longest,
}

impl ComparatorKind {
    pub fn comparator(self) -> MatchComparator {
        match self {
            ComparatorKind::Best => Arc::new(best_match),
            ComparatorKind::Longest => Arc::new(longest_match),
        }
    }
}
