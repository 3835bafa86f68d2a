/// Router registration and dispatch
///
/// Two phases: a [`RouterBuilder`] collects routes by value, then
/// [`RouterBuilder::build`] freezes them into a [`Router`] that only reads.
/// A built router can be shared across threads and dispatched concurrently.
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::comparator::MatchComparator;
use super::{DispatchOptions, MatchPolicy};
use crate::config::RouterConfig;
use crate::definition::{MatchSuccess, Path};
use crate::error::DispatchError;

type Handler<R> = Box<dyn Fn(&MatchSuccess<'_>) -> R + Send + Sync>;
type Fallback<R> = Box<dyn Fn(&str) -> R + Send + Sync>;

/// What dispatch does when no route survives
enum Unmatched<R> {
    /// `Ok(None)`
    Absent,
    /// `Err(DispatchError::NoMatch)`
    Exhaustive,
    /// `Ok(Some(fallback(input)))`
    Fallback(Fallback<R>),
}

impl<R> Unmatched<R> {
    fn name(&self) -> &'static str {
        match self {
            Unmatched::Absent => "absent",
            Unmatched::Exhaustive => "exhaustive",
            Unmatched::Fallback(_) => "fallback",
        }
    }
}

struct Route<R> {
    path: Path,
    handler: Handler<R>,
}

// ============================================================================
// Builder
// ============================================================================

/// Collects routes for a [`Router`]
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{path, router, string};
///
/// let users = path!("users");
/// let user = path!(&users, string("id"));
/// let settings = path!(&user, "settings");
///
/// let app = router()
///     .on(&users, |_| 0)
///     .on(&user, |_| 1)
///     .on(&settings, |_| 2)
///     .build();
///
/// // All three match; the one consuming the most input wins.
/// assert_eq!(app.dispatch("/users/42/settings").unwrap(), Some(2));
/// assert_eq!(app.dispatch("/posts").unwrap(), None);
/// ```
pub struct RouterBuilder<R> {
    routes: Vec<Route<R>>,
    comparator: MatchComparator,
    policy: MatchPolicy,
    unmatched: Unmatched<R>,
}

impl<R> RouterBuilder<R> {
    /// Best-match comparator, partial matching, absent result when unmatched
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            comparator: super::ComparatorKind::default().comparator(),
            policy: MatchPolicy::default(),
            unmatched: Unmatched::Absent,
        }
    }

    /// Starts from loaded configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        let builder = Self::new()
            .with_policy(config.policy)
            .with_comparator_arc(config.comparator.comparator());

        if config.exhaustive {
            builder.exhaustive()
        } else {
            builder
        }
    }

    /// Replaces the comparator used to pick between competing matches
    pub fn with_comparator<C>(self, comparator: C) -> Self
    where
        C: Fn(&MatchSuccess<'_>, &MatchSuccess<'_>) -> Ordering + Send + Sync + 'static,
    {
        self.with_comparator_arc(Arc::new(comparator))
    }

    fn with_comparator_arc(mut self, comparator: MatchComparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// Sets the default partial/exact policy for every dispatch
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Registers `handler` for `path`
    ///
    /// The same path may be registered more than once; the earlier
    /// registration wins ties.
    pub fn on<H>(mut self, path: impl Into<Path>, handler: H) -> Self
    where
        H: Fn(&MatchSuccess<'_>) -> R + Send + Sync + 'static,
    {
        self.routes.push(Route {
            path: path.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Computes a result from the raw input when nothing matches
    ///
    /// Replaces any earlier `default` or `exhaustive` call.
    #[allow(clippy::should_implement_trait)]
    pub fn default<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
    {
        self.unmatched = Unmatched::Fallback(Box::new(fallback));
        self
    }

    /// Fails dispatch with [`DispatchError::NoMatch`] when nothing matches
    ///
    /// Replaces any earlier `default` or `exhaustive` call.
    pub fn exhaustive(mut self) -> Self {
        self.unmatched = Unmatched::Exhaustive;
        self
    }

    /// Freezes the registrations
    pub fn build(self) -> Router<R> {
        debug!(
            routes = self.routes.len(),
            policy = ?self.policy,
            unmatched = self.unmatched.name(),
            "router built"
        );

        Router {
            routes: self.routes,
            comparator: self.comparator,
            policy: self.policy,
            unmatched: self.unmatched,
        }
    }
}

impl<R> fmt::Debug for RouterBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("routes", &patterns(&self.routes))
            .field("policy", &self.policy)
            .field("unmatched", &self.unmatched.name())
            .finish()
    }
}

fn patterns<R>(routes: &[Route<R>]) -> Vec<&str> {
    routes.iter().map(|route| route.path.pattern()).collect()
}

// ============================================================================
// Frozen router
// ============================================================================

/// Read-only set of routes, ready to dispatch
pub struct Router<R> {
    routes: Vec<Route<R>>,
    comparator: MatchComparator,
    policy: MatchPolicy,
    unmatched: Unmatched<R>,
}

impl<R> Router<R> {
    /// Dispatches `input` under the router's own policy
    pub fn dispatch(&self, input: &str) -> Result<Option<R>, DispatchError> {
        self.dispatch_with(input, DispatchOptions::default())
    }

    /// Runs every route against `input` and invokes the best match's handler
    ///
    /// Returns `Ok(None)` when nothing matches and neither a default handler
    /// nor exhaustive mode was configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_paths::{path, router, DispatchOptions, MatchPolicy};
    ///
    /// let app = router().on(path!("/docs"), |m| m.remaining.to_string()).build();
    ///
    /// assert_eq!(app.dispatch("/docs/intro").unwrap(), Some("/intro".to_string()));
    ///
    /// let exact = DispatchOptions::with_policy(MatchPolicy::Exact);
    /// assert_eq!(app.dispatch_with("/docs/intro", exact).unwrap(), None);
    /// assert_eq!(app.dispatch_with("/docs/", exact).unwrap(), Some("/".to_string()));
    /// ```
    #[instrument(level = "trace", skip(self, options), fields(routes = self.routes.len()))]
    pub fn dispatch_with(
        &self,
        input: &str,
        options: DispatchOptions,
    ) -> Result<Option<R>, DispatchError> {
        let policy = options.policy.unwrap_or(self.policy);
        let mut best: Option<(MatchSuccess<'_>, &Route<R>)> = None;

        for route in &self.routes {
            let pattern = route.path.pattern();
            let matched = match route.path.match_path(input) {
                Ok(matched) => matched,
                Err(cause) => {
                    trace!(pattern, %cause, "route did not match");
                    continue;
                }
            };

            if policy == MatchPolicy::Exact && !matched.is_exact() {
                trace!(pattern, remaining = matched.remaining, "partial match rejected");
                continue;
            }

            trace!(
                pattern,
                remaining = matched.remaining,
                captures = matched.captures,
                "candidate"
            );

            let better = match &best {
                None => true,
                Some((current, _)) => (self.comparator)(current, &matched) == Ordering::Greater,
            };
            if better {
                best = Some((matched, route));
            }
        }

        if let Some((matched, route)) = best {
            debug!(pattern = route.path.pattern(), "dispatching to best match");
            return Ok(Some((route.handler)(&matched)));
        }

        match &self.unmatched {
            Unmatched::Absent => {
                debug!("no route matched");
                Ok(None)
            }
            Unmatched::Fallback(fallback) => {
                debug!("no route matched, using default handler");
                Ok(Some(fallback(input)))
            }
            Unmatched::Exhaustive => Err(DispatchError::NoMatch {
                input: input.to_string(),
            }),
        }
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered patterns, in registration order
    pub fn patterns(&self) -> Vec<&str> {
        patterns(&self.routes)
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.patterns())
            .field("policy", &self.policy)
            .field("unmatched", &self.unmatched.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::string;
    use crate::ComparatorKind;

    #[test]
    fn test_empty_router() {
        let app: Router<()> = RouterBuilder::new().build();
        assert!(app.is_empty());
        assert_eq!(app.dispatch("/anything").unwrap(), None);
    }

    #[test]
    fn test_later_default_replaces_exhaustive() {
        let app = RouterBuilder::new()
            .exhaustive()
            .default(|input: &str| input.len())
            .build();
        assert_eq!(app.dispatch("abc").unwrap(), Some(3));

        let app = RouterBuilder::new()
            .default(|input: &str| input.len())
            .exhaustive()
            .build();
        assert!(app.dispatch("abc").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = RouterConfig {
            comparator: ComparatorKind::Longest,
            policy: MatchPolicy::Exact,
            exhaustive: true,
        };

        let app = RouterBuilder::from_config(&config)
            .on(crate::path!("/a"), |_| "a")
            .build();

        assert_eq!(app.policy(), MatchPolicy::Exact);
        assert_eq!(app.dispatch("/a").unwrap(), Some("a"));
        assert!(matches!(
            app.dispatch("/a/b"),
            Err(DispatchError::NoMatch { ref input }) if input == "/a/b"
        ));
    }

    #[test]
    fn test_debug_lists_patterns() {
        let app = RouterBuilder::new()
            .on(crate::path!("/users", string("id")), |_| ())
            .exhaustive()
            .build();
        let debug = format!("{:?}", app);
        assert!(debug.contains("/users/:id"));
        assert!(debug.contains("exhaustive"));
    }
}
