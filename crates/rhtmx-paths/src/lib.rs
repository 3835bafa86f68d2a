//! # RHTMX Paths
//!
//! Composable path combinators for matching and generating URL paths:
//! - Literal segments (`/users`), case-insensitive by default
//! - String and numeric captures (`/:id`, `/:price[number]`)
//! - Closed enumerations (`/:color[(red|blue)]`)
//! - Reshaping captured data through isomorphisms
//! - Best-match routing across many paths
//!
//! ## Combinator Approach
//!
//! Every path is an immutable value built from smaller paths:
//! - **Match** an input, producing captured data and the unconsumed suffix
//! - **Make** a path string back from captured data
//! - **Pattern** and **capture count** are computed by composition
//!
//! A path defined once serves for both parsing and link generation, and a
//! previously built path can be extended by passing it to `path!` again.
//!
//! ## Example
//!
//! ```
//! use rhtmx_paths::{number, path, router, string};
//! use serde_json::json;
//!
//! let user = path!("/users", string("id"));
//! let post = path!(&user, "/posts", number("post"));
//!
//! assert_eq!(post.pattern(), "/users/:id/posts/:post[number]");
//!
//! let matched = post.match_path("/users/ada/posts/3").unwrap();
//! assert_eq!(matched.data, json!({"id": "ada", "post": 3}));
//! assert_eq!(post.make(&json!({"id": "lin", "post": 9})).unwrap(), "/users/lin/posts/9");
//!
//! let app = router()
//!     .on(&user, |m| format!("user {}", m.data["id"]))
//!     .on(&post, |m| format!("post {}", m.data["post"]))
//!     .build();
//!
//! assert_eq!(app.dispatch("/users/ada/posts/3").unwrap().as_deref(), Some("post 3"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod combinators;
pub mod config;
pub mod definition;
pub mod error;
pub mod matchers;
pub mod matches;
pub mod path;
pub mod router;
pub mod typed;

// ============================================================================
// Public Surface
// ============================================================================

pub use combinators::{concat, key_as, map_data, segment, Isomorphism};
pub use config::{Config, RouterConfig};
pub use definition::{Data, MatchResult, MatchSuccess, Path, PathDef};
pub use error::{BoxError, DispatchError, MakeError, MatchError};
pub use matchers::{
    match_number, match_regexp, match_regexp_as, match_string, match_text, match_text_enum,
    match_text_with, number, render_number, string, text_enum, TextOptions, NUMBER_INDICATOR,
    STRING_INDICATOR,
};
pub use matches::is_exact_match;
pub use path::{path, text_segments, PathPart};
pub use router::{
    best_match, longest_match, router, ComparatorKind, DispatchOptions, MatchComparator,
    MatchPolicy, Router, RouterBuilder,
};
pub use typed::TypedPath;
