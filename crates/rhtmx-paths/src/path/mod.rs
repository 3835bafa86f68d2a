/// Path builder
///
/// The composition entry point: [`path`] (or the [`path!`](crate::path!)
/// macro) takes a mix of literal text and already-built paths and joins them
/// into one path.
///
/// Literal text is normalized the same way everywhere: split on `/`, empty
/// fragments dropped, each remaining fragment matched as its own
/// case-insensitive segment. `"a//b/"`, `"/a/b"` and `"a/b"` all describe the
/// same two segments.
use tracing::warn;

use crate::combinators::{concat, segment};
use crate::definition::{Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::MakeError;
use crate::matchers::match_text;

/// One argument to the path builder
#[derive(Debug, Clone)]
pub enum PathPart {
    /// Literal text, normalized into segment-bounded literal matchers
    Text(String),
    /// A previously built path, used as-is
    Path(Path),
}

impl PathPart {
    fn into_path(self) -> Path {
        match self {
            PathPart::Text(text) => text_segments(&text),
            PathPart::Path(path) => path,
        }
    }

    /// Text with no segments in it (`"/"`, `""`) or the root path itself
    fn is_blank(&self) -> bool {
        match self {
            PathPart::Text(text) => fragments(text).next().is_none(),
            PathPart::Path(path) => path.is_root(),
        }
    }
}

impl From<&str> for PathPart {
    fn from(text: &str) -> Self {
        PathPart::Text(text.to_string())
    }
}

impl From<String> for PathPart {
    fn from(text: String) -> Self {
        PathPart::Text(text)
    }
}

impl From<Path> for PathPart {
    fn from(path: Path) -> Self {
        PathPart::Path(path)
    }
}

impl From<&Path> for PathPart {
    fn from(path: &Path) -> Self {
        PathPart::Path(path.clone())
    }
}

fn fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split('/').filter(|part| !part.is_empty())
}

/// Matches literal text one whole segment at a time
///
/// A leading slash is implied when missing.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::text_segments;
///
/// let inbox = text_segments("messages/inbox/");
/// assert_eq!(inbox.pattern(), "/messages/inbox");
/// assert_eq!(inbox.captures(), 0);
///
/// assert!(inbox.match_path("/Messages/INBOX").is_ok());
/// assert!(inbox.match_path("/messages/inboxes").is_err());
/// ```
pub fn text_segments(text: &str) -> Path {
    concat(fragments(text).map(|part| segment(match_text(part))))
}

/// The path of `"/"`: matches anything without consuming it
struct Root;

impl PathDef for Root {
    fn pattern(&self) -> &str {
        "/"
    }

    fn captures(&self) -> usize {
        0
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        Ok(MatchSuccess::new(input, Data::Null, 0))
    }

    fn make(&self, _data: &Data) -> Result<String, MakeError> {
        Ok("/".to_string())
    }

    fn is_root(&self) -> bool {
        true
    }
}

/// Root when every part is blank, otherwise the non-blank parts joined
fn join_parts(parts: Vec<PathPart>) -> Path {
    if parts.iter().all(PathPart::is_blank) {
        return Path::new(Root);
    }

    concat(
        parts
            .into_iter()
            .filter(|part| !part.is_blank())
            .map(PathPart::into_path),
    )
}

/// Joins literal text and paths, in order, into one path
///
/// Returns `None` when given no items. Items consisting only of slashes
/// produce the root path `/`; next to other items they contribute nothing,
/// so a path extending the root is just the other items.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{path, string, PathPart};
///
/// let user = path([PathPart::from("/users"), PathPart::from(string("id"))]).unwrap();
/// assert_eq!(user.pattern(), "/users/:id");
///
/// let root = path(["/"]).unwrap();
/// assert_eq!(root.make_static().unwrap(), "/");
///
/// assert!(path(Vec::<PathPart>::new()).is_none());
/// ```
pub fn path<I, P>(items: I) -> Option<Path>
where
    I: IntoIterator<Item = P>,
    P: Into<PathPart>,
{
    let parts: Vec<PathPart> = items.into_iter().map(Into::into).collect();

    if parts.is_empty() {
        warn!("path() called with no items; there is no path to build");
        return None;
    }

    Some(join_parts(parts))
}

impl Path {
    /// Builds a path from at least one item
    ///
    /// The non-optional form of [`path`], used by the [`path!`](crate::path!) macro.
    pub fn from_parts(first: impl Into<PathPart>, rest: Vec<PathPart>) -> Path {
        let mut parts = Vec::with_capacity(rest.len() + 1);
        parts.push(first.into());
        parts.extend(rest);
        join_parts(parts)
    }
}

/// Builds a path from literal text and paths
///
/// Accepts `&str`, `String`, `Path` and `&Path` items, at least one of them.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{path, string};
/// use serde_json::json;
///
/// let user = path!("/users", string("id"));
/// let settings = path!(&user, "settings");
/// assert_eq!(settings.pattern(), "/users/:id/settings");
///
/// let matched = settings.match_path("/users/42/settings").unwrap();
/// assert_eq!(matched.data, json!({"id": "42"}));
/// assert_eq!(settings.make(&json!({"id": "7"})).unwrap(), "/users/7/settings");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Path::from_parts($first, ::std::vec![$($crate::PathPart::from($rest)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{number, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const BIRD_SEED: &str = "/bird-seed/tap-shoes/glittery-shoes/candy/spicy-chips/speaker/";

    #[test]
    fn test_text_segments_pattern() {
        assert_eq!(text_segments("a/b/c/d").pattern(), "/a/b/c/d");
        assert_eq!(text_segments("//a///b/").pattern(), "/a/b");
        assert_eq!(text_segments("/users/inbox").captures(), 0);
    }

    #[test]
    fn test_text_segments_matches_whole_segments() {
        let p = text_segments(BIRD_SEED);

        assert!(p.match_path("/bird-seed").is_err());
        assert!(p.match_path(BIRD_SEED).is_ok());
        assert!(p
            .match_path("bird-seed/tap-shoes/glittery-shoes/candy/spicy-chips/speaker")
            .is_ok());
        assert!(p
            .match_path("/bird-seed/tap-shoes/glittery-shoes/candy/spicy-chips/speaker-easy")
            .is_err());
    }

    #[test]
    fn test_path_with_no_items_is_absent() {
        assert!(path(Vec::<PathPart>::new()).is_none());

        let not_blank = path(["l/hello"]).unwrap();
        assert!(not_blank.match_path("/l/hello/bye").is_ok());
    }

    #[test]
    fn test_root_path() {
        let root = crate::path!("/");
        assert_eq!(root.pattern(), "/");
        assert_eq!(root.captures(), 0);
        assert_eq!(root.make_static().unwrap(), "/");

        let matched = root.match_path("/").unwrap();
        assert_eq!(matched.remaining, "/");
        assert!(matched.is_exact());

        assert_eq!(root.match_path("/anything").unwrap().remaining, "/anything");
        assert_eq!(path(["", "//"]).unwrap().pattern(), "/");
    }

    #[test]
    fn test_blank_text_next_to_path_is_dropped() {
        let p = crate::path!("/", string("id"));
        assert_eq!(p.pattern(), "/:id");
        assert_eq!(p.make(&json!({"id": "x"})).unwrap(), "/x");
    }

    #[test]
    fn test_extending_root() {
        let root = crate::path!("/");

        let about = crate::path!(&root, "about");
        assert_eq!(about.pattern(), "/about");
        assert_eq!(about.make_static().unwrap(), "/about");
        assert!(about.match_path("/about").unwrap().is_exact());
        assert!(!about.is_root());

        let user = crate::path!(&root, string("id"));
        assert_eq!(user.pattern(), "/:id");
        let made = user.make(&json!({"id": "x"})).unwrap();
        assert_eq!(made, "/x");
        assert_eq!(user.match_path(&made).unwrap().data, json!({"id": "x"}));

        let still_root = crate::path!(&root, "/", root.clone());
        assert!(still_root.is_root());
        assert_eq!(still_root.make_static().unwrap(), "/");
    }

    #[test]
    fn test_complex_example() {
        let inner = crate::path!("a", "/b", string("c"));
        let p = crate::path!(inner, "d/e", string("f"));
        assert_eq!(p.pattern(), "/a/b/:c/d/e/:f");

        assert_eq!(
            p.make(&json!({"c": "sea", "f": "eph"})).unwrap(),
            "/a/b/sea/d/e/eph"
        );

        let matched = p.match_path("/a/B/SEE/d/E/FFFFF/geee").unwrap();
        assert_eq!(
            matched,
            MatchSuccess::new("/geee", json!({"c": "SEE", "f": "FFFFF"}), 2)
        );
    }

    #[test]
    fn test_path_sums_captures() {
        assert_eq!(crate::path!("/message/inbox").captures(), 0);
        assert_eq!(crate::path!("/users", string("id")).captures(), 1);
        assert_eq!(
            crate::path!("/posts", string("id"), "/comments", number("cid")).captures(),
            2
        );

        let route = crate::path!(
            "/users",
            string("userId"),
            "/posts",
            number("postId"),
            "/comments",
            string("commentId"),
        );
        assert_eq!(route.captures(), 3);
    }

    #[test]
    fn test_path_accepts_owned_and_borrowed_items() {
        let base = crate::path!("/api".to_string());
        let by_ref = crate::path!(&base, "v1");
        let by_value = path(vec![PathPart::from(base), PathPart::from("v2")]).unwrap();

        assert_eq!(by_ref.pattern(), "/api/v1");
        assert_eq!(by_value.pattern(), "/api/v2");
    }
}
