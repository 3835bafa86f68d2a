/// Greedy string capture
use once_cell::sync::Lazy;
use regex::Regex;

use super::regexp::match_regexp;
use crate::combinators::{key_as, segment};
use crate::definition::Path;

static GREEDY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^(.+)($)").unwrap());

/// Consumes the entire input (at least one character) as a string
///
/// Greedy: wrap it in a [`segment`] to stop at the next `/`, or use [`string`].
pub fn match_string() -> Path {
    match_regexp(GREEDY_REGEX.clone())
}

/// Captures one path segment as a string under `key`
///
/// # Examples
///
/// ```
/// use rhtmx_paths::string;
/// use serde_json::json;
///
/// let finn = string("finn");
/// assert_eq!(finn.pattern(), "/:finn");
///
/// let matched = finn.match_path("yep/nope").unwrap();
/// assert_eq!(matched.data, json!({"finn": "yep"}));
/// assert_eq!(matched.remaining, "/nope");
/// ```
pub fn string(key: impl Into<String>) -> Path {
    segment(key_as(key, match_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::MatchSuccess;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_match_string_is_greedy() {
        let matched = match_string().match_path("hello/there").unwrap();
        assert_eq!(matched.data, json!("hello/there"));
        assert_eq!(matched.remaining, "");
        assert_eq!(match_string().pattern(), "[string]");
        assert_eq!(match_string().captures(), 1);
    }

    #[test]
    fn test_match_string_rejects_empty() {
        assert!(match_string().match_path("").is_err());
    }

    #[test]
    fn test_string_parses_text() {
        let param = string("bluey");
        assert_eq!(
            param.match_path("hello-there").unwrap(),
            MatchSuccess::new("", json!({"bluey": "hello-there"}), 1)
        );
        assert_eq!(
            param.match_path("hello49/other-stuff").unwrap(),
            MatchSuccess::new("/other-stuff", json!({"bluey": "hello49"}), 1)
        );
    }

    #[test]
    fn test_string_rejects_empty_segment() {
        assert!(string("id").match_path("/").is_err());
        assert!(string("id").match_path("//x").is_err());
    }

    #[test]
    fn test_string_make() {
        assert_eq!(string("id").make(&json!({"id": "42"})).unwrap(), "/42");
        assert!(string("id").make(&json!({"other": "42"})).is_err());
    }
}
