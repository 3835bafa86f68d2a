/// Segment boundaries
///
/// A segment is the text after an optional leading `/` up to (not
/// including) the next `/` or the end of input. [`segment`] runs its inner
/// path against that text alone and insists the whole of it is consumed.
use crate::definition::{Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::{MakeError, MatchError};

struct Segment {
    inner: Path,
    pattern: String,
}

/// Splits off the first segment, returning `(segment, rest)`
///
/// `rest` keeps its leading `/` so the next segment can be matched, and a
/// lone trailing `/` survives verbatim.
pub(crate) fn split_segment(input: &str) -> (&str, &str) {
    let body = input.strip_prefix('/').unwrap_or(input);
    match body.find('/') {
        Some(end) => body.split_at(end),
        None => (body, ""),
    }
}

fn ensure_leading_slash(text: &str) -> String {
    if text.starts_with('/') {
        text.to_string()
    } else {
        format!("/{}", text)
    }
}

impl PathDef for Segment {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn captures(&self) -> usize {
        self.inner.captures()
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let (text, rest) = split_segment(input);
        let matched = self.inner.match_path(text)?;

        if !matched.remaining.is_empty() {
            return Err(MatchError::UnusedSegmentInput {
                segment: text.to_string(),
                leftover: matched.remaining.to_string(),
            });
        }

        Ok(MatchSuccess::new(rest, matched.data, self.inner.captures()))
    }

    // Mirrors the pattern: a nested segment does not add a second slash.
    fn make(&self, data: &Data) -> Result<String, MakeError> {
        let rendered = self.inner.make(data)?;
        Ok(ensure_leading_slash(&rendered))
    }
}

/// Confines `inner` to exactly one path segment
///
/// No slash is required: a bare string is one whole segment.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{match_text, segment};
///
/// let s = segment(match_text("this-works"));
/// assert_eq!(s.pattern(), "/this-works");
/// assert_eq!(s.match_path("/this-works/too").unwrap().remaining, "/too");
/// assert_eq!(s.match_path("this-works").unwrap().remaining, "");
///
/// let err = s.match_path("/this-works-oops").unwrap_err();
/// assert!(err.to_string().contains(r#"unused input "-oops""#));
/// ```
pub fn segment(inner: Path) -> Path {
    let pattern = ensure_leading_slash(inner.pattern());
    Path::new(Segment { inner, pattern })
}
