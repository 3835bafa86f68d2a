/// Regexp-driven capture primitive
///
/// The building block behind the greedy string and numeric captures.
use regex::Regex;

use crate::definition::{describe, Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::{MakeError, MatchError};

/// Pattern string used when a regexp primitive is given none
pub const STRING_INDICATOR: &str = "[string]";

struct Regexp {
    regex: Regex,
    pattern: String,
}

impl PathDef for Regexp {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn captures(&self) -> usize {
        1
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let Some(groups) = self.regex.captures(input) else {
            return Err(MatchError::Regexp {
                regexp: self.regex.as_str().to_string(),
                found: input.to_string(),
            });
        };

        match (groups.get(1), groups.get(2)) {
            (Some(captured), Some(rest)) => Ok(MatchSuccess::new(
                rest.as_str(),
                Data::String(captured.as_str().to_string()),
                1,
            )),
            _ => Err(MatchError::RegexpGroups {
                regexp: self.regex.as_str().to_string(),
                found: input.to_string(),
            }),
        }
    }

    fn make(&self, data: &Data) -> Result<String, MakeError> {
        data.as_str()
            .map(str::to_string)
            .ok_or_else(|| MakeError::UnexpectedData {
                expected: "string",
                found: describe(data),
            })
    }
}

/// Captures the first group of `regex` as a string
///
/// The regex must yield two groups: the captured text, then the remaining
/// input. It should be anchored with `^` and its second group should run to
/// the end of the input.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::match_regexp;
/// use regex::Regex;
/// use serde_json::json;
///
/// let hex = match_regexp(Regex::new(r"^([0-9a-f]+)(.*)$").unwrap());
/// assert_eq!(hex.pattern(), "[string]");
///
/// let matched = hex.match_path("c0ffee/rest").unwrap();
/// assert_eq!(matched.data, json!("c0ffee"));
/// assert_eq!(matched.remaining, "/rest");
/// ```
pub fn match_regexp(regex: Regex) -> Path {
    match_regexp_as(regex, STRING_INDICATOR)
}

/// Like [`match_regexp`], with an explicit pattern string such as `[hex]`
pub fn match_regexp_as(regex: Regex, pattern: impl Into<String>) -> Path {
    Path::new(Regexp {
        regex,
        pattern: pattern.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_regexp_no_match() {
        let digits = match_regexp(Regex::new(r"^([0-9]+)(.*)$").unwrap());
        let err = digits.match_path("abc").unwrap_err();
        assert_eq!(err.to_string(), r#"regexp (^([0-9]+)(.*)$) did not match: "abc""#);
    }

    #[test]
    fn test_regexp_missing_groups() {
        let one_group = match_regexp(Regex::new(r"^([0-9]+)").unwrap());
        let err = one_group.match_path("123").unwrap_err();
        assert!(matches!(err, MatchError::RegexpGroups { .. }));
    }

    #[test]
    fn test_regexp_make_requires_string() {
        let any = match_regexp(Regex::new(r"^(.+)($)").unwrap());
        assert_eq!(any.make(&json!("hello")).unwrap(), "hello");
        assert!(matches!(
            any.make(&json!(5)),
            Err(MakeError::UnexpectedData { expected: "string", .. })
        ));
    }

    #[test]
    fn test_regexp_custom_pattern() {
        let hex = match_regexp_as(Regex::new(r"^([0-9a-f]+)(.*)$").unwrap(), "[hex]");
        assert_eq!(hex.pattern(), "[hex]");
        assert_eq!(hex.captures(), 1);
    }
}
