/// Literal text primitives
///
/// - [`match_text`]: a fixed string at the start of the input
/// - [`match_text_enum`]: one of a closed, ordered set of strings
/// - [`text_enum`]: the enumeration confined to a segment and keyed
use crate::combinators::{key_as, segment};
use crate::definition::{describe, Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::{MakeError, MatchError};

/// Options for [`match_text_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Compare case-sensitively (default: `false`)
    pub case_sensitive: bool,
}

impl TextOptions {
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

struct Text {
    text: String,
    case_sensitive: bool,
}

impl PathDef for Text {
    fn pattern(&self) -> &str {
        &self.text
    }

    fn captures(&self) -> usize {
        0
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let remaining = if self.case_sensitive {
            input.strip_prefix(self.text.as_str())
        } else {
            strip_prefix_ignore_case(input, &self.text)
        };

        remaining
            .map(|rest| MatchSuccess::new(rest, Data::Null, 0))
            .ok_or_else(|| MatchError::Text {
                expected: self.text.clone(),
                found: input.to_string(),
            })
    }

    fn make(&self, _data: &Data) -> Result<String, MakeError> {
        Ok(self.text.clone())
    }
}

/// Strips `prefix` from `input` comparing lowercase forms char by char
///
/// The returned suffix keeps the input's original casing.
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = input.chars();
    for expected in prefix.chars() {
        let found = chars.next()?;
        if !found.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Matches `text` at the start of the input, ignoring case
///
/// Captures nothing; the remaining input keeps its original casing.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::match_text;
///
/// let hello = match_text("hello");
/// let matched = hello.match_path("HELLOthere").unwrap();
/// assert_eq!(matched.remaining, "there");
/// assert_eq!(hello.make_static().unwrap(), "hello");
/// assert!(hello.match_path("fooey").is_err());
/// ```
pub fn match_text(text: impl Into<String>) -> Path {
    match_text_with(text, TextOptions::default())
}

/// Matches `text` at the start of the input under the given options
pub fn match_text_with(text: impl Into<String>, options: TextOptions) -> Path {
    Path::new(Text {
        text: text.into(),
        case_sensitive: options.case_sensitive,
    })
}

struct TextEnum {
    options: Vec<String>,
    pattern: String,
}

impl PathDef for TextEnum {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn captures(&self) -> usize {
        1
    }

    // Declaration order decides between overlapping alternatives.
    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        self.options
            .iter()
            .find_map(|option| {
                input
                    .strip_prefix(option.as_str())
                    .map(|rest| MatchSuccess::new(rest, Data::String(option.clone()), 1))
            })
            .ok_or_else(|| MatchError::Enum {
                options: self.options.clone(),
                found: input.to_string(),
            })
    }

    fn make(&self, data: &Data) -> Result<String, MakeError> {
        match data.as_str() {
            Some(value) if self.options.iter().any(|o| o == value) => Ok(value.to_string()),
            _ => Err(MakeError::InvalidEnumValue {
                value: describe(data),
                allowed: self.options.clone(),
            }),
        }
    }
}

/// Matches one of `options`, capturing which one matched
///
/// Alternatives are tried in the order given, so list `"google"` before
/// `"go"` if both are allowed.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::match_text_enum;
/// use serde_json::json;
///
/// let nums = match_text_enum(["one", "two", "three"]);
/// assert_eq!(nums.pattern(), "(one|two|three)");
///
/// let matched = nums.match_path("twoooo").unwrap();
/// assert_eq!(matched.data, json!("two"));
/// assert_eq!(matched.remaining, "ooo");
///
/// assert!(nums.make(&json!("four")).is_err());
/// ```
pub fn match_text_enum<I, S>(options: I) -> Path
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    let pattern = format!("({})", options.join("|"));
    Path::new(TextEnum { options, pattern })
}

/// A keyed enumeration confined to one path segment
///
/// # Examples
///
/// ```
/// use rhtmx_paths::text_enum;
/// use serde_json::json;
///
/// let color = text_enum("color", ["red", "blue", "green"]);
/// assert_eq!(color.pattern(), "/:color[(red|blue|green)]");
/// assert_eq!(color.match_path("/blue/other").unwrap().data, json!({"color": "blue"}));
/// assert_eq!(color.make(&json!({"color": "red"})).unwrap(), "/red");
/// ```
pub fn text_enum<I, S>(key: impl Into<String>, options: I) -> Path
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    segment(key_as(key, match_text_enum(options)))
}
