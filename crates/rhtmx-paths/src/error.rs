/// Error types for matching, generation and dispatch
///
/// Three separate channels, one per failure class:
/// - [`MatchError`]: recoverable, carried as data inside a failed match
/// - [`MakeError`]: generation was handed data outside the path's domain
/// - [`DispatchError`]: an exhaustive router found no handler
use thiserror::Error;

/// Boxed error returned by user-supplied data conversions
///
/// Conversions passed to [`map_data`](crate::map_data) may return any error type;
/// a plain message works too:
///
/// ```
/// use rhtmx_paths::BoxError;
///
/// let err: BoxError = "bad input".into();
/// assert_eq!(err.to_string(), "bad input");
/// ```
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a path did not match its input
///
/// Composed paths never wrap this: the first failing primitive's cause is
/// propagated verbatim, so the message always names the innermost mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A literal text matcher did not find its text at the start of the input
    #[error("expected \"{expected}\", found: \"{found}\"")]
    Text { expected: String, found: String },

    /// None of an enumeration's alternatives prefixed the input
    #[error("expected one of [{}], found: \"{found}\"", .options.join(", "))]
    Enum { options: Vec<String>, found: String },

    /// A regexp primitive did not match at all
    #[error("regexp ({regexp}) did not match: \"{found}\"")]
    Regexp { regexp: String, found: String },

    /// A regexp primitive matched but did not produce the two required groups
    #[error("regexp {regexp} failed to yield two capture groups from: \"{found}\"")]
    RegexpGroups { regexp: String, found: String },

    /// The inner path of a segment left part of the segment unconsumed
    #[error("segment text \"{segment}\" matched the inner path, but had unused input \"{leftover}\"")]
    UnusedSegmentInput { segment: String, leftover: String },

    /// A data conversion rejected the captured value
    #[error("{0}")]
    Transform(String),

    /// Captured data could not be decoded into the caller's declared type
    #[error("captured data did not fit the declared shape: {0}")]
    Shape(String),
}

/// Why a path could not render the data it was given
#[derive(Debug, Error)]
pub enum MakeError {
    /// Enumeration asked to render a value outside its allowed set
    #[error("invalid value for text enum: {value}. Allowed: [{}].", .allowed.join(", "))]
    InvalidEnumValue { value: String, allowed: Vec<String> },

    /// Keyed path was given data without its key
    #[error("missing key \"{key}\" in data: {found}")]
    MissingKey { key: String, found: String },

    /// Primitive was given data of the wrong kind
    #[error("expected {expected} data, found: {found}")]
    UnexpectedData {
        expected: &'static str,
        found: String,
    },

    /// A data conversion's reverse direction failed
    #[error("{0}")]
    Transform(String),

    /// Typed data could not be turned into captured data
    #[error("failed to serialize path data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why a router could not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Exhaustive router with no matching route
    #[error("router had no handler matching: \"{input}\"")]
    NoMatch { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_messages() {
        let err = MatchError::Text {
            expected: "hello".to_string(),
            found: "other stuff".to_string(),
        };
        assert_eq!(err.to_string(), r#"expected "hello", found: "other stuff""#);

        let err = MatchError::Enum {
            options: vec!["red".to_string(), "blue".to_string()],
            found: "yellow".to_string(),
        };
        assert_eq!(err.to_string(), r#"expected one of [red, blue], found: "yellow""#);
    }

    #[test]
    fn test_make_error_names_value_and_allowed_set() {
        let err = MakeError::InvalidEnumValue {
            value: "four".to_string(),
            allowed: vec!["one".to_string(), "two".to_string(), "three".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid value for text enum: four. Allowed: [one, two, three]."
        );
    }

    #[test]
    fn test_dispatch_error_names_input() {
        let err = DispatchError::NoMatch {
            input: "uhhh".to_string(),
        };
        assert_eq!(err.to_string(), r#"router had no handler matching: "uhhh""#);
    }
}
