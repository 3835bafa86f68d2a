/// Exactness of a match result
use crate::definition::MatchResult;

/// True for a successful match that left nothing but an optional trailing `/`
///
/// Failed matches are never exact.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{is_exact_match, path, string};
///
/// let user = path!("/users", string("id"));
/// assert!(is_exact_match(&user.match_path("/users/42")));
/// assert!(is_exact_match(&user.match_path("/users/42/")));
/// assert!(!is_exact_match(&user.match_path("/users/42/settings")));
/// assert!(!is_exact_match(&user.match_path("/posts")));
/// ```
pub fn is_exact_match<T>(result: &MatchResult<'_, T>) -> bool {
    result.as_ref().is_ok_and(|success| success.is_exact())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{Data, MatchSuccess};
    use crate::error::MatchError;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("/", true)]
    #[case("//", false)]
    #[case("/settings", false)]
    #[case("x", false)]
    fn test_exact_match_remaining(#[case] remaining: &str, #[case] exact: bool) {
        let result: MatchResult<'_> = Ok(MatchSuccess::new(remaining, Data::Null, 0));
        assert_eq!(is_exact_match(&result), exact);
    }

    #[test]
    fn test_failure_is_never_exact() {
        let result: MatchResult<'_> = Err(MatchError::Text {
            expected: "a".to_string(),
            found: String::new(),
        });
        assert!(!is_exact_match(&result));
    }
}
