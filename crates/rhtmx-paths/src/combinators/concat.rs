/// Sequential composition
///
/// [`concat`] threads the remaining input through each part in order. There
/// is no backtracking: the first failing part fails the whole composition
/// with its own cause.
use crate::definition::{Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::MakeError;

struct Concat {
    parts: Vec<Path>,
    pattern: String,
    captures: usize,
}

/// Folds one part's data into the running total
///
/// Objects merge key by key with later keys winning; any other non-null
/// value replaces what came before.
fn merge_data(total: &mut Data, next: Data) {
    match (total, next) {
        (_, Data::Null) => {}
        (Data::Object(merged), Data::Object(incoming)) => merged.extend(incoming),
        (slot, incoming) => *slot = incoming,
    }
}

impl PathDef for Concat {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn captures(&self) -> usize {
        self.captures
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let mut remaining = input;
        let mut data = Data::Null;

        for part in &self.parts {
            let matched = part.match_path(remaining)?;
            remaining = matched.remaining;
            merge_data(&mut data, matched.data);
        }

        Ok(MatchSuccess::new(remaining, data, self.captures))
    }

    // Every part sees the full data and picks out its own keys.
    fn make(&self, data: &Data) -> Result<String, MakeError> {
        self.parts.iter().map(|part| part.make(data)).collect()
    }
}

/// Joins `parts` end to end with no separator
///
/// Patterns concatenate verbatim and capture counts add up.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{concat, match_text, string};
///
/// let greeting = concat([match_text("hello"), match_text("there")]);
/// let matched = greeting.match_path("hellotherefriend").unwrap();
/// assert!(matched.data.is_null());
/// assert_eq!(matched.remaining, "friend");
///
/// let stuff = concat([match_text("stuff"), string("foo")]);
/// assert_eq!(stuff.pattern(), "stuff/:foo");
/// assert_eq!(stuff.captures(), 1);
/// ```
pub fn concat<I>(parts: I) -> Path
where
    I: IntoIterator<Item = Path>,
{
    let parts: Vec<Path> = parts.into_iter().collect();
    let pattern: String = parts.iter().map(Path::pattern).collect();
    let captures: usize = parts.iter().map(Path::captures).sum();

    Path::new(Concat {
        parts,
        pattern,
        captures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchError;
    use crate::matchers::{match_string, match_text, string};
    use crate::path::text_segments;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn hello_there() -> Path {
        concat([match_text("hello"), match_text("there")])
    }

    #[test]
    fn test_concat_combines_simple_text() {
        assert_eq!(
            hello_there().match_path("hellotherefriend").unwrap(),
            MatchSuccess::new("friend", Data::Null, 0)
        );
        assert_eq!(hello_there().make_static().unwrap(), "hellothere");
    }

    #[test]
    fn test_concat_reports_failing_part() {
        assert_eq!(
            hello_there().match_path("other stuff").unwrap_err(),
            MatchError::Text {
                expected: "hello".to_string(),
                found: "other stuff".to_string(),
            }
        );
        assert_eq!(
            hello_there().match_path("hellostuff").unwrap_err().to_string(),
            r#"expected "there", found: "stuff""#
        );
    }

    #[test]
    fn test_concat_pattern() {
        assert_eq!(concat([match_text("stuff"), string("foo")]).pattern(), "stuff/:foo");
    }

    #[test]
    fn test_concat_sums_captures() {
        assert_eq!(hello_there().captures(), 0);
        assert_eq!(concat([match_text("hello"), string("name")]).captures(), 1);
        assert_eq!(concat([string("first"), string("last")]).captures(), 2);
    }

    #[test]
    fn test_concat_merges_and_generates() {
        let p = concat([
            text_segments("/hello"),
            string("person"),
            text_segments("/from"),
            string("from"),
        ]);

        assert_eq!(
            p.make(&json!({"from": "bob", "person": "alice"})).unwrap(),
            "/hello/alice/from/bob"
        );
        assert_eq!(
            p.match_path("/hello/alice/from/bob").unwrap(),
            MatchSuccess::new("", json!({"from": "bob", "person": "alice"}), 2)
        );
    }

    #[test]
    fn test_concat_later_key_wins() {
        let p = concat([string("id"), string("id")]);
        assert_eq!(p.match_path("/first/second").unwrap().data, json!({"id": "second"}));
    }

    #[test]
    fn test_concat_scalar_data() {
        let p = concat([match_text("x-"), match_string()]);
        assert_eq!(p.match_path("x-rest").unwrap().data, json!("rest"));
    }

    #[test]
    fn test_merge_data() {
        let mut total = Data::Null;
        merge_data(&mut total, Data::Null);
        assert_eq!(total, Data::Null);

        merge_data(&mut total, json!({"a": 1}));
        merge_data(&mut total, json!({"b": 2}));
        merge_data(&mut total, Data::Null);
        assert_eq!(total, json!({"a": 1, "b": 2}));

        merge_data(&mut total, json!("scalar"));
        assert_eq!(total, json!("scalar"));
    }

    #[test]
    fn test_concat_empty_is_identity() {
        let empty = concat(Vec::new());
        assert_eq!(empty.pattern(), "");
        assert_eq!(empty.captures(), 0);
        assert_eq!(empty.match_path("/x").unwrap().remaining, "/x");
        assert_eq!(empty.make_static().unwrap(), "");
    }
}
