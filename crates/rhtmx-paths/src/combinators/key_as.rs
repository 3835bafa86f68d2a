/// Naming a capture
///
/// [`key_as`] places a path's captured data under a key, turning a bare
/// scalar into `{ key: scalar }`. It is a [`map_data`](super::map_data)
/// with a pattern of its own: `:key` plus a bracketed type indicator.
use serde_json::Map;

use super::map_data::{map_data_as, Isomorphism};
use crate::definition::{describe, Data, Path};
use crate::error::MakeError;
use crate::matchers::STRING_INDICATOR;

/// Bracketed type indicator appended after `:key`
///
/// - `[string]` renders as nothing (`:key`)
/// - an existing single bracket pair is kept (`[number]`)
/// - anything else is wrapped verbatim (`(red|blue)` → `[(red|blue)]`)
fn type_indicator(inner: &str) -> String {
    if inner == STRING_INDICATOR {
        return String::new();
    }

    let unbracketed = inner.strip_prefix('[').unwrap_or(inner);
    let unbracketed = unbracketed.strip_suffix(']').unwrap_or(unbracketed);

    if !unbracketed.is_empty() && !unbracketed.contains(['[', ']']) {
        format!("[{}]", unbracketed)
    } else {
        format!("[{}]", inner)
    }
}

/// Places `path`'s captured data under `key`
///
/// Capture count is unchanged: keying labels a capture, it does not add one.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{key_as, match_number, segment};
/// use serde_json::json;
///
/// let id = segment(key_as("id", match_number()));
/// assert_eq!(id.pattern(), "/:id[number]");
/// assert_eq!(id.match_path("/42").unwrap().data, json!({"id": 42}));
/// assert_eq!(id.make(&json!({"id": 7})).unwrap(), "/7");
/// ```
pub fn key_as(key: impl Into<String>, path: Path) -> Path {
    let key = key.into();
    let pattern = format!(":{}{}", key, type_indicator(path.pattern()));

    let to_key = key.clone();
    let iso = Isomorphism::new(
        move |inner| {
            let mut keyed = Map::new();
            keyed.insert(to_key.clone(), inner);
            Ok(Data::Object(keyed))
        },
        move |outer: &Data| {
            outer.get(key.as_str()).cloned().ok_or_else(|| {
                MakeError::MissingKey {
                    key: key.clone(),
                    found: describe(outer),
                }
                .into()
            })
        },
    );

    map_data_as(path, iso, pattern)
}
