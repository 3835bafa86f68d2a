/// Numeric capture
///
/// Matches a leading base-10 numeral (`digits` with an optional `.digits`
/// fraction) and converts it to a JSON number. Rendering uses the shortest
/// decimal form, so `100.0` renders as `100`.
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;

use super::regexp::match_regexp_as;
use crate::combinators::{key_as, map_data, segment, Isomorphism};
use crate::definition::{describe, Data, Path};
use crate::error::BoxError;

/// Pattern string of the numeric primitive
pub const NUMBER_INDICATOR: &str = "[number]";

static NUMERAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([0-9]+(?:\.[0-9]+)?)(.*)$").unwrap());

/// Parses a numeral, keeping integers integral
fn parse_numeral(data: Data) -> Result<Data, BoxError> {
    let text = data.as_str().ok_or("numeral capture was not text")?;

    if !text.contains('.') {
        if let Ok(n) = text.parse::<u64>() {
            return Ok(Data::from(n));
        }
    }

    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Data::Number)
        .ok_or_else(|| format!("input parsed as NaN: \"{}\"", text).into())
}

fn render_numeral(data: &Data) -> Result<Data, BoxError> {
    match data {
        Data::Number(n) => Ok(Data::String(render_number(n))),
        other => Err(format!("expected number data, found: {}", describe(other)).into()),
    }
}

/// Shortest decimal text for a JSON number
///
/// # Examples
///
/// ```
/// use rhtmx_paths::render_number;
/// use serde_json::Number;
///
/// assert_eq!(render_number(&Number::from_f64(100.0).unwrap()), "100");
/// assert_eq!(render_number(&Number::from_f64(4.2).unwrap()), "4.2");
/// assert_eq!(render_number(&Number::from(7)), "7");
/// ```
pub fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64's Display already drops a trailing ".0"
    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
}

/// Matches a leading numeral, stopping at the first non-numeral character
pub fn match_number() -> Path {
    map_data(
        match_regexp_as(NUMERAL_REGEX.clone(), NUMBER_INDICATOR),
        Isomorphism::new(parse_numeral, render_numeral),
    )
}

/// Captures one path segment as a number under `key`
///
/// # Examples
///
/// ```
/// use rhtmx_paths::number;
/// use serde_json::json;
///
/// let price = number("price");
/// assert_eq!(price.pattern(), "/:price[number]");
///
/// let matched = price.match_path("/19.99/").unwrap();
/// assert_eq!(matched.data, json!({"price": 19.99}));
/// assert_eq!(matched.remaining, "/");
///
/// assert_eq!(price.make(&json!({"price": 100.0})).unwrap(), "/100");
/// ```
pub fn number(key: impl Into<String>) -> Path {
    segment(key_as(key, match_number()))
}
