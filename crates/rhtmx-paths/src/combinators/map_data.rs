/// Isomorphic data transforms
///
/// [`map_data`] reshapes a path's captured data without touching what it
/// matches or how many values it captures. The two directions fail
/// differently:
/// - `to` failing during a match becomes a match failure
/// - `from` failing during generation becomes a [`MakeError`]
use std::sync::Arc;

use crate::definition::{Data, MatchResult, MatchSuccess, Path, PathDef};
use crate::error::{BoxError, MakeError, MatchError};

type ToFn = dyn Fn(Data) -> Result<Data, BoxError> + Send + Sync;
type FromFn = dyn Fn(&Data) -> Result<Data, BoxError> + Send + Sync;

/// A pair of inverse conversions between a path's data and another shape
#[derive(Clone)]
pub struct Isomorphism {
    to: Arc<ToFn>,
    from: Arc<FromFn>,
}

impl Isomorphism {
    /// `to` converts matched data outward, `from` converts it back for generation
    pub fn new<T, F>(to: T, from: F) -> Self
    where
        T: Fn(Data) -> Result<Data, BoxError> + Send + Sync + 'static,
        F: Fn(&Data) -> Result<Data, BoxError> + Send + Sync + 'static,
    {
        Self {
            to: Arc::new(to),
            from: Arc::new(from),
        }
    }

    pub fn to(&self, inner: Data) -> Result<Data, BoxError> {
        (self.to)(inner)
    }

    pub fn from(&self, outer: &Data) -> Result<Data, BoxError> {
        (self.from)(outer)
    }
}

impl std::fmt::Debug for Isomorphism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Isomorphism")
    }
}

struct MapData {
    inner: Path,
    iso: Isomorphism,
    pattern: String,
}

impl PathDef for MapData {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn captures(&self) -> usize {
        self.inner.captures()
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let matched = self.inner.match_path(input)?;
        let data = self
            .iso
            .to(matched.data)
            .map_err(|e| MatchError::Transform(e.to_string()))?;
        Ok(MatchSuccess { data, ..matched })
    }

    fn make(&self, data: &Data) -> Result<String, MakeError> {
        let inner_data = self.iso.from(data).map_err(into_make_error)?;
        self.inner.make(&inner_data)
    }
}

/// Keeps typed generation errors raised inside a conversion intact
fn into_make_error(err: BoxError) -> MakeError {
    match err.downcast::<MakeError>() {
        Ok(make_err) => *make_err,
        Err(other) => MakeError::Transform(other.to_string()),
    }
}

/// Wraps `path`, converting its captured data through `iso`
///
/// Pattern and capture count are those of `path`.
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{map_data, string, Isomorphism};
/// use serde_json::json;
///
/// let upper = map_data(
///     string("code"),
///     Isomorphism::new(
///         |d| Ok(json!({"code": d["code"].as_str().unwrap_or_default().to_uppercase()})),
///         |d| Ok(json!({"code": d["code"].as_str().unwrap_or_default().to_lowercase()})),
///     ),
/// );
///
/// assert_eq!(upper.match_path("/abc").unwrap().data, json!({"code": "ABC"}));
/// assert_eq!(upper.make(&json!({"code": "XYZ"})).unwrap(), "/xyz");
/// assert_eq!(upper.captures(), 1);
/// ```
pub fn map_data(path: Path, iso: Isomorphism) -> Path {
    let pattern = path.pattern().to_string();
    map_data_as(path, iso, pattern)
}

/// [`map_data`] with a replacement pattern string
pub(crate) fn map_data_as(path: Path, iso: Isomorphism, pattern: String) -> Path {
    Path::new(MapData {
        inner: path,
        iso,
        pattern,
    })
}
