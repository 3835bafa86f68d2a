/// Path values and match results
///
/// A [`Path`] is an immutable, cheaply clonable handle around anything that
/// implements [`PathDef`]. Every combinator in this crate takes paths and
/// returns a new path; nothing is ever mutated after construction, so one
/// path can be matched from any number of threads at once.
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{MakeError, MatchError};

/// Captured data: `Null`, a bare scalar, or an object of named captures
pub type Data = serde_json::Value;

/// Outcome of matching a path against an input
pub type MatchResult<'a, T = Data> = Result<MatchSuccess<'a, T>, MatchError>;

/// A successful match
///
/// `remaining` always borrows a suffix of the matched input.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSuccess<'a, T = Data> {
    /// Unconsumed input (possibly empty)
    pub remaining: &'a str,
    /// Captured data
    pub data: T,
    /// Capture count of the path that produced this match
    pub captures: usize,
}

impl<'a, T> MatchSuccess<'a, T> {
    pub fn new(remaining: &'a str, data: T, captures: usize) -> Self {
        Self {
            remaining,
            data,
            captures,
        }
    }

    /// True when nothing is left but an optional single trailing `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_paths::{path, string};
    ///
    /// let user = path!("/users", string("id"));
    /// assert!(user.match_path("/users/42").unwrap().is_exact());
    /// assert!(user.match_path("/users/42/").unwrap().is_exact());
    /// assert!(!user.match_path("/users/42/settings").unwrap().is_exact());
    /// ```
    pub fn is_exact(&self) -> bool {
        self.remaining.is_empty() || self.remaining == "/"
    }

    /// Transforms the captured data, keeping remaining text and capture count
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MatchSuccess<'a, U> {
        MatchSuccess {
            remaining: self.remaining,
            data: f(self.data),
            captures: self.captures,
        }
    }
}

impl<'a> MatchSuccess<'a, Data> {
    /// Decodes the captured data into a caller-declared shape
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_paths::{path, number, string};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Product {
    ///     sku: String,
    ///     price: f64,
    /// }
    ///
    /// let p = path!("/products", string("sku"), number("price"));
    /// let product: Product = p.match_path("/products/ab-12/19.99").unwrap().decode().unwrap();
    /// assert_eq!(product.sku, "ab-12");
    /// assert_eq!(product.price, 19.99);
    /// ```
    pub fn decode<T>(&self) -> Result<T, MatchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        T::deserialize(&self.data).map_err(|e| MatchError::Shape(e.to_string()))
    }
}

/// The four members every path provides
///
/// Implement this to add a new primitive; wrap it with [`Path::new`] to make
/// it composable with the rest of the crate.
pub trait PathDef: Send + Sync {
    /// Human-readable pattern, e.g. `/users/:id[number]`
    fn pattern(&self) -> &str;

    /// Number of dynamic values this path extracts
    fn captures(&self) -> usize;

    /// Tests `input`, returning captured data and the unconsumed suffix
    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a>;

    /// Renders `data` back into path text
    fn make(&self, data: &Data) -> Result<String, MakeError>;

    /// True only for the bare root path `/`, which vanishes when extended
    fn is_root(&self) -> bool {
        false
    }
}

/// Shared handle to a composed path
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{path, number};
/// use serde_json::json;
///
/// let price = path!("/items", number("price"));
/// assert_eq!(price.pattern(), "/items/:price[number]");
/// assert_eq!(price.captures(), 1);
///
/// let matched = price.match_path("/items/19.99").unwrap();
/// assert_eq!(matched.data, json!({"price": 19.99}));
/// assert_eq!(price.make(&json!({"price": 100.0})).unwrap(), "/items/100");
/// ```
#[derive(Clone)]
pub struct Path {
    inner: Arc<dyn PathDef>,
}

impl Path {
    pub fn new<P>(def: P) -> Self
    where
        P: PathDef + 'static,
    {
        Self {
            inner: Arc::new(def),
        }
    }

    pub fn pattern(&self) -> &str {
        self.inner.pattern()
    }

    pub fn captures(&self) -> usize {
        self.inner.captures()
    }

    pub fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        self.inner.match_path(input)
    }

    pub fn make(&self, data: &Data) -> Result<String, MakeError> {
        self.inner.make(data)
    }

    /// Renders a path that captures nothing
    pub fn make_static(&self) -> Result<String, MakeError> {
        self.inner.make(&Data::Null)
    }

    pub fn is_root(&self) -> bool {
        self.inner.is_root()
    }
}

impl PathDef for Path {
    fn pattern(&self) -> &str {
        self.inner.pattern()
    }

    fn captures(&self) -> usize {
        self.inner.captures()
    }

    fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a> {
        self.inner.match_path(input)
    }

    fn make(&self, data: &Data) -> Result<String, MakeError> {
        self.inner.make(data)
    }

    fn is_root(&self) -> bool {
        self.inner.is_root()
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("pattern", &self.pattern())
            .field("captures", &self.captures())
            .finish()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Describes a data value for error messages without its JSON quoting
pub(crate) fn describe(data: &Data) -> String {
    match data {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
