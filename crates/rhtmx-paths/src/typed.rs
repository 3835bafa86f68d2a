/// Typed captured data
///
/// A [`Path`] captures loosely shaped [`Data`](crate::Data). [`TypedPath`]
/// declares the shape once, as a serde type, and decodes every match into it.
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::definition::{MatchResult, Path};
use crate::error::MakeError;

/// A path whose captured data is a `T`
///
/// # Examples
///
/// ```
/// use rhtmx_paths::{path, number, string};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Comment {
///     post: u64,
///     author: String,
/// }
///
/// let comment = path!("/posts", number("post"), "/by", string("author")).typed::<Comment>();
///
/// let matched = comment.match_path("/posts/7/by/ada").unwrap();
/// assert_eq!(matched.data, Comment { post: 7, author: "ada".to_string() });
///
/// let link = comment.make(&Comment { post: 9, author: "lin".to_string() }).unwrap();
/// assert_eq!(link, "/posts/9/by/lin");
/// ```
pub struct TypedPath<T> {
    path: Path,
    _data: PhantomData<fn() -> T>,
}

impl<T> TypedPath<T> {
    pub fn new(path: Path) -> Self {
        Self {
            path,
            _data: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        self.path.pattern()
    }

    pub fn captures(&self) -> usize {
        self.path.captures()
    }
}

impl<T: DeserializeOwned> TypedPath<T> {
    /// Matches, then decodes the captured data
    ///
    /// Data that does not fit `T` is a [`MatchError::Shape`](crate::MatchError::Shape) failure.
    pub fn match_path<'a>(&self, input: &'a str) -> MatchResult<'a, T> {
        let matched = self.path.match_path(input)?;
        let data = matched.decode::<T>()?;
        Ok(matched.map(|_| data))
    }
}

impl<T: Serialize> TypedPath<T> {
    pub fn make(&self, data: &T) -> Result<String, MakeError> {
        let value = serde_json::to_value(data)?;
        self.path.make(&value)
    }
}

impl<T> Clone for TypedPath<T> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl<T> fmt::Debug for TypedPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedPath").field(&self.path).finish()
    }
}

impl<T> From<TypedPath<T>> for Path {
    fn from(typed: TypedPath<T>) -> Self {
        typed.path
    }
}

impl Path {
    /// Declares the shape of this path's captured data
    pub fn typed<T>(&self) -> TypedPath<T> {
        TypedPath::new(self.clone())
    }
}
