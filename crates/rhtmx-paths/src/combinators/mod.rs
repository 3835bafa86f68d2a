/// Path combinators
///
/// Functions that take paths and return new paths:
/// - [`map_data`]: reshape captured data through an [`Isomorphism`]
/// - [`key_as`]: name a capture
/// - [`segment`]: confine a path to one `/`-delimited segment
/// - [`concat`]: join paths end to end
pub mod concat;
pub mod key_as;
pub mod map_data;
pub mod segment;

pub use concat::concat;
pub use key_as::key_as;
pub use map_data::{map_data, Isomorphism};
pub use segment::segment;
