/// Primitive matchers
///
/// Atomic path fragments: literal text, literal enumerations, and the
/// regexp-backed string and number captures.
pub mod number;
pub mod regexp;
pub mod string;
pub mod text;

pub use number::{match_number, number, render_number, NUMBER_INDICATOR};
pub use regexp::{match_regexp, match_regexp_as, STRING_INDICATOR};
pub use string::{match_string, string};
pub use text::{match_text, match_text_enum, match_text_with, text_enum, TextOptions};
