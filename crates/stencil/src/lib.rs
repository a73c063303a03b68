//! Bidirectional template codec over separators and typed placeholders.
//!
//! A [`Template`] is built once from an ordered list of parts and then used
//! in both directions: parsing a string into a record of named field values,
//! and formatting such a record back into a string. Placeholders consume
//! input by fixed length, ordered literal alternatives, a greedy character
//! predicate, or a base-10 numeral format; separators match their text
//! verbatim.
//!
//! # Example
//!
//! ```
//! use stencil::{Placeholder, Separator, Template, Value, record};
//!
//! let date = Template::new([
//!     Placeholder::fixed("dd", 2).into(),
//!     Separator::new("/").into(),
//!     Placeholder::fixed("MM", 2).into(),
//!     Separator::new("/").into(),
//!     Placeholder::fixed("yyyy", 4).into(),
//! ]);
//!
//! let fields = date.parse("25/12/2025").unwrap();
//! assert_eq!(fields["yyyy"], Value::Str("2025".into()));
//!
//! let out = date.format(&record! { "dd" => "25", "MM" => "12", "yyyy" => "2025" });
//! assert_eq!(out.unwrap(), "25/12/2025");
//! ```

pub mod number;
pub mod template;
pub mod types;

pub use number::{NumberBase10Format, Notation, RoundingMode, RoundingOption, SignDisplay};
pub use template::{
    Alignment, FormatError, FormatRule, ParseError, ParseRule, Placeholder, Record, Separator,
    Template, TemplatePart, compute_suggestions,
};
pub use types::Value;

/// Creates a `HashMap<String, Value>` record from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use stencil::{Value, record};
///
/// let r = record! { "dd" => "25", "n" => 3 };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r["dd"], Value::Str("25".into()));
/// assert_eq!(r["n"], Value::Int(3));
/// ```
#[macro_export]
macro_rules! record {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
