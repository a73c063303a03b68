//! Declarative templates compiled into a parser/formatter pair.
//!
//! A [`Template`] is an ordered sequence of [`Separator`]s (fixed literal
//! text) and [`Placeholder`]s (named slots with a parse rule and a format
//! rule). [`Template::parse`] decodes a string into a record of named
//! values; [`Template::format`] renders such a record back into a string.

mod codec;
mod error;
mod part;
mod rule;

pub use codec::{Record, Template};
pub use error::{FormatError, ParseError, compute_suggestions};
pub use part::{Placeholder, Separator, TemplatePart};
pub use rule::{Alignment, FormatRule, ParseRule};
