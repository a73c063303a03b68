//! Value-level codecs for base-10 numerals.
//!
//! These are the collaborators consumed by numeric template placeholders:
//! [`NumberBase10Format`] reads and writes numeral text, and
//! [`RoundingOption`] rounds values before they are rendered.

mod base10;
mod rounding;

pub use base10::{NumberBase10Format, Notation, SignDisplay};
pub use rounding::{RoundingMode, RoundingOption};
