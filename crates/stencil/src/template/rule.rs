//! Parse and format rules carried by placeholders.

use std::num::NonZeroUsize;

use crate::number::NumberBase10Format;
use crate::types::Value;

/// How a placeholder consumes input during parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseRule {
    /// Consume exactly `width` characters; fail when fewer remain.
    FixedLength { width: NonZeroUsize },

    /// Try each `(text, value)` pair in order; the first literal that is a
    /// prefix of the remaining input wins and yields its paired value.
    ///
    /// No reordering is performed. When one literal is a prefix of another
    /// (`"Mon"` before `"Monday"`), the earlier entry matches first, so
    /// callers who care must order longest-first themselves.
    Literals(Vec<(String, Value)>),

    /// Consume the maximal prefix whose characters all satisfy `accept`.
    /// Succeeds on zero characters unless `min` is positive.
    Greedy { accept: fn(char) -> bool, min: usize },

    /// Consume the longest numeral prefix valid under the format.
    Numeric(NumberBase10Format),
}

impl ParseRule {
    /// A short human-readable description of what this rule consumes.
    pub fn description(&self) -> String {
        match self {
            ParseRule::FixedLength { width } => format!("exactly {width} characters"),
            ParseRule::Literals(options) => {
                let texts: Vec<String> = options
                    .iter()
                    .map(|(text, _)| format!("'{text}'"))
                    .collect();
                format!("one of [{}]", texts.join(", "))
            }
            ParseRule::Greedy { min, .. } => {
                if *min == 0 {
                    "a run of matching characters".to_string()
                } else {
                    format!("at least {min} matching characters")
                }
            }
            ParseRule::Numeric(_) => "a base-10 numeral".to_string(),
        }
    }
}

/// Padding direction for fixed-width formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Value at the left edge, fill on the right.
    #[default]
    Left,
    /// Value at the right edge, fill on the left.
    Right,
}

/// How a placeholder renders a field value during formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatRule {
    /// Render the value's natural string form, padded with `fill` to exactly
    /// `width` characters. A value wider than `width` is an error unless
    /// `truncate` is set, in which case the overflowing edge is dropped
    /// (the left edge under [`Alignment::Right`], the right edge otherwise).
    FixedWidth {
        width: NonZeroUsize,
        fill: char,
        align: Alignment,
        truncate: bool,
    },

    /// Look the value up among `(text, value)` pairs by equality and render
    /// the matching text; an unmapped value is an error.
    Literals(Vec<(String, Value)>),

    /// Render the value's natural string form unchanged.
    Verbatim,

    /// Render through the number writer.
    Numeric(NumberBase10Format),
}
