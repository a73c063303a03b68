//! Template parts: separators and placeholders.

use std::num::NonZeroUsize;

use bon::Builder;

use crate::number::NumberBase10Format;
use crate::template::error::{FormatError, ParseError};
use crate::template::rule::{Alignment, FormatRule, ParseRule};
use crate::types::Value;

/// Fixed literal text that must appear verbatim between placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    value: String,
}

impl Separator {
    /// Create a separator from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The literal text this separator matches and emits.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Strip this separator from the head of `remaining`.
    ///
    /// `position` is the 1-based ordinal of this part within its template,
    /// used for diagnostics only.
    pub fn parse_at<'i>(&self, position: usize, remaining: &'i str) -> Result<&'i str, ParseError> {
        remaining
            .strip_prefix(&self.value)
            .ok_or_else(|| ParseError::SeparatorMismatch {
                position,
                expected: self.value.clone(),
                found: remaining.to_string(),
            })
    }
}

/// A named template slot with a parse rule and a format rule.
///
/// Names need not be unique within a template; duplicate occurrences must
/// decode to equal values during parsing and share one record value during
/// formatting.
///
/// # Example
///
/// ```
/// use stencil::{Placeholder, Value};
///
/// let day = Placeholder::fixed("dd", 2);
/// let (value, leftover) = day.parse_at(1, "25/12").unwrap();
/// assert_eq!(value, Value::Str("25".into()));
/// assert_eq!(leftover, "/12");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct Placeholder {
    /// Field name this placeholder binds in the record.
    #[builder(into)]
    pub name: String,

    /// How input is consumed during parsing.
    pub rule: ParseRule,

    /// How the field value is rendered during formatting.
    pub format: FormatRule,
}

impl Placeholder {
    /// A placeholder consuming exactly `width` characters, formatted back
    /// space-padded. Widths below 1 are clamped to 1.
    pub fn fixed(name: impl Into<String>, width: usize) -> Self {
        let width = NonZeroUsize::new(width).unwrap_or(NonZeroUsize::MIN);
        Placeholder::builder()
            .name(name)
            .rule(ParseRule::FixedLength { width })
            .format(FormatRule::FixedWidth {
                width,
                fill: ' ',
                align: Alignment::Left,
                truncate: false,
            })
            .build()
    }

    /// A placeholder matching one of the given literals, formatted back by
    /// reverse lookup. Literals are tried in the given order.
    pub fn literals<S, V>(name: impl Into<String>, options: impl IntoIterator<Item = (S, V)>) -> Self
    where
        S: Into<String>,
        V: Into<Value>,
    {
        let options: Vec<(String, Value)> = options
            .into_iter()
            .map(|(text, value)| (text.into(), value.into()))
            .collect();
        Placeholder::builder()
            .name(name)
            .rule(ParseRule::Literals(options.clone()))
            .format(FormatRule::Literals(options))
            .build()
    }

    /// A placeholder greedily consuming characters accepted by `accept`,
    /// formatted back verbatim.
    pub fn greedy(name: impl Into<String>, accept: fn(char) -> bool) -> Self {
        Placeholder::builder()
            .name(name)
            .rule(ParseRule::Greedy { accept, min: 0 })
            .format(FormatRule::Verbatim)
            .build()
    }

    /// A placeholder reading and writing a base-10 numeral under `format`.
    pub fn numeric(name: impl Into<String>, format: NumberBase10Format) -> Self {
        Placeholder::builder()
            .name(name)
            .rule(ParseRule::Numeric(format.clone()))
            .format(FormatRule::Numeric(format))
            .build()
    }

    /// Apply this placeholder's parse rule to the head of `remaining`.
    ///
    /// Returns the decoded value and the unconsumed suffix. `position` is the
    /// 1-based ordinal of this part within its template.
    pub fn parse_at<'i>(
        &self,
        position: usize,
        remaining: &'i str,
    ) -> Result<(Value, &'i str), ParseError> {
        match &self.rule {
            ParseRule::FixedLength { width } => {
                let end = match remaining.char_indices().nth(width.get() - 1) {
                    Some((idx, ch)) => idx + ch.len_utf8(),
                    None => {
                        return Err(ParseError::PlaceholderLengthMismatch {
                            position,
                            name: self.name.clone(),
                            expected: width.get(),
                            actual: remaining.chars().count(),
                        });
                    }
                };
                Ok((
                    Value::Str(remaining[..end].to_string()),
                    &remaining[end..],
                ))
            }
            ParseRule::Literals(options) => {
                for (text, value) in options {
                    if let Some(rest) = remaining.strip_prefix(text.as_str()) {
                        return Ok((value.clone(), rest));
                    }
                }
                Err(ParseError::PlaceholderLiteralMismatch {
                    position,
                    name: self.name.clone(),
                    expected: options.iter().map(|(text, _)| format!("'{text}'")).collect(),
                    found: remaining.to_string(),
                })
            }
            ParseRule::Greedy { accept, min } => {
                let end = remaining
                    .char_indices()
                    .find(|(_, ch)| !accept(*ch))
                    .map_or(remaining.len(), |(idx, _)| idx);
                let consumed = &remaining[..end];
                let count = consumed.chars().count();
                if count < *min {
                    return Err(ParseError::PlaceholderMinimumMismatch {
                        position,
                        name: self.name.clone(),
                        min: *min,
                        actual: count,
                    });
                }
                Ok((Value::Str(consumed.to_string()), &remaining[end..]))
            }
            ParseRule::Numeric(format) => match format.read(remaining) {
                Some((value, rest)) => Ok((value, rest)),
                None => Err(ParseError::PlaceholderNumericMismatch {
                    position,
                    name: self.name.clone(),
                    found: remaining.to_string(),
                }),
            },
        }
    }

    /// Render a field value through this placeholder's format rule.
    pub fn render(&self, value: &Value) -> Result<String, FormatError> {
        match &self.format {
            FormatRule::FixedWidth {
                width,
                fill,
                align,
                truncate,
            } => {
                let natural = value.to_string();
                let count = natural.chars().count();
                let width = width.get();
                if count == width {
                    return Ok(natural);
                }
                if count > width {
                    if !truncate {
                        return Err(FormatError::PlaceholderLengthMismatch {
                            name: self.name.clone(),
                            rendered: natural,
                            expected: width,
                            actual: count,
                        });
                    }
                    return Ok(truncate_chars(&natural, count, width, *align));
                }
                let padding = String::from(*fill).repeat(width - count);
                Ok(match align {
                    Alignment::Left => format!("{natural}{padding}"),
                    Alignment::Right => format!("{padding}{natural}"),
                })
            }
            FormatRule::Literals(options) => options
                .iter()
                .find(|(_, mapped)| mapped == value)
                .map(|(text, _)| text.clone())
                .ok_or_else(|| FormatError::PlaceholderLiteralMismatch {
                    name: self.name.clone(),
                    expected: options.iter().map(|(_, mapped)| mapped.to_string()).collect(),
                    value: value.clone(),
                }),
            FormatRule::Verbatim => Ok(value.to_string()),
            FormatRule::Numeric(format) => {
                format
                    .write(value)
                    .ok_or_else(|| FormatError::PlaceholderNumericMismatch {
                        name: self.name.clone(),
                        value: value.clone(),
                    })
            }
        }
    }
}

/// Keep `width` characters of `natural`, dropping the edge away from the
/// alignment.
fn truncate_chars(natural: &str, count: usize, width: usize, align: Alignment) -> String {
    match align {
        Alignment::Left => {
            let end = natural
                .char_indices()
                .nth(width)
                .map_or(natural.len(), |(idx, _)| idx);
            natural[..end].to_string()
        }
        Alignment::Right => {
            let start = natural
                .char_indices()
                .nth(count - width)
                .map_or(0, |(idx, _)| idx);
            natural[start..].to_string()
        }
    }
}

/// A single element of a template: either literal separator text or a named
/// placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Separator(Separator),
    Placeholder(Placeholder),
}

impl TemplatePart {
    /// Whether this part is a separator.
    pub fn is_separator(&self) -> bool {
        matches!(self, TemplatePart::Separator(_))
    }

    /// Whether this part is a placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TemplatePart::Placeholder(_))
    }

    /// Get this part as a separator, if it is one.
    pub fn as_separator(&self) -> Option<&Separator> {
        match self {
            TemplatePart::Separator(sep) => Some(sep),
            TemplatePart::Placeholder(_) => None,
        }
    }

    /// Get this part as a placeholder, if it is one.
    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            TemplatePart::Placeholder(ph) => Some(ph),
            TemplatePart::Separator(_) => None,
        }
    }
}

impl From<Separator> for TemplatePart {
    fn from(sep: Separator) -> Self {
        TemplatePart::Separator(sep)
    }
}

impl From<Placeholder> for TemplatePart {
    fn from(ph: Placeholder) -> Self {
        TemplatePart::Placeholder(ph)
    }
}
