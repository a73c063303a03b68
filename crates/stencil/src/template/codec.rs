//! The template codec: an ordered part sequence compiled into a parser and a
//! formatter.
//!
//! Both directions are single left-to-right passes. Parsing threads the
//! remaining input suffix through each part and accumulates named field
//! values; formatting looks each placeholder's value up in the input record
//! and concatenates the rendered pieces.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::template::error::{FormatError, ParseError, compute_suggestions};
use crate::template::part::TemplatePart;
use crate::types::Value;

/// A record of decoded field values, keyed by placeholder name.
pub type Record = HashMap<String, Value>;

/// An immutable ordered sequence of separators and placeholders.
///
/// The empty template is legal: it parses and formats exactly the empty
/// string.
///
/// # Example
///
/// ```
/// use stencil::{Placeholder, Separator, Template, Value};
///
/// let date = Template::new([
///     Placeholder::fixed("dd", 2).into(),
///     Separator::new("/").into(),
///     Placeholder::fixed("MM", 2).into(),
///     Separator::new("/").into(),
///     Placeholder::fixed("yyyy", 4).into(),
/// ]);
///
/// let fields = date.parse("25/12/2025").unwrap();
/// assert_eq!(fields["dd"], Value::Str("25".into()));
/// assert_eq!(date.format(&fields).unwrap(), "25/12/2025");
/// assert_eq!(date.to_string(), "#dd/#MM/#yyyy");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    parts: Vec<TemplatePart>,
}

impl Template {
    /// Build a template from parts in order.
    pub fn new(parts: impl IntoIterator<Item = TemplatePart>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// The parts of this template, in order.
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Distinct placeholder names in declaration order.
    ///
    /// This is the derived record shape: the keys `parse` produces and
    /// `format` consumes.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for part in &self.parts {
            if let TemplatePart::Placeholder(ph) = part {
                if !names.contains(&ph.name.as_str()) {
                    names.push(&ph.name);
                }
            }
        }
        names
    }

    /// Parse `input` into a record of field values.
    ///
    /// Each part consumes from the head of the remaining input in turn; the
    /// first local failure aborts the whole parse. A placeholder name seen
    /// twice must decode equal values both times, and the entire input must
    /// be consumed.
    pub fn parse(&self, input: &str) -> Result<Record, ParseError> {
        let mut remaining = input;
        let mut fields = Record::new();

        for (index, part) in self.parts.iter().enumerate() {
            let position = index + 1;
            match part {
                TemplatePart::Separator(sep) => {
                    remaining = sep.parse_at(position, remaining)?;
                }
                TemplatePart::Placeholder(ph) => {
                    let (value, rest) = ph.parse_at(position, remaining)?;
                    match fields.entry(ph.name.clone()) {
                        Entry::Occupied(entry) => {
                            if *entry.get() != value {
                                return Err(ParseError::DuplicatePlaceholderConflict {
                                    position,
                                    name: ph.name.clone(),
                                    first: entry.get().clone(),
                                    second: value,
                                });
                            }
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(value);
                        }
                    }
                    remaining = rest;
                }
            }
        }

        if remaining.is_empty() {
            Ok(fields)
        } else {
            Err(ParseError::UnconsumedInput {
                leftover: remaining.to_string(),
            })
        }
    }

    /// Format a record back into a string.
    ///
    /// Separators are appended unconditionally; each placeholder occurrence
    /// renders the single record value for its name. The first failure
    /// aborts the pass.
    pub fn format(&self, record: &Record) -> Result<String, FormatError> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Separator(sep) => out.push_str(sep.value()),
                TemplatePart::Placeholder(ph) => {
                    let value = record.get(&ph.name).ok_or_else(|| {
                        let mut available: Vec<String> = record.keys().cloned().collect();
                        available.sort();
                        FormatError::MissingField {
                            name: ph.name.clone(),
                            suggestions: compute_suggestions(&ph.name, &available),
                            available,
                        }
                    })?;
                    out.push_str(&ph.render(value)?);
                }
            }
        }
        Ok(out)
    }

    /// One description line per placeholder occurrence, in order.
    pub fn describe(&self) -> Vec<String> {
        self.parts
            .iter()
            .filter_map(TemplatePart::as_placeholder)
            .map(|ph| format!("{}: {}", ph.name, ph.rule.description()))
            .collect()
    }
}

impl FromIterator<TemplatePart> for Template {
    fn from_iter<I: IntoIterator<Item = TemplatePart>>(parts: I) -> Self {
        Template::new(parts)
    }
}

/// Renders the literal pattern, e.g. `#dd/#MM/#yyyy`: separators verbatim,
/// placeholders as `#` followed by their name.
impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for part in &self.parts {
            match part {
                TemplatePart::Separator(sep) => write!(f, "{}", sep.value())?,
                TemplatePart::Placeholder(ph) => write!(f, "#{}", ph.name)?,
            }
        }
        Ok(())
    }
}
