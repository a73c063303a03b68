//! Error types for template parsing and formatting.

use thiserror::Error;

use crate::types::Value;

/// An error that occurred while parsing input against a template.
///
/// Every variant carries the 1-based ordinal of the offending part within the
/// template (`position`) so the message can be shown to an end user directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The remaining input does not start with the expected separator text.
    #[error("part {position}: expected separator '{expected}'. Actual: '{found}'")]
    SeparatorMismatch {
        position: usize,
        expected: String,
        found: String,
    },

    /// A fixed-length placeholder had fewer characters available than it
    /// requires.
    #[error("part {position} ('{name}'): expected {expected} characters. Actual: {actual}")]
    PlaceholderLengthMismatch {
        position: usize,
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A greedy placeholder consumed fewer characters than its minimum.
    #[error("part {position} ('{name}'): expected at least {min} characters. Actual: {actual}")]
    PlaceholderMinimumMismatch {
        position: usize,
        name: String,
        min: usize,
        actual: usize,
    },

    /// None of a literal placeholder's options matched the remaining input.
    #[error("part {position} ('{name}'): expected one of [{}]. Actual: '{found}'", expected.join(", "))]
    PlaceholderLiteralMismatch {
        position: usize,
        name: String,
        expected: Vec<String>,
        found: String,
    },

    /// No valid numeral prefix exists at the current position.
    #[error("part {position} ('{name}'): no numeral matching the format. Actual: '{found}'")]
    PlaceholderNumericMismatch {
        position: usize,
        name: String,
        found: String,
    },

    /// The same placeholder name decoded two different values from two
    /// occurrences in the template.
    #[error(
        "placeholder '{name}' matched conflicting values: '{first}' earlier, '{second}' at part {position}"
    )]
    DuplicatePlaceholderConflict {
        position: usize,
        name: String,
        first: Value,
        second: Value,
    },

    /// Input remained after the last template part.
    #[error(
        "unconsumed input after the last part: '{leftover}' (append an open-ended placeholder to absorb trailing text)"
    )]
    UnconsumedInput { leftover: String },
}

/// An error that occurred while formatting a record through a template.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The record has no value for a placeholder's name.
    #[error("missing field '{name}'{}, available: {}", render_suggestions(suggestions), available.join(", "))]
    MissingField {
        name: String,
        suggestions: Vec<String>,
        available: Vec<String>,
    },

    /// A value's rendered form does not fit the fixed width and truncation is
    /// disallowed.
    #[error("field '{name}': '{rendered}' is {actual} characters wide, expected {expected}")]
    PlaceholderLengthMismatch {
        name: String,
        rendered: String,
        expected: usize,
        actual: usize,
    },

    /// The value matches none of the configured literal mappings.
    #[error("field '{name}': expected one of [{}]. Actual: {value}", expected.join(", "))]
    PlaceholderLiteralMismatch {
        name: String,
        expected: Vec<String>,
        value: Value,
    },

    /// The value cannot be rendered under the configured number format.
    #[error("field '{name}': cannot render {value} with the configured number format")]
    PlaceholderNumericMismatch { name: String, value: Value },
}

/// Render a ", did you mean ..." suffix for a suggestion list.
fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean {}?", suggestions.join(" or "))
    }
}

/// Compute typo suggestions for a name against the available field names.
///
/// Uses Levenshtein distance with a cap of 1 for short names and 2 otherwise,
/// returning at most three candidates sorted by distance.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
