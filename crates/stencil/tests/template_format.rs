//! Integration tests for the formatting direction of the template codec.

use std::num::NonZeroUsize;

use stencil::{
    Alignment, FormatError, FormatRule, ParseRule, Placeholder, Separator, Template, Value, record,
};

fn fixed_width(name: &str, width: usize, fill: char, align: Alignment, truncate: bool) -> Placeholder {
    let width = NonZeroUsize::new(width).unwrap();
    Placeholder::builder()
        .name(name)
        .rule(ParseRule::FixedLength { width })
        .format(FormatRule::FixedWidth {
            width,
            fill,
            align,
            truncate,
        })
        .build()
}

// =============================================================================
// Separators and exact-width values
// =============================================================================

#[test]
fn end_to_end_date_format() {
    let template = Template::new([
        Placeholder::fixed("dd", 2).into(),
        Separator::new("/").into(),
        Placeholder::fixed("MM", 2).into(),
        Separator::new("/").into(),
        Placeholder::fixed("yyyy", 4).into(),
    ]);
    let out = template
        .format(&record! { "dd" => "25", "MM" => "12", "yyyy" => "2025" })
        .unwrap();
    assert_eq!(out, "25/12/2025");
}

#[test]
fn separators_are_emitted_unconditionally() {
    let template = Template::new([
        Separator::new("[").into(),
        Placeholder::fixed("x", 1).into(),
        Separator::new("]").into(),
    ]);
    assert_eq!(template.format(&record! { "x" => "7" }).unwrap(), "[7]");
}

// =============================================================================
// Fixed-width padding and truncation
// =============================================================================

#[test]
fn pad_right_aligned_with_fill() {
    let ph = fixed_width("n", 3, '0', Alignment::Right, false);
    assert_eq!(ph.render(&Value::Int(7)).unwrap(), "007");
}

#[test]
fn pad_left_aligned_with_fill() {
    let ph = fixed_width("tag", 4, ' ', Alignment::Left, false);
    assert_eq!(ph.render(&Value::Str("ab".to_string())).unwrap(), "ab  ");
}

#[test]
fn overflow_without_truncation_is_an_error() {
    let ph = fixed_width("yy", 2, '0', Alignment::Right, false);
    let err = ph.render(&Value::Str("2025".to_string())).unwrap_err();
    assert_eq!(
        err,
        FormatError::PlaceholderLengthMismatch {
            name: "yy".to_string(),
            rendered: "2025".to_string(),
            expected: 2,
            actual: 4,
        }
    );
}

#[test]
fn truncation_keeps_the_aligned_edge() {
    let right = fixed_width("yy", 2, '0', Alignment::Right, true);
    assert_eq!(right.render(&Value::Str("2025".to_string())).unwrap(), "25");

    let left = fixed_width("abbr", 3, ' ', Alignment::Left, true);
    assert_eq!(
        left.render(&Value::Str("December".to_string())).unwrap(),
        "Dec"
    );
}

// =============================================================================
// Literal lookup
// =============================================================================

#[test]
fn literal_reverse_lookup_renders_the_matching_text() {
    let month = Placeholder::literals("M", [("Dec", 12), ("Nov", 11)]);
    assert_eq!(month.render(&Value::Int(12)).unwrap(), "Dec");
}

#[test]
fn literal_lookup_fails_for_unmapped_values() {
    let month = Placeholder::literals("M", [("Dec", 12), ("Nov", 11)]);
    let err = month.render(&Value::Int(3)).unwrap_err();
    assert_eq!(
        err,
        FormatError::PlaceholderLiteralMismatch {
            name: "M".to_string(),
            expected: vec!["12".to_string(), "11".to_string()],
            value: Value::Int(3),
        }
    );
    assert!(err.to_string().contains("expected one of [12, 11]. Actual: 3"));
}

// =============================================================================
// Missing fields and duplicate names
// =============================================================================

#[test]
fn missing_field_reports_suggestions() {
    let template = Template::new([Placeholder::fixed("yyyy", 4).into()]);
    let err = template
        .format(&record! { "yyy" => "202", "dd" => "25" })
        .unwrap_err();
    match &err {
        FormatError::MissingField {
            name,
            suggestions,
            available,
        } => {
            assert_eq!(name, "yyyy");
            assert_eq!(suggestions, &vec!["yyy".to_string()]);
            assert_eq!(available, &vec!["dd".to_string(), "yyy".to_string()]);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
    assert!(err.to_string().contains("did you mean yyy?"));
}

#[test]
fn duplicate_names_format_from_a_single_value() {
    let template = Template::new([
        Placeholder::fixed("a", 1).into(),
        Separator::new("-").into(),
        Placeholder::fixed("a", 1).into(),
    ]);
    assert_eq!(template.format(&record! { "a" => "1" }).unwrap(), "1-1");
}

#[test]
fn verbatim_renders_the_natural_form() {
    let rest = Placeholder::greedy("rest", char::is_alphanumeric);
    assert_eq!(rest.render(&Value::Str("xyz".to_string())).unwrap(), "xyz");
    assert_eq!(rest.render(&Value::Int(42)).unwrap(), "42");
}

#[test]
fn empty_template_formats_the_empty_string() {
    let template = Template::default();
    assert_eq!(template.format(&record! {}).unwrap(), "");
}
