//! Integration tests for the parsing direction of the template codec.

use stencil::{ParseError, ParseRule, Placeholder, Separator, Template, Value};

fn date_template() -> Template {
    Template::new([
        Placeholder::fixed("dd", 2).into(),
        Separator::new("/").into(),
        Placeholder::fixed("MM", 2).into(),
        Separator::new("/").into(),
        Placeholder::fixed("yyyy", 4).into(),
    ])
}

// =============================================================================
// Separators
// =============================================================================

#[test]
fn separator_requires_exact_prefix() {
    let sep = Separator::new("/");
    assert_eq!(sep.parse_at(1, "/abc"), Ok("abc"));
    assert_eq!(
        sep.parse_at(1, "abc"),
        Err(ParseError::SeparatorMismatch {
            position: 1,
            expected: "/".to_string(),
            found: "abc".to_string(),
        })
    );
}

#[test]
fn separator_mismatch_reports_part_ordinal() {
    let err = date_template().parse("25-12/2025").unwrap_err();
    assert_eq!(
        err,
        ParseError::SeparatorMismatch {
            position: 2,
            expected: "/".to_string(),
            found: "-12/2025".to_string(),
        }
    );
}

// =============================================================================
// Fixed-length placeholders
// =============================================================================

#[test]
fn fixed_length_splits_at_width() {
    let day = Placeholder::fixed("dd", 2);
    assert_eq!(
        day.parse_at(1, "12abc"),
        Ok((Value::Str("12".to_string()), "abc"))
    );
}

#[test]
fn fixed_length_fails_when_input_is_short() {
    let day = Placeholder::fixed("dd", 2);
    let err = day.parse_at(1, "1").unwrap_err();
    assert_eq!(
        err,
        ParseError::PlaceholderLengthMismatch {
            position: 1,
            name: "dd".to_string(),
            expected: 2,
            actual: 1,
        }
    );
    assert!(err.to_string().contains("expected 2 characters. Actual: 1"));
}

#[test]
fn fixed_length_counts_characters_not_bytes() {
    let ph = Placeholder::fixed("sym", 2);
    assert_eq!(
        ph.parse_at(1, "déjà"),
        Ok((Value::Str("dé".to_string()), "jà"))
    );
}

// =============================================================================
// Literal placeholders
// =============================================================================

#[test]
fn literal_prefix_order_is_first_match_wins() {
    // "Mon" is listed before "Monday", so it wins even on the longer input.
    let day = Placeholder::literals("day", [("Mon", 1), ("Monday", 2)]);
    assert_eq!(day.parse_at(1, "Monday"), Ok((Value::Int(1), "day")));
}

#[test]
fn literal_longest_first_ordering_matches_whole_word() {
    let day = Placeholder::literals("day", [("Monday", 2), ("Mon", 1)]);
    assert_eq!(day.parse_at(1, "Monday"), Ok((Value::Int(2), "")));
}

#[test]
fn literal_mismatch_lists_all_options() {
    let day = Placeholder::literals("day", [("Mon", 1), ("Tue", 2)]);
    let err = day.parse_at(3, "Xyz").unwrap_err();
    assert_eq!(
        err,
        ParseError::PlaceholderLiteralMismatch {
            position: 3,
            name: "day".to_string(),
            expected: vec!["'Mon'".to_string(), "'Tue'".to_string()],
            found: "Xyz".to_string(),
        }
    );
    assert!(err.to_string().contains("expected one of ['Mon', 'Tue']"));
}

// =============================================================================
// Greedy placeholders
// =============================================================================

#[test]
fn greedy_consumes_maximal_prefix() {
    let digits = Placeholder::greedy("n", |c| c.is_ascii_digit());
    assert_eq!(
        digits.parse_at(1, "123abc"),
        Ok((Value::Str("123".to_string()), "abc"))
    );
}

#[test]
fn greedy_succeeds_on_zero_characters() {
    let digits = Placeholder::greedy("n", |c| c.is_ascii_digit());
    assert_eq!(
        digits.parse_at(1, "abc"),
        Ok((Value::Str(String::new()), "abc"))
    );
}

#[test]
fn greedy_minimum_is_enforced() {
    let ph = Placeholder::builder()
        .name("word")
        .rule(ParseRule::Greedy {
            accept: char::is_alphabetic,
            min: 2,
        })
        .format(stencil::FormatRule::Verbatim)
        .build();
    let err = ph.parse_at(1, "a1").unwrap_err();
    assert_eq!(
        err,
        ParseError::PlaceholderMinimumMismatch {
            position: 1,
            name: "word".to_string(),
            min: 2,
            actual: 1,
        }
    );
    assert_eq!(
        err.to_string(),
        "part 1 ('word'): expected at least 2 characters. Actual: 1"
    );
}

// =============================================================================
// Whole-template passes
// =============================================================================

#[test]
fn end_to_end_date_parse() {
    let fields = date_template().parse("25/12/2025").unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["dd"], Value::Str("25".to_string()));
    assert_eq!(fields["MM"], Value::Str("12".to_string()));
    assert_eq!(fields["yyyy"], Value::Str("2025".to_string()));
}

#[test]
fn unconsumed_input_is_an_error() {
    let template = Template::new([
        Placeholder::fixed("a", 2).into(),
        Placeholder::fixed("b", 2).into(),
    ]);
    let err = template.parse("1234567").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnconsumedInput {
            leftover: "567".to_string(),
        }
    );
    assert!(err.to_string().contains("open-ended placeholder"));
}

#[test]
fn trailing_greedy_placeholder_absorbs_leftover() {
    let template = Template::new([
        Placeholder::fixed("a", 2).into(),
        Placeholder::greedy("rest", |_| true).into(),
    ]);
    let fields = template.parse("12xyz").unwrap();
    assert_eq!(fields["rest"], Value::Str("xyz".to_string()));
}

#[test]
fn empty_template_parses_only_the_empty_string() {
    let template = Template::default();
    assert!(template.parse("").unwrap().is_empty());
    assert_eq!(
        template.parse("x"),
        Err(ParseError::UnconsumedInput {
            leftover: "x".to_string(),
        })
    );
}

// =============================================================================
// Duplicate placeholder names
// =============================================================================

#[test]
fn duplicate_name_with_equal_values_is_idempotent() {
    let template = Template::new([
        Placeholder::fixed("a", 1).into(),
        Separator::new("-").into(),
        Placeholder::fixed("a", 1).into(),
    ]);
    let fields = template.parse("1-1").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["a"], Value::Str("1".to_string()));
}

#[test]
fn duplicate_name_with_conflicting_values_fails() {
    let template = Template::new([
        Placeholder::fixed("a", 1).into(),
        Separator::new("-").into(),
        Placeholder::fixed("a", 1).into(),
    ]);
    let err = template.parse("1-2").unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicatePlaceholderConflict {
            position: 3,
            name: "a".to_string(),
            first: Value::Str("1".to_string()),
            second: Value::Str("2".to_string()),
        }
    );
}

// =============================================================================
// Part discriminators
// =============================================================================

#[test]
fn template_part_discriminators() {
    let template = date_template();
    let parts = template.parts();
    assert!(parts[0].is_placeholder());
    assert!(parts[1].is_separator());
    assert_eq!(parts[1].as_separator().map(Separator::value), Some("/"));
    assert_eq!(
        parts[0].as_placeholder().map(|ph| ph.name.as_str()),
        Some("dd")
    );
    assert!(parts[0].as_separator().is_none());
}
