//! Serde round-trips for the configuration and value types.

use stencil::{
    Notation, NumberBase10Format, RoundingMode, RoundingOption, SignDisplay, Value,
};

#[test]
fn number_format_round_trips_through_json() {
    let format = NumberBase10Format::builder()
        .sign(SignDisplay::Always)
        .notation(Notation::Engineering)
        .grouping(',')
        .decimal_separator('.')
        .rounding(
            RoundingOption::builder()
                .precision(2)
                .mode(RoundingMode::HalfEven)
                .build(),
        )
        .build();

    let json = serde_json::to_string(&format).unwrap();
    let back: NumberBase10Format = serde_json::from_str(&json).unwrap();
    assert_eq!(back, format);
}

#[test]
fn values_round_trip_through_json() {
    for value in [
        Value::Int(42),
        Value::Float(2.5),
        Value::Str("Dec".to_string()),
    ] {
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
