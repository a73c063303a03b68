//! Base-10 numeral reading and writing.
//!
//! `NumberBase10Format` is the configuration consumed by numeric template
//! placeholders. Reading consumes the longest valid numeral prefix of the
//! input; writing renders a value or reports that the configuration cannot
//! represent it (e.g. a negative number under `SignDisplay::Never`).

use bon::Builder;
use serde::{Deserialize, Serialize};
use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::number::RoundingOption;
use crate::types::Value;

/// When to render (and require) an explicit sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SignDisplay {
    /// Minus for negative values only, including negative zero.
    #[default]
    Auto,
    /// Always render a sign; reading requires one.
    Always,
    /// Sign on everything except zero; reading mirrors this.
    ExceptZero,
    /// Minus for values strictly below zero.
    Negative,
    /// No sign ever; negative values cannot be represented.
    Never,
}

/// Scientific-notation handling.
///
/// All modes except `None` accept an optional `e`/`E` exponent when reading;
/// they differ in the form the writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Notation {
    /// Plain decimal only; an exponent is never part of the numeral.
    #[default]
    None,
    /// Accept exponents when reading; write plain decimal.
    Standard,
    /// Write `m e n` with the mantissa in `[1, 10)`, exponent always present.
    Normalized,
    /// Write with the exponent a multiple of three, mantissa in `[1, 1000)`.
    Engineering,
}

/// Sign, grouping, decimal-separator, and notation rules for base-10
/// numerals.
///
/// # Example
///
/// ```
/// use stencil::{NumberBase10Format, Value};
///
/// let format = NumberBase10Format::builder().grouping(',').build();
///
/// let (value, leftover) = format.read("1,234 left").unwrap();
/// assert_eq!(value, Value::Int(1234));
/// assert_eq!(leftover, " left");
///
/// assert_eq!(format.write(&Value::Int(1234)), Some("1,234".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct NumberBase10Format {
    /// Sign display mode.
    #[builder(default)]
    pub sign: SignDisplay,

    /// Scientific-notation mode.
    #[builder(default)]
    pub notation: Notation,

    /// Digit-group separator accepted between runs of integer digits.
    pub grouping: Option<char>,

    /// Separator between the integer and fraction parts.
    #[builder(default = '.')]
    pub decimal_separator: char,

    /// Rounding applied by the writer before rendering.
    pub rounding: Option<RoundingOption>,
}

impl Default for NumberBase10Format {
    fn default() -> Self {
        NumberBase10Format::builder().build()
    }
}

impl NumberBase10Format {
    /// Consume the longest valid numeral prefix of `input`.
    ///
    /// Returns the decoded value and the unconsumed suffix, or `None` when no
    /// valid numeral starts at the head of `input`. Numerals without a
    /// fraction decode to [`Value::Int`] when they denote an integer that fits
    /// in `i64` (this includes exponent forms like `5e0` or `12e3`); everything
    /// else decodes to [`Value::Float`].
    pub fn read<'i>(&self, input: &'i str) -> Option<(Value, &'i str)> {
        let mut rest = input;

        let sign = sign(&mut rest).ok()?;
        if self.sign == SignDisplay::Never && sign.is_some() {
            return None;
        }

        let mut digits = String::new();
        digits.push_str(digit_run(&mut rest).ok()?);
        if let Some(group) = self.grouping {
            for run in grouped_runs(group, &mut rest).ok()? {
                digits.push_str(run);
            }
        }

        let fraction = fraction_part(self.decimal_separator, &mut rest).ok()?;

        let exponent = if self.notation == Notation::None {
            None
        } else {
            exponent_part(&mut rest).ok()?
        };

        let mut canonical = String::with_capacity(input.len() - rest.len());
        if sign == Some('-') {
            canonical.push('-');
        }
        canonical.push_str(&digits);
        if let Some(frac) = fraction {
            canonical.push('.');
            canonical.push_str(frac);
        }
        if let Some((exp_sign, exp_digits)) = exponent {
            canonical.push('e');
            if exp_sign == Some('-') {
                canonical.push('-');
            }
            canonical.push_str(exp_digits);
        }

        let value = match exponent {
            None => {
                if fraction.is_none() {
                    match canonical.parse::<i64>() {
                        // A signed zero carries information only a float can hold.
                        Ok(0) if sign == Some('-') => Value::Float(-0.0),
                        Ok(n) => Value::Int(n),
                        Err(_) => Value::Float(canonical.parse::<f64>().ok()?),
                    }
                } else {
                    Value::Float(canonical.parse::<f64>().ok()?)
                }
            }
            Some(_) if fraction.is_some() => Value::Float(canonical.parse::<f64>().ok()?),
            Some((exp_sign, exp_digits)) => {
                decode_with_exponent(&canonical, sign == Some('-'), &digits, exp_sign, exp_digits)?
            }
        };

        if !self.sign_acceptable(sign, &value) {
            return None;
        }
        Some((value, rest))
    }

    /// Check a decoded numeral's sign against the display mode.
    fn sign_acceptable(&self, sign: Option<char>, value: &Value) -> bool {
        let zero = value.as_float() == Some(0.0);
        match self.sign {
            SignDisplay::Auto | SignDisplay::Negative => true,
            SignDisplay::Always => sign.is_some(),
            SignDisplay::ExceptZero => {
                if zero {
                    sign.is_none()
                } else {
                    sign.is_some()
                }
            }
            SignDisplay::Never => sign.is_none(),
        }
    }

    /// Render a numeric value under this format.
    ///
    /// Returns `None` for string values and for numbers the configuration
    /// cannot represent.
    pub fn write(&self, value: &Value) -> Option<String> {
        match value {
            Value::Str(_) => None,
            Value::Int(n) => self.write_int(*n),
            Value::Float(f) => self.write_float(*f),
        }
    }

    fn write_int(&self, n: i64) -> Option<String> {
        // Rounding at any precision leaves integers untouched.
        let prefix = self.sign_prefix(n < 0, n < 0, n == 0)?;
        let magnitude = match self.notation {
            Notation::None | Notation::Standard => self.plain_digits(&n.unsigned_abs().to_string(), None),
            Notation::Normalized => self.scientific(n.unsigned_abs() as f64, false),
            Notation::Engineering => self.scientific(n.unsigned_abs() as f64, true),
        };
        Some(format!("{prefix}{magnitude}"))
    }

    fn write_float(&self, f: f64) -> Option<String> {
        if !f.is_finite() {
            return None;
        }
        let rounded = match self.rounding {
            Some(option) => option.round(f),
            None => f,
        };
        let prefix = self.sign_prefix(rounded.is_sign_negative(), rounded < 0.0, rounded == 0.0)?;
        let magnitude = match self.notation {
            Notation::None | Notation::Standard => self.plain(rounded.abs()),
            Notation::Normalized => self.scientific(rounded.abs(), false),
            Notation::Engineering => self.scientific(rounded.abs(), true),
        };
        Some(format!("{prefix}{magnitude}"))
    }

    /// Sign text for a value, or `None` when the mode cannot express it.
    ///
    /// `signed` tracks the sign bit (true for negative zero), while
    /// `below_zero` is strict; the two only differ for `-0.0`.
    fn sign_prefix(&self, signed: bool, below_zero: bool, zero: bool) -> Option<&'static str> {
        match self.sign {
            SignDisplay::Auto => Some(if signed { "-" } else { "" }),
            SignDisplay::Negative => Some(if below_zero { "-" } else { "" }),
            SignDisplay::Always => Some(if signed { "-" } else { "+" }),
            SignDisplay::ExceptZero => Some(if zero {
                ""
            } else if signed {
                "-"
            } else {
                "+"
            }),
            SignDisplay::Never => {
                if below_zero {
                    None
                } else {
                    Some("")
                }
            }
        }
    }

    /// Plain decimal rendering of a non-negative magnitude.
    fn plain(&self, magnitude: f64) -> String {
        let rendered = magnitude.to_string();
        match rendered.split_once('.') {
            Some((int_part, frac_part)) => self.plain_digits(int_part, Some(frac_part)),
            None => self.plain_digits(&rendered, None),
        }
    }

    /// Assemble grouped integer digits plus an optional fraction.
    fn plain_digits(&self, int_digits: &str, fraction: Option<&str>) -> String {
        let mut out = group_digits(int_digits, self.grouping);
        if let Some(frac) = fraction {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// Scientific rendering of a non-negative magnitude.
    fn scientific(&self, magnitude: f64, engineering: bool) -> String {
        let rendered = format!("{magnitude:e}");
        let Some((mantissa, exp_digits)) = rendered.split_once('e') else {
            return rendered;
        };
        let (mantissa, exponent) = if engineering {
            let exponent: i32 = exp_digits.parse().unwrap_or(0);
            let shift = exponent.rem_euclid(3);
            if shift == 0 {
                (mantissa.to_string(), exponent)
            } else {
                let shifted = mantissa.parse::<f64>().unwrap_or(0.0) * 10f64.powi(shift);
                (shifted.to_string(), exponent - shift)
            }
        } else {
            (mantissa.to_string(), exp_digits.parse().unwrap_or(0))
        };
        let mantissa = if self.decimal_separator == '.' {
            mantissa
        } else {
            mantissa.replace('.', &self.decimal_separator.to_string())
        };
        format!("{mantissa}e{exponent}")
    }
}

/// Optional leading `+` or `-`.
fn sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

/// One or more ASCII digits.
fn digit_run<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    digit1.parse_next(input)
}

/// Further digit runs, each preceded by the group separator.
fn grouped_runs<'i>(group: char, input: &mut &'i str) -> ModalResult<Vec<&'i str>> {
    repeat(0.., preceded(group, digit1)).parse_next(input)
}

/// An optional fraction part introduced by the decimal separator.
fn fraction_part<'i>(separator: char, input: &mut &'i str) -> ModalResult<Option<&'i str>> {
    opt(preceded(separator, digit1)).parse_next(input)
}

/// An optional `e`/`E` exponent with its own optional sign.
fn exponent_part<'i>(input: &mut &'i str) -> ModalResult<Option<(Option<char>, &'i str)>> {
    opt(preceded(one_of(['e', 'E']), (sign, digit1))).parse_next(input)
}

/// Decode a fraction-free numeral that carries an exponent.
///
/// A non-negative exponent denotes an integer, so the result is `Int` when
/// the scaled value fits in `i64`. Negative exponents and overflowing values
/// fall back to `Float` via the canonical text.
fn decode_with_exponent(
    canonical: &str,
    negative: bool,
    digits: &str,
    exp_sign: Option<char>,
    exp_digits: &str,
) -> Option<Value> {
    if exp_sign != Some('-') {
        if let (Ok(exponent), Ok(base)) = (exp_digits.parse::<u32>(), digits.parse::<i64>()) {
            let base = if negative { -base } else { base };
            let scaled = 10_i64
                .checked_pow(exponent)
                .and_then(|scale| base.checked_mul(scale));
            if let Some(n) = scaled {
                return Some(Value::Int(n));
            }
        }
    }
    canonical.parse::<f64>().ok().map(Value::Float)
}

/// Insert a group separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };
    let len = digits.len();
    let mut out = String::with_capacity(len + len.div_euclid(3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
