//! Rounding configuration applied by the number writer.

use bigdecimal::BigDecimal;
use bigdecimal::rounding::RoundingMode as DecimalRoundingMode;
use bon::Builder;
use serde::{Deserialize, Serialize};

/// Direction and tie-breaking rule for rounding.
///
/// The `Half*` modes round to the nearest representable result and only
/// consult the direction rule on exact ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round toward zero (truncate).
    ToZero,
    /// Round away from zero.
    FromZero,
    /// Round to nearest; ties toward positive infinity.
    HalfCeiling,
    /// Round to nearest; ties toward negative infinity.
    HalfFloor,
    /// Round to nearest; ties toward zero.
    HalfToZero,
    /// Round to nearest; ties away from zero.
    #[default]
    HalfFromZero,
    /// Round to nearest; ties toward the even neighbor.
    HalfEven,
}

/// Precision and mode for rounding a number before rendering.
///
/// # Example
///
/// ```
/// use stencil::{RoundingMode, RoundingOption};
///
/// let option = RoundingOption::builder()
///     .precision(2)
///     .mode(RoundingMode::HalfEven)
///     .build();
///
/// assert_eq!(option.round(2.675), 2.68);
/// assert_eq!(option.round(2.665), 2.66);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Builder, Serialize, Deserialize)]
pub struct RoundingOption {
    /// Number of fraction digits to keep.
    #[builder(default)]
    pub precision: u32,

    /// Direction and tie-breaking rule.
    #[builder(default)]
    pub mode: RoundingMode,
}

impl RoundingOption {
    /// Round `value` to the configured precision.
    ///
    /// Non-finite values pass through unchanged.
    pub fn round(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scale = 10f64.powi(self.precision as i32);
        let scaled = value * scale;
        let rounded = match self.mode {
            RoundingMode::Ceiling => scaled.ceil(),
            RoundingMode::Floor => scaled.floor(),
            RoundingMode::ToZero => scaled.trunc(),
            RoundingMode::FromZero => {
                if scaled.is_sign_negative() {
                    scaled.floor()
                } else {
                    scaled.ceil()
                }
            }
            RoundingMode::HalfCeiling
            | RoundingMode::HalfFloor
            | RoundingMode::HalfToZero
            | RoundingMode::HalfFromZero
            | RoundingMode::HalfEven => round_half(scaled, self.mode),
        };
        rounded / scale
    }

    /// Build a standalone rounding function from this option.
    pub fn rounder(self) -> impl Fn(f64) -> f64 {
        move |value| self.round(value)
    }

    /// Round a decimal value to the configured precision.
    ///
    /// The arbitrary-precision counterpart of [`RoundingOption::round`]:
    /// ties are exact here, so the `Half*` modes never drift on values a
    /// binary float cannot hold.
    pub fn round_decimal(&self, value: &BigDecimal) -> BigDecimal {
        let negative = *value < BigDecimal::from(0);
        let mode = match self.mode {
            RoundingMode::Ceiling => DecimalRoundingMode::Ceiling,
            RoundingMode::Floor => DecimalRoundingMode::Floor,
            RoundingMode::ToZero => DecimalRoundingMode::Down,
            RoundingMode::FromZero => DecimalRoundingMode::Up,
            RoundingMode::HalfCeiling => {
                if negative {
                    DecimalRoundingMode::HalfDown
                } else {
                    DecimalRoundingMode::HalfUp
                }
            }
            RoundingMode::HalfFloor => {
                if negative {
                    DecimalRoundingMode::HalfUp
                } else {
                    DecimalRoundingMode::HalfDown
                }
            }
            RoundingMode::HalfToZero => DecimalRoundingMode::HalfDown,
            RoundingMode::HalfFromZero => DecimalRoundingMode::HalfUp,
            RoundingMode::HalfEven => DecimalRoundingMode::HalfEven,
        };
        value.with_scale_round(i64::from(self.precision), mode)
    }

    /// Build a standalone decimal rounding function from this option.
    pub fn decimal_rounder(self) -> impl Fn(&BigDecimal) -> BigDecimal {
        move |value| self.round_decimal(value)
    }
}

/// Round-to-nearest with the tie direction taken from `mode`.
fn round_half(scaled: f64, mode: RoundingMode) -> f64 {
    let floor = scaled.floor();
    let diff = scaled - floor;
    if diff > 0.5 {
        return floor + 1.0;
    }
    if diff < 0.5 {
        return floor;
    }
    match mode {
        RoundingMode::HalfCeiling => floor + 1.0,
        RoundingMode::HalfFloor => floor,
        RoundingMode::HalfToZero => {
            if scaled > 0.0 {
                floor
            } else {
                floor + 1.0
            }
        }
        RoundingMode::HalfFromZero => {
            if scaled > 0.0 {
                floor + 1.0
            } else {
                floor
            }
        }
        RoundingMode::HalfEven => {
            if floor.rem_euclid(2.0) == 0.0 {
                floor
            } else {
                floor + 1.0
            }
        }
        // Non-half modes are dispatched before this helper is called.
        RoundingMode::Ceiling | RoundingMode::Floor | RoundingMode::ToZero
        | RoundingMode::FromZero => floor,
    }
}
