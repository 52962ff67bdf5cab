//! The coerced numeric value.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A floating-point value that is either a valid number or the
/// not-a-number sentinel. Never carries text or structure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedNumber(f64);

impl NormalizedNumber {
    /// The not-a-number sentinel.
    pub const NAN: NormalizedNumber = NormalizedNumber(f64::NAN);
    pub const ZERO: NormalizedNumber = NormalizedNumber(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for NormalizedNumber {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<NormalizedNumber> for f64 {
    fn from(value: NormalizedNumber) -> Self {
        value.0
    }
}

impl From<NormalizedNumber> for crate::ScalarInput {
    fn from(value: NormalizedNumber) -> Self {
        crate::ScalarInput::Number(value.0)
    }
}

impl Add for NormalizedNumber {
    type Output = NormalizedNumber;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for NormalizedNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NormalizedNumber::ZERO, Add::add)
    }
}

/// Renders numbers the way a user typed them: `6`, `1.5`, `NaN`, `Infinity`.
impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v == 0.0 {
            // -0 renders as 0
            f.write_str("0")
        } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
            write_exponential(f, v)
        } else {
            write!(f, "{v}")
        }
    }
}

/// Shortest round-trip mantissa with an explicitly signed exponent: `1e+21`, `1.5e-7`.
fn write_exponential(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let rendered = format!("{v:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&rendered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_integers_without_fraction() {
        assert_eq!(NormalizedNumber::new(6.0).to_string(), "6");
        assert_eq!(NormalizedNumber::new(-0.0).to_string(), "0");
        assert_eq!(NormalizedNumber::new(1.5).to_string(), "1.5");
    }

    #[test]
    fn displays_large_magnitudes_in_exponent_form() {
        assert_eq!(NormalizedNumber::new(1e21).to_string(), "1e+21");
        assert_eq!(NormalizedNumber::new(-2.5e22).to_string(), "-2.5e+22");
        assert_eq!(
            NormalizedNumber::new(1e20).to_string(),
            "100000000000000000000"
        );
    }

    #[test]
    fn displays_tiny_magnitudes_in_exponent_form() {
        assert_eq!(NormalizedNumber::new(1e-7).to_string(), "1e-7");
        assert_eq!(NormalizedNumber::new(-1.5e-10).to_string(), "-1.5e-10");
        assert_eq!(NormalizedNumber::new(0.000001).to_string(), "0.000001");
    }

    #[test]
    fn displays_special_values() {
        assert_eq!(NormalizedNumber::NAN.to_string(), "NaN");
        assert_eq!(NormalizedNumber::new(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(
            NormalizedNumber::new(f64::NEG_INFINITY).to_string(),
            "-Infinity"
        );
    }

    #[test]
    fn nan_propagates_through_sum() {
        let values = [
            NormalizedNumber::new(1.0),
            NormalizedNumber::NAN,
            NormalizedNumber::new(2.0),
        ];
        let total: NormalizedNumber = values.into_iter().sum();
        assert!(total.is_nan());
    }

    #[test]
    fn empty_sum_is_zero() {
        let total: NormalizedNumber = std::iter::empty().sum();
        assert_eq!(total, NormalizedNumber::ZERO);
    }
}
