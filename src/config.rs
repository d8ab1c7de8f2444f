use serde::{Deserialize, Serialize};

/// Thresholds used by tolerant comparison and inversion.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    /// Decimal digits kept when two elements are compared. Values outside
    /// `±MAX_DECIMAL_DIGITS` are treated as the nearest bound.
    pub decimal_digits: i32,
    /// Determinant magnitude below which a matrix counts as singular.
    pub singular_threshold: f64,
}

impl Tolerance {
    pub const DEFAULT_DECIMAL_DIGITS: i32 = 7;
    pub const DEFAULT_SINGULAR_THRESHOLD: f64 = 1e-7;
    /// An `f64` carries at most ~15.9 significant decimal digits.
    pub const MAX_DECIMAL_DIGITS: i32 = 15;

    /// `decimal_digits` is clamped to `±MAX_DECIMAL_DIGITS`.
    pub fn new(decimal_digits: i32, singular_threshold: f64) -> Self {
        Self {
            decimal_digits: clamp_digits(decimal_digits),
            singular_threshold,
        }
    }

    /// Factor an element is multiplied by before rounding. Always finite
    /// and non-zero.
    pub fn scale(&self) -> f64 {
        10f64.powi(clamp_digits(self.decimal_digits))
    }

    /// Rounds `value` to the kept number of digits, expressed in units of
    /// `10^-decimal_digits`.
    pub(crate) fn quantize(&self, value: f64) -> f64 {
        (value * self.scale()).round()
    }

    pub(crate) fn is_singular(&self, determinant: f64) -> bool {
        determinant.abs() < self.singular_threshold
    }
}

fn clamp_digits(digits: i32) -> i32 {
    digits.clamp(-Tolerance::MAX_DECIMAL_DIGITS, Tolerance::MAX_DECIMAL_DIGITS)
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            decimal_digits: Self::DEFAULT_DECIMAL_DIGITS,
            singular_threshold: Self::DEFAULT_SINGULAR_THRESHOLD,
        }
    }
}
