//! # Percent, Fraction, Logarithm and Error Formulas
//!
//! Arithmetic helpers for the algebra calculators. Fractions are exact: the
//! entered decimal digits are turned into an integer ratio and reduced by
//! the Euclidean GCD, never approximated from a float.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inputs::strip_thousands;

/// Largest power-of-ten scale kept exact (10^36 still fits in i128)
const MAX_SCALE: u32 = 36;

// =============================================================================
// PERCENT / DECIMAL
// =============================================================================

/// p = x × 100
#[inline]
pub fn decimal_to_percent(x: f64) -> f64 {
    x * 100.0
}

/// x = p / 100
#[inline]
pub fn percent_to_decimal(p: f64) -> f64 {
    p / 100.0
}

// =============================================================================
// FRACTIONS
// =============================================================================

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, 0)` is 0; signs are ignored.
///
/// ```rust
/// use formula_core::equations::numeric::gcd;
/// assert_eq!(gcd(125, 1000), 125);
/// assert_eq!(gcd(-12, 18), 6);
/// ```
pub fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i128
}

/// An integer ratio with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i128,
    pub denominator: i128,
}

impl Fraction {
    /// Build a fraction, moving any sign onto the numerator.
    ///
    /// Returns `None` for a zero denominator.
    pub fn new(numerator: i128, denominator: i128) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let sign = denominator.signum();
        Some(Self {
            numerator: numerator * sign,
            denominator: denominator * sign,
        })
    }

    /// Reduce to lowest terms; returns the reduced fraction and the divisor used
    pub fn reduce(self) -> (Fraction, i128) {
        let divisor = gcd(self.numerator, self.denominator).max(1);
        (
            Fraction {
                numerator: self.numerator / divisor,
                denominator: self.denominator / divisor,
            },
            divisor,
        )
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parse entered decimal text exactly into `digits / 10^scale`.
///
/// Accepts an optional sign, thousands separators, a decimal point and an
/// exponent (`1.25e-3`). Returns `None` for anything else or when the value
/// cannot be held exactly.
///
/// ```rust
/// use formula_core::equations::numeric::exact_decimal;
/// assert_eq!(exact_decimal("12.5"), Some((125, 1)));
/// assert_eq!(exact_decimal("-0.075"), Some((-75, 3)));
/// assert_eq!(exact_decimal("3e2"), Some((300, 0)));
/// ```
pub fn exact_decimal(text: &str) -> Option<(i128, u32)> {
    let cleaned = strip_thousands(text.trim())?;
    let (negative, unsigned) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().ok()?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = format!("{}{}", int_part, frac_part);
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_SCALE as usize {
        return None;
    }
    let mut numerator: i128 = if significant.is_empty() { 0 } else { significant.parse().ok()? };

    let mut scale = frac_part.len() as i64 - exponent as i64;
    if scale < 0 {
        numerator = numerator.checked_mul(10i128.checked_pow((-scale) as u32)?)?;
        scale = 0;
    }
    if scale > MAX_SCALE as i64 {
        return None;
    }
    if negative {
        numerator = -numerator;
    }
    Some((numerator, scale as u32))
}

/// Exact fraction for entered decimal text, unreduced (`0.375` → 375/1000)
pub fn decimal_text_to_fraction(text: &str) -> Option<Fraction> {
    let (numerator, scale) = exact_decimal(text)?;
    Fraction::new(numerator, 10i128.pow(scale))
}

/// Exact fraction for entered percent text, unreduced (`12.5` → 125/1000)
pub fn percent_text_to_fraction(text: &str) -> Option<Fraction> {
    let (numerator, scale) = exact_decimal(text)?;
    let scale = scale + 2;
    if scale > MAX_SCALE {
        return None;
    }
    Fraction::new(numerator, 10i128.pow(scale))
}

// =============================================================================
// LOGARITHMS
// =============================================================================

/// Logarithm of `x` in base `b` by change of base
///
/// # Formula
/// log_b(x) = ln(x) / ln(b)
///
/// Returns `(ln x, ln b, quotient)` so callers can show each term.
#[inline]
pub fn change_of_base(x: f64, b: f64) -> (f64, f64, f64) {
    let ln_x = x.ln();
    let ln_b = b.ln();
    (ln_x, ln_b, ln_x / ln_b)
}

// =============================================================================
// PERCENT ERROR
// =============================================================================

/// Percent error of a measurement
///
/// # Formula
/// δ = |measured − true| / |true| × 100
#[inline]
pub fn percent_error(measured: f64, true_value: f64) -> f64 {
    (measured - true_value).abs() / true_value.abs() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_round_trip() {
        for x in [0.0, 0.125, -3.5, 1e-9, 12345.678] {
            assert_relative_eq!(percent_to_decimal(decimal_to_percent(x)), x, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_fraction_sign_normalized() {
        let f = Fraction::new(3, -4).unwrap();
        assert_eq!(f, Fraction { numerator: -3, denominator: 4 });
        assert!(Fraction::new(1, 0).is_none());
    }

    #[test]
    fn test_percent_to_fraction_reduces() {
        let raw = percent_text_to_fraction("12.5").unwrap();
        assert_eq!(raw.to_string(), "125/1000");
        let (reduced, divisor) = raw.reduce();
        assert_eq!(reduced.to_string(), "1/8");
        assert_eq!(divisor, 125);

        let (reduced, _) = percent_text_to_fraction("-40").unwrap().reduce();
        assert_eq!(reduced.to_string(), "-2/5");
    }

    #[test]
    fn test_decimal_to_fraction() {
        let (reduced, _) = decimal_text_to_fraction("0.375").unwrap().reduce();
        assert_eq!(reduced, Fraction { numerator: 3, denominator: 8 });
        let (reduced, _) = decimal_text_to_fraction("2.5e-1").unwrap().reduce();
        assert_eq!(reduced.to_string(), "1/4");
        let (zero, _) = decimal_text_to_fraction("0.000").unwrap().reduce();
        assert_eq!(zero.to_string(), "0/1");
    }

    #[test]
    fn test_exact_decimal_rejects() {
        for bad in ["", ".", "abc", "1.2.3", "1e", "0x10", "--1", "1,5", "1,2,3", "1_000"] {
            assert!(exact_decimal(bad).is_none(), "{:?} accepted", bad);
        }
        assert_eq!(exact_decimal(".5"), Some((5, 1)));
        assert_eq!(exact_decimal("1,250"), Some((1250, 0)));
    }

    #[test]
    fn test_change_of_base() {
        let (_, _, log) = change_of_base(8.0, 2.0);
        assert_eq!(log, 3.0);
        let (_, _, log) = change_of_base(81.0, 3.0);
        assert_relative_eq!(log, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_percent_error() {
        assert_relative_eq!(percent_error(152.0, 150.0), 4.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(percent_error(-9.0, -10.0), 10.0, max_relative = 1e-12);
    }
}
