//! # Significant Figures
//!
//! Digit-classification rules, rounding, and precision propagation.
//!
//! ## Counting Rules
//!
//! 1. Non-zero digits always count
//! 2. Zeros between non-zero digits count
//! 3. Leading zeros never count
//! 4. Trailing zeros count only when a decimal point is written
//!
//! The mantissa of exponent notation (`1.20e3`) follows the same rules. A
//! value written with only zeros has one significant figure, or as many as
//! the zeros after its decimal point (`0.00` → 2).
//!
//! ## Propagation
//!
//! - Addition/subtraction: round to the least precise decimal place
//! - Multiplication/division: round to the fewest significant figures

use serde::{Deserialize, Serialize};

use crate::format::format_fixed;
use crate::inputs::strip_thousands;

/// What the written form of a number says about its precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigFigAnalysis {
    /// Parsed numeric value
    pub value: f64,
    /// Number of significant figures
    pub count: usize,
    /// Decimal place of the last significant digit
    /// (2 = hundredths, 0 = units, -2 = hundreds)
    pub last_place: i32,
}

/// Decimal places beyond this cannot describe a digit of an f64
const MAX_PLACE: i64 = 400;

/// Classify the digits of an entered number.
///
/// Returns `None` if the text is not a plain decimal or exponent-notation
/// number, or if its exponent puts the last digit outside the f64 range.
///
/// ```rust
/// use formula_core::equations::sigfigs::analyze;
///
/// assert_eq!(analyze("0.00450").unwrap().count, 3);
/// assert_eq!(analyze("1200").unwrap().count, 2);
/// assert_eq!(analyze("1200.").unwrap().count, 4);
/// assert_eq!(analyze("1005").unwrap().count, 4);
/// ```
pub fn analyze(text: &str) -> Option<SigFigAnalysis> {
    let cleaned = strip_thousands(text.trim())?;
    let unsigned = cleaned
        .strip_prefix('-')
        .or_else(|| cleaned.strip_prefix('+'))
        .unwrap_or(&cleaned);

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i64>().ok()?),
        None => (unsigned, 0),
    };
    let has_point = mantissa.contains('.');
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;

    let digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let frac_len = frac_part.len() as i64;

    let Some(first) = digits.iter().position(|&d| d != b'0') else {
        let count = if has_point { frac_part.len().max(1) } else { 1 };
        let last_place = bounded_place((if has_point { frac_len } else { 0 }).checked_sub(exponent)?)?;
        return Some(SigFigAnalysis { value, count, last_place });
    };

    let (count, last_place) = if has_point {
        (digits.len() - first, frac_len.checked_sub(exponent)?)
    } else {
        let last = digits.iter().rposition(|&d| d != b'0').unwrap_or(first);
        let trailing_zeros = (digits.len() - 1 - last) as i64;
        (last + 1 - first, (-trailing_zeros).checked_sub(exponent)?)
    };

    Some(SigFigAnalysis {
        value,
        count,
        last_place: bounded_place(last_place)?,
    })
}

fn bounded_place(place: i64) -> Option<i32> {
    if !(-MAX_PLACE..=MAX_PLACE).contains(&place) {
        return None;
    }
    i32::try_from(place).ok()
}

/// Decimal exponent of the leading digit, ⌊log₁₀|x|⌋
#[inline]
pub fn magnitude(x: f64) -> i32 {
    x.abs().log10().floor() as i32
}

/// Round to a decimal place (negative places round to tens, hundreds, ...)
pub fn round_to_place(x: f64, places: i32) -> f64 {
    if places >= 0 {
        let factor = 10f64.powi(places);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-places);
        (x / factor).round() * factor
    }
}

/// Decimal place that keeps `figures` significant figures of `x`
#[inline]
pub fn place_for_sig_figs(x: f64, figures: usize) -> i32 {
    figures as i32 - 1 - magnitude(x)
}

/// Round to `figures` significant figures.
///
/// ```rust
/// use formula_core::equations::sigfigs::round_to_sig_figs;
/// assert_eq!(round_to_sig_figs(123.456, 3), 123.0);
/// assert_eq!(round_to_sig_figs(0.0012345, 2), 0.0012);
/// ```
pub fn round_to_sig_figs(x: f64, figures: usize) -> f64 {
    if x == 0.0 || figures == 0 {
        return 0.0;
    }
    round_to_place(x, place_for_sig_figs(x, figures))
}

/// Render `x` with exactly `figures` significant figures, keeping
/// meaningful trailing zeros (`1.2` to 3 figures → `1.20`).
pub fn format_sig_figs(x: f64, figures: usize) -> String {
    let figures = figures.max(1);
    let rounded = round_to_sig_figs(x, figures);
    if rounded == 0.0 {
        return format_fixed(0.0, figures as i32 - 1);
    }
    let mag = magnitude(rounded);
    if !(-6..15).contains(&mag) {
        return format!("{:.*e}", figures - 1, rounded);
    }
    format_fixed(rounded, figures as i32 - 1 - mag)
}

/// Least precise decimal place among addends
pub fn sum_precision(terms: &[SigFigAnalysis]) -> Option<i32> {
    terms.iter().map(|t| t.last_place).min()
}

/// Fewest significant figures among factors
pub fn product_precision(factors: &[SigFigAnalysis]) -> Option<usize> {
    factors.iter().map(|t| t.count).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str) -> usize {
        analyze(s).unwrap().count
    }

    #[test]
    fn test_counting_rules() {
        assert_eq!(count("123"), 3);
        assert_eq!(count("101"), 3);
        assert_eq!(count("0.0025"), 2);
        assert_eq!(count("2.500"), 4);
        assert_eq!(count("2500"), 2);
        assert_eq!(count("-0.040"), 2);
        assert_eq!(count("1.20e3"), 3);
        assert_eq!(count("6.022E23"), 4);
        assert_eq!(count("0"), 1);
        assert_eq!(count("0.00"), 2);
    }

    #[test]
    fn test_last_place() {
        assert_eq!(analyze("12.30").unwrap().last_place, 2);
        assert_eq!(analyze("1200").unwrap().last_place, -2);
        assert_eq!(analyze("1200.").unwrap().last_place, 0);
        assert_eq!(analyze("4.5e2").unwrap().last_place, -1);
    }

    #[test]
    fn test_rejects_non_numbers() {
        for bad in ["", "abc", "1.2.3", "1e", "--5", ".", "1,5", "1,2,3"] {
            assert!(analyze(bad).is_none(), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_extreme_exponents_rejected() {
        for bad in ["1e-2147483648", "1e2147483647", "10e-9223372036854775808", "1.5e999999", "0e-500", "10e9223372036854775807"] {
            assert!(analyze(bad).is_none(), "{:?} accepted", bad);
        }
        assert_eq!(analyze("1.0e-300").unwrap().last_place, 301);
        assert_eq!(analyze("5e300").unwrap().last_place, -300);
    }

    #[test]
    fn test_thousands_separators() {
        let a = analyze("1,200").unwrap();
        assert_eq!((a.value, a.count, a.last_place), (1200.0, 2, -2));
        assert_eq!(analyze("12,345.60").unwrap().count, 7);
    }

    #[test]
    fn test_round_to_sig_figs() {
        assert_eq!(round_to_sig_figs(98765.0, 2), 99000.0);
        assert_eq!(round_to_sig_figs(-0.04567, 2), -0.046);
        assert_eq!(round_to_sig_figs(0.0, 3), 0.0);
    }

    #[test]
    fn test_format_sig_figs() {
        assert_eq!(format_sig_figs(1.2, 3), "1.20");
        assert_eq!(format_sig_figs(9.996, 3), "10.0");
        assert_eq!(format_sig_figs(0.00123456, 2), "0.0012");
        assert_eq!(format_sig_figs(98765.0, 2), "99000");
        assert_eq!(format_sig_figs(0.0, 2), "0.0");
    }

    #[test]
    fn test_propagation() {
        let terms: Vec<_> = ["12.11", "18.0", "1.013"].iter().map(|s| analyze(s).unwrap()).collect();
        assert_eq!(sum_precision(&terms), Some(1));
        assert_eq!(product_precision(&terms), Some(3));
        assert_eq!(sum_precision(&[]), None);
    }
}
