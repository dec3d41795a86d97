//! # Number Formatting
//!
//! One formatter shared by derivation steps and front ends, so a value reads
//! the same everywhere it appears.
//!
//! - Fixed decimals (trailing zeros trimmed) inside the normal magnitude band
//! - Exponential notation below `scientific_below` or at/above `scientific_above`
//! - `∞`, `-∞` and `NaN` literal markers for non-finite values
//!
//! ```rust
//! use formula_core::format::{format_value, FormatSettings};
//!
//! let s = FormatSettings::default();
//! assert_eq!(format_value(78.53981633974483, &s), "78.5398");
//! assert_eq!(format_value(10.0, &s), "10");
//! assert_eq!(format_value(1_591_549.43, &s), "1.5915e6");
//! assert_eq!(format_value(f64::INFINITY, &s), "∞");
//! ```

use serde::{Deserialize, Serialize};

/// Formatting configuration for rendered values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Decimal places for fixed and exponential notation
    pub decimals: usize,
    /// Magnitudes below this (and non-zero) use exponential notation
    pub scientific_below: f64,
    /// Magnitudes at or above this use exponential notation
    pub scientific_above: f64,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            decimals: 4,
            scientific_below: 1e-4,
            scientific_above: 1e6,
        }
    }
}

impl FormatSettings {
    /// Settings with a different decimal count
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

/// Format a value for display in steps and results.
pub fn format_value(value: f64, settings: &FormatSettings) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < settings.scientific_below || magnitude >= settings.scientific_above {
        let formatted = format!("{:.*e}", settings.decimals, value);
        return trim_exponential(&formatted);
    }

    let fixed = format!("{:.*}", settings.decimals, value);
    let trimmed = trim_fraction(&fixed);
    // -0.00001 rounds to "-0" at low precision
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format with a fixed number of decimal places and no trimming.
///
/// Used where trailing zeros are meaningful (significant figures).
/// Negative `places` rounds to tens, hundreds, ...
pub fn format_fixed(value: f64, places: i32) -> String {
    if places >= 0 {
        format!("{:.*}", places as usize, value)
    } else {
        format!("{:.0}", value)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn trim_exponential(s: &str) -> String {
    match s.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{}", trim_fraction(mantissa), exponent),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_band() {
        let s = FormatSettings::default();
        assert_eq!(format_value(3.14159265, &s), "3.1416");
        assert_eq!(format_value(-2.5, &s), "-2.5");
        assert_eq!(format_value(0.0001, &s), "0.0001");
        assert_eq!(format_value(999_999.0, &s), "999999");
    }

    #[test]
    fn test_exponential_band() {
        let s = FormatSettings::default();
        assert_eq!(format_value(1e-12, &s), "1e-12");
        assert_eq!(format_value(6.674e-11, &s), "6.674e-11");
        assert_eq!(format_value(1e6, &s), "1e6");
        assert_eq!(format_value(-2.5e7, &s), "-2.5e7");
    }

    #[test]
    fn test_non_finite_markers() {
        let s = FormatSettings::default();
        assert_eq!(format_value(f64::NAN, &s), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY, &s), "-∞");
        assert_eq!(format_value(0.0, &s), "0");
        assert_eq!(format_value(-0.0, &s), "0");
    }

    #[test]
    fn test_decimals_setting() {
        let s = FormatSettings::default().with_decimals(2);
        assert_eq!(format_value(78.5398, &s), "78.54");
        assert_eq!(format_value(1.996, &s), "2");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(12.3, 2), "12.30");
        assert_eq!(format_fixed(1200.0, -2), "1200");
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let s: FormatSettings = serde_json::from_str(r#"{"decimals": 6}"#).unwrap();
        assert_eq!(s.decimals, 6);
        assert_eq!(s.scientific_above, 1e6);
    }
}
