//! # AC Circuit and Power Formulas
//!
//! Reactance, impedance, resonance and dissipation for ideal R, L and C
//! elements driven by a sinusoid. All values in SI base units (Ω, H, F, Hz,
//! V, A, W); angles in radians.
//!
//! ## Notation
//!
//! - `f` = Frequency, `ω = 2πf`
//! - `XL = ωL`, `XC = 1/(ωC)`
//! - `X = XL − XC` (net series reactance)
//! - `|Z|` = Impedance magnitude, `φ` = phase angle
//! - `G = 1/R`, `B` = Susceptance (parallel branch)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

// =============================================================================
// REACTANCE
// =============================================================================

/// Angular frequency ω = 2πf
#[inline]
pub fn angular_frequency(f: f64) -> f64 {
    2.0 * PI * f
}

/// Capacitive reactance
///
/// # Formula
/// XC = 1/(2πfC)
#[inline]
pub fn capacitive_reactance(f: f64, c: f64) -> f64 {
    1.0 / (2.0 * PI * f * c)
}

/// Inductive reactance
///
/// # Formula
/// XL = 2πfL
#[inline]
pub fn inductive_reactance(f: f64, l: f64) -> f64 {
    2.0 * PI * f * l
}

// =============================================================================
// IMPEDANCE
// =============================================================================

/// Impedance magnitude and phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impedance {
    /// |Z| in ohms
    pub magnitude: f64,
    /// φ in radians (positive = inductive)
    pub phase: f64,
}

/// Series RLC impedance from resistance and net reactance
///
/// # Formulas
/// - |Z| = √(R² + X²)
/// - φ = atan2(X, R)
#[inline]
pub fn series_impedance(r: f64, x: f64) -> Impedance {
    Impedance {
        magnitude: (r * r + x * x).sqrt(),
        phase: x.atan2(r),
    }
}

/// Parallel RLC impedance from conductance and susceptance
///
/// # Formulas
/// - |Y| = √(G² + B²), |Z| = 1/|Y|
/// - φ = −atan2(B, G)
#[inline]
pub fn parallel_impedance(g: f64, b: f64) -> Impedance {
    Impedance {
        magnitude: 1.0 / (g * g + b * b).sqrt(),
        phase: -b.atan2(g),
    }
}

// =============================================================================
// RESONANCE
// =============================================================================

/// Resonant frequency of an LC pair
///
/// # Formula
/// f₀ = 1/(2π√(LC))
#[inline]
pub fn resonant_frequency(l: f64, c: f64) -> f64 {
    1.0 / (2.0 * PI * (l * c).sqrt())
}

/// Series quality factor
///
/// # Formula
/// Q = (1/R)·√(L/C)
#[inline]
pub fn series_quality_factor(r: f64, l: f64, c: f64) -> f64 {
    (l / c).sqrt() / r
}

// =============================================================================
// POWER
// =============================================================================

/// P = V²/R
#[inline]
pub fn power_from_voltage_resistance(v: f64, r: f64) -> f64 {
    v * v / r
}

/// P = V·I
#[inline]
pub fn power_from_voltage_current(v: f64, i: f64) -> f64 {
    v * i
}

/// P = I²R
#[inline]
pub fn power_from_current_resistance(i: f64, r: f64) -> f64 {
    i * i * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reactances_cross_at_resonance() {
        let (l, c) = (100e-6, 100e-12);
        let f0 = resonant_frequency(l, c);
        assert_relative_eq!(f0, 1.591549e6, max_relative = 1e-6);
        assert_relative_eq!(inductive_reactance(f0, l), 1000.0, max_relative = 1e-9);
        assert_relative_eq!(capacitive_reactance(f0, c), 1000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_series_impedance_3_4_5() {
        let z = series_impedance(3.0, 4.0);
        assert_eq!(z.magnitude, 5.0);
        assert_relative_eq!(z.phase, (4.0f64 / 3.0).atan(), max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_impedance_purely_resistive() {
        let z = parallel_impedance(1.0 / 50.0, 0.0);
        assert_relative_eq!(z.magnitude, 50.0, max_relative = 1e-12);
        assert_eq!(z.phase, 0.0);
    }

    #[test]
    fn test_quality_factor() {
        // √(100µH / 100pF) = 1000 Ω
        assert_relative_eq!(series_quality_factor(10.0, 100e-6, 100e-12), 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_power_forms_agree() {
        let (v, r) = (12.0, 6.0);
        let i = v / r;
        let p = power_from_voltage_resistance(v, r);
        assert_eq!(p, 24.0);
        assert_eq!(power_from_voltage_current(v, i), p);
        assert_eq!(power_from_current_resistance(i, r), p);
    }
}
