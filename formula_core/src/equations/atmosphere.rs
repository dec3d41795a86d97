//! # Humidity and Dew Point (Magnus Formula)
//!
//! Magnus–Tetens approximation of saturation vapor pressure over water, with
//! the constants of Bolton (1980), valid roughly from −45 °C to 60 °C.
//!
//! ```text
//! es(T) = 6.112 · exp(a·T / (T + b))          [hPa]
//! e     = RH/100 · es(T)
//! γ     = ln(e / 6.112)
//! Td    = b·γ / (a − γ)
//! ```

use serde::{Deserialize, Serialize};

/// Magnus coefficient a (dimensionless)
pub const MAGNUS_A: f64 = 17.67;
/// Magnus coefficient b (°C)
pub const MAGNUS_B: f64 = 243.5;
/// Saturation vapor pressure at 0 °C (hPa)
pub const MAGNUS_E0_HPA: f64 = 6.112;

/// Every intermediate of a dew point evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DewPoint {
    /// Saturation vapor pressure at the dry-bulb temperature (hPa)
    pub saturation_hpa: f64,
    /// Actual vapor pressure (hPa)
    pub vapor_hpa: f64,
    /// γ = ln(e / 6.112)
    pub gamma: f64,
    /// Dew point temperature (°C)
    pub dew_point_c: f64,
}

/// Saturation vapor pressure at `t_c` (°C), in hPa
#[inline]
pub fn saturation_vapor_pressure(t_c: f64) -> f64 {
    MAGNUS_E0_HPA * (MAGNUS_A * t_c / (t_c + MAGNUS_B)).exp()
}

/// Evaluate the Magnus dew point for temperature `t_c` (°C) and relative
/// humidity `rh` (percent).
pub fn dew_point(t_c: f64, rh: f64) -> DewPoint {
    let saturation_hpa = saturation_vapor_pressure(t_c);
    let vapor_hpa = rh / 100.0 * saturation_hpa;
    let gamma = (vapor_hpa / MAGNUS_E0_HPA).ln();
    let dew_point_c = MAGNUS_B * gamma / (MAGNUS_A - gamma);
    DewPoint {
        saturation_hpa,
        vapor_hpa,
        gamma,
        dew_point_c,
    }
}
