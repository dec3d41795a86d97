//! # Circle, Sphere and Rectangle Formulas
//!
//! Closed-form geometry used by the area, volume, diagonal and density
//! calculators. All lengths share one unit; results are in that unit squared
//! or cubed.
//!
//! ## Notation
//!
//! - `r` = Radius
//! - `d` = Diameter
//! - `C` = Circumference
//! - `A` = Area
//! - `V` = Volume
//! - `ρ` = Density, `m` = Mass

use std::f64::consts::PI;

// =============================================================================
// CIRCLE
// =============================================================================

/// Area of a circle from its radius
///
/// # Formula
/// A = πr²
///
/// # Example
/// ```rust
/// use formula_core::equations::geometry::circle_area_from_radius;
///
/// let a = circle_area_from_radius(5.0);
/// assert!((a - 78.539816).abs() < 1e-6);
/// ```
#[inline]
pub fn circle_area_from_radius(r: f64) -> f64 {
    PI * r * r
}

/// Area of a circle from its diameter
///
/// # Formula
/// A = πd²/4
#[inline]
pub fn circle_area_from_diameter(d: f64) -> f64 {
    PI * d * d / 4.0
}

/// Area of a circle from its circumference
///
/// # Formula
/// A = C²/(4π)
#[inline]
pub fn circle_area_from_circumference(c: f64) -> f64 {
    c * c / (4.0 * PI)
}

/// Radius recovered from a circumference, r = C/(2π)
#[inline]
pub fn radius_from_circumference(c: f64) -> f64 {
    c / (2.0 * PI)
}

// =============================================================================
// SPHERE
// =============================================================================

/// Volume of a sphere from its radius
///
/// # Formula
/// V = (4/3)πr³
#[inline]
pub fn sphere_volume_from_radius(r: f64) -> f64 {
    4.0 / 3.0 * PI * r.powi(3)
}

/// Volume of a sphere from its diameter
///
/// # Formula
/// V = πd³/6
#[inline]
pub fn sphere_volume_from_diameter(d: f64) -> f64 {
    PI * d.powi(3) / 6.0
}

/// Surface area of a sphere, S = 4πr²
#[inline]
pub fn sphere_surface_area(r: f64) -> f64 {
    4.0 * PI * r * r
}

/// Radius of the sphere enclosing volume V
///
/// # Formula
/// r = ∛(3V/(4π))
#[inline]
pub fn sphere_radius_from_volume(v: f64) -> f64 {
    (3.0 * v / (4.0 * PI)).cbrt()
}

// =============================================================================
// RECTANGLE
// =============================================================================

/// Diagonal of a rectangle
///
/// ```text
///     ┌─────────┐
///     │       ╱ │
///   w │    d╱   │
///     │  ╱      │
///     └─────────┘
///          l
/// ```
///
/// # Formula
/// d = √(l² + w²)
#[inline]
pub fn rectangle_diagonal(l: f64, w: f64) -> f64 {
    (l * l + w * w).sqrt()
}
