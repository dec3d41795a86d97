//! # Friction, Torque and Gravitation Formulas
//!
//! Rigid-body mechanics used by the friction, motor torque and escape
//! velocity calculators. SI base units throughout; angles in radians.

/// Standard gravity gₙ (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Newtonian gravitational constant G (m³·kg⁻¹·s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

// =============================================================================
// FRICTION
// =============================================================================

/// Coefficient of friction μ = F / N
#[inline]
pub fn friction_coefficient(friction_force: f64, normal_force: f64) -> f64 {
    friction_force / normal_force
}

/// Friction force F = μN
#[inline]
pub fn friction_force(coefficient: f64, normal_force: f64) -> f64 {
    coefficient * normal_force
}

/// Normal and down-slope components of weight on an incline
///
/// ```text
///            ╱│
///          ╱  │
///   mg·sinθ   │
///      ╱  θ   │
///    ╱────────┘
/// ```
///
/// # Formulas
/// - N = m·g·cos θ
/// - F∥ = m·g·sin θ
#[inline]
pub fn incline_components(mass: f64, gravity: f64, angle_rad: f64) -> (f64, f64) {
    let weight = mass * gravity;
    (weight * angle_rad.cos(), weight * angle_rad.sin())
}

// =============================================================================
// TORQUE
// =============================================================================

/// τ = P / ω
#[inline]
pub fn torque_from_power(power: f64, omega: f64) -> f64 {
    power / omega
}

/// τ = Kt · I
#[inline]
pub fn torque_from_current(torque_constant: f64, current: f64) -> f64 {
    torque_constant * current
}

/// τ = F · r
#[inline]
pub fn torque_from_force(force: f64, radius: f64) -> f64 {
    force * radius
}

// =============================================================================
// ESCAPE VELOCITY
// =============================================================================

/// Escape velocity from the surface of a body
///
/// # Formula
/// v = √(2GM/r)
#[inline]
pub fn escape_velocity(mass: f64, radius: f64) -> f64 {
    (2.0 * GRAVITATIONAL_CONSTANT * mass / radius).sqrt()
}

/// Body mass implied by an escape velocity
///
/// # Formula
/// M = v²r/(2G)
#[inline]
pub fn mass_from_escape_velocity(velocity: f64, radius: f64) -> f64 {
    velocity * velocity * radius / (2.0 * GRAVITATIONAL_CONSTANT)
}
