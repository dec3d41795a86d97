//! # Closed-Form Formulas
//!
//! Every formula the calculators apply, as plain functions over `f64` in SI
//! base units. Keeping them in one place lets each be checked against its
//! textbook form independently of input parsing and step rendering.
//!
//! ## Modules
//!
//! - [`geometry`] - Circle, sphere and rectangle formulas
//! - [`numeric`] - Percent/decimal/fraction conversion, logarithms, percent error
//! - [`sigfigs`] - Significant figure counting, rounding and propagation
//! - [`statistics`] - Least-squares linear regression
//! - [`atmosphere`] - Magnus dew point
//! - [`circuits`] - Reactance, impedance, resonance and electrical power
//! - [`mechanics`] - Friction, torque and escape velocity
//!
//! ## Conventions
//!
//! - π is `std::f64::consts::PI` everywhere
//! - Angles are radians; conversion from degrees happens in the unit registry
//! - Functions do not validate; the method layer rejects out-of-domain input

pub mod atmosphere;
pub mod circuits;
pub mod geometry;
pub mod mechanics;
pub mod numeric;
pub mod sigfigs;
pub mod statistics;

pub use atmosphere::{dew_point, saturation_vapor_pressure, DewPoint};
pub use circuits::{
    capacitive_reactance,
    inductive_reactance,
    parallel_impedance,
    resonant_frequency,
    series_impedance,
    series_quality_factor,
    Impedance,
};
pub use geometry::{
    circle_area_from_circumference,
    circle_area_from_diameter,
    circle_area_from_radius,
    rectangle_diagonal,
    sphere_volume_from_diameter,
    sphere_volume_from_radius,
};
pub use mechanics::{escape_velocity, mass_from_escape_velocity, GRAVITATIONAL_CONSTANT, STANDARD_GRAVITY};
pub use numeric::{gcd, percent_error, Fraction};
pub use statistics::{regression_sums, RegressionSums};
