//! Output slots produced by the calculation methods.
//!
//! Values are always stored in the quantity's base unit; front ends convert
//! with [`OutputValue::value_in`](super::OutputValue::value_in).

use serde::Serialize;

use crate::units::Quantity::{self, *};

/// A named result slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputSlot {
    pub name: &'static str,
    pub label: &'static str,
    pub quantity: Quantity,
}

impl OutputSlot {
    pub const fn new(name: &'static str, label: &'static str, quantity: Quantity) -> Self {
        Self { name, label, quantity }
    }
}

// Geometry
pub const AREA: OutputSlot = OutputSlot::new("area", "Area", Area);
pub const RADIUS: OutputSlot = OutputSlot::new("radius", "Radius", Length);
pub const VOLUME: OutputSlot = OutputSlot::new("volume", "Volume", Volume);
pub const SURFACE_AREA: OutputSlot = OutputSlot::new("surface_area", "Surface area", Area);
pub const DIAGONAL: OutputSlot = OutputSlot::new("diagonal", "Diagonal", Length);
pub const DENSITY: OutputSlot = OutputSlot::new("density", "Density", Density);
pub const MASS: OutputSlot = OutputSlot::new("mass", "Mass", Mass);

// Arithmetic
pub const PERCENT: OutputSlot = OutputSlot::new("percent", "Percent", Dimensionless);
pub const DECIMAL: OutputSlot = OutputSlot::new("decimal", "Decimal", Dimensionless);
pub const FRACTION: OutputSlot = OutputSlot::new("fraction", "Fraction", Dimensionless);
pub const LOGARITHM: OutputSlot = OutputSlot::new("logarithm", "Logarithm", Dimensionless);
pub const PERCENT_ERROR: OutputSlot = OutputSlot::new("percent_error", "Percent error", Dimensionless);
pub const ABSOLUTE_ERROR: OutputSlot = OutputSlot::new("absolute_error", "Absolute error", Dimensionless);
pub const RELATIVE_ERROR: OutputSlot = OutputSlot::new("relative_error", "Signed relative error", Dimensionless);

// Significant figures
pub const SIG_FIG_COUNT: OutputSlot = OutputSlot::new("significant_figures", "Significant figures", Dimensionless);
pub const LAST_PLACE: OutputSlot = OutputSlot::new("last_place", "Decimal place of last significant digit", Dimensionless);
pub const ROUNDED: OutputSlot = OutputSlot::new("rounded", "Rounded value", Dimensionless);
pub const SUM: OutputSlot = OutputSlot::new("sum", "Sum", Dimensionless);
pub const PRODUCT: OutputSlot = OutputSlot::new("product", "Product", Dimensionless);

// Statistics
pub const POINT_COUNT: OutputSlot = OutputSlot::new("n", "Data points", Dimensionless);
pub const SLOPE: OutputSlot = OutputSlot::new("slope", "Slope", Dimensionless);
pub const INTERCEPT: OutputSlot = OutputSlot::new("intercept", "Intercept", Dimensionless);
pub const CORRELATION: OutputSlot = OutputSlot::new("correlation", "Correlation coefficient r", Dimensionless);
pub const R_SQUARED: OutputSlot = OutputSlot::new("r_squared", "Coefficient of determination R²", Dimensionless);
pub const PREDICTED_Y: OutputSlot = OutputSlot::new("predicted_y", "Predicted y", Dimensionless);

// Atmosphere
pub const DEW_POINT: OutputSlot = OutputSlot::new("dew_point", "Dew point", Temperature);
pub const SATURATION_PRESSURE: OutputSlot =
    OutputSlot::new("saturation_vapor_pressure", "Saturation vapor pressure", Pressure);
pub const VAPOR_PRESSURE: OutputSlot = OutputSlot::new("vapor_pressure", "Actual vapor pressure", Pressure);

// Circuits and power
pub const CAPACITIVE_REACTANCE: OutputSlot =
    OutputSlot::new("capacitive_reactance", "Capacitive reactance", Resistance);
pub const INDUCTIVE_REACTANCE: OutputSlot = OutputSlot::new("inductive_reactance", "Inductive reactance", Resistance);
pub const NET_REACTANCE: OutputSlot = OutputSlot::new("net_reactance", "Net reactance", Resistance);
pub const SUSCEPTANCE: OutputSlot = OutputSlot::new("susceptance", "Net susceptance", Conductance);
pub const IMPEDANCE: OutputSlot = OutputSlot::new("impedance", "Impedance", Resistance);
pub const PHASE: OutputSlot = OutputSlot::new("phase", "Phase angle", Angle);
pub const RESONANT_FREQUENCY: OutputSlot = OutputSlot::new("resonant_frequency", "Resonant frequency", Frequency);
pub const ANGULAR_FREQUENCY: OutputSlot =
    OutputSlot::new("angular_frequency", "Angular resonant frequency", AngularVelocity);
pub const QUALITY_FACTOR: OutputSlot = OutputSlot::new("quality_factor", "Quality factor Q", Dimensionless);
pub const BANDWIDTH: OutputSlot = OutputSlot::new("bandwidth", "Bandwidth", Frequency);
pub const CURRENT: OutputSlot = OutputSlot::new("current", "Current", Current);
pub const VOLTAGE: OutputSlot = OutputSlot::new("voltage", "Voltage", Voltage);
pub const RESISTANCE: OutputSlot = OutputSlot::new("resistance", "Resistance", Resistance);
pub const POWER_FACTOR: OutputSlot = OutputSlot::new("power_factor", "Power factor", Dimensionless);
pub const POWER: OutputSlot = OutputSlot::new("power", "Power", Power);
pub const REAL_POWER: OutputSlot = OutputSlot::new("real_power", "Real power", Power);
pub const REACTIVE_POWER: OutputSlot = OutputSlot::new("reactive_power", "Reactive power (var)", Power);
pub const APPARENT_POWER: OutputSlot = OutputSlot::new("apparent_power", "Apparent power (VA)", Power);

// Mechanics
pub const FRICTION_COEFFICIENT: OutputSlot =
    OutputSlot::new("coefficient", "Coefficient of friction", Dimensionless);
pub const FRICTION_FORCE: OutputSlot = OutputSlot::new("friction_force", "Friction force", Force);
pub const NORMAL_FORCE: OutputSlot = OutputSlot::new("normal_force", "Normal force", Force);
pub const PARALLEL_FORCE: OutputSlot = OutputSlot::new("parallel_force", "Down-slope force", Force);
pub const ANGULAR_VELOCITY: OutputSlot = OutputSlot::new("angular_velocity", "Angular velocity", AngularVelocity);
pub const OUTPUT_POWER: OutputSlot = OutputSlot::new("output_power", "Shaft power", Power);
pub const TORQUE: OutputSlot = OutputSlot::new("torque", "Torque", Torque);
pub const ESCAPE_VELOCITY: OutputSlot = OutputSlot::new("escape_velocity", "Escape velocity", Velocity);
