//! Input slots shared by the calculation methods.
//!
//! A slot's name is the key a form uses in [`RawInputs`](crate::inputs::RawInputs).
//! Measure slots carry the unit assumed when the form sends none.

use serde::Serialize;

use crate::units::Quantity;

/// How an entered value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Physical value converted through the unit registry
    Measure {
        quantity: Quantity,
        default_unit: &'static str,
    },
    /// Plain number, no unit
    Number,
    /// Number whose written digits matter (kept as text)
    Text,
    /// Several numbers separated by commas, semicolons or whitespace
    List,
}

/// A named input slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn measure(name: &'static str, label: &'static str, quantity: Quantity, default_unit: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Measure { quantity, default_unit },
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn list(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::List,
        }
    }

    /// Quantity of a measure slot
    pub fn quantity(&self) -> Option<Quantity> {
        match self.kind {
            FieldKind::Measure { quantity, .. } => Some(quantity),
            _ => None,
        }
    }
}

// Geometry
pub const RADIUS: FieldSpec = FieldSpec::measure("radius", "Radius", Quantity::Length, "m");
pub const DIAMETER: FieldSpec = FieldSpec::measure("diameter", "Diameter", Quantity::Length, "m");
pub const CIRCUMFERENCE: FieldSpec = FieldSpec::measure("circumference", "Circumference", Quantity::Length, "m");
pub const LENGTH: FieldSpec = FieldSpec::measure("length", "Length", Quantity::Length, "m");
pub const WIDTH: FieldSpec = FieldSpec::measure("width", "Width", Quantity::Length, "m");
pub const DENSITY: FieldSpec = FieldSpec::measure("density", "Density", Quantity::Density, "kg/m³");
pub const MASS: FieldSpec = FieldSpec::measure("mass", "Mass", Quantity::Mass, "kg");

// Arithmetic
pub const DECIMAL: FieldSpec = FieldSpec::number("decimal", "Decimal");
pub const PERCENT: FieldSpec = FieldSpec::number("percent", "Percent");
pub const NUMERATOR: FieldSpec = FieldSpec::number("numerator", "Numerator");
pub const DENOMINATOR: FieldSpec = FieldSpec::number("denominator", "Denominator");
pub const NUMBER: FieldSpec = FieldSpec::number("number", "Number");
pub const BASE: FieldSpec = FieldSpec::number("base", "Base");
pub const MEASURED: FieldSpec = FieldSpec::number("measured", "Measured value");
pub const TRUE_VALUE: FieldSpec = FieldSpec::number("true_value", "True value");

// Significant figures
pub const SIG_VALUE: FieldSpec = FieldSpec::text("value", "Value");
pub const SIG_FIGURES: FieldSpec = FieldSpec::number("figures", "Significant figures");
pub const OPERANDS: FieldSpec = FieldSpec::list("values", "Values");

// Statistics
pub const X_VALUES: FieldSpec = FieldSpec::list("x_values", "X values");
pub const Y_VALUES: FieldSpec = FieldSpec::list("y_values", "Y values");
pub const PREDICT_X: FieldSpec = FieldSpec::number("predict_x", "Predict at x");

// Atmosphere
pub const TEMPERATURE: FieldSpec = FieldSpec::measure("temperature", "Temperature", Quantity::Temperature, "°C");
pub const HUMIDITY: FieldSpec = FieldSpec::number("relative_humidity", "Relative humidity (%)");

// Circuits
pub const FREQUENCY: FieldSpec = FieldSpec::measure("frequency", "Frequency", Quantity::Frequency, "Hz");
pub const CAPACITANCE: FieldSpec = FieldSpec::measure("capacitance", "Capacitance", Quantity::Capacitance, "µF");
pub const INDUCTANCE: FieldSpec = FieldSpec::measure("inductance", "Inductance", Quantity::Inductance, "mH");
pub const RESISTANCE: FieldSpec = FieldSpec::measure("resistance", "Resistance", Quantity::Resistance, "Ω");
pub const VOLTAGE: FieldSpec = FieldSpec::measure("voltage", "Voltage", Quantity::Voltage, "V");
pub const CURRENT: FieldSpec = FieldSpec::measure("current", "Current", Quantity::Current, "A");
pub const ESR: FieldSpec = FieldSpec::measure("esr", "Equivalent series resistance", Quantity::Resistance, "mΩ");

// Mechanics
pub const FRICTION_FORCE: FieldSpec = FieldSpec::measure("friction_force", "Friction force", Quantity::Force, "N");
pub const NORMAL_FORCE: FieldSpec = FieldSpec::measure("normal_force", "Normal force", Quantity::Force, "N");
pub const COEFFICIENT: FieldSpec = FieldSpec::number("coefficient", "Coefficient of friction");
pub const GRAVITY: FieldSpec = FieldSpec::measure("gravity", "Gravitational acceleration", Quantity::Acceleration, "m/s²");
pub const ANGLE: FieldSpec = FieldSpec::measure("angle", "Incline angle", Quantity::Angle, "°");
pub const POWER: FieldSpec = FieldSpec::measure("power", "Power", Quantity::Power, "W");
pub const INPUT_POWER: FieldSpec = FieldSpec::measure("input_power", "Input power", Quantity::Power, "W");
pub const SPEED: FieldSpec = FieldSpec::measure("speed", "Rotational speed", Quantity::AngularVelocity, "rpm");
pub const EFFICIENCY: FieldSpec = FieldSpec::number("efficiency", "Efficiency (%)");
pub const TORQUE_CONSTANT: FieldSpec =
    FieldSpec::measure("torque_constant", "Torque constant", Quantity::TorqueConstant, "N·m/A");
pub const FORCE: FieldSpec = FieldSpec::measure("force", "Force", Quantity::Force, "N");
pub const LEVER_ARM: FieldSpec = FieldSpec::measure("lever_arm", "Lever arm", Quantity::Length, "m");
pub const VELOCITY: FieldSpec = FieldSpec::measure("velocity", "Escape velocity", Quantity::Velocity, "m/s");
