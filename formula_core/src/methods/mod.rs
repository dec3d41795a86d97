//! # Calculation Methods
//!
//! The dispatcher: a [`Method`] plus raw form entries in, a [`Calculation`]
//! (outputs in base units and the derivation steps) out.
//!
//! Each method follows the same pattern:
//!
//! 1. Read and validate inputs, converting measured values to base units
//! 2. Apply the closed-form formulas from [`crate::equations`]
//! 3. Record each step from the values just computed
//! 4. Reject any non-finite output
//!
//! ## Example
//!
//! ```rust
//! use formula_core::inputs::RawInputs;
//! use formula_core::methods::{compute, Method};
//!
//! let inputs = RawInputs::new().with("length", "8").with("width", "6");
//! let calc = compute(Method::RectangleDiagonal, &inputs).unwrap();
//! assert_eq!(calc.value("diagonal"), Some(10.0));
//! ```

pub mod fields;
pub mod outputs;
pub mod registry;
pub mod worksheet;

mod arithmetic;
mod atmosphere;
mod circuits;
mod geometry;
mod mechanics;
mod power;
mod sigfigs;
mod statistics;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use registry::{generate_methods_markdown, Method, MethodFamily, MethodMetadata, ALL_METHODS};

use crate::errors::CalcResult;
use crate::explain::Step;
use crate::format::{format_value, FormatSettings};
use crate::inputs::RawInputs;
use crate::units::Quantity;
use worksheet::Worksheet;

/// One computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    /// Output slot name (e.g., "area")
    pub name: String,
    pub label: String,
    pub quantity: Quantity,
    /// Value in the quantity's base unit
    pub value: f64,
    /// Base unit symbol
    pub unit: String,
    /// Exact rendering where digits matter (fractions, significant figures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl OutputValue {
    /// Value converted into `unit` for display
    pub fn value_in(&self, unit: &str) -> CalcResult<f64> {
        Ok(self.quantity.unit(unit)?.from_base(self.value))
    }

    /// Exact text if the method produced one, otherwise the formatted value
    pub fn display(&self, settings: &FormatSettings) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => format_value(self.value, settings),
        }
    }
}

/// Result of evaluating one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub method: Method,
    pub outputs: Vec<OutputValue>,
    pub steps: Vec<Step>,
}

impl Calculation {
    /// Output by slot name
    pub fn output(&self, name: &str) -> Option<&OutputValue> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Base-unit value of an output
    pub fn value(&self, name: &str) -> Option<f64> {
        self.output(name).map(|o| o.value)
    }

    /// Steps rendered as "Step N: ..." lines
    pub fn step_lines(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.to_string()).collect()
    }
}

/// Evaluate `method` with default formatting.
pub fn compute(method: Method, inputs: &RawInputs) -> CalcResult<Calculation> {
    compute_with(method, inputs, &FormatSettings::default())
}

/// Evaluate `method`, rendering step values with `settings`.
///
/// # Errors
/// Any [`CalcError`](crate::errors::CalcError) raised while reading inputs or
/// evaluating; no partial results are returned.
pub fn compute_with(method: Method, inputs: &RawInputs, settings: &FormatSettings) -> CalcResult<Calculation> {
    let span = tracing::debug_span!("compute", method = method.slug());
    let _guard = span.enter();

    let mut sheet = Worksheet::new(method, inputs, settings);
    let outcome = dispatch(method, &mut sheet).and_then(|()| sheet.finish());

    match &outcome {
        Ok(calc) => debug!(outputs = calc.outputs.len(), steps = calc.steps.len(), "calculation complete"),
        Err(e) => debug!(code = e.error_code(), error = %e, "calculation rejected"),
    }
    outcome
}

fn dispatch(method: Method, ws: &mut Worksheet<'_>) -> CalcResult<()> {
    match method {
        Method::AreaFromRadius => geometry::area_from_radius(ws),
        Method::AreaFromDiameter => geometry::area_from_diameter(ws),
        Method::AreaFromCircumference => geometry::area_from_circumference(ws),
        Method::VolumeFromRadius => geometry::volume_from_radius(ws),
        Method::VolumeFromDiameter => geometry::volume_from_diameter(ws),
        Method::RectangleDiagonal => geometry::rectangle_diagonal(ws),
        Method::SphereDensity => geometry::sphere_density(ws),

        Method::DecimalToPercent => arithmetic::decimal_to_percent(ws),
        Method::PercentToDecimal => arithmetic::percent_to_decimal(ws),
        Method::FractionToDecimal => arithmetic::fraction_to_decimal(ws),
        Method::FractionToPercent => arithmetic::fraction_to_percent(ws),
        Method::PercentToFraction => arithmetic::percent_to_fraction(ws),
        Method::DecimalToFraction => arithmetic::decimal_to_fraction(ws),
        Method::NaturalLog => arithmetic::natural_log(ws),
        Method::CommonLog => arithmetic::common_log(ws),
        Method::LogBase => arithmetic::log_base(ws),
        Method::PercentError => arithmetic::percent_error(ws),

        Method::SigFigCount => sigfigs::count(ws),
        Method::SigFigRound => sigfigs::round(ws),
        Method::SigFigSum => sigfigs::sum(ws),
        Method::SigFigProduct => sigfigs::product(ws),

        Method::LinearRegression => statistics::linear_regression(ws),

        Method::DewPoint => atmosphere::dew_point(ws),

        Method::CapacitiveReactance => circuits::capacitive_reactance(ws),
        Method::InductiveReactance => circuits::inductive_reactance(ws),
        Method::SeriesImpedance => circuits::series_impedance(ws),
        Method::ParallelImpedance => circuits::parallel_impedance(ws),
        Method::ResonantFrequency => circuits::resonant_frequency(ws),
        Method::RlcPower => circuits::rlc_power(ws),

        Method::PowerFromVoltageResistance => power::from_voltage_resistance(ws),
        Method::PowerFromVoltageCurrent => power::from_voltage_current(ws),
        Method::PowerFromCurrentResistance => power::from_current_resistance(ws),
        Method::CapacitorEsrLoss => power::capacitor_esr_loss(ws),

        Method::FrictionCoefficient => mechanics::friction_coefficient(ws),
        Method::FrictionForce => mechanics::friction_force(ws),
        Method::InclinedFriction => mechanics::inclined_friction(ws),
        Method::TorqueFromPower => mechanics::torque_from_power(ws),
        Method::TorqueFromInputPower => mechanics::torque_from_input_power(ws),
        Method::TorqueFromCurrent => mechanics::torque_from_current(ws),
        Method::TorqueFromForce => mechanics::torque_from_force(ws),
        Method::EscapeVelocity => mechanics::escape_velocity(ws),
        Method::MassFromEscapeVelocity => mechanics::mass_from_escape_velocity(ws),
    }
}
