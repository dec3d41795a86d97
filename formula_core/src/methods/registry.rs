//! # Method Registry
//!
//! Central list of every calculation method with its metadata: which inputs
//! it reads, which outputs it produces, and the formula it applies.
//!
//! ## Usage
//!
//! ```rust
//! use formula_core::methods::registry::Method;
//!
//! let method: Method = "area-from-radius".parse().unwrap();
//! let meta = method.metadata();
//! assert_eq!(meta.formula_plain, "A = πr²");
//! assert_eq!(meta.inputs[0].field.name, "radius");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::fields::{self, FieldSpec};
use super::outputs::{self as out, OutputSlot};
use crate::errors::CalcError;

// ============================================================================
// Method Families
// ============================================================================

/// Groups of related methods, used for listings and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodFamily {
    Geometry,
    Arithmetic,
    SignificantFigures,
    Statistics,
    Atmosphere,
    Circuits,
    Power,
    Mechanics,
}

impl MethodFamily {
    /// Display name for the family
    pub fn display_name(&self) -> &'static str {
        match self {
            MethodFamily::Geometry => "Geometry",
            MethodFamily::Arithmetic => "Percent, Fractions & Logarithms",
            MethodFamily::SignificantFigures => "Significant Figures",
            MethodFamily::Statistics => "Statistics",
            MethodFamily::Atmosphere => "Atmosphere",
            MethodFamily::Circuits => "AC Circuits",
            MethodFamily::Power => "Power Dissipation",
            MethodFamily::Mechanics => "Mechanics",
        }
    }

    /// Listing order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            MethodFamily::Geometry => 1,
            MethodFamily::Arithmetic => 2,
            MethodFamily::SignificantFigures => 3,
            MethodFamily::Statistics => 4,
            MethodFamily::Atmosphere => 5,
            MethodFamily::Circuits => 6,
            MethodFamily::Power => 7,
            MethodFamily::Mechanics => 8,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// An input slot as used by one method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputSlot {
    pub field: FieldSpec,
    pub required: bool,
}

impl InputSlot {
    pub const fn required(field: FieldSpec) -> Self {
        Self { field, required: true }
    }

    pub const fn optional(field: FieldSpec) -> Self {
        Self { field, required: false }
    }
}

/// Everything a front end needs to build a form for a method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodMetadata {
    /// Stable identifier (e.g., "area-from-radius")
    pub slug: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// What the method computes
    pub description: &'static str,
    /// Formula in plain text
    pub formula_plain: &'static str,
    pub family: MethodFamily,
    pub inputs: Vec<InputSlot>,
    /// Every output the method can produce, in order
    pub outputs: Vec<OutputSlot>,
}

impl MethodMetadata {
    /// Find an input slot by field name
    pub fn input(&self, name: &str) -> Option<&InputSlot> {
        self.inputs.iter().find(|slot| slot.field.name == name)
    }

    /// Find an output slot by name
    pub fn output(&self, name: &str) -> Option<&OutputSlot> {
        self.outputs.iter().find(|slot| slot.name == name)
    }
}

// ============================================================================
// Method Enum
// ============================================================================

/// Every calculation method the engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------
    AreaFromRadius,
    AreaFromDiameter,
    AreaFromCircumference,
    VolumeFromRadius,
    VolumeFromDiameter,
    RectangleDiagonal,
    SphereDensity,

    // -------------------------------------------------------------------------
    // Percent, fractions, logarithms
    // -------------------------------------------------------------------------
    DecimalToPercent,
    PercentToDecimal,
    FractionToDecimal,
    FractionToPercent,
    PercentToFraction,
    DecimalToFraction,
    NaturalLog,
    CommonLog,
    LogBase,
    PercentError,

    // -------------------------------------------------------------------------
    // Significant figures
    // -------------------------------------------------------------------------
    SigFigCount,
    SigFigRound,
    SigFigSum,
    SigFigProduct,

    // -------------------------------------------------------------------------
    // Statistics
    // -------------------------------------------------------------------------
    LinearRegression,

    // -------------------------------------------------------------------------
    // Atmosphere
    // -------------------------------------------------------------------------
    DewPoint,

    // -------------------------------------------------------------------------
    // AC circuits
    // -------------------------------------------------------------------------
    CapacitiveReactance,
    InductiveReactance,
    SeriesImpedance,
    ParallelImpedance,
    ResonantFrequency,
    RlcPower,

    // -------------------------------------------------------------------------
    // Power dissipation
    // -------------------------------------------------------------------------
    PowerFromVoltageResistance,
    PowerFromVoltageCurrent,
    PowerFromCurrentResistance,
    CapacitorEsrLoss,

    // -------------------------------------------------------------------------
    // Mechanics
    // -------------------------------------------------------------------------
    FrictionCoefficient,
    FrictionForce,
    InclinedFriction,
    TorqueFromPower,
    TorqueFromInputPower,
    TorqueFromCurrent,
    TorqueFromForce,
    EscapeVelocity,
    MassFromEscapeVelocity,
}

/// All methods in listing order
pub static ALL_METHODS: &[Method] = &[
    Method::AreaFromRadius,
    Method::AreaFromDiameter,
    Method::AreaFromCircumference,
    Method::VolumeFromRadius,
    Method::VolumeFromDiameter,
    Method::RectangleDiagonal,
    Method::SphereDensity,
    Method::DecimalToPercent,
    Method::PercentToDecimal,
    Method::FractionToDecimal,
    Method::FractionToPercent,
    Method::PercentToFraction,
    Method::DecimalToFraction,
    Method::NaturalLog,
    Method::CommonLog,
    Method::LogBase,
    Method::PercentError,
    Method::SigFigCount,
    Method::SigFigRound,
    Method::SigFigSum,
    Method::SigFigProduct,
    Method::LinearRegression,
    Method::DewPoint,
    Method::CapacitiveReactance,
    Method::InductiveReactance,
    Method::SeriesImpedance,
    Method::ParallelImpedance,
    Method::ResonantFrequency,
    Method::RlcPower,
    Method::PowerFromVoltageResistance,
    Method::PowerFromVoltageCurrent,
    Method::PowerFromCurrentResistance,
    Method::CapacitorEsrLoss,
    Method::FrictionCoefficient,
    Method::FrictionForce,
    Method::InclinedFriction,
    Method::TorqueFromPower,
    Method::TorqueFromInputPower,
    Method::TorqueFromCurrent,
    Method::TorqueFromForce,
    Method::EscapeVelocity,
    Method::MassFromEscapeVelocity,
];

static SLUG_INDEX: Lazy<HashMap<&'static str, Method>> =
    Lazy::new(|| ALL_METHODS.iter().map(|m| (m.slug(), *m)).collect());

fn req(field: FieldSpec) -> InputSlot {
    InputSlot::required(field)
}

fn opt(field: FieldSpec) -> InputSlot {
    InputSlot::optional(field)
}

impl Method {
    /// Stable kebab-case identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Method::AreaFromRadius => "area-from-radius",
            Method::AreaFromDiameter => "area-from-diameter",
            Method::AreaFromCircumference => "area-from-circumference",
            Method::VolumeFromRadius => "volume-from-radius",
            Method::VolumeFromDiameter => "volume-from-diameter",
            Method::RectangleDiagonal => "rectangle-diagonal",
            Method::SphereDensity => "sphere-density",
            Method::DecimalToPercent => "decimal-to-percent",
            Method::PercentToDecimal => "percent-to-decimal",
            Method::FractionToDecimal => "fraction-to-decimal",
            Method::FractionToPercent => "fraction-to-percent",
            Method::PercentToFraction => "percent-to-fraction",
            Method::DecimalToFraction => "decimal-to-fraction",
            Method::NaturalLog => "natural-log",
            Method::CommonLog => "common-log",
            Method::LogBase => "log-base",
            Method::PercentError => "percent-error",
            Method::SigFigCount => "sig-fig-count",
            Method::SigFigRound => "sig-fig-round",
            Method::SigFigSum => "sig-fig-sum",
            Method::SigFigProduct => "sig-fig-product",
            Method::LinearRegression => "linear-regression",
            Method::DewPoint => "dew-point",
            Method::CapacitiveReactance => "capacitive-reactance",
            Method::InductiveReactance => "inductive-reactance",
            Method::SeriesImpedance => "series-impedance",
            Method::ParallelImpedance => "parallel-impedance",
            Method::ResonantFrequency => "resonant-frequency",
            Method::RlcPower => "rlc-power",
            Method::PowerFromVoltageResistance => "power-from-voltage-resistance",
            Method::PowerFromVoltageCurrent => "power-from-voltage-current",
            Method::PowerFromCurrentResistance => "power-from-current-resistance",
            Method::CapacitorEsrLoss => "capacitor-esr-loss",
            Method::FrictionCoefficient => "friction-coefficient",
            Method::FrictionForce => "friction-force",
            Method::InclinedFriction => "inclined-friction",
            Method::TorqueFromPower => "torque-from-power",
            Method::TorqueFromInputPower => "torque-from-input-power",
            Method::TorqueFromCurrent => "torque-from-current",
            Method::TorqueFromForce => "torque-from-force",
            Method::EscapeVelocity => "escape-velocity",
            Method::MassFromEscapeVelocity => "mass-from-escape-velocity",
        }
    }

    /// Family this method is listed under
    pub fn family(&self) -> MethodFamily {
        match self {
            Method::AreaFromRadius
            | Method::AreaFromDiameter
            | Method::AreaFromCircumference
            | Method::VolumeFromRadius
            | Method::VolumeFromDiameter
            | Method::RectangleDiagonal
            | Method::SphereDensity => MethodFamily::Geometry,

            Method::DecimalToPercent
            | Method::PercentToDecimal
            | Method::FractionToDecimal
            | Method::FractionToPercent
            | Method::PercentToFraction
            | Method::DecimalToFraction
            | Method::NaturalLog
            | Method::CommonLog
            | Method::LogBase
            | Method::PercentError => MethodFamily::Arithmetic,

            Method::SigFigCount | Method::SigFigRound | Method::SigFigSum | Method::SigFigProduct => {
                MethodFamily::SignificantFigures
            }

            Method::LinearRegression => MethodFamily::Statistics,

            Method::DewPoint => MethodFamily::Atmosphere,

            Method::CapacitiveReactance
            | Method::InductiveReactance
            | Method::SeriesImpedance
            | Method::ParallelImpedance
            | Method::ResonantFrequency
            | Method::RlcPower => MethodFamily::Circuits,

            Method::PowerFromVoltageResistance
            | Method::PowerFromVoltageCurrent
            | Method::PowerFromCurrentResistance
            | Method::CapacitorEsrLoss => MethodFamily::Power,

            Method::FrictionCoefficient
            | Method::FrictionForce
            | Method::InclinedFriction
            | Method::TorqueFromPower
            | Method::TorqueFromInputPower
            | Method::TorqueFromCurrent
            | Method::TorqueFromForce
            | Method::EscapeVelocity
            | Method::MassFromEscapeVelocity => MethodFamily::Mechanics,
        }
    }

    /// Get the full metadata for this method
    pub fn metadata(&self) -> MethodMetadata {
        let (name, description, formula_plain, inputs, outputs) = match self {
            // Geometry
            Method::AreaFromRadius => (
                "Circle Area from Radius",
                "Area of a circle given its radius",
                "A = πr²",
                vec![req(fields::RADIUS)],
                vec![out::AREA, out::RADIUS],
            ),
            Method::AreaFromDiameter => (
                "Circle Area from Diameter",
                "Area of a circle given its diameter",
                "A = πd²/4",
                vec![req(fields::DIAMETER)],
                vec![out::AREA, out::RADIUS],
            ),
            Method::AreaFromCircumference => (
                "Circle Area from Circumference",
                "Area of a circle given its circumference",
                "A = C²/(4π)",
                vec![req(fields::CIRCUMFERENCE)],
                vec![out::AREA, out::RADIUS],
            ),
            Method::VolumeFromRadius => (
                "Sphere Volume from Radius",
                "Volume and surface area of a sphere given its radius",
                "V = (4/3)πr³",
                vec![req(fields::RADIUS)],
                vec![out::VOLUME, out::SURFACE_AREA],
            ),
            Method::VolumeFromDiameter => (
                "Sphere Volume from Diameter",
                "Volume and surface area of a sphere given its diameter",
                "V = πd³/6",
                vec![req(fields::DIAMETER)],
                vec![out::VOLUME, out::SURFACE_AREA],
            ),
            Method::RectangleDiagonal => (
                "Rectangle Diagonal",
                "Diagonal of a rectangle from its sides",
                "d = √(l² + w²)",
                vec![req(fields::LENGTH), req(fields::WIDTH)],
                vec![out::DIAGONAL],
            ),
            Method::SphereDensity => (
                "Sphere Density",
                "Any two of density, mass and radius of a sphere give the third",
                "ρ = m/V, V = (4/3)πr³",
                vec![opt(fields::DENSITY), opt(fields::MASS), opt(fields::RADIUS)],
                vec![out::DENSITY, out::MASS, out::RADIUS, out::VOLUME],
            ),

            // Arithmetic
            Method::DecimalToPercent => (
                "Decimal to Percent",
                "Express a decimal as a percentage",
                "p = x × 100",
                vec![req(fields::DECIMAL)],
                vec![out::PERCENT],
            ),
            Method::PercentToDecimal => (
                "Percent to Decimal",
                "Express a percentage as a decimal",
                "x = p / 100",
                vec![req(fields::PERCENT)],
                vec![out::DECIMAL],
            ),
            Method::FractionToDecimal => (
                "Fraction to Decimal",
                "Divide numerator by denominator",
                "x = n / d",
                vec![req(fields::NUMERATOR), req(fields::DENOMINATOR)],
                vec![out::DECIMAL],
            ),
            Method::FractionToPercent => (
                "Fraction to Percent",
                "Express a fraction as a percentage",
                "p = n / d × 100",
                vec![req(fields::NUMERATOR), req(fields::DENOMINATOR)],
                vec![out::DECIMAL, out::PERCENT],
            ),
            Method::PercentToFraction => (
                "Percent to Fraction",
                "Exact fraction in lowest terms for a percentage",
                "p/100 reduced by gcd",
                vec![req(fields::PERCENT)],
                vec![out::FRACTION, out::DECIMAL],
            ),
            Method::DecimalToFraction => (
                "Decimal to Fraction",
                "Exact fraction in lowest terms for a terminating decimal",
                "x = digits / 10^k reduced by gcd",
                vec![req(fields::DECIMAL)],
                vec![out::FRACTION],
            ),
            Method::NaturalLog => (
                "Natural Logarithm",
                "Logarithm base e",
                "ln(x)",
                vec![req(fields::NUMBER)],
                vec![out::LOGARITHM],
            ),
            Method::CommonLog => (
                "Common Logarithm",
                "Logarithm base 10",
                "log10(x)",
                vec![req(fields::NUMBER)],
                vec![out::LOGARITHM],
            ),
            Method::LogBase => (
                "Logarithm with Custom Base",
                "Logarithm in any positive base other than 1",
                "log_b(x) = ln(x) / ln(b)",
                vec![req(fields::NUMBER), req(fields::BASE)],
                vec![out::LOGARITHM],
            ),
            Method::PercentError => (
                "Percent Error",
                "Relative deviation of a measurement from the true value",
                "δ = |measured − true| / |true| × 100",
                vec![req(fields::MEASURED), req(fields::TRUE_VALUE)],
                vec![out::PERCENT_ERROR, out::ABSOLUTE_ERROR, out::RELATIVE_ERROR],
            ),

            // Significant figures
            Method::SigFigCount => (
                "Count Significant Figures",
                "Significant figures of a number as written",
                "non-zero digits, captive zeros, trailing zeros after a decimal point",
                vec![req(fields::SIG_VALUE)],
                vec![out::SIG_FIG_COUNT, out::LAST_PLACE],
            ),
            Method::SigFigRound => (
                "Round to Significant Figures",
                "Round a number to N significant figures",
                "round(x, N − 1 − ⌊log10|x|⌋)",
                vec![req(fields::SIG_VALUE), req(fields::SIG_FIGURES)],
                vec![out::ROUNDED],
            ),
            Method::SigFigSum => (
                "Significant Figures in Addition",
                "Sum rounded to the least precise decimal place",
                "Σx rounded to min(decimal place)",
                vec![req(fields::OPERANDS)],
                vec![out::SUM, out::LAST_PLACE],
            ),
            Method::SigFigProduct => (
                "Significant Figures in Multiplication",
                "Product rounded to the fewest significant figures",
                "Πx rounded to min(significant figures)",
                vec![req(fields::OPERANDS)],
                vec![out::PRODUCT, out::SIG_FIG_COUNT],
            ),

            // Statistics
            Method::LinearRegression => (
                "Least-Squares Linear Regression",
                "Best-fit line y = mx + b with correlation",
                "m = Sxy/Sxx, b = ȳ − m·x̄, r = Sxy/√(Sxx·Syy)",
                vec![req(fields::X_VALUES), req(fields::Y_VALUES), opt(fields::PREDICT_X)],
                vec![
                    out::POINT_COUNT,
                    out::SLOPE,
                    out::INTERCEPT,
                    out::CORRELATION,
                    out::R_SQUARED,
                    out::PREDICTED_Y,
                ],
            ),

            // Atmosphere
            Method::DewPoint => (
                "Dew Point",
                "Dew point from temperature and relative humidity (Magnus formula)",
                "Td = b·γ/(a − γ), γ = ln(RH/100 · es/6.112)",
                vec![req(fields::TEMPERATURE), req(fields::HUMIDITY)],
                vec![out::DEW_POINT, out::SATURATION_PRESSURE, out::VAPOR_PRESSURE],
            ),

            // Circuits
            Method::CapacitiveReactance => (
                "Capacitive Reactance",
                "Opposition of a capacitor to alternating current",
                "XC = 1/(2πfC)",
                vec![req(fields::FREQUENCY), req(fields::CAPACITANCE)],
                vec![out::CAPACITIVE_REACTANCE],
            ),
            Method::InductiveReactance => (
                "Inductive Reactance",
                "Opposition of an inductor to alternating current",
                "XL = 2πfL",
                vec![req(fields::FREQUENCY), req(fields::INDUCTANCE)],
                vec![out::INDUCTIVE_REACTANCE],
            ),
            Method::SeriesImpedance => (
                "Series RLC Impedance",
                "Impedance magnitude and phase of a series RLC circuit",
                "|Z| = √(R² + (XL − XC)²), φ = atan2(XL − XC, R)",
                vec![
                    req(fields::RESISTANCE),
                    req(fields::INDUCTANCE),
                    req(fields::CAPACITANCE),
                    req(fields::FREQUENCY),
                ],
                vec![
                    out::INDUCTIVE_REACTANCE,
                    out::CAPACITIVE_REACTANCE,
                    out::NET_REACTANCE,
                    out::IMPEDANCE,
                    out::PHASE,
                ],
            ),
            Method::ParallelImpedance => (
                "Parallel RLC Impedance",
                "Impedance magnitude and phase of a parallel RLC circuit",
                "|Z| = 1/√(G² + (ωC − 1/(ωL))²), φ = −atan2(B, G)",
                vec![
                    req(fields::RESISTANCE),
                    req(fields::INDUCTANCE),
                    req(fields::CAPACITANCE),
                    req(fields::FREQUENCY),
                ],
                vec![
                    out::INDUCTIVE_REACTANCE,
                    out::CAPACITIVE_REACTANCE,
                    out::SUSCEPTANCE,
                    out::IMPEDANCE,
                    out::PHASE,
                ],
            ),
            Method::ResonantFrequency => (
                "RLC Resonant Frequency",
                "Resonance, quality factor and bandwidth of a series RLC circuit",
                "f₀ = 1/(2π√(LC)), Q = (1/R)√(L/C), BW = f₀/Q",
                vec![req(fields::INDUCTANCE), req(fields::CAPACITANCE), opt(fields::RESISTANCE)],
                vec![
                    out::RESONANT_FREQUENCY,
                    out::ANGULAR_FREQUENCY,
                    out::INDUCTIVE_REACTANCE,
                    out::CAPACITIVE_REACTANCE,
                    out::QUALITY_FACTOR,
                    out::BANDWIDTH,
                    out::IMPEDANCE,
                ],
            ),
            Method::RlcPower => (
                "Series RLC Power",
                "Current, power factor and power of a series RLC circuit",
                "I = V/|Z|, PF = R/|Z|, P = I²R, Q = I²X, S = VI",
                vec![
                    req(fields::VOLTAGE),
                    req(fields::RESISTANCE),
                    req(fields::INDUCTANCE),
                    req(fields::CAPACITANCE),
                    req(fields::FREQUENCY),
                ],
                vec![
                    out::IMPEDANCE,
                    out::CURRENT,
                    out::POWER_FACTOR,
                    out::REAL_POWER,
                    out::REACTIVE_POWER,
                    out::APPARENT_POWER,
                ],
            ),

            // Power
            Method::PowerFromVoltageResistance => (
                "Power from Voltage and Resistance",
                "Power dissipated in a resistor",
                "P = V²/R",
                vec![req(fields::VOLTAGE), req(fields::RESISTANCE)],
                vec![out::POWER, out::CURRENT],
            ),
            Method::PowerFromVoltageCurrent => (
                "Power from Voltage and Current",
                "Electrical power delivered to a load",
                "P = V·I",
                vec![req(fields::VOLTAGE), req(fields::CURRENT)],
                vec![out::POWER, out::RESISTANCE],
            ),
            Method::PowerFromCurrentResistance => (
                "Power from Current and Resistance",
                "Joule heating in a resistor",
                "P = I²R",
                vec![req(fields::CURRENT), req(fields::RESISTANCE)],
                vec![out::POWER, out::VOLTAGE],
            ),
            Method::CapacitorEsrLoss => (
                "Capacitor ESR Loss",
                "Power lost in a capacitor's equivalent series resistance",
                "P = I²·ESR, I = V/XC",
                vec![
                    req(fields::VOLTAGE),
                    req(fields::FREQUENCY),
                    req(fields::CAPACITANCE),
                    req(fields::ESR),
                ],
                vec![out::CAPACITIVE_REACTANCE, out::CURRENT, out::POWER],
            ),

            // Mechanics
            Method::FrictionCoefficient => (
                "Coefficient of Friction",
                "Friction coefficient from friction and normal force",
                "μ = F/N",
                vec![req(fields::FRICTION_FORCE), req(fields::NORMAL_FORCE)],
                vec![out::FRICTION_COEFFICIENT],
            ),
            Method::FrictionForce => (
                "Friction Force",
                "Friction force from coefficient and normal force",
                "F = μN",
                vec![req(fields::COEFFICIENT), req(fields::NORMAL_FORCE)],
                vec![out::FRICTION_FORCE],
            ),
            Method::InclinedFriction => (
                "Friction on an Incline",
                "Normal force and friction for a mass resting on an inclined surface",
                "N = mg·cos θ, F = μN",
                vec![
                    req(fields::MASS),
                    req(fields::ANGLE),
                    opt(fields::GRAVITY),
                    opt(fields::COEFFICIENT),
                ],
                vec![out::NORMAL_FORCE, out::PARALLEL_FORCE, out::FRICTION_FORCE],
            ),
            Method::TorqueFromPower => (
                "Motor Torque from Power",
                "Shaft torque from output power and speed",
                "τ = P/ω, ω = 2π·rpm/60",
                vec![req(fields::POWER), req(fields::SPEED)],
                vec![out::ANGULAR_VELOCITY, out::TORQUE],
            ),
            Method::TorqueFromInputPower => (
                "Motor Torque from Input Power",
                "Shaft torque from electrical input power, efficiency and speed",
                "τ = (Pin·η)/ω",
                vec![req(fields::INPUT_POWER), req(fields::EFFICIENCY), req(fields::SPEED)],
                vec![out::OUTPUT_POWER, out::ANGULAR_VELOCITY, out::TORQUE],
            ),
            Method::TorqueFromCurrent => (
                "Motor Torque from Current",
                "Torque from the motor torque constant and winding current",
                "τ = Kt·I",
                vec![req(fields::TORQUE_CONSTANT), req(fields::CURRENT)],
                vec![out::TORQUE],
            ),
            Method::TorqueFromForce => (
                "Torque from Force",
                "Torque of a force applied at a lever arm",
                "τ = F·r",
                vec![req(fields::FORCE), req(fields::LEVER_ARM)],
                vec![out::TORQUE],
            ),
            Method::EscapeVelocity => (
                "Escape Velocity",
                "Speed needed to escape a body's gravity from its surface",
                "v = √(2GM/r)",
                vec![req(fields::MASS), req(fields::RADIUS)],
                vec![out::ESCAPE_VELOCITY],
            ),
            Method::MassFromEscapeVelocity => (
                "Mass from Escape Velocity",
                "Body mass implied by an escape velocity at a radius",
                "M = v²r/(2G)",
                vec![req(fields::VELOCITY), req(fields::RADIUS)],
                vec![out::MASS],
            ),
        };

        MethodMetadata {
            slug: self.slug(),
            name,
            description,
            formula_plain,
            family: self.family(),
            inputs,
            outputs,
        }
    }

    /// Get all families in sorted order
    pub fn all_families() -> Vec<MethodFamily> {
        let mut families: Vec<MethodFamily> = ALL_METHODS.iter().map(|m| m.family()).collect();
        families.sort_by_key(|f| f.sort_order());
        families.dedup();
        families
    }

    /// Get all methods in a specific family
    pub fn in_family(family: MethodFamily) -> Vec<Method> {
        ALL_METHODS.iter().copied().filter(|m| m.family() == family).collect()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Method {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SLUG_INDEX
            .get(s.trim())
            .copied()
            .ok_or_else(|| CalcError::unknown_method(s.trim()))
    }
}

// ============================================================================
// Markdown Generation for METHODS.md
// ============================================================================

/// Generate a complete METHODS.md reference for documentation.
///
/// ```rust
/// use formula_core::methods::registry::generate_methods_markdown;
///
/// let markdown = generate_methods_markdown();
/// assert!(markdown.contains("## Geometry"));
/// assert!(markdown.contains("`area-from-radius`"));
/// ```
pub fn generate_methods_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    output.push_str(
        r#"# Calculation Methods Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-methods`

Every method takes named text inputs (with an optional unit per measured
field) and returns values in SI base units plus a step-by-step derivation.

---

"#,
    );

    let families = Method::all_families();
    for family in &families {
        output.push_str(&format!("## {}\n\n", family.display_name()));

        for method in Method::in_family(*family) {
            let meta = method.metadata();
            output.push_str(&format!("### {} (`{}`)\n\n", meta.name, meta.slug));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            output.push_str("**Inputs:**\n\n");
            output.push_str("| Field | Description | Kind | Default unit | Required |\n");
            output.push_str("|-------|-------------|------|--------------|----------|\n");
            for slot in &meta.inputs {
                let (kind, unit) = match slot.field.kind {
                    fields::FieldKind::Measure { quantity, default_unit } => (quantity.display_name(), default_unit),
                    fields::FieldKind::Number => ("number", "-"),
                    fields::FieldKind::Text => ("number (as written)", "-"),
                    fields::FieldKind::List => ("list of numbers", "-"),
                };
                output.push_str(&format!(
                    "| `{}` | {} | {} | {} | {} |\n",
                    slot.field.name,
                    slot.field.label,
                    kind,
                    unit,
                    if slot.required { "yes" } else { "no" }
                ));
            }
            output.push('\n');

            output.push_str("**Outputs:**\n\n");
            output.push_str("| Name | Description | Base unit |\n");
            output.push_str("|------|-------------|-----------|\n");
            for slot in &meta.outputs {
                output.push_str(&format!(
                    "| `{}` | {} | {} |\n",
                    slot.name,
                    slot.label,
                    slot.quantity.base_unit().symbol
                ));
            }
            output.push_str("\n---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Methods:** {}\n- **Families:** {}\n",
        ALL_METHODS.len(),
        families.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_methods_have_metadata() {
        assert_eq!(ALL_METHODS.len(), 42);

        for method in ALL_METHODS {
            let meta = method.metadata();
            assert!(!meta.name.is_empty(), "{:?} has no name", method);
            assert!(!meta.formula_plain.is_empty(), "{:?} has no formula", method);
            assert!(!meta.inputs.is_empty(), "{:?} has no inputs", method);
            assert!(!meta.outputs.is_empty(), "{:?} has no outputs", method);
        }

        assert_eq!(Method::AreaFromDiameter.metadata().formula_plain, "A = πd²/4");
        assert!(Method::DewPoint.metadata().formula_plain.contains("a − γ"));
    }

    #[test]
    fn test_slug_matches_serde_name() {
        for method in ALL_METHODS {
            let json = serde_json::to_string(method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.slug()));
            let back: Method = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *method);
        }
    }

    #[test]
    fn test_parse_slug() {
        assert_eq!("dew-point".parse::<Method>().unwrap(), Method::DewPoint);
        assert_eq!(" log-base ".parse::<Method>().unwrap(), Method::LogBase);
        let err = "area-of-square".parse::<Method>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_METHOD");
    }

    #[test]
    fn test_unique_slot_names_per_method() {
        for method in ALL_METHODS {
            let meta = method.metadata();
            let mut names: Vec<_> = meta.inputs.iter().map(|s| s.field.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), meta.inputs.len(), "{:?} repeats an input", method);

            let mut outs: Vec<_> = meta.outputs.iter().map(|s| s.name).collect();
            outs.sort();
            outs.dedup();
            assert_eq!(outs.len(), meta.outputs.len(), "{:?} repeats an output", method);
        }
    }

    #[test]
    fn test_families_sorted() {
        let families = Method::all_families();
        assert_eq!(families.len(), 8);
        let orders: Vec<u8> = families.iter().map(|f| f.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        assert_eq!(Method::in_family(MethodFamily::SignificantFigures).len(), 4);
    }

    #[test]
    fn test_markdown_lists_every_method() {
        let md = generate_methods_markdown();
        for method in ALL_METHODS {
            assert!(md.contains(&format!("`{}`", method.slug())), "{} missing", method);
        }
        assert!(md.contains("**Total Methods:** 42"));
    }
}
