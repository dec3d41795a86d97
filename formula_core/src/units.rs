//! # Unit Registry
//!
//! Declarative conversion tables for every physical quantity the calculators
//! accept. Each [`Quantity`] owns a fixed slice of [`Unit`]s; the first entry
//! of every slice is the quantity's base unit (SI, or Celsius for
//! temperature).
//!
//! ## Conversion Kinds
//!
//! - [`Conversion::Linear`]: `base = value × factor`
//! - [`Conversion::Affine`]: `base = (value + offset) × scale`, used only for
//!   temperature, which pivots through Celsius
//!
//! Unknown unit symbols are rejected with [`CalcError::UnknownUnit`]; there is
//! no identity fallback.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::units::{to_base, from_base, Quantity};
//!
//! let meters = to_base(Quantity::Length, "cm", 250.0).unwrap();
//! assert!((meters - 2.5).abs() < 1e-12);
//!
//! let fahrenheit = from_base(Quantity::Temperature, "°F", 100.0).unwrap();
//! assert!((fahrenheit - 212.0).abs() < 1e-9);
//!
//! assert!(to_base(Quantity::Mass, "furlong", 1.0).is_err());
//! ```

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion Rules
// ============================================================================

/// Rule mapping a value in some unit onto its quantity's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// Pure scale factor relative to the base unit
    Linear { factor: f64 },
    /// Scale plus offset, `base = (value + offset) × scale`
    Affine { scale: f64, offset: f64 },
}

impl Conversion {
    /// Convert a value in this unit to the base unit
    #[inline]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { scale, offset } => (value + offset) * scale,
        }
    }

    /// Convert a base-unit value into this unit
    #[inline]
    pub fn from_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { scale, offset } => value / scale - offset,
        }
    }
}

// ============================================================================
// Unit Definition
// ============================================================================

/// A unit belonging to exactly one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Display symbol (e.g., "m", "µF", "°C")
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Other spellings accepted on input (ASCII forms, words)
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// Rule to and from the base unit
    pub conversion: Conversion,
}

impl Unit {
    pub const fn linear(
        symbol: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        factor: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            aliases,
            conversion: Conversion::Linear { factor },
        }
    }

    pub const fn affine(
        symbol: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            aliases,
            conversion: Conversion::Affine { scale, offset },
        }
    }

    /// Whether `text` names this unit (symbol or alias, exact match)
    pub fn matches(&self, text: &str) -> bool {
        self.symbol == text || self.aliases.contains(&text)
    }

    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        self.conversion.from_base(value)
    }
}

// ============================================================================
// Unit Tables
// ============================================================================

static LENGTH_UNITS: &[Unit] = &[
    Unit::linear("m", "meter", &["meter", "meters"], 1.0),
    Unit::linear("km", "kilometer", &["kilometer", "kilometers"], 1e3),
    Unit::linear("cm", "centimeter", &["centimeter", "centimeters"], 1e-2),
    Unit::linear("mm", "millimeter", &["millimeter", "millimeters"], 1e-3),
    Unit::linear("µm", "micrometer", &["um", "μm", "micron"], 1e-6),
    Unit::linear("nm", "nanometer", &["nanometer"], 1e-9),
    Unit::linear("in", "inch", &["inch", "inches", "\""], 0.0254),
    Unit::linear("ft", "foot", &["foot", "feet", "'"], 0.3048),
    Unit::linear("yd", "yard", &["yard", "yards"], 0.9144),
    Unit::linear("mi", "mile", &["mile", "miles"], 1609.344),
];

static AREA_UNITS: &[Unit] = &[
    Unit::linear("m²", "square meter", &["m2", "m^2", "sq m"], 1.0),
    Unit::linear("km²", "square kilometer", &["km2", "km^2"], 1e6),
    Unit::linear("cm²", "square centimeter", &["cm2", "cm^2"], 1e-4),
    Unit::linear("mm²", "square millimeter", &["mm2", "mm^2"], 1e-6),
    Unit::linear("in²", "square inch", &["in2", "in^2", "sq in"], 6.4516e-4),
    Unit::linear("ft²", "square foot", &["ft2", "ft^2", "sq ft"], 0.09290304),
    Unit::linear("yd²", "square yard", &["yd2", "yd^2"], 0.83612736),
    Unit::linear("ha", "hectare", &["hectare"], 1e4),
    Unit::linear("ac", "acre", &["acre"], 4046.8564224),
];

static VOLUME_UNITS: &[Unit] = &[
    Unit::linear("m³", "cubic meter", &["m3", "m^3"], 1.0),
    Unit::linear("cm³", "cubic centimeter", &["cm3", "cm^3", "cc"], 1e-6),
    Unit::linear("mm³", "cubic millimeter", &["mm3", "mm^3"], 1e-9),
    Unit::linear("L", "liter", &["l", "liter", "litre"], 1e-3),
    Unit::linear("mL", "milliliter", &["ml", "milliliter"], 1e-6),
    Unit::linear("in³", "cubic inch", &["in3", "in^3"], 1.6387064e-5),
    Unit::linear("ft³", "cubic foot", &["ft3", "ft^3"], 0.028316846592),
    Unit::linear("gal", "US gallon", &["gallon"], 3.785411784e-3),
];

static MASS_UNITS: &[Unit] = &[
    Unit::linear("kg", "kilogram", &["kilogram", "kilograms"], 1.0),
    Unit::linear("g", "gram", &["gram", "grams"], 1e-3),
    Unit::linear("mg", "milligram", &["milligram"], 1e-6),
    Unit::linear("t", "metric ton", &["tonne"], 1e3),
    Unit::linear("lb", "pound", &["lbs", "pound", "pounds"], 0.45359237),
    Unit::linear("oz", "ounce", &["ounce", "ounces"], 0.028349523125),
    Unit::linear("M⊕", "Earth mass", &["earth"], 5.9722e24),
    Unit::linear("M☉", "solar mass", &["sun", "solar"], 1.98847e30),
];

static FORCE_UNITS: &[Unit] = &[
    Unit::linear("N", "newton", &["newton", "newtons"], 1.0),
    Unit::linear("kN", "kilonewton", &["kilonewton"], 1e3),
    Unit::linear("mN", "millinewton", &["millinewton"], 1e-3),
    Unit::linear("dyn", "dyne", &["dyne"], 1e-5),
    Unit::linear("lbf", "pound-force", &["pound-force"], 4.4482216152605),
    Unit::linear("kgf", "kilogram-force", &["kp"], 9.80665),
];

static RESISTANCE_UNITS: &[Unit] = &[
    Unit::linear("Ω", "ohm", &["ohm", "ohms", "Ohm"], 1.0),
    Unit::linear("mΩ", "milliohm", &["mohm", "mOhm"], 1e-3),
    Unit::linear("kΩ", "kiloohm", &["kohm", "kOhm"], 1e3),
    Unit::linear("MΩ", "megaohm", &["Mohm", "MOhm"], 1e6),
];

static CONDUCTANCE_UNITS: &[Unit] = &[
    Unit::linear("S", "siemens", &["siemens", "mho"], 1.0),
    Unit::linear("mS", "millisiemens", &[], 1e-3),
    Unit::linear("µS", "microsiemens", &["uS", "μS"], 1e-6),
];

static CAPACITANCE_UNITS: &[Unit] = &[
    Unit::linear("F", "farad", &["farad"], 1.0),
    Unit::linear("mF", "millifarad", &[], 1e-3),
    Unit::linear("µF", "microfarad", &["uF", "μF"], 1e-6),
    Unit::linear("nF", "nanofarad", &[], 1e-9),
    Unit::linear("pF", "picofarad", &[], 1e-12),
];

static INDUCTANCE_UNITS: &[Unit] = &[
    Unit::linear("H", "henry", &["henry"], 1.0),
    Unit::linear("mH", "millihenry", &[], 1e-3),
    Unit::linear("µH", "microhenry", &["uH", "μH"], 1e-6),
    Unit::linear("nH", "nanohenry", &[], 1e-9),
];

static FREQUENCY_UNITS: &[Unit] = &[
    Unit::linear("Hz", "hertz", &["hz", "hertz"], 1.0),
    Unit::linear("kHz", "kilohertz", &["khz"], 1e3),
    Unit::linear("MHz", "megahertz", &["mhz"], 1e6),
    Unit::linear("GHz", "gigahertz", &["ghz"], 1e9),
];

static TEMPERATURE_UNITS: &[Unit] = &[
    Unit::affine("°C", "degree Celsius", &["C", "degC", "celsius"], 1.0, 0.0),
    Unit::affine("°F", "degree Fahrenheit", &["F", "degF", "fahrenheit"], 5.0 / 9.0, -32.0),
    Unit::affine("K", "kelvin", &["kelvin"], 1.0, -273.15),
    Unit::affine("°R", "degree Rankine", &["R", "degR", "rankine"], 5.0 / 9.0, -491.67),
];

static VOLTAGE_UNITS: &[Unit] = &[
    Unit::linear("V", "volt", &["volt", "volts"], 1.0),
    Unit::linear("mV", "millivolt", &[], 1e-3),
    Unit::linear("µV", "microvolt", &["uV", "μV"], 1e-6),
    Unit::linear("kV", "kilovolt", &[], 1e3),
];

static CURRENT_UNITS: &[Unit] = &[
    Unit::linear("A", "ampere", &["amp", "amps", "ampere"], 1.0),
    Unit::linear("mA", "milliampere", &[], 1e-3),
    Unit::linear("µA", "microampere", &["uA", "μA"], 1e-6),
    Unit::linear("kA", "kiloampere", &[], 1e3),
];

static ANGLE_UNITS: &[Unit] = &[
    Unit::linear("rad", "radian", &["radian", "radians"], 1.0),
    Unit::linear("°", "degree", &["deg", "degree", "degrees"], PI / 180.0),
    Unit::linear("grad", "gradian", &["gon"], PI / 200.0),
    Unit::linear("turn", "turn", &["rev"], 2.0 * PI),
];

static POWER_UNITS: &[Unit] = &[
    Unit::linear("W", "watt", &["watt", "watts"], 1.0),
    Unit::linear("mW", "milliwatt", &[], 1e-3),
    Unit::linear("kW", "kilowatt", &[], 1e3),
    Unit::linear("MW", "megawatt", &[], 1e6),
    Unit::linear("hp", "mechanical horsepower", &["HP"], 745.699_871_582_270_2),
];

static TORQUE_UNITS: &[Unit] = &[
    Unit::linear("N·m", "newton meter", &["Nm", "N*m", "N-m"], 1.0),
    Unit::linear("N·cm", "newton centimeter", &["Ncm", "N*cm"], 1e-2),
    Unit::linear("kN·m", "kilonewton meter", &["kNm"], 1e3),
    Unit::linear("lbf·ft", "pound-force foot", &["lbft", "lb-ft", "ft-lb"], 1.355_817_948_331_400_4),
    Unit::linear("lbf·in", "pound-force inch", &["lbin", "lb-in", "in-lb"], 0.112_984_829_027_616_7),
    Unit::linear("ozf·in", "ounce-force inch", &["ozin", "oz-in"], 0.007_061_551_814_226_04),
];

static TORQUE_CONSTANT_UNITS: &[Unit] = &[
    Unit::linear("N·m/A", "newton meter per ampere", &["Nm/A", "N*m/A"], 1.0),
    Unit::linear("mN·m/A", "millinewton meter per ampere", &["mNm/A"], 1e-3),
    Unit::linear("ozf·in/A", "ounce-force inch per ampere", &["ozin/A", "oz-in/A"], 0.007_061_551_814_226_04),
];

static ANGULAR_VELOCITY_UNITS: &[Unit] = &[
    Unit::linear("rad/s", "radian per second", &["rads"], 1.0),
    Unit::linear("rpm", "revolution per minute", &["RPM", "rev/min"], 2.0 * PI / 60.0),
    Unit::linear("rps", "revolution per second", &["rev/s"], 2.0 * PI),
    Unit::linear("°/s", "degree per second", &["deg/s"], PI / 180.0),
];

static VELOCITY_UNITS: &[Unit] = &[
    Unit::linear("m/s", "meter per second", &["mps"], 1.0),
    Unit::linear("km/s", "kilometer per second", &["kps"], 1e3),
    Unit::linear("km/h", "kilometer per hour", &["kph", "kmh"], 1.0 / 3.6),
    Unit::linear("mph", "mile per hour", &["mi/h"], 0.44704),
    Unit::linear("ft/s", "foot per second", &["fps"], 0.3048),
];

static ACCELERATION_UNITS: &[Unit] = &[
    Unit::linear("m/s²", "meter per second squared", &["m/s2", "m/s^2"], 1.0),
    Unit::linear("ft/s²", "foot per second squared", &["ft/s2", "ft/s^2"], 0.3048),
    Unit::linear("gₙ", "standard gravity", &["gn", "g0"], 9.80665),
];

static DENSITY_UNITS: &[Unit] = &[
    Unit::linear("kg/m³", "kilogram per cubic meter", &["kg/m3", "kg/m^3"], 1.0),
    Unit::linear("g/cm³", "gram per cubic centimeter", &["g/cm3", "g/cc"], 1e3),
    Unit::linear("g/mL", "gram per milliliter", &["g/ml"], 1e3),
    Unit::linear("lb/ft³", "pound per cubic foot", &["lb/ft3", "pcf"], 16.018_463_373_960_138),
];

static PRESSURE_UNITS: &[Unit] = &[
    Unit::linear("Pa", "pascal", &["pascal"], 1.0),
    Unit::linear("hPa", "hectopascal", &["mbar"], 1e2),
    Unit::linear("kPa", "kilopascal", &[], 1e3),
    Unit::linear("bar", "bar", &[], 1e5),
    Unit::linear("psi", "pound per square inch", &["PSI"], 6_894.757_293_168_361),
    Unit::linear("atm", "standard atmosphere", &[], 101_325.0),
    Unit::linear("mmHg", "millimeter of mercury", &["torr"], 133.322_387_415),
];

static DIMENSIONLESS_UNITS: &[Unit] = &[
    Unit::linear("1", "unitless", &[""], 1.0),
    Unit::linear("%", "percent", &["percent"], 1e-2),
];

// ============================================================================
// Quantities
// ============================================================================

/// A physical dimension with a closed set of convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Length,
    Area,
    Volume,
    Mass,
    Force,
    Resistance,
    Conductance,
    Capacitance,
    Inductance,
    Frequency,
    Temperature,
    Voltage,
    Current,
    Angle,
    Power,
    Torque,
    TorqueConstant,
    AngularVelocity,
    Velocity,
    Acceleration,
    Density,
    Pressure,
    Dimensionless,
}

impl Quantity {
    /// All quantities in display order
    pub const ALL: [Quantity; 23] = [
        Quantity::Length,
        Quantity::Area,
        Quantity::Volume,
        Quantity::Mass,
        Quantity::Force,
        Quantity::Resistance,
        Quantity::Conductance,
        Quantity::Capacitance,
        Quantity::Inductance,
        Quantity::Frequency,
        Quantity::Temperature,
        Quantity::Voltage,
        Quantity::Current,
        Quantity::Angle,
        Quantity::Power,
        Quantity::Torque,
        Quantity::TorqueConstant,
        Quantity::AngularVelocity,
        Quantity::Velocity,
        Quantity::Acceleration,
        Quantity::Density,
        Quantity::Pressure,
        Quantity::Dimensionless,
    ];

    /// Display name for the quantity
    pub fn display_name(&self) -> &'static str {
        match self {
            Quantity::Length => "Length",
            Quantity::Area => "Area",
            Quantity::Volume => "Volume",
            Quantity::Mass => "Mass",
            Quantity::Force => "Force",
            Quantity::Resistance => "Resistance",
            Quantity::Conductance => "Conductance",
            Quantity::Capacitance => "Capacitance",
            Quantity::Inductance => "Inductance",
            Quantity::Frequency => "Frequency",
            Quantity::Temperature => "Temperature",
            Quantity::Voltage => "Voltage",
            Quantity::Current => "Current",
            Quantity::Angle => "Angle",
            Quantity::Power => "Power",
            Quantity::Torque => "Torque",
            Quantity::TorqueConstant => "Torque constant",
            Quantity::AngularVelocity => "Angular velocity",
            Quantity::Velocity => "Velocity",
            Quantity::Acceleration => "Acceleration",
            Quantity::Density => "Density",
            Quantity::Pressure => "Pressure",
            Quantity::Dimensionless => "Dimensionless",
        }
    }

    /// Every unit registered for this quantity, base unit first
    pub fn units(&self) -> &'static [Unit] {
        match self {
            Quantity::Length => LENGTH_UNITS,
            Quantity::Area => AREA_UNITS,
            Quantity::Volume => VOLUME_UNITS,
            Quantity::Mass => MASS_UNITS,
            Quantity::Force => FORCE_UNITS,
            Quantity::Resistance => RESISTANCE_UNITS,
            Quantity::Conductance => CONDUCTANCE_UNITS,
            Quantity::Capacitance => CAPACITANCE_UNITS,
            Quantity::Inductance => INDUCTANCE_UNITS,
            Quantity::Frequency => FREQUENCY_UNITS,
            Quantity::Temperature => TEMPERATURE_UNITS,
            Quantity::Voltage => VOLTAGE_UNITS,
            Quantity::Current => CURRENT_UNITS,
            Quantity::Angle => ANGLE_UNITS,
            Quantity::Power => POWER_UNITS,
            Quantity::Torque => TORQUE_UNITS,
            Quantity::TorqueConstant => TORQUE_CONSTANT_UNITS,
            Quantity::AngularVelocity => ANGULAR_VELOCITY_UNITS,
            Quantity::Velocity => VELOCITY_UNITS,
            Quantity::Acceleration => ACCELERATION_UNITS,
            Quantity::Density => DENSITY_UNITS,
            Quantity::Pressure => PRESSURE_UNITS,
            Quantity::Dimensionless => DIMENSIONLESS_UNITS,
        }
    }

    /// The base unit every conversion pivots through
    pub fn base_unit(&self) -> &'static Unit {
        &self.units()[0]
    }

    /// Look up a unit by symbol or alias.
    ///
    /// # Errors
    /// [`CalcError::UnknownUnit`] if nothing registered for this quantity matches.
    pub fn unit(&self, symbol: &str) -> CalcResult<&'static Unit> {
        let symbol = symbol.trim();
        self.units()
            .iter()
            .find(|u| u.matches(symbol))
            .ok_or_else(|| {
                tracing::debug!(quantity = self.display_name(), unit = symbol, "unit lookup rejected");
                CalcError::unknown_unit(self.display_name(), symbol)
            })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Conversion API
// ============================================================================

/// Convert `value` expressed in `unit` to the quantity's base unit.
pub fn to_base(quantity: Quantity, unit: &str, value: f64) -> CalcResult<f64> {
    Ok(quantity.unit(unit)?.to_base(value))
}

/// Convert a base-unit `value` into `unit`. Exact inverse of [`to_base`].
pub fn from_base(quantity: Quantity, unit: &str, value: f64) -> CalcResult<f64> {
    Ok(quantity.unit(unit)?.from_base(value))
}

/// Convert between two units of the same quantity via the base unit.
pub fn convert(quantity: Quantity, from: &str, to: &str, value: f64) -> CalcResult<f64> {
    let base = to_base(quantity, from, value)?;
    from_base(quantity, to, base)
}
