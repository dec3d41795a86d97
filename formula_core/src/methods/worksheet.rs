//! Per-evaluation scratchpad shared by every method.
//!
//! A [`Worksheet`] reads the raw form entries, converts measured values into
//! base units (recording a step whenever the entered unit is not the base
//! unit), collects outputs and derivation steps, and finally checks that
//! nothing non-finite escapes.

use tracing::trace;

use super::fields::{FieldKind, FieldSpec};
use super::outputs::OutputSlot;
use super::registry::Method;
use super::{Calculation, OutputValue};
use crate::errors::{CalcError, CalcResult};
use crate::explain::Derivation;
use crate::format::FormatSettings;
use crate::inputs::{parse_number, split_list, RawInputs, RawValue};

pub struct Worksheet<'a> {
    method: Method,
    inputs: &'a RawInputs,
    derivation: Derivation<'a>,
    outputs: Vec<OutputValue>,
}

impl<'a> Worksheet<'a> {
    pub fn new(method: Method, inputs: &'a RawInputs, settings: &'a FormatSettings) -> Self {
        Self {
            method,
            inputs,
            derivation: Derivation::new(settings),
            outputs: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Reading inputs
    // ------------------------------------------------------------------------

    fn raw(&self, field: FieldSpec) -> CalcResult<&'a RawValue> {
        self.inputs
            .get(field.name)
            .ok_or_else(|| CalcError::invalid_input(field.name, "", format!("{} is required", field.label)))
    }

    /// Whether the form supplied a non-blank entry for `field`
    pub fn has(&self, field: FieldSpec) -> bool {
        self.inputs.get(field.name).is_some()
    }

    /// Error pointing at `field`, quoting what was entered
    pub fn invalid(&self, field: FieldSpec, reason: impl Into<String>) -> CalcError {
        let entered = self.inputs.get(field.name).map(|raw| raw.text.trim()).unwrap_or("");
        CalcError::invalid_input(field.name, entered, reason)
    }

    /// Required numeric input, converted to the base unit for measure fields.
    pub fn value(&mut self, field: FieldSpec) -> CalcResult<f64> {
        let raw = self.raw(field)?;
        self.convert(field, raw)
    }

    /// Required input that must be strictly positive
    pub fn positive(&mut self, field: FieldSpec) -> CalcResult<f64> {
        let value = self.value(field)?;
        if value <= 0.0 {
            return Err(self.invalid(field, format!("{} must be positive", field.label)));
        }
        Ok(value)
    }

    /// Optional input; blank or missing reads as `None`, anything entered
    /// must still be valid.
    pub fn optional(&mut self, field: FieldSpec) -> CalcResult<Option<f64>> {
        let inputs = self.inputs;
        match inputs.get(field.name) {
            Some(raw) => self.convert(field, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Optional input that must be strictly positive when entered
    pub fn optional_positive(&mut self, field: FieldSpec) -> CalcResult<Option<f64>> {
        match self.optional(field)? {
            Some(value) if value <= 0.0 => Err(self.invalid(field, format!("{} must be positive", field.label))),
            other => Ok(other),
        }
    }

    /// Required entry exactly as written (trimmed)
    pub fn text(&self, field: FieldSpec) -> CalcResult<&'a str> {
        let raw = self.raw(field)?;
        Ok(raw.text.trim())
    }

    /// Required list entry split into its items
    pub fn list(&self, field: FieldSpec) -> CalcResult<Vec<&'a str>> {
        let items = split_list(self.raw(field)?.text.as_str());
        if items.is_empty() {
            return Err(self.invalid(field, format!("{} must contain at least one number", field.label)));
        }
        Ok(items)
    }

    /// Required list entry parsed as numbers
    pub fn numbers(&self, field: FieldSpec) -> CalcResult<Vec<f64>> {
        self.list(field)?
            .into_iter()
            .map(|item| parse_number(field.name, item))
            .collect()
    }

    fn convert(&mut self, field: FieldSpec, raw: &RawValue) -> CalcResult<f64> {
        let value = parse_number(field.name, &raw.text)?;
        let selected = raw.unit.as_deref().map(str::trim).filter(|u| !u.is_empty());

        match field.kind {
            FieldKind::Measure { quantity, default_unit } => {
                let unit = quantity.unit(selected.unwrap_or(default_unit))?;
                let base = unit.to_base(value);
                let base_unit = quantity.base_unit();
                if unit.symbol != base_unit.symbol {
                    trace!(field = field.name, from = unit.symbol, to = base_unit.symbol, "converted input");
                    self.step(format!(
                        "Convert {}: {} {} = {} {}",
                        field.label.to_lowercase(),
                        self.fmt(value),
                        unit.symbol,
                        self.fmt(base),
                        base_unit.symbol
                    ));
                }
                Ok(base)
            }
            FieldKind::Number | FieldKind::Text => match selected {
                Some(unit) => Err(CalcError::invalid_input(
                    field.name,
                    format!("{} {}", raw.text.trim(), unit),
                    format!("{} does not take a unit", field.label),
                )),
                None => Ok(value),
            },
            FieldKind::List => Err(self.invalid(field, format!("{} expects a list of numbers", field.label))),
        }
    }

    // ------------------------------------------------------------------------
    // Recording
    // ------------------------------------------------------------------------

    /// Append a derivation step
    pub fn step(&mut self, text: impl Into<String>) {
        self.derivation.record(text);
    }

    /// Format a value the way steps display it
    pub fn fmt(&self, value: f64) -> String {
        self.derivation.fmt(value)
    }

    /// Record an output in its base unit
    pub fn output(&mut self, slot: OutputSlot, value: f64) {
        self.push(slot, value, None);
    }

    /// Record an output with an exact text rendering (fractions, sig figs)
    pub fn output_text(&mut self, slot: OutputSlot, value: f64, text: impl Into<String>) {
        self.push(slot, value, Some(text.into()));
    }

    fn push(&mut self, slot: OutputSlot, value: f64, text: Option<String>) {
        self.outputs.push(OutputValue {
            name: slot.name.to_string(),
            label: slot.label.to_string(),
            quantity: slot.quantity,
            value,
            unit: slot.quantity.base_unit().symbol.to_string(),
            text,
        });
    }

    /// Seal the worksheet into a [`Calculation`].
    ///
    /// # Errors
    /// [`CalcError::CalculationFailed`] if any output is NaN or infinite.
    pub fn finish(self) -> CalcResult<Calculation> {
        if let Some(bad) = self.outputs.iter().find(|o| !o.value.is_finite()) {
            return Err(CalcError::calculation_failed(
                self.method.metadata().name,
                format!("{} is not a finite number", bad.label),
            ));
        }
        Ok(Calculation {
            method: self.method,
            outputs: self.outputs,
            steps: self.derivation.finish(),
        })
    }
}
