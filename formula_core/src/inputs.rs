//! # Raw Form Inputs
//!
//! What a form hands the engine: field name → entered text plus an optional
//! unit selection. Nothing here is guaranteed numeric; parsing and validation
//! happen at calculation time.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "radius": { "text": "5", "unit": "cm" },
//!   "mass": { "text": "2.4" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single form entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawValue {
    /// Text exactly as entered
    pub text: String,
    /// Selected unit symbol; `None` means the field's default unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl RawValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unit: None,
        }
    }

    pub fn with_unit(text: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            unit: Some(unit.into()),
        }
    }

    /// Whether nothing was entered
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// All entries of one form submission, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs {
    fields: BTreeMap<String, RawValue>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a field in its default unit
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.insert(name.into(), RawValue::new(text));
        self
    }

    /// Builder: add a field with a selected unit
    pub fn with_unit(mut self, name: impl Into<String>, text: impl Into<String>, unit: impl Into<String>) -> Self {
        self.fields.insert(name.into(), RawValue::with_unit(text, unit));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        self.fields.insert(name.into(), value);
    }

    /// Entry for `name`, treating blank text as absent
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name).filter(|v| !v.is_blank())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every entry (form "Clear")
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl FromIterator<(String, RawValue)> for RawInputs {
    fn from_iter<T: IntoIterator<Item = (String, RawValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Parse one entered number.
///
/// Accepts surrounding whitespace, a leading `+`, thousands separators
/// (`1,200`) and exponent notation. Rejects blanks, non-numbers, misplaced
/// commas (`1,5`) and non-finite values.
pub fn parse_number(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid_input(field, text, "A value is required"));
    }
    let cleaned = strip_thousands(trimmed).ok_or_else(|| {
        CalcError::invalid_input(field, text, "Commas may only separate groups of three digits")
    })?;
    let value: f64 = cleaned
        .parse()
        .map_err(|_| CalcError::invalid_input(field, text, "Not a valid number"))?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, text, "Value must be finite"));
    }
    Ok(value)
}

/// Remove thousands separators from the integer part of a number.
///
/// Commas are only accepted between groups of three digits after a leading
/// group of one to three (`12,345,678.9`). Any other comma yields `None`.
///
/// ```rust
/// use formula_core::inputs::strip_thousands;
/// assert_eq!(strip_thousands("-1,200.5").as_deref(), Some("-1200.5"));
/// assert_eq!(strip_thousands("1,5"), None);
/// ```
pub fn strip_thousands(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }
    let digits_start = text.find(|c: char| c.is_ascii_digit())?;
    let (sign, rest) = text.split_at(digits_start);
    if !matches!(sign, "" | "+" | "-") {
        return None;
    }
    let int_end = rest.find(|c: char| c != ',' && !c.is_ascii_digit()).unwrap_or(rest.len());
    let (int_part, tail) = rest.split_at(int_end);
    if tail.contains(',') {
        return None;
    }

    let mut groups = int_part.split(',');
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 || !groups.all(|g| g.len() == 3) {
        return None;
    }
    Some(format!("{}{}{}", sign, int_part.replace(',', ""), tail))
}

/// Split a list entry on commas, semicolons and whitespace.
pub fn split_list(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}
