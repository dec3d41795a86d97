//! # Derivation Steps
//!
//! A [`Derivation`] collects the human-readable steps of a calculation while
//! it runs. Dispatch code records each step from the same variables it goes on
//! to use, so the displayed arithmetic and the returned result come from one
//! evaluation.
//!
//! ```rust
//! use formula_core::explain::Derivation;
//! use formula_core::format::FormatSettings;
//!
//! let settings = FormatSettings::default();
//! let mut d = Derivation::new(&settings);
//! let r2 = 5.0_f64 * 5.0;
//! d.record(format!("Square the radius: r² = {}", d.fmt(r2)));
//!
//! let steps = d.finish();
//! assert_eq!(steps[0].to_string(), "Step 1: Square the radius: r² = 25");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{format_value, FormatSettings};

/// One line of a derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position in the derivation
    pub index: usize,
    pub text: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.index, self.text)
    }
}

/// Ordered step collector for a single calculation.
#[derive(Debug, Clone)]
pub struct Derivation<'a> {
    settings: &'a FormatSettings,
    steps: Vec<Step>,
}

impl<'a> Derivation<'a> {
    pub fn new(settings: &'a FormatSettings) -> Self {
        Self {
            settings,
            steps: Vec::new(),
        }
    }

    /// Append a step
    pub fn record(&mut self, text: impl Into<String>) {
        let index = self.steps.len() + 1;
        self.steps.push(Step {
            index,
            text: text.into(),
        });
    }

    /// Format a value with the derivation's settings
    pub fn fmt(&self, value: f64) -> String {
        format_value(value, self.settings)
    }

    pub fn settings(&self) -> &FormatSettings {
        self.settings
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the collector and return its steps
    pub fn finish(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        let settings = FormatSettings::default();
        let mut d = Derivation::new(&settings);
        d.record("first");
        d.record(String::from("second"));
        assert_eq!(d.len(), 2);

        let steps = d.finish();
        assert_eq!(steps[0].index, 1);
        assert_eq!(steps[1].to_string(), "Step 2: second");
    }

    #[test]
    fn test_fmt_uses_settings() {
        let settings = FormatSettings::default().with_decimals(2);
        let d = Derivation::new(&settings);
        assert_eq!(d.fmt(std::f64::consts::PI), "3.14");
        assert!(d.is_empty());
    }
}
