//! # formula_core - Unit-Aware Formula Engine
//!
//! `formula_core` evaluates closed-form formulas (geometry, percent and
//! fraction arithmetic, logarithms, significant figures, regression,
//! humidity, AC circuits, mechanics) from raw form entries with units, and
//! explains every result with a step-by-step derivation. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `compute(method, inputs)` is a pure function
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No Silent Fallbacks**: An unknown unit is an error, never an identity conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::{compute, Method, RawInputs};
//!
//! let inputs = RawInputs::new().with_unit("radius", "5", "cm");
//! let calc = compute(Method::AreaFromRadius, &inputs).unwrap();
//!
//! let area = calc.output("area").unwrap();
//! assert_eq!(area.unit, "m²");
//! assert!((area.value_in("cm²").unwrap() - 78.5398).abs() < 1e-4);
//!
//! for line in calc.step_lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Quantities, unit tables and base-unit conversion
//! - [`inputs`] - Raw form entries and number parsing
//! - [`equations`] - Pure closed-form formulas
//! - [`methods`] - Method registry and dispatch
//! - [`explain`] - Derivation steps
//! - [`format`] - Number formatting shared by steps and front ends
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod explain;
pub mod format;
pub mod inputs;
pub mod methods;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use explain::Step;
pub use format::{format_value, FormatSettings};
pub use inputs::{RawInputs, RawValue};
pub use methods::{compute, compute_with, Calculation, Method, MethodFamily, OutputValue};
pub use units::{Quantity, Unit};
