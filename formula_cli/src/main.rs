//! # Formula CLI
//!
//! Command-line front end for `formula_core`. Plays the part of a calculator
//! form: pick a method, enter `name=value[:unit]` fields, read back the
//! results and the step-by-step derivation.
//!
//! ```bash
//! formula_cli list
//! formula_cli describe dew-point
//! formula_cli units temperature
//! formula_cli compute area-from-radius -i radius=5:cm --to area=cm²
//! formula_cli compute linear-regression -i "x_values=1 2 3" -i "y_values=2 4 6" --json
//! ```
//!
//! Set `RUST_LOG=formula_core=debug` to trace dispatch.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use formula_core::methods::fields::FieldKind;
use formula_core::methods::{compute_with, Method, ALL_METHODS};
use formula_core::{FormatSettings, Quantity, RawInputs, RawValue};

#[derive(Parser)]
#[command(name = "formula_cli")]
#[command(about = "Unit-aware formula calculator with step-by-step explanations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every calculation method by family
    List,

    /// Show the inputs, outputs and formula of a method
    Describe {
        /// Method slug (e.g., "area-from-radius")
        method: String,

        /// Print metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// List quantities, or the units of one quantity
    Units {
        /// Quantity name (e.g., "length", "angular velocity")
        quantity: Option<String>,
    },

    /// Evaluate a method
    Compute {
        /// Method slug
        method: String,

        /// Input field as name=value or name=value:unit (repeatable)
        #[arg(short, long = "input", value_name = "NAME=VALUE[:UNIT]")]
        inputs: Vec<String>,

        /// Display an output in another unit, as name=unit (repeatable)
        #[arg(long = "to", value_name = "NAME=UNIT")]
        display: Vec<String>,

        /// Decimal places in rendered values
        #[arg(long, default_value_t = FormatSettings::default().decimals)]
        decimals: usize,

        /// Print the full calculation as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::List => list_methods(),
        Commands::Describe { method, json } => describe_method(&method, json),
        Commands::Units { quantity } => list_units(quantity.as_deref()),
        Commands::Compute {
            method,
            inputs,
            display,
            decimals,
            json,
        } => run_compute(&method, &inputs, &display, decimals, json),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn list_methods() -> Result<()> {
    for family in Method::all_families() {
        println!("{}", family.display_name());
        for method in Method::in_family(family) {
            let meta = method.metadata();
            println!("  {:<32} {}", meta.slug, meta.name);
        }
        println!();
    }
    println!("{} methods", ALL_METHODS.len());
    Ok(())
}

fn describe_method(slug: &str, json: bool) -> Result<()> {
    let method: Method = slug.parse()?;
    let meta = method.metadata();

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
        return Ok(());
    }

    println!("{} ({})", meta.name, meta.slug);
    println!("{}", meta.description);
    println!();
    println!("Formula: {}", meta.formula_plain);
    println!();
    println!("Inputs:");
    for slot in &meta.inputs {
        let kind = match slot.field.kind {
            FieldKind::Measure { quantity, default_unit } => {
                format!("{}, default {}", quantity.display_name(), default_unit)
            }
            FieldKind::Number => "number".to_string(),
            FieldKind::Text => "number as written".to_string(),
            FieldKind::List => "list of numbers".to_string(),
        };
        let required = if slot.required { "" } else { " (optional)" };
        println!("  {:<20} {} [{}]{}", slot.field.name, slot.field.label, kind, required);
    }
    println!();
    println!("Outputs:");
    for slot in &meta.outputs {
        println!("  {:<28} {} [{}]", slot.name, slot.label, slot.quantity.base_unit().symbol);
    }
    Ok(())
}

fn parse_quantity(name: &str) -> Result<Quantity> {
    let wanted: String = name.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase();
    Quantity::ALL
        .iter()
        .copied()
        .find(|q| {
            let candidate: String = q.display_name().chars().filter(|c| c.is_alphanumeric()).collect();
            candidate.to_lowercase() == wanted
        })
        .ok_or_else(|| anyhow!("unknown quantity '{}'", name))
}

fn list_units(quantity: Option<&str>) -> Result<()> {
    match quantity {
        None => {
            for q in Quantity::ALL {
                println!("  {:<18} base {}", q.display_name(), q.base_unit().symbol);
            }
        }
        Some(name) => {
            let q = parse_quantity(name)?;
            println!("{} (base {})", q.display_name(), q.base_unit().symbol);
            for unit in q.units() {
                println!("  {:<10} {}", unit.symbol, unit.name);
            }
        }
    }
    Ok(())
}

/// Parse `name=value` or `name=value:unit`
fn parse_input(arg: &str) -> Result<(String, RawValue)> {
    let (name, rest) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("input '{}' must look like name=value[:unit]", arg))?;
    let value = match rest.rsplit_once(':') {
        Some((text, unit)) => RawValue::with_unit(text, unit),
        None => RawValue::new(rest),
    };
    Ok((name.trim().to_string(), value))
}

fn parse_display(args: &[String]) -> Result<BTreeMap<String, String>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(name, unit)| (name.trim().to_string(), unit.trim().to_string()))
                .ok_or_else(|| anyhow!("display option '{}' must look like name=unit", arg))
        })
        .collect()
}

fn run_compute(slug: &str, args: &[String], display: &[String], decimals: usize, json: bool) -> Result<()> {
    let method: Method = slug.parse()?;
    let inputs: RawInputs = args.iter().map(|a| parse_input(a)).collect::<Result<_>>()?;
    let display = parse_display(display)?;
    let settings = FormatSettings::default().with_decimals(decimals);

    tracing::debug!(method = method.slug(), fields = args.len(), "computing");

    let calc = match compute_with(method, &inputs, &settings) {
        Ok(calc) => calc,
        Err(e) if json => {
            println!("{}", serde_json::to_string_pretty(&e)?);
            bail!("{} [{}]", e, e.error_code());
        }
        Err(e) => bail!("{} [{}]", e, e.error_code()),
    };

    for name in display.keys() {
        if calc.output(name).is_none() {
            bail!("{} has no output named '{}'", method, name);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
        return Ok(());
    }

    println!("{}", method.metadata().name);
    println!();
    for output in &calc.outputs {
        let rendered = match display.get(&output.name) {
            Some(unit) => {
                let value = output
                    .value_in(unit)
                    .with_context(|| format!("cannot display {} in '{}'", output.name, unit))?;
                format!("{} {}", formula_core::format_value(value, &settings), unit)
            }
            None if output.text.is_some() => output.display(&settings),
            None if output.unit == "1" => output.display(&settings),
            None => format!("{} {}", output.display(&settings), output.unit),
        };
        println!("  {:<36} {}", output.label, rendered);
    }
    println!();
    for line in calc.step_lines() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_with_unit() {
        let (name, value) = parse_input("radius=5:cm").unwrap();
        assert_eq!(name, "radius");
        assert_eq!(value, RawValue::with_unit("5", "cm"));

        let (_, value) = parse_input("x_values=1 2 3").unwrap();
        assert_eq!(value, RawValue::new("1 2 3"));

        assert!(parse_input("radius").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("angular velocity").unwrap(), Quantity::AngularVelocity);
        assert_eq!(parse_quantity("Torque-Constant").unwrap(), Quantity::TorqueConstant);
        assert!(parse_quantity("luminosity").is_err());
    }

    #[test]
    fn test_parse_display() {
        let map = parse_display(&["area=cm²".to_string()]).unwrap();
        assert_eq!(map.get("area").map(String::as_str), Some("cm²"));
        assert!(parse_display(&["area".to_string()]).is_err());
    }
}
