//! Percent, fraction, logarithm and percent-error methods.

use super::fields::{BASE, DECIMAL, DENOMINATOR, MEASURED, NUMBER, NUMERATOR, PERCENT, TRUE_VALUE};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::numeric::{self as eq, Fraction};
use crate::errors::{CalcError, CalcResult};

pub(super) fn decimal_to_percent(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = ws.value(DECIMAL)?;
    let p = eq::decimal_to_percent(x);
    ws.step(format!("Multiply by 100: {} × 100 = {}%", ws.fmt(x), ws.fmt(p)));
    ws.output(out::PERCENT, p);
    Ok(())
}

pub(super) fn percent_to_decimal(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let p = ws.value(PERCENT)?;
    let x = eq::percent_to_decimal(p);
    ws.step(format!("Divide by 100: {}% / 100 = {}", ws.fmt(p), ws.fmt(x)));
    ws.output(out::DECIMAL, x);
    Ok(())
}

fn divide_fraction(ws: &mut Worksheet<'_>) -> CalcResult<f64> {
    let n = ws.value(NUMERATOR)?;
    let d = ws.value(DENOMINATOR)?;
    if d == 0.0 {
        return Err(CalcError::division_by_zero(DENOMINATOR.name, "Denominator must not be zero"));
    }
    let x = n / d;
    ws.step(format!("Divide numerator by denominator: {} / {} = {}", ws.fmt(n), ws.fmt(d), ws.fmt(x)));
    Ok(x)
}

pub(super) fn fraction_to_decimal(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = divide_fraction(ws)?;
    ws.output(out::DECIMAL, x);
    Ok(())
}

pub(super) fn fraction_to_percent(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = divide_fraction(ws)?;
    let p = eq::decimal_to_percent(x);
    ws.step(format!("Multiply by 100: {} × 100 = {}%", ws.fmt(x), ws.fmt(p)));
    ws.output(out::DECIMAL, x);
    ws.output(out::PERCENT, p);
    Ok(())
}

/// Reduce an exact fraction, recording the GCD steps.
fn simplify(ws: &mut Worksheet<'_>, exact: Fraction) -> Fraction {
    let (reduced, divisor) = exact.reduce();
    if divisor > 1 {
        ws.step(format!(
            "Greatest common divisor: gcd({}, {}) = {}",
            exact.numerator.abs(),
            exact.denominator,
            divisor
        ));
        ws.step(format!("Divide both by {}: {} = {}", divisor, exact, reduced));
    } else {
        ws.step(format!("{} is already in lowest terms", reduced));
    }
    reduced
}

pub(super) fn percent_to_fraction(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let p = ws.value(PERCENT)?;
    let text = ws.text(PERCENT)?;
    let exact = eq::percent_text_to_fraction(text)
        .ok_or_else(|| ws.invalid(PERCENT, "Too many digits to convert exactly"))?;
    ws.step(format!("Write over 100 as whole numbers: {}% = {}", text, exact));
    let reduced = simplify(ws, exact);

    ws.output_text(out::FRACTION, reduced.to_f64(), reduced.to_string());
    ws.output(out::DECIMAL, eq::percent_to_decimal(p));
    Ok(())
}

pub(super) fn decimal_to_fraction(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    ws.value(DECIMAL)?;
    let text = ws.text(DECIMAL)?;
    let exact = eq::decimal_text_to_fraction(text)
        .ok_or_else(|| ws.invalid(DECIMAL, "Too many digits to convert exactly"))?;
    ws.step(format!("Write the digits over a power of ten: {} = {}", text, exact));
    let reduced = simplify(ws, exact);

    ws.output_text(out::FRACTION, reduced.to_f64(), reduced.to_string());
    Ok(())
}

fn positive_argument(ws: &mut Worksheet<'_>) -> CalcResult<f64> {
    let x = ws.value(NUMBER)?;
    if x <= 0.0 {
        return Err(ws.invalid(NUMBER, "Logarithm is only defined for positive numbers"));
    }
    Ok(x)
}

pub(super) fn natural_log(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = positive_argument(ws)?;
    let result = x.ln();
    ws.step(format!("ln({}) = {}", ws.fmt(x), ws.fmt(result)));
    ws.output(out::LOGARITHM, result);
    Ok(())
}

pub(super) fn common_log(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = positive_argument(ws)?;
    let result = x.log10();
    ws.step(format!("log₁₀({}) = {}", ws.fmt(x), ws.fmt(result)));
    ws.output(out::LOGARITHM, result);
    Ok(())
}

pub(super) fn log_base(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = positive_argument(ws)?;
    let b = ws.value(BASE)?;
    if b <= 0.0 || b == 1.0 {
        return Err(CalcError::invalid_base(ws.text(BASE)?));
    }

    let (ln_x, ln_b, result) = eq::change_of_base(x, b);
    ws.step(format!("ln({}) = {}", ws.fmt(x), ws.fmt(ln_x)));
    ws.step(format!("ln({}) = {}", ws.fmt(b), ws.fmt(ln_b)));
    ws.step(format!(
        "Change of base: log_{}({}) = {} / {} = {}",
        ws.fmt(b),
        ws.fmt(x),
        ws.fmt(ln_x),
        ws.fmt(ln_b),
        ws.fmt(result)
    ));
    ws.output(out::LOGARITHM, result);
    Ok(())
}

pub(super) fn percent_error(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let measured = ws.value(MEASURED)?;
    let true_value = ws.value(TRUE_VALUE)?;
    if true_value == 0.0 {
        return Err(CalcError::division_by_zero(
            TRUE_VALUE.name,
            "Percent error is undefined when the true value is zero",
        ));
    }

    let difference = measured - true_value;
    let absolute = difference.abs();
    ws.step(format!(
        "Absolute error: |{} − {}| = {}",
        ws.fmt(measured),
        ws.fmt(true_value),
        ws.fmt(absolute)
    ));
    let relative = difference / true_value;
    ws.step(format!("Relative error: {} / {} = {}", ws.fmt(difference), ws.fmt(true_value), ws.fmt(relative)));
    let percent = eq::percent_error(measured, true_value);
    ws.step(format!(
        "Percent error: {} / |{}| × 100 = {}%",
        ws.fmt(absolute),
        ws.fmt(true_value),
        ws.fmt(percent)
    ));

    ws.output(out::PERCENT_ERROR, percent);
    ws.output(out::ABSOLUTE_ERROR, absolute);
    ws.output(out::RELATIVE_ERROR, relative);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::CalcError;
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Method};

    fn run(method: Method, inputs: RawInputs) -> crate::methods::Calculation {
        compute(method, &inputs).unwrap()
    }

    #[test]
    fn test_percent_decimal() {
        let calc = run(Method::DecimalToPercent, RawInputs::new().with("decimal", "0.25"));
        assert_eq!(calc.value("percent"), Some(25.0));
        assert_eq!(calc.steps[0].text, "Multiply by 100: 0.25 × 100 = 25%");

        let calc = run(Method::PercentToDecimal, RawInputs::new().with("percent", "12.5"));
        assert_eq!(calc.value("decimal"), Some(0.125));
    }

    #[test]
    fn test_fraction_division() {
        let inputs = RawInputs::new().with("numerator", "3").with("denominator", "8");
        assert_eq!(run(Method::FractionToDecimal, inputs.clone()).value("decimal"), Some(0.375));
        assert_eq!(run(Method::FractionToPercent, inputs).value("percent"), Some(37.5));

        let err = compute(
            Method::FractionToPercent,
            &RawInputs::new().with("numerator", "3").with("denominator", "0"),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(err.field(), Some("denominator"));
    }

    #[test]
    fn test_percent_to_fraction_is_exact() {
        let calc = run(Method::PercentToFraction, RawInputs::new().with("percent", "12.5"));
        let fraction = calc.output("fraction").unwrap();
        assert_eq!(fraction.text.as_deref(), Some("1/8"));
        assert_eq!(fraction.value, 0.125);
        assert_eq!(calc.value("decimal"), Some(0.125));
        assert_eq!(calc.steps[0].text, "Write over 100 as whole numbers: 12.5% = 125/1000");
        assert_eq!(calc.steps[1].text, "Greatest common divisor: gcd(125, 1000) = 125");
    }

    #[test]
    fn test_decimal_to_fraction() {
        let calc = run(Method::DecimalToFraction, RawInputs::new().with("decimal", "-0.375"));
        assert_eq!(calc.output("fraction").unwrap().text.as_deref(), Some("-3/8"));

        let calc = run(Method::DecimalToFraction, RawInputs::new().with("decimal", "7"));
        assert_eq!(calc.output("fraction").unwrap().text.as_deref(), Some("7/1"));
        assert_eq!(calc.steps.last().unwrap().text, "7/1 is already in lowest terms");
    }

    #[test]
    fn test_logarithms() {
        let calc = run(Method::LogBase, RawInputs::new().with("number", "8").with("base", "2"));
        assert_eq!(calc.value("logarithm"), Some(3.0));
        assert_eq!(calc.steps.len(), 3);

        let calc = run(Method::CommonLog, RawInputs::new().with("number", "1000"));
        assert!((calc.value("logarithm").unwrap() - 3.0).abs() < 1e-12);

        let calc = run(Method::NaturalLog, RawInputs::new().with("number", "1"));
        assert_eq!(calc.value("logarithm"), Some(0.0));
    }

    #[test]
    fn test_logarithm_domain() {
        let err = compute(Method::NaturalLog, &RawInputs::new().with("number", "0")).unwrap_err();
        assert_eq!(err.field(), Some("number"));

        for base in ["1", "0", "-2"] {
            let err = compute(Method::LogBase, &RawInputs::new().with("number", "8").with("base", base)).unwrap_err();
            assert_eq!(err, CalcError::InvalidBase { value: base.to_string() });
        }
    }

    #[test]
    fn test_percent_error_reference() {
        let calc = run(
            Method::PercentError,
            RawInputs::new().with("measured", "152").with("true_value", "150"),
        );
        let pe = calc.value("percent_error").unwrap();
        assert!((pe - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(calc.value("absolute_error"), Some(2.0));
        assert!(calc.value("relative_error").unwrap() > 0.0);
        assert!(calc.steps[2].text.ends_with("1.3333%"));

        let err = compute(
            Method::PercentError,
            &RawInputs::new().with("measured", "1").with("true_value", "0"),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
    }
}
