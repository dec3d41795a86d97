//! Least-squares regression method.

use super::fields::{PREDICT_X, X_VALUES, Y_VALUES};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::statistics as eq;
use crate::errors::{CalcError, CalcResult};

pub(super) fn linear_regression(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let xs = ws.numbers(X_VALUES)?;
    let ys = ws.numbers(Y_VALUES)?;
    if xs.len() != ys.len() {
        return Err(ws.invalid(
            Y_VALUES,
            format!("Expected {} y values to match the x values, got {}", xs.len(), ys.len()),
        ));
    }
    if xs.len() < 2 {
        return Err(CalcError::degenerate("At least two data points are required"));
    }

    let sums = eq::regression_sums(&xs, &ys);
    if sums.sxx == 0.0 {
        return Err(CalcError::degenerate("All x values are identical; the slope is undefined"));
    }
    ws.step(format!(
        "n = {}, x̄ = {}, ȳ = {}",
        sums.n,
        ws.fmt(sums.mean_x),
        ws.fmt(sums.mean_y)
    ));
    ws.step(format!(
        "Sxx = Σ(x − x̄)² = {}, Sxy = Σ(x − x̄)(y − ȳ) = {}",
        ws.fmt(sums.sxx),
        ws.fmt(sums.sxy)
    ));

    let slope = eq::slope(&sums);
    ws.step(format!("Slope: m = Sxy / Sxx = {}", ws.fmt(slope)));
    let intercept = eq::intercept(&sums, slope);
    ws.step(format!("Intercept: b = ȳ − m·x̄ = {}", ws.fmt(intercept)));

    ws.output(out::POINT_COUNT, sums.n as f64);
    ws.output(out::SLOPE, slope);
    ws.output(out::INTERCEPT, intercept);

    if sums.syy == 0.0 {
        ws.step("All y values are identical: the fit is exact but r and R² are undefined");
    } else {
        ws.step(format!("Syy = Σ(y − ȳ)² = {}", ws.fmt(sums.syy)));
        let r = eq::correlation(&sums);
        ws.step(format!("Correlation: r = Sxy / √(Sxx·Syy) = {}", ws.fmt(r)));
        let r_squared = r * r;
        ws.step(format!("R² = r² = {}", ws.fmt(r_squared)));
        ws.output(out::CORRELATION, r);
        ws.output(out::R_SQUARED, r_squared);
    }

    if let Some(x) = ws.optional(PREDICT_X)? {
        let y = slope * x + intercept;
        ws.step(format!(
            "Prediction: y = {} × {} + {} = {}",
            ws.fmt(slope),
            ws.fmt(x),
            ws.fmt(intercept),
            ws.fmt(y)
        ));
        ws.output(out::PREDICTED_Y, y);
    }

    ws.step(format!("Best-fit line: y = {}x + {}", ws.fmt(slope), ws.fmt(intercept)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::CalcError;
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Method};
    use approx::assert_relative_eq;

    fn fit(xs: &str, ys: &str) -> Result<crate::methods::Calculation, CalcError> {
        compute(Method::LinearRegression, &RawInputs::new().with("x_values", xs).with("y_values", ys))
    }

    #[test]
    fn test_collinear_points() {
        let calc = fit("1 2 3 4 5", "1.5, 4, 6.5, 9, 11.5").unwrap();
        assert_relative_eq!(calc.value("slope").unwrap(), 2.5, max_relative = 1e-12);
        assert_relative_eq!(calc.value("intercept").unwrap(), -1.0, max_relative = 1e-12);
        assert_relative_eq!(calc.value("correlation").unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(calc.value("r_squared").unwrap(), 1.0, max_relative = 1e-12);
        assert_eq!(calc.value("n"), Some(5.0));
    }

    #[test]
    fn test_noisy_points_and_prediction() {
        let inputs = RawInputs::new()
            .with("x_values", "1 2 3 4")
            .with("y_values", "2 4 5 8")
            .with("predict_x", "5");
        let calc = compute(Method::LinearRegression, &inputs).unwrap();
        // Sxx = 5, Sxy = 9.5
        assert_relative_eq!(calc.value("slope").unwrap(), 1.9, max_relative = 1e-12);
        assert_relative_eq!(calc.value("intercept").unwrap(), 0.0, epsilon = 1e-12);
        let r = calc.value("correlation").unwrap();
        assert!(r > 0.97 && r < 1.0);
        assert_relative_eq!(calc.value("predicted_y").unwrap(), 9.5, max_relative = 1e-12);
    }

    #[test]
    fn test_constant_y_omits_correlation() {
        let calc = fit("1 2 3", "4 4 4").unwrap();
        assert_eq!(calc.value("slope"), Some(0.0));
        assert_eq!(calc.value("intercept"), Some(4.0));
        assert!(calc.output("correlation").is_none());
        assert!(calc.output("r_squared").is_none());
        assert!(calc.steps.iter().any(|s| s.text.contains("undefined")));
    }

    #[test]
    fn test_degenerate_sets() {
        assert_eq!(fit("1", "2").unwrap_err().error_code(), "DEGENERATE_INPUT");
        assert_eq!(fit("3 3 3", "1 2 3").unwrap_err().error_code(), "DEGENERATE_INPUT");
        let err = fit("1 2 3", "1 2").unwrap_err();
        assert_eq!(err.field(), Some("y_values"));
    }
}
