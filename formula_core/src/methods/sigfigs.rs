//! Significant figure methods.

use super::fields::{OPERANDS, SIG_FIGURES, SIG_VALUE};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::sigfigs::{self as sf, SigFigAnalysis};
use crate::errors::{CalcError, CalcResult};
use crate::format::format_fixed;

/// More figures than an f64 can carry are meaningless
const MAX_FIGURES: f64 = 17.0;

/// Name of a decimal place (2 → "hundredths", -1 → "tens")
fn place_name(place: i32) -> String {
    match place {
        3 => "thousandths".to_string(),
        2 => "hundredths".to_string(),
        1 => "tenths".to_string(),
        0 => "ones".to_string(),
        -1 => "tens".to_string(),
        -2 => "hundreds".to_string(),
        -3 => "thousands".to_string(),
        p => format!("10^{}", -p),
    }
}

fn figures_word(count: usize) -> &'static str {
    if count == 1 {
        "significant figure"
    } else {
        "significant figures"
    }
}

pub(super) fn count(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let text = ws.text(SIG_VALUE)?;
    let analysis = sf::analyze(text).ok_or_else(|| ws.invalid(SIG_VALUE, "Not a valid number"))?;

    let unsigned = text.trim_start_matches(['+', '-']);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, _)) => (m, true),
        None => (unsigned, false),
    };
    if exponent {
        ws.step(format!("Only the mantissa {} carries significant digits", mantissa));
    }

    let has_point = mantissa.contains('.');
    let digits: Vec<char> = mantissa.chars().filter(|c| *c != '.' && *c != ',').collect();
    if let (Some(first), Some(last)) = (
        digits.iter().position(|&d| d != '0'),
        digits.iter().rposition(|&d| d != '0'),
    ) {
        if first > 0 {
            ws.step(format!("Leading zeros ({}) do not count", first));
        }
        let trailing = digits.len() - 1 - last;
        if trailing > 0 {
            if has_point {
                ws.step(format!("Trailing zeros ({}) count because a decimal point is written", trailing));
            } else {
                ws.step(format!("Trailing zeros ({}) do not count without a decimal point", trailing));
            }
        }
    } else {
        ws.step("The value is zero; only zeros written after a decimal point count");
    }

    ws.step(format!(
        "{} has {} {}, the last in the {} place",
        text,
        analysis.count,
        figures_word(analysis.count),
        place_name(analysis.last_place)
    ));

    ws.output(out::SIG_FIG_COUNT, analysis.count as f64);
    ws.output(out::LAST_PLACE, analysis.last_place as f64);
    Ok(())
}

pub(super) fn round(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let x = ws.value(SIG_VALUE)?;
    let n = ws.value(SIG_FIGURES)?;
    if n < 1.0 || n > MAX_FIGURES || n.fract() != 0.0 {
        return Err(ws.invalid(SIG_FIGURES, "Significant figures must be a whole number from 1 to 17"));
    }
    let figures = n as usize;

    let rounded = if x == 0.0 {
        ws.step("Zero stays zero at any precision");
        0.0
    } else {
        let places = sf::place_for_sig_figs(x, figures);
        ws.step(format!("Leading digit is in the 10^{} place", sf::magnitude(x)));
        let rounded = sf::round_to_place(x, places);
        ws.step(format!(
            "Keep {} {}: round to the {} place = {}",
            figures,
            figures_word(figures),
            place_name(places),
            ws.fmt(rounded)
        ));
        rounded
    };
    let text = sf::format_sig_figs(rounded, figures);
    ws.step(format!("Written with {} {}: {}", figures, figures_word(figures), text));

    ws.output_text(out::ROUNDED, rounded, text);
    Ok(())
}

fn operands(ws: &Worksheet<'_>) -> CalcResult<Vec<(String, SigFigAnalysis)>> {
    let items = ws.list(OPERANDS)?;
    if items.len() < 2 {
        return Err(ws.invalid(OPERANDS, "Enter at least two values"));
    }
    items
        .into_iter()
        .map(|item| {
            sf::analyze(item)
                .map(|a| (item.to_string(), a))
                .ok_or_else(|| CalcError::invalid_input(OPERANDS.name, item, "Not a valid number"))
        })
        .collect()
}

pub(super) fn sum(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let terms = operands(ws)?;
    for (text, analysis) in &terms {
        ws.step(format!("{}: last significant digit in the {} place", text, place_name(analysis.last_place)));
    }
    let analyses: Vec<SigFigAnalysis> = terms.iter().map(|(_, a)| *a).collect();
    let place = sf::sum_precision(&analyses).ok_or_else(|| ws.invalid(OPERANDS, "Enter at least two values"))?;
    ws.step(format!("Least precise place: {}", place_name(place)));

    let raw: f64 = analyses.iter().map(|a| a.value).sum();
    let written: Vec<&str> = terms.iter().map(|(t, _)| t.as_str()).collect();
    ws.step(format!("Sum: {} = {}", written.join(" + "), ws.fmt(raw)));
    let rounded = sf::round_to_place(raw, place);
    let text = format_fixed(rounded, place);
    ws.step(format!("Round to the {} place: {}", place_name(place), text));

    ws.output_text(out::SUM, rounded, text);
    ws.output(out::LAST_PLACE, place as f64);
    Ok(())
}

pub(super) fn product(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let terms = operands(ws)?;
    for (text, analysis) in &terms {
        ws.step(format!("{}: {} {}", text, analysis.count, figures_word(analysis.count)));
    }
    let analyses: Vec<SigFigAnalysis> = terms.iter().map(|(_, a)| *a).collect();
    let figures =
        sf::product_precision(&analyses).ok_or_else(|| ws.invalid(OPERANDS, "Enter at least two values"))?;
    ws.step(format!("Fewest significant figures: {}", figures));

    let raw: f64 = analyses.iter().map(|a| a.value).product();
    let written: Vec<&str> = terms.iter().map(|(t, _)| t.as_str()).collect();
    ws.step(format!("Product: {} = {}", written.join(" × "), ws.fmt(raw)));
    let rounded = sf::round_to_sig_figs(raw, figures);
    let text = sf::format_sig_figs(raw, figures);
    ws.step(format!("Round to {} {}: {}", figures, figures_word(figures), text));

    ws.output_text(out::PRODUCT, rounded, text);
    ws.output(out::SIG_FIG_COUNT, figures as f64);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Calculation, Method};

    fn count(text: &str) -> Calculation {
        compute(Method::SigFigCount, &RawInputs::new().with("value", text)).unwrap()
    }

    fn round(value: &str, figures: &str) -> Calculation {
        compute(
            Method::SigFigRound,
            &RawInputs::new().with("value", value).with("figures", figures),
        )
        .unwrap()
    }

    #[test]
    fn test_count_rules() {
        assert_eq!(count("0.00450").value("significant_figures"), Some(3.0));
        assert_eq!(count("1200").value("significant_figures"), Some(2.0));
        assert_eq!(count("1200.").value("significant_figures"), Some(4.0));
        assert_eq!(count("1.050e-3").value("significant_figures"), Some(4.0));
        assert_eq!(count("0").value("significant_figures"), Some(1.0));
        assert_eq!(count("1,200").value("significant_figures"), Some(2.0));
    }

    #[test]
    fn test_count_rejects_out_of_range_exponent() {
        let err = compute(Method::SigFigCount, &RawInputs::new().with("value", "1e-2147483648")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("value"));

        let err = compute(Method::SigFigSum, &RawInputs::new().with("values", "1.5 2e-2147483648")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_count_explains_zeros() {
        let calc = count("0.00450");
        assert_eq!(calc.steps[0].text, "Leading zeros (3) do not count");
        assert_eq!(calc.steps[1].text, "Trailing zeros (1) count because a decimal point is written");
        assert_eq!(
            calc.steps[2].text,
            "0.00450 has 3 significant figures, the last in the 10^-5 place"
        );

        let calc = count("2500");
        assert_eq!(calc.steps[0].text, "Trailing zeros (2) do not count without a decimal point");
        assert_eq!(calc.value("last_place"), Some(-2.0));
    }

    #[test]
    fn test_count_rejects_garbage() {
        let err = compute(Method::SigFigCount, &RawInputs::new().with("value", "12a")).unwrap_err();
        assert_eq!(err.field(), Some("value"));
    }

    #[test]
    fn test_round_keeps_trailing_zeros() {
        let calc = round("1.2", "3");
        assert_eq!(calc.output("rounded").unwrap().text.as_deref(), Some("1.20"));

        let calc = round("123.456", "4");
        assert_eq!(calc.value("rounded"), Some(123.5));
        assert_eq!(calc.output("rounded").unwrap().text.as_deref(), Some("123.5"));

        let calc = round("9.996", "3");
        assert_eq!(calc.output("rounded").unwrap().text.as_deref(), Some("10.0"));
    }

    #[test]
    fn test_round_rejects_bad_figures() {
        for figures in ["0", "2.5", "-1", "40"] {
            let err = compute(
                Method::SigFigRound,
                &RawInputs::new().with("value", "1.5").with("figures", figures),
            )
            .unwrap_err();
            assert_eq!(err.field(), Some("figures"), "{} accepted", figures);
        }
    }

    #[test]
    fn test_sum_uses_least_precise_place() {
        let calc = compute(Method::SigFigSum, &RawInputs::new().with("values", "12.11, 18.0, 1.013")).unwrap();
        let sum = calc.output("sum").unwrap();
        assert_eq!(sum.text.as_deref(), Some("31.1"));
        assert!((sum.value - 31.1).abs() < 1e-12);
        assert_eq!(calc.value("last_place"), Some(1.0));
    }

    #[test]
    fn test_product_uses_fewest_figures() {
        let calc = compute(Method::SigFigProduct, &RawInputs::new().with("values", "12.11 18.0 1.013")).unwrap();
        assert_eq!(calc.output("product").unwrap().text.as_deref(), Some("221"));
        assert_eq!(calc.value("significant_figures"), Some(3.0));

        let calc = compute(Method::SigFigProduct, &RawInputs::new().with("values", "2.0 3")).unwrap();
        assert_eq!(calc.output("product").unwrap().text.as_deref(), Some("6"));
    }

    #[test]
    fn test_operand_errors() {
        let err = compute(Method::SigFigSum, &RawInputs::new().with("values", "4.2")).unwrap_err();
        assert_eq!(err.field(), Some("values"));
        let err = compute(Method::SigFigProduct, &RawInputs::new().with("values", "4.2 x")).unwrap_err();
        assert_eq!(err, crate::errors::CalcError::invalid_input("values", "x", "Not a valid number"));
    }
}
