//! Power dissipation methods.

use super::fields::{CAPACITANCE, CURRENT, ESR, FREQUENCY, RESISTANCE, VOLTAGE};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::circuits as eq;
use crate::errors::CalcResult;

pub(super) fn from_voltage_resistance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let v = ws.positive(VOLTAGE)?;
    let r = ws.positive(RESISTANCE)?;

    let p = eq::power_from_voltage_resistance(v, r);
    ws.step(format!("P = V²/R = {}² / {} = {} W", ws.fmt(v), ws.fmt(r), ws.fmt(p)));
    let i = v / r;
    ws.step(format!("Current: I = V/R = {} A", ws.fmt(i)));

    ws.output(out::POWER, p);
    ws.output(out::CURRENT, i);
    Ok(())
}

pub(super) fn from_voltage_current(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let v = ws.positive(VOLTAGE)?;
    let i = ws.positive(CURRENT)?;

    let p = eq::power_from_voltage_current(v, i);
    ws.step(format!("P = V × I = {} × {} = {} W", ws.fmt(v), ws.fmt(i), ws.fmt(p)));
    let r = v / i;
    ws.step(format!("Load resistance: R = V/I = {} Ω", ws.fmt(r)));

    ws.output(out::POWER, p);
    ws.output(out::RESISTANCE, r);
    Ok(())
}

pub(super) fn from_current_resistance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let i = ws.positive(CURRENT)?;
    let r = ws.positive(RESISTANCE)?;

    let p = eq::power_from_current_resistance(i, r);
    ws.step(format!("P = I²R = {}² × {} = {} W", ws.fmt(i), ws.fmt(r), ws.fmt(p)));
    let v = i * r;
    ws.step(format!("Voltage drop: V = IR = {} V", ws.fmt(v)));

    ws.output(out::POWER, p);
    ws.output(out::VOLTAGE, v);
    Ok(())
}

pub(super) fn capacitor_esr_loss(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let v = ws.positive(VOLTAGE)?;
    let f = ws.positive(FREQUENCY)?;
    let c = ws.positive(CAPACITANCE)?;
    let esr = ws.positive(ESR)?;

    let xc = eq::capacitive_reactance(f, c);
    ws.step(format!("Capacitive reactance: XC = 1/(2πfC) = {} Ω", ws.fmt(xc)));
    let i = v / xc;
    ws.step(format!("Ripple current: I = V/XC = {} / {} = {} A", ws.fmt(v), ws.fmt(xc), ws.fmt(i)));
    let p = eq::power_from_current_resistance(i, esr);
    ws.step(format!("ESR loss: P = I² × ESR = {}² × {} = {} W", ws.fmt(i), ws.fmt(esr), ws.fmt(p)));

    ws.output(out::CAPACITIVE_REACTANCE, xc);
    ws.output(out::CURRENT, i);
    ws.output(out::POWER, p);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Method};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_ohmic_forms_agree() {
        let vr = compute(
            Method::PowerFromVoltageResistance,
            &RawInputs::new().with("voltage", "12").with("resistance", "6"),
        )
        .unwrap();
        assert_eq!(vr.value("power"), Some(24.0));
        assert_eq!(vr.value("current"), Some(2.0));

        let vi = compute(
            Method::PowerFromVoltageCurrent,
            &RawInputs::new().with("voltage", "12").with_unit("current", "2000", "mA"),
        )
        .unwrap();
        assert_eq!(vi.value("power"), Some(24.0));
        assert_eq!(vi.value("resistance"), Some(6.0));

        let ir = compute(
            Method::PowerFromCurrentResistance,
            &RawInputs::new().with("current", "2").with_unit("resistance", "0.006", "kΩ"),
        )
        .unwrap();
        assert_relative_eq!(ir.value("power").unwrap(), 24.0, max_relative = 1e-12);
        assert_relative_eq!(ir.value("voltage").unwrap(), 12.0, max_relative = 1e-12);
    }

    #[test]
    fn test_esr_loss() {
        let inputs = RawInputs::new()
            .with("voltage", "1")
            .with_unit("frequency", "100", "kHz")
            .with("capacitance", "100")
            .with("esr", "20");
        let calc = compute(Method::CapacitorEsrLoss, &inputs).unwrap();

        let xc = 1.0 / (2.0 * PI * 1e5 * 100e-6);
        assert_relative_eq!(calc.value("capacitive_reactance").unwrap(), xc, max_relative = 1e-9);
        let i = 1.0 / xc;
        assert_relative_eq!(calc.value("power").unwrap(), i * i * 0.02, max_relative = 1e-9);
        assert_eq!(calc.output("power").unwrap().unit, "W");
    }

    #[test]
    fn test_rejects_zero_resistance() {
        let err = compute(
            Method::PowerFromVoltageResistance,
            &RawInputs::new().with("voltage", "12").with("resistance", "0"),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("resistance"));
    }
}
