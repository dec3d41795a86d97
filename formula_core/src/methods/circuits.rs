//! Reactance, impedance, resonance and RLC power methods.

use super::fields::{CAPACITANCE, FREQUENCY, INDUCTANCE, RESISTANCE, VOLTAGE};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::circuits as eq;
use crate::errors::CalcResult;

/// Positive R, L, C and f of an RLC network, in that order
fn rlc(ws: &mut Worksheet<'_>) -> CalcResult<(f64, f64, f64, f64)> {
    let r = ws.positive(RESISTANCE)?;
    let l = ws.positive(INDUCTANCE)?;
    let c = ws.positive(CAPACITANCE)?;
    let f = ws.positive(FREQUENCY)?;
    Ok((r, l, c, f))
}

fn reactances(ws: &mut Worksheet<'_>, f: f64, l: f64, c: f64) -> (f64, f64) {
    let xl = eq::inductive_reactance(f, l);
    ws.step(format!("Inductive reactance: XL = 2πfL = {} Ω", ws.fmt(xl)));
    let xc = eq::capacitive_reactance(f, c);
    ws.step(format!("Capacitive reactance: XC = 1/(2πfC) = {} Ω", ws.fmt(xc)));
    (xl, xc)
}

pub(super) fn capacitive_reactance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let f = ws.positive(FREQUENCY)?;
    let c = ws.positive(CAPACITANCE)?;

    let two_pi_fc = eq::angular_frequency(f) * c;
    ws.step(format!("2πfC = 2π × {} × {} = {}", ws.fmt(f), ws.fmt(c), ws.fmt(two_pi_fc)));
    let xc = eq::capacitive_reactance(f, c);
    ws.step(format!("XC = 1 / {} = {} Ω", ws.fmt(two_pi_fc), ws.fmt(xc)));

    ws.output(out::CAPACITIVE_REACTANCE, xc);
    Ok(())
}

pub(super) fn inductive_reactance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let f = ws.positive(FREQUENCY)?;
    let l = ws.positive(INDUCTANCE)?;

    let omega = eq::angular_frequency(f);
    ws.step(format!("ω = 2πf = {} rad/s", ws.fmt(omega)));
    let xl = eq::inductive_reactance(f, l);
    ws.step(format!("XL = ωL = {} × {} = {} Ω", ws.fmt(omega), ws.fmt(l), ws.fmt(xl)));

    ws.output(out::INDUCTIVE_REACTANCE, xl);
    Ok(())
}

pub(super) fn series_impedance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let (r, l, c, f) = rlc(ws)?;
    let (xl, xc) = reactances(ws, f, l, c);

    let x = xl - xc;
    ws.step(format!("Net reactance: X = XL − XC = {} Ω", ws.fmt(x)));
    let z = eq::series_impedance(r, x);
    ws.step(format!(
        "Impedance: |Z| = √(R² + X²) = √({}² + {}²) = {} Ω",
        ws.fmt(r),
        ws.fmt(x),
        ws.fmt(z.magnitude)
    ));
    ws.step(format!(
        "Phase: φ = atan2(X, R) = {} rad ({}°)",
        ws.fmt(z.phase),
        ws.fmt(z.phase.to_degrees())
    ));

    ws.output(out::INDUCTIVE_REACTANCE, xl);
    ws.output(out::CAPACITIVE_REACTANCE, xc);
    ws.output(out::NET_REACTANCE, x);
    ws.output(out::IMPEDANCE, z.magnitude);
    ws.output(out::PHASE, z.phase);
    Ok(())
}

pub(super) fn parallel_impedance(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let (r, l, c, f) = rlc(ws)?;
    let (xl, xc) = reactances(ws, f, l, c);

    let g = 1.0 / r;
    ws.step(format!("Conductance: G = 1/R = {} S", ws.fmt(g)));
    let b = 1.0 / xc - 1.0 / xl;
    ws.step(format!("Susceptance: B = 1/XC − 1/XL = {} S", ws.fmt(b)));
    let z = eq::parallel_impedance(g, b);
    ws.step(format!("Impedance: |Z| = 1/√(G² + B²) = {} Ω", ws.fmt(z.magnitude)));
    ws.step(format!(
        "Phase: φ = −atan2(B, G) = {} rad ({}°)",
        ws.fmt(z.phase),
        ws.fmt(z.phase.to_degrees())
    ));

    ws.output(out::INDUCTIVE_REACTANCE, xl);
    ws.output(out::CAPACITIVE_REACTANCE, xc);
    ws.output(out::SUSCEPTANCE, b);
    ws.output(out::IMPEDANCE, z.magnitude);
    ws.output(out::PHASE, z.phase);
    Ok(())
}

pub(super) fn resonant_frequency(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let l = ws.positive(INDUCTANCE)?;
    let c = ws.positive(CAPACITANCE)?;
    let r = ws.optional_positive(RESISTANCE)?;

    let lc = l * c;
    ws.step(format!("LC = {} × {} = {}", ws.fmt(l), ws.fmt(c), ws.fmt(lc)));
    let f0 = eq::resonant_frequency(l, c);
    ws.step(format!("Resonant frequency: f₀ = 1/(2π√(LC)) = {} Hz", ws.fmt(f0)));
    let omega0 = eq::angular_frequency(f0);
    ws.step(format!("Angular frequency: ω₀ = 2πf₀ = {} rad/s", ws.fmt(omega0)));
    let (xl, xc) = reactances(ws, f0, l, c);

    ws.output(out::RESONANT_FREQUENCY, f0);
    ws.output(out::ANGULAR_FREQUENCY, omega0);
    ws.output(out::INDUCTIVE_REACTANCE, xl);
    ws.output(out::CAPACITIVE_REACTANCE, xc);

    if let Some(r) = r {
        let q = eq::series_quality_factor(r, l, c);
        ws.step(format!("Quality factor: Q = (1/R)√(L/C) = {}", ws.fmt(q)));
        let bandwidth = f0 / q;
        ws.step(format!("Bandwidth: BW = f₀/Q = {} Hz", ws.fmt(bandwidth)));
        ws.step(format!("At resonance XL = XC, so |Z| = R = {} Ω", ws.fmt(r)));

        ws.output(out::QUALITY_FACTOR, q);
        ws.output(out::BANDWIDTH, bandwidth);
        ws.output(out::IMPEDANCE, r);
    }
    Ok(())
}

pub(super) fn rlc_power(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let v = ws.positive(VOLTAGE)?;
    let (r, l, c, f) = rlc(ws)?;
    let (xl, xc) = reactances(ws, f, l, c);

    let x = xl - xc;
    let z = eq::series_impedance(r, x).magnitude;
    ws.step(format!("Impedance: |Z| = √(R² + (XL − XC)²) = {} Ω", ws.fmt(z)));
    let i = v / z;
    ws.step(format!("Current: I = V/|Z| = {} / {} = {} A", ws.fmt(v), ws.fmt(z), ws.fmt(i)));
    let pf = r / z;
    ws.step(format!("Power factor: PF = R/|Z| = {}", ws.fmt(pf)));
    let p = eq::power_from_current_resistance(i, r);
    ws.step(format!("Real power: P = I²R = {} W", ws.fmt(p)));
    let q = i * i * x;
    ws.step(format!("Reactive power: Q = I²X = {} var", ws.fmt(q)));
    let s = eq::power_from_voltage_current(v, i);
    ws.step(format!("Apparent power: S = VI = {} VA", ws.fmt(s)));

    ws.output(out::IMPEDANCE, z);
    ws.output(out::CURRENT, i);
    ws.output(out::POWER_FACTOR, pf);
    ws.output(out::REAL_POWER, p);
    ws.output(out::REACTIVE_POWER, q);
    ws.output(out::APPARENT_POWER, s);
    Ok(())
}
