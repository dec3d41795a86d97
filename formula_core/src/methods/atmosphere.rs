//! Dew point method.

use super::fields::{HUMIDITY, TEMPERATURE};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::atmosphere::{self as eq, MAGNUS_A, MAGNUS_B, MAGNUS_E0_HPA};
use crate::errors::{CalcError, CalcResult};

const HPA_TO_PA: f64 = 100.0;

pub(super) fn dew_point(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let t = ws.value(TEMPERATURE)?;
    if t <= -MAGNUS_B {
        return Err(ws.invalid(TEMPERATURE, format!("Temperature must be above {} °C", -MAGNUS_B)));
    }
    let rh = ws.value(HUMIDITY)?;
    if !(0.0..=100.0).contains(&rh) {
        return Err(ws.invalid(HUMIDITY, "Relative humidity must be between 0 and 100 %"));
    }
    if rh == 0.0 {
        return Err(CalcError::calculation_failed(
            "Dew point",
            "Relative humidity of 0 % has no finite dew point",
        ));
    }

    let dp = eq::dew_point(t, rh);
    ws.step(format!(
        "Saturation vapor pressure: es = {} × exp({} × {} / ({} + {})) = {} hPa",
        ws.fmt(MAGNUS_E0_HPA),
        ws.fmt(MAGNUS_A),
        ws.fmt(t),
        ws.fmt(t),
        ws.fmt(MAGNUS_B),
        ws.fmt(dp.saturation_hpa)
    ));
    ws.step(format!(
        "Actual vapor pressure: e = {}/100 × {} = {} hPa",
        ws.fmt(rh),
        ws.fmt(dp.saturation_hpa),
        ws.fmt(dp.vapor_hpa)
    ));
    ws.step(format!("γ = ln(e / {}) = {}", ws.fmt(MAGNUS_E0_HPA), ws.fmt(dp.gamma)));

    let mut td = dp.dew_point_c;
    ws.step(format!(
        "Dew point: Td = {} × γ / ({} − γ) = {} °C",
        ws.fmt(MAGNUS_B),
        ws.fmt(MAGNUS_A),
        ws.fmt(td)
    ));

    if rh == 100.0 && td != t && (td - t).abs() <= 1e-9 * t.abs().max(1.0) {
        td = t;
        ws.step(format!("Saturated air: the dew point equals the air temperature, {} °C", ws.fmt(t)));
    } else if td > t {
        return Err(CalcError::calculation_failed(
            "Dew point",
            format!("Dew point {} °C exceeds the air temperature {} °C", ws.fmt(td), ws.fmt(t)),
        ));
    }

    ws.output(out::DEW_POINT, td);
    ws.output(out::SATURATION_PRESSURE, dp.saturation_hpa * HPA_TO_PA);
    ws.output(out::VAPOR_PRESSURE, dp.vapor_hpa * HPA_TO_PA);
    Ok(())
}
