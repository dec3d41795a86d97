//! Friction, motor torque and escape velocity methods.

use std::f64::consts::FRAC_PI_2;

use super::fields::{
    ANGLE, COEFFICIENT, CURRENT, EFFICIENCY, FORCE, FRICTION_FORCE, GRAVITY, INPUT_POWER, LEVER_ARM, MASS,
    NORMAL_FORCE, POWER, RADIUS, SPEED, TORQUE_CONSTANT, VELOCITY,
};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::mechanics::{self as eq, GRAVITATIONAL_CONSTANT, STANDARD_GRAVITY};
use crate::errors::CalcResult;

// ----------------------------------------------------------------------------
// Friction
// ----------------------------------------------------------------------------

pub(super) fn friction_coefficient(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let f = ws.positive(FRICTION_FORCE)?;
    let n = ws.positive(NORMAL_FORCE)?;

    let mu = eq::friction_coefficient(f, n);
    ws.step(format!("μ = F / N = {} / {} = {}", ws.fmt(f), ws.fmt(n), ws.fmt(mu)));

    ws.output(out::FRICTION_COEFFICIENT, mu);
    Ok(())
}

pub(super) fn friction_force(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let mu = ws.positive(COEFFICIENT)?;
    let n = ws.positive(NORMAL_FORCE)?;

    let f = eq::friction_force(mu, n);
    ws.step(format!("F = μN = {} × {} = {} N", ws.fmt(mu), ws.fmt(n), ws.fmt(f)));

    ws.output(out::FRICTION_FORCE, f);
    Ok(())
}

pub(super) fn inclined_friction(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let m = ws.positive(MASS)?;
    let theta = ws.value(ANGLE)?;
    if !(0.0..FRAC_PI_2).contains(&theta) {
        return Err(ws.invalid(ANGLE, "Incline angle must be at least 0° and less than 90°"));
    }
    let g = match ws.optional_positive(GRAVITY)? {
        Some(g) => g,
        None => {
            ws.step(format!("Using standard gravity g = {} m/s²", ws.fmt(STANDARD_GRAVITY)));
            STANDARD_GRAVITY
        }
    };
    let mu = ws.optional(COEFFICIENT)?;
    if mu.is_some_and(|mu| mu < 0.0) {
        return Err(ws.invalid(COEFFICIENT, "Coefficient of friction must not be negative"));
    }

    let weight = m * g;
    ws.step(format!("Weight: mg = {} × {} = {} N", ws.fmt(m), ws.fmt(g), ws.fmt(weight)));
    let (normal, parallel) = eq::incline_components(m, g, theta);
    ws.step(format!(
        "Normal force: N = mg·cos θ = {} × cos({}°) = {} N",
        ws.fmt(weight),
        ws.fmt(theta.to_degrees()),
        ws.fmt(normal)
    ));
    ws.step(format!(
        "Down-slope force: mg·sin θ = {} × sin({}°) = {} N",
        ws.fmt(weight),
        ws.fmt(theta.to_degrees()),
        ws.fmt(parallel)
    ));

    ws.output(out::NORMAL_FORCE, normal);
    ws.output(out::PARALLEL_FORCE, parallel);

    if let Some(mu) = mu {
        let f = eq::friction_force(mu, normal);
        ws.step(format!("Friction force: F = μN = {} × {} = {} N", ws.fmt(mu), ws.fmt(normal), ws.fmt(f)));
        ws.output(out::FRICTION_FORCE, f);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Torque
// ----------------------------------------------------------------------------

pub(super) fn torque_from_power(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let p = ws.positive(POWER)?;
    let omega = ws.positive(SPEED)?;

    let torque = eq::torque_from_power(p, omega);
    ws.step(format!("τ = P / ω = {} / {} = {} N·m", ws.fmt(p), ws.fmt(omega), ws.fmt(torque)));

    ws.output(out::ANGULAR_VELOCITY, omega);
    ws.output(out::TORQUE, torque);
    Ok(())
}

pub(super) fn torque_from_input_power(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let p_in = ws.positive(INPUT_POWER)?;
    let eta = ws.value(EFFICIENCY)?;
    if eta <= 0.0 || eta > 100.0 {
        return Err(ws.invalid(EFFICIENCY, "Efficiency must be greater than 0 and at most 100 %"));
    }
    let omega = ws.positive(SPEED)?;

    let p_out = p_in * eta / 100.0;
    ws.step(format!(
        "Shaft power: P = Pin × η = {} × {}% = {} W",
        ws.fmt(p_in),
        ws.fmt(eta),
        ws.fmt(p_out)
    ));
    let torque = eq::torque_from_power(p_out, omega);
    ws.step(format!("τ = P / ω = {} / {} = {} N·m", ws.fmt(p_out), ws.fmt(omega), ws.fmt(torque)));

    ws.output(out::OUTPUT_POWER, p_out);
    ws.output(out::ANGULAR_VELOCITY, omega);
    ws.output(out::TORQUE, torque);
    Ok(())
}

pub(super) fn torque_from_current(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let kt = ws.positive(TORQUE_CONSTANT)?;
    let i = ws.positive(CURRENT)?;

    let torque = eq::torque_from_current(kt, i);
    ws.step(format!("τ = Kt × I = {} × {} = {} N·m", ws.fmt(kt), ws.fmt(i), ws.fmt(torque)));

    ws.output(out::TORQUE, torque);
    Ok(())
}

pub(super) fn torque_from_force(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let f = ws.positive(FORCE)?;
    let r = ws.positive(LEVER_ARM)?;

    let torque = eq::torque_from_force(f, r);
    ws.step(format!("τ = F × r = {} × {} = {} N·m", ws.fmt(f), ws.fmt(r), ws.fmt(torque)));

    ws.output(out::TORQUE, torque);
    Ok(())
}

// ----------------------------------------------------------------------------
// Escape velocity
// ----------------------------------------------------------------------------

pub(super) fn escape_velocity(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let m = ws.positive(MASS)?;
    let r = ws.positive(RADIUS)?;

    let two_gm = 2.0 * GRAVITATIONAL_CONSTANT * m;
    ws.step(format!(
        "2GM = 2 × {} × {} = {}",
        ws.fmt(GRAVITATIONAL_CONSTANT),
        ws.fmt(m),
        ws.fmt(two_gm)
    ));
    let v = eq::escape_velocity(m, r);
    ws.step(format!("v = √(2GM / r) = √({} / {}) = {} m/s", ws.fmt(two_gm), ws.fmt(r), ws.fmt(v)));

    ws.output(out::ESCAPE_VELOCITY, v);
    Ok(())
}

pub(super) fn mass_from_escape_velocity(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let v = ws.positive(VELOCITY)?;
    let r = ws.positive(RADIUS)?;

    let v2r = v * v * r;
    ws.step(format!("v²r = {}² × {} = {}", ws.fmt(v), ws.fmt(r), ws.fmt(v2r)));
    let m = eq::mass_from_escape_velocity(v, r);
    ws.step(format!(
        "M = v²r / (2G) = {} / {} = {} kg",
        ws.fmt(v2r),
        ws.fmt(2.0 * GRAVITATIONAL_CONSTANT),
        ws.fmt(m)
    ));

    ws.output(out::MASS, m);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Method};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_friction_pair() {
        let calc = compute(
            Method::FrictionCoefficient,
            &RawInputs::new().with("friction_force", "30").with("normal_force", "100"),
        )
        .unwrap();
        assert_relative_eq!(calc.value("coefficient").unwrap(), 0.3);

        let calc = compute(
            Method::FrictionForce,
            &RawInputs::new().with("coefficient", "0.3").with_unit("normal_force", "0.1", "kN"),
        )
        .unwrap();
        assert_relative_eq!(calc.value("friction_force").unwrap(), 30.0, max_relative = 1e-12);

        let err = compute(
            Method::FrictionCoefficient,
            &RawInputs::new().with("friction_force", "30").with("normal_force", "0"),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("normal_force"));
    }

    #[test]
    fn test_friction_pair_rejects_zero() {
        let err = compute(
            Method::FrictionCoefficient,
            &RawInputs::new().with("friction_force", "0").with("normal_force", "10"),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("friction_force"));

        let err = compute(
            Method::FrictionForce,
            &RawInputs::new().with("coefficient", "0").with("normal_force", "10"),
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("coefficient"));
    }

    #[test]
    fn test_incline_defaults_to_standard_gravity() {
        let inputs = RawInputs::new().with("mass", "10").with("angle", "30").with("coefficient", "0.2");
        let calc = compute(Method::InclinedFriction, &inputs).unwrap();

        let weight = 10.0 * 9.80665;
        let normal = weight * (PI / 6.0).cos();
        assert_relative_eq!(calc.value("normal_force").unwrap(), normal, max_relative = 1e-12);
        assert_relative_eq!(calc.value("parallel_force").unwrap(), weight / 2.0, max_relative = 1e-12);
        assert_relative_eq!(calc.value("friction_force").unwrap(), 0.2 * normal, max_relative = 1e-12);
        assert!(calc.steps.iter().any(|s| s.text.contains("standard gravity")));
    }

    #[test]
    fn test_incline_angle_domain() {
        for (angle, unit) in [("90", "°"), ("-1", "°"), ("2", "rad")] {
            let inputs = RawInputs::new().with("mass", "10").with_unit("angle", angle, unit);
            let err = compute(Method::InclinedFriction, &inputs).unwrap_err();
            assert_eq!(err.field(), Some("angle"), "{} {} accepted", angle, unit);
        }
        let flat = compute(Method::InclinedFriction, &RawInputs::new().with("mass", "2").with("angle", "0")).unwrap();
        assert_eq!(flat.value("parallel_force"), Some(0.0));
        assert!(flat.output("friction_force").is_none());
    }

    #[test]
    fn test_torque_from_power_rpm() {
        let inputs = RawInputs::new().with("power", "1500").with("speed", "1500");
        let calc = compute(Method::TorqueFromPower, &inputs).unwrap();
        let omega = 1500.0 * 2.0 * PI / 60.0;
        assert_relative_eq!(calc.value("angular_velocity").unwrap(), omega, max_relative = 1e-12);
        assert_relative_eq!(calc.value("torque").unwrap(), 1500.0 / omega, max_relative = 1e-12);
        assert!(calc.steps[0].text.starts_with("Convert rotational speed: 1500 rpm"));
    }

    #[test]
    fn test_torque_from_input_power() {
        let inputs = RawInputs::new()
            .with_unit("input_power", "2", "kW")
            .with("efficiency", "85")
            .with_unit("speed", "100", "rad/s");
        let calc = compute(Method::TorqueFromInputPower, &inputs).unwrap();
        assert_relative_eq!(calc.value("output_power").unwrap(), 1700.0, max_relative = 1e-12);
        assert_relative_eq!(calc.value("torque").unwrap(), 17.0, max_relative = 1e-12);

        for eta in ["0", "120"] {
            let inputs = RawInputs::new().with("input_power", "100").with("efficiency", eta).with("speed", "100");
            let err = compute(Method::TorqueFromInputPower, &inputs).unwrap_err();
            assert_eq!(err.field(), Some("efficiency"));
        }
    }

    #[test]
    fn test_torque_from_current_and_force() {
        let calc = compute(
            Method::TorqueFromCurrent,
            &RawInputs::new().with_unit("torque_constant", "50", "mN·m/A").with("current", "4"),
        )
        .unwrap();
        assert_relative_eq!(calc.value("torque").unwrap(), 0.2, max_relative = 1e-12);

        let calc = compute(Method::TorqueFromForce, &RawInputs::new().with("force", "20").with("lever_arm", "0.5")).unwrap();
        assert_eq!(calc.value("torque"), Some(10.0));
    }

    #[test]
    fn test_escape_velocity_round_trip() {
        let calc = compute(
            Method::EscapeVelocity,
            &RawInputs::new().with_unit("mass", "1", "M⊕").with_unit("radius", "6371", "km"),
        )
        .unwrap();
        let v = calc.value("escape_velocity").unwrap();
        assert!((v - 11_186.0).abs() < 5.0, "got {}", v);

        let back = compute(
            Method::MassFromEscapeVelocity,
            &RawInputs::new().with("velocity", v.to_string()).with_unit("radius", "6371", "km"),
        )
        .unwrap();
        assert_relative_eq!(back.value("mass").unwrap(), 5.9722e24, max_relative = 1e-9);
    }

    #[test]
    fn test_escape_velocity_steps_use_exponent_notation() {
        let calc = compute(
            Method::EscapeVelocity,
            &RawInputs::new().with("mass", "1000").with("radius", "10"),
        )
        .unwrap();
        assert!(calc.steps[0].text.starts_with("2GM = 2 × 6.674e-11 × 1000 = "), "{}", calc.steps[0].text);

        let calc = compute(
            Method::MassFromEscapeVelocity,
            &RawInputs::new().with("velocity", "10").with("radius", "10"),
        )
        .unwrap();
        assert!(calc.steps[1].text.contains("/ 1.3348e-10 = "), "{}", calc.steps[1].text);
        assert!(calc.step_lines().iter().all(|line| !line.contains("0.0000000")));
    }
}
