//! Circle, sphere and rectangle methods.

use super::fields::{CIRCUMFERENCE, DENSITY, DIAMETER, LENGTH, MASS, RADIUS, WIDTH};
use super::outputs as out;
use super::worksheet::Worksheet;
use crate::equations::geometry as eq;
use crate::errors::{CalcError, CalcResult};

pub(super) fn area_from_radius(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let r = ws.positive(RADIUS)?;

    let r_squared = r * r;
    ws.step(format!("Square the radius: r² = {}² = {}", ws.fmt(r), ws.fmt(r_squared)));
    let area = eq::circle_area_from_radius(r);
    ws.step(format!("Multiply by π: A = π × {} = {}", ws.fmt(r_squared), ws.fmt(area)));

    ws.output(out::AREA, area);
    ws.output(out::RADIUS, r);
    Ok(())
}

pub(super) fn area_from_diameter(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let d = ws.positive(DIAMETER)?;

    let d_squared = d * d;
    ws.step(format!("Square the diameter: d² = {}² = {}", ws.fmt(d), ws.fmt(d_squared)));
    let area = eq::circle_area_from_diameter(d);
    ws.step(format!("A = π × d² / 4 = π × {} / 4 = {}", ws.fmt(d_squared), ws.fmt(area)));
    let r = d / 2.0;
    ws.step(format!("Radius: r = d / 2 = {}", ws.fmt(r)));

    ws.output(out::AREA, area);
    ws.output(out::RADIUS, r);
    Ok(())
}

pub(super) fn area_from_circumference(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let c = ws.positive(CIRCUMFERENCE)?;

    let c_squared = c * c;
    ws.step(format!("Square the circumference: C² = {}² = {}", ws.fmt(c), ws.fmt(c_squared)));
    let area = eq::circle_area_from_circumference(c);
    ws.step(format!("A = C² / (4π) = {} / {} = {}", ws.fmt(c_squared), ws.fmt(4.0 * std::f64::consts::PI), ws.fmt(area)));
    let r = eq::radius_from_circumference(c);
    ws.step(format!("Radius: r = C / (2π) = {}", ws.fmt(r)));

    ws.output(out::AREA, area);
    ws.output(out::RADIUS, r);
    Ok(())
}

fn sphere_from_radius(ws: &mut Worksheet<'_>, r: f64, volume: f64) {
    ws.step(format!("Cube the radius: r³ = {}³ = {}", ws.fmt(r), ws.fmt(r.powi(3))));
    ws.step(format!("V = (4/3) × π × r³ = {}", ws.fmt(volume)));
    let surface = eq::sphere_surface_area(r);
    ws.step(format!("Surface area: S = 4πr² = {}", ws.fmt(surface)));

    ws.output(out::VOLUME, volume);
    ws.output(out::SURFACE_AREA, surface);
}

pub(super) fn volume_from_radius(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let r = ws.positive(RADIUS)?;
    let volume = eq::sphere_volume_from_radius(r);
    sphere_from_radius(ws, r, volume);
    Ok(())
}

pub(super) fn volume_from_diameter(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let d = ws.positive(DIAMETER)?;

    let d_cubed = d.powi(3);
    ws.step(format!("Cube the diameter: d³ = {}³ = {}", ws.fmt(d), ws.fmt(d_cubed)));
    let volume = eq::sphere_volume_from_diameter(d);
    ws.step(format!("V = π × d³ / 6 = {}", ws.fmt(volume)));
    let surface = eq::sphere_surface_area(d / 2.0);
    ws.step(format!("Surface area: S = 4π(d/2)² = {}", ws.fmt(surface)));

    ws.output(out::VOLUME, volume);
    ws.output(out::SURFACE_AREA, surface);
    Ok(())
}

pub(super) fn rectangle_diagonal(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let l = ws.positive(LENGTH)?;
    let w = ws.positive(WIDTH)?;

    let (l2, w2) = (l * l, w * w);
    ws.step(format!("Square the sides: l² = {}, w² = {}", ws.fmt(l2), ws.fmt(w2)));
    ws.step(format!("Add: l² + w² = {}", ws.fmt(l2 + w2)));
    let diagonal = eq::rectangle_diagonal(l, w);
    ws.step(format!("Take the square root: d = √{} = {}", ws.fmt(l2 + w2), ws.fmt(diagonal)));

    ws.output(out::DIAGONAL, diagonal);
    Ok(())
}

/// Any two of density, mass and radius determine the third.
pub(super) fn sphere_density(ws: &mut Worksheet<'_>) -> CalcResult<()> {
    let density = ws.optional_positive(DENSITY)?;
    let mass = ws.optional_positive(MASS)?;
    let radius = ws.optional_positive(RADIUS)?;

    let provided = [density, mass, radius].iter().filter(|v| v.is_some()).count();

    let (density, mass, radius, volume) = match (density, mass, radius) {
        (entered, Some(m), Some(r)) => {
            if entered.is_some() {
                ws.step("All three values entered; density is recomputed from mass and radius");
            }
            let volume = eq::sphere_volume_from_radius(r);
            ws.step(format!("Volume: V = (4/3)πr³ = {}", ws.fmt(volume)));
            let rho = m / volume;
            ws.step(format!("Density: ρ = m / V = {} / {} = {}", ws.fmt(m), ws.fmt(volume), ws.fmt(rho)));
            (rho, m, r, volume)
        }
        (Some(rho), None, Some(r)) => {
            let volume = eq::sphere_volume_from_radius(r);
            ws.step(format!("Volume: V = (4/3)πr³ = {}", ws.fmt(volume)));
            let m = rho * volume;
            ws.step(format!("Mass: m = ρ × V = {} × {} = {}", ws.fmt(rho), ws.fmt(volume), ws.fmt(m)));
            (rho, m, r, volume)
        }
        (Some(rho), Some(m), None) => {
            let volume = m / rho;
            ws.step(format!("Volume: V = m / ρ = {} / {} = {}", ws.fmt(m), ws.fmt(rho), ws.fmt(volume)));
            let r = eq::sphere_radius_from_volume(volume);
            ws.step(format!("Radius: r = ∛(3V / 4π) = {}", ws.fmt(r)));
            (rho, m, r, volume)
        }
        _ => {
            return Err(CalcError::insufficient(
                2,
                provided,
                &[DENSITY.name, MASS.name, RADIUS.name],
            ))
        }
    };

    ws.output(out::DENSITY, density);
    ws.output(out::MASS, mass);
    ws.output(out::RADIUS, radius);
    ws.output(out::VOLUME, volume);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::inputs::RawInputs;
    use crate::methods::{compute, Method};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_area_from_radius_reference() {
        let calc = compute(Method::AreaFromRadius, &RawInputs::new().with("radius", "5")).unwrap();
        assert_eq!(calc.value("area"), Some(PI * 25.0));
        assert_eq!(calc.output("area").unwrap().unit, "m²");
        assert_eq!(calc.step_lines()[1], "Step 2: Multiply by π: A = π × 25 = 78.5398");
    }

    #[test]
    fn test_area_variants_agree() {
        let r = 0.35;
        let from_r = compute(Method::AreaFromRadius, &RawInputs::new().with("radius", r.to_string())).unwrap();
        let from_d = compute(Method::AreaFromDiameter, &RawInputs::new().with("diameter", (2.0 * r).to_string())).unwrap();
        let from_c = compute(
            Method::AreaFromCircumference,
            &RawInputs::new().with("circumference", (2.0 * PI * r).to_string()),
        )
        .unwrap();
        let a = from_r.value("area").unwrap();
        assert_relative_eq!(from_d.value("area").unwrap(), a, max_relative = 1e-12);
        assert_relative_eq!(from_c.value("area").unwrap(), a, max_relative = 1e-12);
        assert_relative_eq!(from_c.value("radius").unwrap(), r, max_relative = 1e-12);
    }

    #[test]
    fn test_unit_conversion_step() {
        let calc = compute(Method::AreaFromDiameter, &RawInputs::new().with_unit("diameter", "20", "cm")).unwrap();
        assert_eq!(calc.steps[0].text, "Convert diameter: 20 cm = 0.2 m");
        assert_relative_eq!(calc.value("area").unwrap(), PI * 0.01, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_rejected() {
        for text in ["0", "-3"] {
            let err = compute(Method::AreaFromRadius, &RawInputs::new().with("radius", text)).unwrap_err();
            assert_eq!(err.field(), Some("radius"));
        }
        let err = compute(Method::VolumeFromRadius, &RawInputs::new().with("radius", "five")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_misplaced_commas_rejected() {
        for text in ["1,5", "1,2,3"] {
            let err = compute(Method::AreaFromRadius, &RawInputs::new().with("radius", text)).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "{:?} accepted", text);
            assert_eq!(err.field(), Some("radius"));
        }
        let calc = compute(Method::AreaFromRadius, &RawInputs::new().with_unit("radius", "1,000", "mm")).unwrap();
        assert_eq!(calc.value("radius"), Some(1.0));
    }

    #[test]
    fn test_sphere_volume_and_surface() {
        let calc = compute(Method::VolumeFromRadius, &RawInputs::new().with("radius", "3")).unwrap();
        assert_relative_eq!(calc.value("volume").unwrap(), 36.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(calc.value("surface_area").unwrap(), 36.0 * PI, max_relative = 1e-12);

        let by_d = compute(Method::VolumeFromDiameter, &RawInputs::new().with("diameter", "6")).unwrap();
        assert_relative_eq!(by_d.value("volume").unwrap(), 36.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn test_rectangle_diagonal_exact() {
        let inputs = RawInputs::new().with("length", "8").with("width", "6");
        let calc = compute(Method::RectangleDiagonal, &inputs).unwrap();
        assert_eq!(calc.value("diagonal"), Some(10.0));
        assert_eq!(calc.step_lines().last().unwrap(), "Step 3: Take the square root: d = √100 = 10");

        let err = compute(Method::RectangleDiagonal, &RawInputs::new().with("length", "8").with("width", "0"))
            .unwrap_err();
        assert_eq!(err.field(), Some("width"));
    }

    #[test]
    fn test_sphere_density_modes() {
        let volume = 4.0 / 3.0 * PI;
        let from_mr = compute(Method::SphereDensity, &RawInputs::new().with("mass", "10").with("radius", "1")).unwrap();
        assert_relative_eq!(from_mr.value("density").unwrap(), 10.0 / volume, max_relative = 1e-12);
        assert_relative_eq!(from_mr.value("volume").unwrap(), volume, max_relative = 1e-12);

        let from_dr =
            compute(Method::SphereDensity, &RawInputs::new().with("density", "1000").with("radius", "1")).unwrap();
        assert_relative_eq!(from_dr.value("mass").unwrap(), 1000.0 * volume, max_relative = 1e-12);

        let from_dm = compute(
            Method::SphereDensity,
            &RawInputs::new().with("density", "1000").with("mass", (1000.0 * volume).to_string()),
        )
        .unwrap();
        assert_relative_eq!(from_dm.value("radius").unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_sphere_density_all_three_recomputes_density() {
        let inputs = RawInputs::new().with("density", "1").with("mass", "10").with("radius", "1");
        let calc = compute(Method::SphereDensity, &inputs).unwrap();
        assert!(calc.value("density").unwrap() > 2.0);
        assert!(calc.steps[0].text.contains("recomputed"));
    }

    #[test]
    fn test_sphere_density_needs_two() {
        let err = compute(Method::SphereDensity, &RawInputs::new().with("mass", "10")).unwrap_err();
        assert_eq!(
            err,
            crate::errors::CalcError::InsufficientInput {
                required: 2,
                provided: 1,
                fields: "density, mass, radius".to_string(),
            }
        );
        let err = compute(Method::SphereDensity, &RawInputs::new().with("mass", "10").with("radius", "-1"))
            .unwrap_err();
        assert_eq!(err.field(), Some("radius"));
    }
}
