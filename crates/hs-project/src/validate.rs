//! Study validation. Reports the first violation found.

use crate::schema::{FanDef, GeometryDef, MaterialDef, Study};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Empty list: {field}")]
    Empty { field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and > 0"))
    }
}

fn non_empty<T>(field: &str, values: &[T]) -> Result<(), ValidationError> {
    if values.is_empty() {
        Err(ValidationError::Empty {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    positive("air.density_kg_m3", study.air.density_kg_m3)?;
    positive("air.specific_heat_j_kgk", study.air.specific_heat_j_kgk)?;
    positive("air.conductivity_w_mk", study.air.conductivity_w_mk)?;
    positive("air.viscosity_pa_s", study.air.viscosity_pa_s)?;
    if !(study.air.venturi_loss.is_finite() && study.air.venturi_loss >= 0.0) {
        return Err(invalid(
            "air.venturi_loss",
            study.air.venturi_loss,
            "must be finite and >= 0",
        ));
    }

    if let MaterialDef::Custom {
        conductivity_w_mk,
        density_kg_m3,
    } = study.material
    {
        positive("material.conductivity_w_mk", conductivity_w_mk)?;
        positive("material.density_kg_m3", density_kg_m3)?;
    }

    let angle = study.duct.flare_angle_deg;
    if !(angle.is_finite() && angle > 0.0 && angle < 90.0) {
        return Err(invalid(
            "duct.flare_angle_deg",
            angle,
            "must lie in (0, 90)",
        ));
    }
    positive("duct.min_length_m", study.duct.min_length_m)?;

    non_empty("fans", &study.fans)?;
    let mut names = HashSet::new();
    for fan in &study.fans {
        if !names.insert(fan.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: fan.name.clone(),
                context: "fans".to_string(),
            });
        }
        validate_fan(fan)?;
    }

    let grid = &study.grid;
    non_empty("grid.channel_counts", &grid.channel_counts)?;
    if grid.channel_counts.contains(&0) {
        return Err(invalid("grid.channel_counts", 0, "must be >= 1"));
    }
    for (field, values) in [
        ("grid.fin_thickness_m", &grid.fin_thickness_m),
        ("grid.fin_height_m", &grid.fin_height_m),
        ("grid.base_width_m", &grid.base_width_m),
        ("grid.base_length_m", &grid.base_length_m),
        ("grid.base_thickness_m", &grid.base_thickness_m),
    ] {
        non_empty(field, values)?;
        for &v in values {
            positive(field, v)?;
        }
    }
    if !(grid.min_fin_spacing_m.is_finite() && grid.min_fin_spacing_m >= 0.0) {
        return Err(invalid(
            "grid.min_fin_spacing_m",
            grid.min_fin_spacing_m,
            "must be finite and >= 0",
        ));
    }

    if let Some(reference) = &study.reference {
        validate_geometry(reference)?;
    }
    if let Some(source) = &study.heat_source {
        positive("heat_source.width_m", source.width_m)?;
        positive("heat_source.length_m", source.length_m)?;
    }

    if !study.ambient_c.is_finite() {
        return Err(invalid("ambient_c", study.ambient_c, "must be finite"));
    }

    positive("solver.rel_tol", study.solver.rel_tol)?;
    if study.solver.max_iterations == 0 {
        return Err(invalid("solver.max_iterations", 0, "must be >= 1"));
    }
    let degenerate = study.solver.degenerate_pressure_pa;
    if !(degenerate.is_finite() && degenerate >= 0.0) {
        return Err(invalid(
            "solver.degenerate_pressure_pa",
            degenerate,
            "must be finite and >= 0",
        ));
    }
    positive("thermal.transition_reynolds", study.thermal.transition_reynolds)?;

    Ok(())
}

fn validate_fan(fan: &FanDef) -> Result<(), ValidationError> {
    let context = |field: &str| format!("fans.{}.{}", fan.name, field);

    if fan.name.trim().is_empty() {
        return Err(invalid("fans.name", "\"\"", "must not be blank"));
    }
    if fan.samples.len() < 2 {
        return Err(invalid(
            context("samples"),
            fan.samples.len(),
            "needs at least 2 samples",
        ));
    }
    for [q, p] in &fan.samples {
        if !(q.is_finite() && p.is_finite() && *q >= 0.0 && *p >= 0.0) {
            return Err(invalid(
                context("samples"),
                format!("[{q}, {p}]"),
                "must be finite and >= 0",
            ));
        }
    }
    for pair in fan.samples.windows(2) {
        let ([q0, p0], [q1, p1]) = (pair[0], pair[1]);
        if q1 <= q0 {
            return Err(invalid(context("samples"), q1, "flow must be strictly ascending"));
        }
        if p1 > p0 {
            return Err(invalid(context("samples"), p1, "pressure must not increase"));
        }
    }
    if let Some(frame) = &fan.frame {
        positive(&context("frame.side_m"), frame.side_m)?;
        positive(&context("frame.depth_m"), frame.depth_m)?;
    }
    Ok(())
}

fn validate_geometry(geometry: &GeometryDef) -> Result<(), ValidationError> {
    if geometry.channel_count == 0 {
        return Err(invalid("reference.channel_count", 0, "must be >= 1"));
    }
    positive("reference.fin_thickness_m", geometry.fin_thickness_m)?;
    positive("reference.fin_height_m", geometry.fin_height_m)?;
    positive("reference.base_width_m", geometry.base_width_m)?;
    positive("reference.base_length_m", geometry.base_length_m)?;
    positive("reference.base_thickness_m", geometry.base_thickness_m)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;

    fn minimal() -> Study {
        Study {
            version: 1,
            name: "minimal".to_string(),
            air: AirDef::default(),
            material: MaterialDef::default(),
            duct: DuctDef::default(),
            fans: vec![FanDef {
                name: "fan".to_string(),
                units: SampleUnitsDef::Si,
                samples: vec![[0.0, 60.0], [0.012, 0.0]],
                pin_free_air: true,
                frame: None,
            }],
            grid: GridDef {
                channel_counts: vec![5],
                fin_thickness_m: vec![1e-3],
                fin_height_m: vec![30e-3],
                base_width_m: vec![40e-3],
                base_length_m: vec![0.1],
                base_thickness_m: vec![3e-3],
                min_fin_spacing_m: 1e-4,
            },
            reference: None,
            heat_source: None,
            ambient_c: 25.0,
            solver: SolverDef::default(),
            thermal: ThermalDef::default(),
            volume_metric: VolumeMetricDef::default(),
        }
    }

    #[test]
    fn minimal_study_is_valid() {
        validate_study(&minimal()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let study = Study {
            version: 7,
            ..minimal()
        };
        assert_eq!(
            validate_study(&study),
            Err(ValidationError::UnsupportedVersion { version: 7 })
        );
    }

    #[test]
    fn rejects_empty_catalog_and_axis() {
        let mut study = minimal();
        study.fans.clear();
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::Empty { field }) if field == "fans"
        ));

        let mut study = minimal();
        study.grid.fin_height_m.clear();
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::Empty { field }) if field == "grid.fin_height_m"
        ));
    }

    #[test]
    fn rejects_duplicate_fans() {
        let mut study = minimal();
        study.fans.push(study.fans[0].clone());
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn rejects_bad_samples() {
        let mut study = minimal();
        study.fans[0].samples = vec![[0.0, 60.0], [0.0, 10.0]];
        assert!(validate_study(&study).is_err());

        study.fans[0].samples = vec![[0.0, 10.0], [0.01, 60.0]];
        assert!(validate_study(&study).is_err());

        study.fans[0].samples = vec![[0.0, -1.0], [0.01, 0.0]];
        assert!(validate_study(&study).is_err());
    }

    #[test]
    fn rejects_negative_dimensions() {
        let mut study = minimal();
        study.grid.base_thickness_m = vec![3e-3, -1e-3];
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::InvalidValue { field, .. }) if field == "grid.base_thickness_m"
        ));

        let mut study = minimal();
        study.heat_source = Some(HeatSourceDef {
            width_m: 0.0,
            length_m: 1e-2,
        });
        assert!(validate_study(&study).is_err());
    }

    #[test]
    fn rejects_zero_iteration_budget() {
        let mut study = minimal();
        study.solver.max_iterations = 0;
        assert!(validate_study(&study).is_err());
    }
}
