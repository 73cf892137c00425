//! Compilation of a study definition into runtime models.

use hs_core::units::{Length, deg, deg_c, j_per_kgk, kg_per_m3, m, pa_s, w_per_mk};
use hs_fans::{FanCatalog, FanCurve, FanFrame, SampleUnits};
use hs_geometry::{
    AirProperties, DuctGeometry, Geometry, GeometryLimits, GeometryParams, Material, VolumeMetric,
};
use hs_optim::{Evaluator, GeometryAxes, GeometrySpace};
use hs_project::schema::{
    AirDef, FanDef, GeometryDef, MaterialDef, SampleUnitsDef, Study, VolumeMetricDef,
};
use hs_solver::SolverConfig;
use hs_thermal::{CorrelationConstants, HeatSource, ThermalModel};

use crate::error::{AppError, AppResult};

/// Everything a run needs, built once per study.
#[derive(Debug, Clone)]
pub struct StudyRuntime {
    pub name: String,
    pub catalog: FanCatalog,
    pub space: GeometrySpace,
    pub evaluator: Evaluator,
    pub reference: Option<Geometry>,
}

/// Compile a validated study.
pub fn compile_study(study: &Study) -> AppResult<StudyRuntime> {
    hs_project::validate_study(study).map_err(|e| AppError::Study(e.to_string()))?;

    let fans = study
        .fans
        .iter()
        .map(build_fan)
        .collect::<AppResult<Vec<_>>>()?;
    let catalog = FanCatalog::new(fans)?;

    let material = build_material(&study.material);
    let duct = DuctGeometry {
        flare_angle: deg(study.duct.flare_angle_deg),
        min_length: m(study.duct.min_length_m),
    };
    let limits = GeometryLimits {
        min_fin_spacing: m(study.grid.min_fin_spacing_m),
    };

    let grid = &study.grid;
    let space = GeometrySpace::new(GeometryAxes {
        channel_counts: grid.channel_counts.clone(),
        fin_thicknesses: lengths(&grid.fin_thickness_m),
        fin_heights: lengths(&grid.fin_height_m),
        base_widths: lengths(&grid.base_width_m),
        base_lengths: lengths(&grid.base_length_m),
        base_thicknesses: lengths(&grid.base_thickness_m),
    })
    .with_material(material)
    .with_duct(duct)
    .with_limits(limits);

    let reference = study
        .reference
        .as_ref()
        .map(|def| build_geometry(def, material, duct, &limits))
        .transpose()?;

    Ok(StudyRuntime {
        name: study.name.clone(),
        catalog,
        space,
        evaluator: build_evaluator(study),
        reference,
    })
}

/// Build one fan curve, converting datasheet units to SI.
pub fn build_fan(def: &FanDef) -> AppResult<FanCurve> {
    let units = match def.units {
        SampleUnitsDef::Si => SampleUnits::Si,
        SampleUnitsDef::M3hPa => SampleUnits::CubicMeterPerHourPascal,
        SampleUnitsDef::CfmInH2o => SampleUnits::CfmInchWater,
    };
    let samples: Vec<(f64, f64)> = def.samples.iter().map(|&[q, p]| (q, p)).collect();

    let curve = if def.pin_free_air {
        FanCurve::from_datasheet(def.name.clone(), &samples, units)?
    } else {
        let si: Vec<(f64, f64)> = samples.iter().map(|&(q, p)| units.to_si(q, p)).collect();
        FanCurve::new(def.name.clone(), &si)?
    };

    match &def.frame {
        Some(frame) => Ok(curve.with_frame(FanFrame {
            side: m(frame.side_m),
            depth: m(frame.depth_m),
        })?),
        None => Ok(curve),
    }
}

fn lengths(values: &[f64]) -> Vec<Length> {
    values.iter().map(|&v| m(v)).collect()
}

fn build_material(def: &MaterialDef) -> Material {
    match *def {
        MaterialDef::Aluminium => Material::aluminium(),
        MaterialDef::Copper => Material::copper(),
        MaterialDef::Custom {
            conductivity_w_mk,
            density_kg_m3,
        } => Material {
            conductivity: w_per_mk(conductivity_w_mk),
            density: kg_per_m3(density_kg_m3),
        },
    }
}

fn build_air(def: &AirDef) -> AirProperties {
    AirProperties {
        density: kg_per_m3(def.density_kg_m3),
        specific_heat: j_per_kgk(def.specific_heat_j_kgk),
        conductivity: w_per_mk(def.conductivity_w_mk),
        viscosity: pa_s(def.viscosity_pa_s),
        venturi_loss: def.venturi_loss,
    }
}

fn build_geometry(
    def: &GeometryDef,
    material: Material,
    duct: DuctGeometry,
    limits: &GeometryLimits,
) -> AppResult<Geometry> {
    let params = GeometryParams {
        channel_count: def.channel_count,
        fin_thickness: m(def.fin_thickness_m),
        fin_height: m(def.fin_height_m),
        base_width: m(def.base_width_m),
        base_length: m(def.base_length_m),
        base_thickness: m(def.base_thickness_m),
        material,
        duct,
    };
    Ok(Geometry::with_limits(params, limits)?)
}

fn build_evaluator(study: &Study) -> Evaluator {
    let transition_reynolds = if study.thermal.laminar_only {
        f64::INFINITY
    } else {
        study.thermal.transition_reynolds
    };
    let source = study.heat_source.as_ref().map(|s| HeatSource {
        width: m(s.width_m),
        length: m(s.length_m),
    });

    Evaluator {
        thermal: ThermalModel {
            air: build_air(&study.air),
            constants: CorrelationConstants::default(),
            ambient: deg_c(study.ambient_c),
            source,
            transition_reynolds,
        },
        solver: SolverConfig {
            rel_tol: study.solver.rel_tol,
            max_iterations: study.solver.max_iterations,
            degenerate_pressure: study.solver.degenerate_pressure_pa,
        },
        volume_metric: match study.volume_metric {
            VolumeMetricDef::Material => VolumeMetric::Material,
            VolumeMetricDef::Boxed => VolumeMetric::Boxed,
            VolumeMetricDef::CoolingSystem => VolumeMetric::CoolingSystem,
        },
    }
}
