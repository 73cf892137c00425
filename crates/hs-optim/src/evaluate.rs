//! Evaluation of one (geometry, fan) pair.

use crate::error::PairError;
use crate::pareto::Objectives;
use hs_core::units::Volume;
use hs_fans::FanCurve;
use hs_geometry::{Geometry, HeatSinkCurve, VolumeMetric};
use hs_solver::{OperatingPoint, SolverConfig, solve};
use hs_thermal::{ThermalModel, ThermalResult};
use std::sync::Arc;

/// Everything needed to turn a pair into a design point.
///
/// The hydraulic model uses the same air properties as the thermal model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluator {
    pub thermal: ThermalModel,
    pub solver: SolverConfig,
    pub volume_metric: VolumeMetric,
}

/// One fully evaluated design.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignPoint {
    pub geometry: Geometry,
    pub fan: Arc<FanCurve>,
    pub operating_point: OperatingPoint,
    pub thermal: ThermalResult,
    pub volume: Volume,
}

impl DesignPoint {
    pub fn objectives(&self) -> Objectives {
        Objectives {
            volume: self.volume.value,
            resistance: self.thermal.total,
        }
    }
}

/// Solve, evaluate and measure one pair. Pure: equal inputs give equal points.
pub fn evaluate_pair(
    geometry: &Geometry,
    fan: &Arc<FanCurve>,
    evaluator: &Evaluator,
) -> Result<DesignPoint, PairError> {
    let volume = evaluator.volume_metric.volume(geometry, fan)?;
    let system = HeatSinkCurve::new(geometry, &evaluator.thermal.air)?;
    let operating_point = solve(fan, &system, &evaluator.solver)?;
    let thermal = evaluator.thermal.evaluate(geometry, &operating_point)?;

    Ok(DesignPoint {
        geometry: *geometry,
        fan: Arc::clone(fan),
        operating_point,
        thermal,
        volume,
    })
}
