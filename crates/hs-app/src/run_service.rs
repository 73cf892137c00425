//! Reference evaluations and design sweeps.

use hs_optim::{DesignPoint, Optimization, PairError, evaluate_pair, optimize};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::runtime_compile::StudyRuntime;

/// Reference geometry paired with one fan.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEvaluation {
    pub fan: String,
    pub outcome: Result<DesignPoint, PairError>,
}

/// Evaluate the reference geometry against every fan, or only `fan` if given.
pub fn run_reference(
    runtime: &StudyRuntime,
    fan: Option<&str>,
) -> AppResult<Vec<ReferenceEvaluation>> {
    let geometry = runtime.reference.as_ref().ok_or(AppError::NoReference)?;

    let fans: Vec<_> = match fan {
        Some(name) => vec![
            runtime
                .catalog
                .get(name)
                .ok_or_else(|| AppError::FanNotFound(name.to_string()))?,
        ],
        None => runtime.catalog.iter().collect(),
    };

    Ok(fans
        .into_iter()
        .map(|curve| ReferenceEvaluation {
            fan: curve.name().to_string(),
            outcome: evaluate_pair(geometry, curve, &runtime.evaluator),
        })
        .collect())
}

/// Sweep the study's geometry grid against its full catalog.
pub fn run_optimization(runtime: &StudyRuntime) -> AppResult<Optimization> {
    info!(
        study = %runtime.name,
        geometries = runtime.space.len(),
        fans = runtime.catalog.len(),
        "starting design sweep"
    );
    Ok(optimize(&runtime.space, &runtime.catalog, &runtime.evaluator)?)
}
