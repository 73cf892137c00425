//! Parallel sweep over geometry × fan pairs.

use crate::error::{OptimError, OptimResult, PairError};
use crate::evaluate::{DesignPoint, Evaluator, evaluate_pair};
use crate::pareto::ParetoFront;
use crate::space::GeometrySpace;
use hs_fans::FanCatalog;
use hs_geometry::GeometryError;
use hs_solver::SolverError;
use hs_thermal::ThermalError;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Category of a skipped pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    InvalidGeometry,
    FanTooSmall,
    MissingFanFrame,
    NoOperatingPoint,
    Convergence,
    PhysicallyInfeasible,
}

impl From<&PairError> for SkipReason {
    fn from(e: &PairError) -> Self {
        match e {
            PairError::Geometry(GeometryError::FanTooSmall { .. }) => SkipReason::FanTooSmall,
            PairError::Geometry(GeometryError::MissingFanFrame { .. }) => {
                SkipReason::MissingFanFrame
            }
            PairError::Geometry(_) => SkipReason::InvalidGeometry,
            PairError::Solver(SolverError::NoOperatingPoint { .. }) => SkipReason::NoOperatingPoint,
            // Configuration is checked before the sweep starts
            PairError::Solver(SolverError::ConvergenceFailed { .. })
            | PairError::Solver(SolverError::InvalidConfig { .. }) => SkipReason::Convergence,
            PairError::Solver(SolverError::NonFinite { .. }) => SkipReason::PhysicallyInfeasible,
            PairError::Thermal(ThermalError::PhysicallyInfeasible { .. }) => {
                SkipReason::PhysicallyInfeasible
            }
            PairError::Thermal(ThermalError::OutOfRange { .. }) => SkipReason::PhysicallyInfeasible,
        }
    }
}

/// A pair that was not evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPair {
    pub geometry_index: usize,
    pub fan: String,
    pub reason: SkipReason,
    pub error: PairError,
}

/// Diagnostics of one sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepReport {
    pub total_pairs: usize,
    pub evaluated: usize,
    pub skipped: Vec<SkippedPair>,
}

impl SweepReport {
    pub fn skip_counts(&self) -> BTreeMap<SkipReason, usize> {
        let mut counts = BTreeMap::new();
        for skipped in &self.skipped {
            *counts.entry(skipped.reason).or_insert(0) += 1;
        }
        counts
    }
}

/// Outcome of [`optimize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub front: ParetoFront,
    /// All evaluated points in pair order
    pub evaluated: Vec<DesignPoint>,
    pub report: SweepReport,
}

/// Evaluate every (geometry, fan) pair and filter to the Pareto front.
///
/// Pair `i` is geometry `i / fans` with fan `i % fans`. Per-pair failures are
/// collected in the report; only an empty catalog or space is fatal.
pub fn optimize(
    space: &GeometrySpace,
    catalog: &FanCatalog,
    evaluator: &Evaluator,
) -> OptimResult<Optimization> {
    if catalog.is_empty() {
        return Err(OptimError::EmptyFanCatalog);
    }
    if space.is_empty() {
        return Err(OptimError::EmptyGeometrySpace);
    }
    evaluator.solver.validate()?;

    let fans: Vec<_> = catalog.iter().collect();
    let total_pairs = space.len() * fans.len();

    let outcomes: Vec<Result<DesignPoint, SkippedPair>> = (0..total_pairs)
        .into_par_iter()
        .map(|pair| {
            let geometry_index = pair / fans.len();
            let fan = fans[pair % fans.len()];
            let outcome = space
                .geometry_at(geometry_index)
                .map_err(PairError::from)
                .and_then(|g| evaluate_pair(&g, fan, evaluator));
            outcome.map_err(|error| SkippedPair {
                geometry_index,
                fan: fan.name().to_string(),
                reason: SkipReason::from(&error),
                error,
            })
        })
        .collect();

    let mut evaluated = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(point) => evaluated.push(point),
            Err(skip) => {
                debug!(
                    geometry = skip.geometry_index,
                    fan = %skip.fan,
                    reason = ?skip.reason,
                    "skipped pair: {}",
                    skip.error
                );
                skipped.push(skip);
            }
        }
    }

    let front = ParetoFront::from_points(&evaluated);
    info!(
        pairs = total_pairs,
        evaluated = evaluated.len(),
        skipped = skipped.len(),
        front = front.len(),
        "design sweep finished"
    );

    Ok(Optimization {
        front,
        report: SweepReport {
            total_pairs,
            evaluated: evaluated.len(),
            skipped,
        },
        evaluated,
    })
}
