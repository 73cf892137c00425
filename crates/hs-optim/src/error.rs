//! Error types for design sweeps.

use hs_core::HsError;
use hs_geometry::GeometryError;
use hs_solver::SolverError;
use hs_thermal::ThermalError;
use thiserror::Error;

/// Fatal sweep errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimError {
    #[error("Fan catalog is empty")]
    EmptyFanCatalog,

    #[error("Geometry space is empty")]
    EmptyGeometrySpace,

    #[error("Solver configuration: {0}")]
    Solver(#[from] SolverError),
}

pub type OptimResult<T> = Result<T, OptimError>;

/// Why a single (geometry, fan) pair could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PairError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Thermal(#[from] ThermalError),
}

impl From<OptimError> for HsError {
    fn from(e: OptimError) -> Self {
        match e {
            OptimError::Solver(inner) => inner.into(),
            other => HsError::Domain {
                layer: "optim",
                message: other.to_string(),
            },
        }
    }
}

impl From<PairError> for HsError {
    fn from(e: PairError) -> Self {
        match e {
            PairError::Geometry(inner) => inner.into(),
            PairError::Solver(inner) => inner.into(),
            PairError::Thermal(inner) => inner.into(),
        }
    }
}
