//! Error types for geometry and hydraulic model construction.

use hs_core::HsError;
use thiserror::Error;

/// Errors raised while validating a geometry or building its system curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A dimensional invariant does not hold; no solving is attempted.
    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Invalid system curve: {what}")]
    InvalidCurve { what: &'static str },

    #[error("Fan '{fan}' is smaller than the heat sink face")]
    FanTooSmall { fan: String },

    #[error("Fan '{fan}' has no frame dimensions")]
    MissingFanFrame { fan: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

impl From<GeometryError> for HsError {
    fn from(e: GeometryError) -> Self {
        HsError::Domain {
            layer: "geometry",
            message: e.to_string(),
        }
    }
}
