//! Error types for thermal evaluation.

use hs_core::HsError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermalError {
    /// No cooling or a degenerate numeric result. Recoverable per pair.
    #[error("Physically infeasible: {what}")]
    PhysicallyInfeasible { what: &'static str },

    /// A correlation is used outside its validity range.
    #[error("{what} out of range: {value}")]
    OutOfRange { what: &'static str, value: f64 },
}

impl From<ThermalError> for HsError {
    fn from(e: ThermalError) -> Self {
        match e {
            ThermalError::OutOfRange { what, value } => HsError::OutOfRange { what, value },
            other => HsError::Domain {
                layer: "thermal",
                message: other.to_string(),
            },
        }
    }
}
