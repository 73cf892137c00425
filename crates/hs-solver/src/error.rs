//! Error types for operating point search.

use hs_core::HsError;
use thiserror::Error;

/// Errors that can occur while intersecting a fan with a system curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The fan cannot move air through this system. Recoverable per pair.
    #[error("No operating point for fan '{fan}': {what}")]
    NoOperatingPoint { fan: String, what: &'static str },

    #[error("Convergence failed for fan '{fan}' after {iterations} iterations")]
    ConvergenceFailed { fan: String, iterations: usize },

    #[error("System pressure is not finite at {flow} m³/s")]
    NonFinite { flow: f64 },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for HsError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidConfig { what } => HsError::InvalidArg { what },
            other => HsError::Domain {
                layer: "solver",
                message: other.to_string(),
            },
        }
    }
}
