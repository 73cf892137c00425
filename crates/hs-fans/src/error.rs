//! Fan curve and catalog errors.

use hs_core::HsError;
use thiserror::Error;

/// Result type for fan operations.
pub type FanResult<T> = Result<T, FanError>;

/// Errors raised while building fan curves or the fan catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FanError {
    #[error("Fan name must not be empty")]
    EmptyName,

    #[error("Fan '{fan}' has {count} samples (need at least 2)")]
    TooFewSamples { fan: String, count: usize },

    #[error("Fan '{fan}' sample {index} is not finite")]
    NonFinite { fan: String, index: usize },

    #[error("Fan '{fan}' sample {index} is negative")]
    Negative { fan: String, index: usize },

    #[error("Fan '{fan}' flow is not strictly ascending at sample {index}")]
    NonAscendingFlow { fan: String, index: usize },

    #[error("Fan '{fan}' pressure rises with flow at sample {index}")]
    IncreasingPressure { fan: String, index: usize },

    #[error("Fan '{fan}' frame dimensions must be positive")]
    InvalidFrame { fan: String },

    #[error("Duplicate fan name in catalog: {name}")]
    DuplicateName { name: String },
}

impl From<FanError> for HsError {
    fn from(e: FanError) -> Self {
        HsError::Domain {
            layer: "fan",
            message: e.to_string(),
        }
    }
}
