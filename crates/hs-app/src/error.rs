//! Error types for the hs-app service layer.

use std::path::PathBuf;

/// Unified error for study loading, compilation and runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Study error: {0}")]
    Study(String),

    #[error("Runtime compilation failed: {0}")]
    Compile(String),

    #[error("Study has no reference geometry")]
    NoReference,

    #[error("Fan not found: {0}")]
    FanNotFound(String),

    #[error("Optimization failed: {0}")]
    Optim(String),

    #[error("Failed to write export: {path}")]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<hs_project::ProjectError> for AppError {
    fn from(err: hs_project::ProjectError) -> Self {
        AppError::Study(err.to_string())
    }
}

impl From<hs_fans::FanError> for AppError {
    fn from(err: hs_fans::FanError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<hs_geometry::GeometryError> for AppError {
    fn from(err: hs_geometry::GeometryError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<hs_optim::OptimError> for AppError {
    fn from(err: hs_optim::OptimError) -> Self {
        AppError::Optim(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
