//! Application service layer for heat sink studies.
//!
//! Turns a study file into runtime objects and runs reference evaluations and
//! design sweeps on them. Shared by every front end.

pub mod error;
pub mod export;
pub mod run_service;
pub mod runtime_compile;
pub mod study_service;

pub use error::{AppError, AppResult};
pub use export::{DesignRow, ExportFormat, FrontExport, skip_label};
pub use run_service::{ReferenceEvaluation, run_optimization, run_reference};
pub use runtime_compile::{StudyRuntime, build_fan, compile_study};
pub use study_service::{FanSummary, list_fans, load_study, save_study};
