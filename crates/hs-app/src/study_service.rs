//! Study loading, saving and catalog introspection.

use crate::error::AppResult;
use crate::runtime_compile::StudyRuntime;
use hs_core::units::to_m3ph;
use hs_project::Study;
use std::path::Path;

/// Load and validate a study (YAML, or JSON by extension).
pub fn load_study(path: &Path) -> AppResult<Study> {
    Ok(hs_project::load_study(path)?)
}

pub fn save_study(path: &Path, study: &Study) -> AppResult<()> {
    Ok(hs_project::save_study(path, study)?)
}

/// One catalog entry for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FanSummary {
    pub name: String,
    pub shutoff_pa: f64,
    pub free_air_m3h: f64,
    pub samples: usize,
    /// `(side, depth)` in mm
    pub frame_mm: Option<(f64, f64)>,
}

pub fn list_fans(runtime: &StudyRuntime) -> Vec<FanSummary> {
    runtime
        .catalog
        .iter()
        .map(|fan| FanSummary {
            name: fan.name().to_string(),
            shutoff_pa: fan.shutoff_pressure().value,
            free_air_m3h: to_m3ph(fan.free_air_flow()),
            samples: fan.len(),
            frame_mm: fan
                .frame()
                .map(|f| (f.side.value * 1e3, f.depth.value * 1e3)),
        })
        .collect()
}
