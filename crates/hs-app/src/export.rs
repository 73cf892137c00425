//! Serializable views of sweep results.

use hs_core::units::to_m3ph;
use hs_optim::{DesignPoint, Optimization, SkipReason};
use hs_thermal::FlowRegime;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// One design point flattened to SI numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignRow {
    pub fan: String,
    pub channel_count: usize,
    pub fin_count: usize,
    pub fin_thickness_m: f64,
    pub fin_height_m: f64,
    pub fin_spacing_m: f64,
    pub base_width_m: f64,
    pub base_length_m: f64,
    pub base_thickness_m: f64,
    pub flow_m3s: f64,
    pub flow_m3h: f64,
    pub pressure_pa: f64,
    pub reynolds: f64,
    pub regime: &'static str,
    pub convective_k_w: f64,
    pub air_heating_k_w: f64,
    pub conductive_k_w: f64,
    pub spreading_k_w: f64,
    pub total_k_w: f64,
    pub volume_m3: f64,
    pub mass_kg: f64,
}

impl From<&DesignPoint> for DesignRow {
    fn from(p: &DesignPoint) -> Self {
        let g = &p.geometry;
        Self {
            fan: p.fan.name().to_string(),
            channel_count: g.channel_count(),
            fin_count: g.fin_count(),
            fin_thickness_m: g.fin_thickness().value,
            fin_height_m: g.fin_height().value,
            fin_spacing_m: g.fin_spacing().value,
            base_width_m: g.base_width().value,
            base_length_m: g.base_length().value,
            base_thickness_m: g.base_thickness().value,
            flow_m3s: p.operating_point.flow.value,
            flow_m3h: to_m3ph(p.operating_point.flow),
            pressure_pa: p.operating_point.pressure.value,
            reynolds: p.thermal.reynolds,
            regime: match p.thermal.regime {
                FlowRegime::Laminar => "laminar",
                FlowRegime::Turbulent => "turbulent",
            },
            convective_k_w: p.thermal.convective,
            air_heating_k_w: p.thermal.air_heating,
            conductive_k_w: p.thermal.conductive,
            spreading_k_w: p.thermal.spreading,
            total_k_w: p.thermal.total,
            volume_m3: p.volume.value,
            mass_kg: g.mass().value,
        }
    }
}

/// Pareto front of one sweep, with its diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontExport {
    pub study: String,
    /// RFC 3339 creation time
    pub generated_at: String,
    pub total_pairs: usize,
    pub evaluated: usize,
    pub skipped: BTreeMap<String, usize>,
    pub front: Vec<DesignRow>,
}

impl FrontExport {
    pub fn new(study: &str, optimization: &Optimization) -> Self {
        let skipped = optimization
            .report
            .skip_counts()
            .into_iter()
            .map(|(reason, count)| (skip_label(reason).to_string(), count))
            .collect();
        Self {
            study: study.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_pairs: optimization.report.total_pairs,
            evaluated: optimization.report.evaluated,
            skipped,
            front: optimization.front.iter().map(DesignRow::from).collect(),
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Front rows only, one header line.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(
            "fan,channel_count,fin_count,fin_thickness_m,fin_height_m,fin_spacing_m,\
             base_width_m,base_length_m,base_thickness_m,flow_m3s,flow_m3h,pressure_pa,\
             reynolds,regime,convective_k_w,air_heating_k_w,conductive_k_w,spreading_k_w,total_k_w,\
             volume_m3,mass_kg\n",
        );
        for r in &self.front {
            // Writing into a String cannot fail
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
                csv_field(&r.fan),
                r.channel_count,
                r.fin_count,
                r.fin_thickness_m,
                r.fin_height_m,
                r.fin_spacing_m,
                r.base_width_m,
                r.base_length_m,
                r.base_thickness_m,
                r.flow_m3s,
                r.flow_m3h,
                r.pressure_pa,
                r.reynolds,
                r.regime,
                r.convective_k_w,
                r.air_heating_k_w,
                r.conductive_k_w,
                r.spreading_k_w,
                r.total_k_w,
                r.volume_m3,
                r.mass_kg,
            );
        }
        csv
    }

    pub fn render(&self, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Csv => Ok(self.to_csv()),
        }
    }

    pub fn write(&self, path: &Path, format: ExportFormat) -> AppResult<()> {
        let content = self.render(format)?;
        std::fs::write(path, content).map_err(|source| AppError::ExportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Quote a text field if it would break the row.
fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

pub fn skip_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::InvalidGeometry => "invalid_geometry",
        SkipReason::FanTooSmall => "fan_too_small",
        SkipReason::MissingFanFrame => "missing_fan_frame",
        SkipReason::NoOperatingPoint => "no_operating_point",
        SkipReason::Convergence => "convergence",
        SkipReason::PhysicallyInfeasible => "physically_infeasible",
    }
}
