//! Study schema definitions. Plain SI numbers; the unit is part of the field name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub air: AirDef,
    #[serde(default)]
    pub material: MaterialDef,
    #[serde(default)]
    pub duct: DuctDef,
    pub fans: Vec<FanDef>,
    pub grid: GridDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<GeometryDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_source: Option<HeatSourceDef>,
    #[serde(default = "default_ambient_c")]
    pub ambient_c: f64,
    #[serde(default)]
    pub solver: SolverDef,
    #[serde(default)]
    pub thermal: ThermalDef,
    #[serde(default)]
    pub volume_metric: VolumeMetricDef,
}

fn default_ambient_c() -> f64 {
    25.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirDef {
    pub density_kg_m3: f64,
    pub specific_heat_j_kgk: f64,
    pub conductivity_w_mk: f64,
    pub viscosity_pa_s: f64,
    pub venturi_loss: f64,
}

impl Default for AirDef {
    fn default() -> Self {
        Self {
            density_kg_m3: 1.293,
            specific_heat_j_kgk: 1005.0,
            conductivity_w_mk: 0.0261,
            viscosity_pa_s: 18.2e-6,
            venturi_loss: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum MaterialDef {
    #[default]
    Aluminium,
    Copper,
    Custom {
        conductivity_w_mk: f64,
        density_kg_m3: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DuctDef {
    pub flare_angle_deg: f64,
    pub min_length_m: f64,
}

impl Default for DuctDef {
    fn default() -> Self {
        Self {
            flare_angle_deg: 40.0,
            min_length_m: 5e-3,
        }
    }
}

/// Unit system of `FanDef::samples`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleUnitsDef {
    #[default]
    Si,
    M3hPa,
    CfmInH2o,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FanDef {
    pub name: String,
    #[serde(default)]
    pub units: SampleUnitsDef,
    /// `[flow, static pressure]` pairs, ascending flow
    pub samples: Vec<[f64; 2]>,
    /// Force the last sample to zero pressure (digitized datasheets)
    #[serde(default = "default_true")]
    pub pin_free_air: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<FrameDef>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameDef {
    pub side_m: f64,
    pub depth_m: f64,
}

/// Candidate values per geometry dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    pub channel_counts: Vec<usize>,
    pub fin_thickness_m: Vec<f64>,
    pub fin_height_m: Vec<f64>,
    pub base_width_m: Vec<f64>,
    pub base_length_m: Vec<f64>,
    pub base_thickness_m: Vec<f64>,
    #[serde(default = "default_min_fin_spacing_m")]
    pub min_fin_spacing_m: f64,
}

fn default_min_fin_spacing_m() -> f64 {
    1e-4
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub channel_count: usize,
    pub fin_thickness_m: f64,
    pub fin_height_m: f64,
    pub base_width_m: f64,
    pub base_length_m: f64,
    pub base_thickness_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatSourceDef {
    pub width_m: f64,
    pub length_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    pub rel_tol: f64,
    pub max_iterations: usize,
    pub degenerate_pressure_pa: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            rel_tol: 1e-4,
            max_iterations: 100,
            degenerate_pressure_pa: 1e-9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermalDef {
    pub transition_reynolds: f64,
    /// Use the developing laminar correlation at every Reynolds number
    #[serde(default)]
    pub laminar_only: bool,
}

impl Default for ThermalDef {
    fn default() -> Self {
        Self {
            transition_reynolds: 2300.0,
            laminar_only: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeMetricDef {
    #[default]
    Material,
    Boxed,
    CoolingSystem,
}
