//! Cooling air properties at the reference temperature.

use hs_core::units::{Conductivity, Density, DynVisc, SpecHeat, j_per_kgk, kg_per_m3, pa_s, w_per_mk};

/// Constant air properties used by both the hydraulic and the thermal model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub density: Density,
    pub specific_heat: SpecHeat,
    pub conductivity: Conductivity,
    pub viscosity: DynVisc,
    /// Loss coefficient of the flared inlet duct (venturi contraction)
    pub venturi_loss: f64,
}

impl Default for AirProperties {
    fn default() -> Self {
        Self {
            density: kg_per_m3(1.293),
            specific_heat: j_per_kgk(1005.0),
            conductivity: w_per_mk(0.0261),
            viscosity: pa_s(18.2e-6),
            venturi_loss: 0.2,
        }
    }
}

impl AirProperties {
    /// Heat capacity rate per unit volume flow, ρ·c_p in J/(m³·K).
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density.value * self.specific_heat.value
    }
}
