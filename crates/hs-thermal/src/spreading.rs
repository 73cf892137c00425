//! Spreading resistance of a centred heat source on a finite plate.
//!
//! Equivalent-circle solution for an isoflux source on a plate cooled on its
//! far face with a uniform film resistance (Lee, Song, Au & Moran; Yovanovich).

use crate::error::ThermalError;
use hs_core::units::{Area, Conductivity, Length};
use std::f64::consts::PI;

/// Source + plate description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadingPlate {
    pub source_area: Area,
    pub plate_area: Area,
    pub thickness: Length,
    pub conductivity: Conductivity,
}

/// Constriction term and 1-D through-thickness term, K/W.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadingResistance {
    pub constriction: f64,
    pub layer: f64,
}

impl SpreadingResistance {
    pub fn total(&self) -> f64 {
        self.constriction + self.layer
    }
}

/// Spreading resistance for `plate` with film resistance `r0` (K/W) on the
/// cooled face.
pub fn spreading_resistance(
    plate: &SpreadingPlate,
    r0: f64,
) -> Result<SpreadingResistance, ThermalError> {
    let a_s = plate.source_area.value;
    let a_p = plate.plate_area.value;
    let th = plate.thickness.value;
    let lambda = plate.conductivity.value;

    let all_positive = [a_s, a_p, th, lambda, r0]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);
    if !all_positive {
        return Err(ThermalError::PhysicallyInfeasible {
            what: "spreading plate needs positive areas, thickness, conductivity and film resistance",
        });
    }

    let layer = th / (a_p * lambda);
    if a_s >= a_p {
        return Ok(SpreadingResistance {
            constriction: 0.0,
            layer,
        });
    }

    let eps = (a_s / a_p).sqrt();
    let sigma = PI + 1.0 / (PI.sqrt() * eps);
    let biot = 1.0 / (r0 * lambda * (PI * a_p).sqrt());
    let tau = th * (PI / a_p).sqrt();
    let st = (sigma * tau).tanh();
    let phi = (st + sigma / biot) / (1.0 + sigma / biot * st);
    let psi = 0.5 * (1.0 - eps).powf(1.5) * phi;

    Ok(SpreadingResistance {
        constriction: psi / (lambda * a_s.sqrt()),
        layer,
    })
}
