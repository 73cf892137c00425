//! Air Prandtl number and correlation constants.

use crate::error::ThermalError;
use hs_core::units::{Temperature, to_deg_c};

/// Muzychka–Yovanovich constants for developing laminar flow in
/// rectangular channels with uniform wall temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationConstants {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub gamma: f64,
}

impl Default for CorrelationConstants {
    fn default() -> Self {
        Self {
            c1: 3.24,
            c2: 1.5,
            c3: 0.409,
            c4: 2.0,
            gamma: -0.3,
        }
    }
}

/// Prandtl number of air at `temperature` (fit valid for Pr > 0.1).
pub fn prandtl_number(temperature: Temperature) -> Result<f64, ThermalError> {
    let t = to_deg_c(temperature);
    let pr = 1e9 / (1.1 * t.powi(3) - 1200.0 * t.powi(2) + 322_000.0 * t + 1.393e9);
    if !(pr.is_finite() && pr > 0.1) {
        return Err(ThermalError::OutOfRange {
            what: "Prandtl number",
            value: pr,
        });
    }
    Ok(pr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::units::deg_c;

    #[test]
    fn air_prandtl_near_room_temperature() {
        let pr = prandtl_number(deg_c(25.0)).unwrap();
        assert!((pr - 0.7141).abs() < 1e-3, "{pr}");
    }

    #[test]
    fn prandtl_falls_off_with_heat() {
        assert!(prandtl_number(deg_c(80.0)).unwrap() < prandtl_number(deg_c(0.0)).unwrap());
    }

    #[test]
    fn rejects_outside_fit() {
        assert!(matches!(
            prandtl_number(deg_c(5000.0)),
            Err(ThermalError::OutOfRange { .. })
        ));
    }
}
