//! Nusselt number correlations for the fin channels.

use crate::error::ThermalError;
use crate::properties::CorrelationConstants;
use std::f64::consts::PI;

/// Flow regime in the fin channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

/// Dimensionless inputs of the developing laminar correlation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChannelFlow {
    pub prandtl: f64,
    pub aspect_ratio: f64,
    /// Apparent friction factor–Reynolds product
    pub f_re: f64,
    /// Dimensionless thermal length z* = L n μ / (Pr q)
    pub z_star: f64,
}

/// Averaged Nusselt number of simultaneously developing laminar flow
/// (Muzychka–Yovanovich, uniform wall temperature).
pub(crate) fn developing_laminar_nusselt(
    flow: &ChannelFlow,
    k: &CorrelationConstants,
) -> Result<f64, ThermalError> {
    let pr = flow.prandtl;
    let blending = 2.27 + 1.65 * pr.cbrt();
    if !(2.0..=7.0).contains(&blending) {
        return Err(ThermalError::OutOfRange {
            what: "blending parameter",
            value: blending,
        });
    }

    let f_pr = 0.564 / (1.0 + (1.664 * pr.powf(1.0 / 6.0)).powf(4.5)).powf(2.0 / 9.0);
    let entry = (k.c4 * f_pr / flow.z_star.sqrt()).powf(blending);
    let developed = (k.c1 * flow.f_re / (8.0 * PI.sqrt() * flow.aspect_ratio.powf(k.gamma))).powi(5);
    let developing = (k.c2 * k.c3 * (flow.f_re / flow.z_star).cbrt()).powi(5);

    Ok((entry + (developed + developing).powf(blending / 5.0)).powf(1.0 / blending))
}

/// Gnielinski correlation with a developing-flow entrance factor.
pub(crate) fn gnielinski_nusselt(reynolds: f64, prandtl: f64, dh_over_length: f64) -> f64 {
    let f = (0.79 * reynolds.ln() - 1.64).powi(-2);
    let nu = (f / 8.0) * (reynolds - 1000.0) * prandtl
        / (1.0 + 12.7 * (f / 8.0).sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0));
    nu * (1.0 + dh_over_length.powf(2.0 / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(z_star: f64) -> ChannelFlow {
        ChannelFlow {
            prandtl: 0.714,
            aspect_ratio: 0.2267,
            f_re: 20.0,
            z_star,
        }
    }

    #[test]
    fn short_thermal_length_raises_nusselt() {
        let k = CorrelationConstants::default();
        let short = developing_laminar_nusselt(&channel(1e-3), &k).unwrap();
        let long = developing_laminar_nusselt(&channel(1e-1), &k).unwrap();
        assert!(short > long);
        assert!(long > 0.0);
    }

    #[test]
    fn blending_out_of_range() {
        let k = CorrelationConstants::default();
        let flow = ChannelFlow {
            prandtl: 50.0,
            ..channel(1e-2)
        };
        assert!(matches!(
            developing_laminar_nusselt(&flow, &k),
            Err(ThermalError::OutOfRange { .. })
        ));
    }

    #[test]
    fn gnielinski_grows_with_reynolds() {
        let lo = gnielinski_nusselt(5_000.0, 0.714, 0.1);
        let hi = gnielinski_nusselt(20_000.0, 0.714, 0.1);
        assert!(hi > lo && lo > 0.0);
    }
}
