//! Laminar flow correlations for rectangular fin channels.
//!
//! Shared by the pressure-drop model and the convection model: both depend on
//! the apparent friction factor–Reynolds product of simultaneously developing
//! flow (Muzychka & Yovanovich).

use std::f64::consts::PI;

/// Developing-flow coefficient of the apparent fRe blend.
pub const DEVELOPING_FLOW_COEFF: f64 = 11.8336;

/// Fully developed f·Re for a rectangular duct of aspect ratio `epsilon` (0 < ε ≤ 1).
pub fn fully_developed_f_re(epsilon: f64) -> f64 {
    let series = 1.0 - 192.0 / PI.powi(5) * epsilon * (PI / 2.0 / epsilon).tanh();
    12.0 / (epsilon.sqrt() * (1.0 + epsilon) * series)
}

/// Apparent f·Re at total flow `q` through `channels` channels of length `length`.
pub fn apparent_f_re(q: f64, length: f64, channels: f64, viscosity: f64, f_re_fd: f64) -> f64 {
    (developing_growth(length, channels, viscosity) * q + f_re_fd * f_re_fd).sqrt()
}

/// Slope of (f·Re)² with respect to flow.
pub fn developing_growth(length: f64, channels: f64, viscosity: f64) -> f64 {
    DEVELOPING_FLOW_COEFF / (length * channels * viscosity)
}
