//! System pressure-drop curves.

use crate::air::AirProperties;
use crate::channel::{DEVELOPING_FLOW_COEFF, developing_growth, fully_developed_f_re};
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Geometry;
use hs_core::units::{Pressure, VolumeRate, pa};
use std::sync::Arc;

/// Static pressure the air path needs to pass a given flow.
///
/// Implementations are increasing in flow for q ≥ 0.
pub trait SystemCurve: Send + Sync {
    fn pressure_drop(&self, q: VolumeRate) -> Pressure;
}

impl<T: SystemCurve + ?Sized> SystemCurve for &T {
    fn pressure_drop(&self, q: VolumeRate) -> Pressure {
        (**self).pressure_drop(q)
    }
}

impl<T: SystemCurve + ?Sized> SystemCurve for Arc<T> {
    fn pressure_drop(&self, q: VolumeRate) -> Pressure {
        (**self).pressure_drop(q)
    }
}

/// Δp = a·q² + b·q + c, coefficients in SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCurve {
    /// Pa/(m³/s)²
    pub a: f64,
    /// Pa/(m³/s)
    pub b: f64,
    /// Constant back-pressure in Pa
    pub c: f64,
}

impl QuadraticCurve {
    pub fn new(a: f64, b: f64, c: f64) -> GeometryResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::InvalidCurve {
                what: "coefficients must be finite",
            });
        }
        if a < 0.0 || b < 0.0 || c < 0.0 {
            return Err(GeometryError::InvalidCurve {
                what: "coefficients must be non-negative",
            });
        }
        Ok(Self { a, b, c })
    }
}

impl SystemCurve for QuadraticCurve {
    fn pressure_drop(&self, q: VolumeRate) -> Pressure {
        let q = q.value.max(0.0);
        pa(self.a * q * q + self.b * q + self.c)
    }
}

/// Pressure drop of the fin channels plus the flared inlet duct.
///
/// Δp = a·q² + q·(k_ch·√(g·q + f²) + k_duct·√((g + g_duct)·q + f²))
///
/// where f is the fully developed f·Re of one fin channel. The quadratic term
/// collects contraction, expansion, venturi and acceleration losses; the
/// square-root terms are the apparent friction of developing laminar flow in
/// the channels and in the duct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSinkCurve {
    quadratic: f64,
    channel_friction: f64,
    duct_friction: f64,
    growth: f64,
    duct_growth: f64,
    f_re_fd: f64,
}

impl HeatSinkCurve {
    pub fn new(geometry: &Geometry, air: &AirProperties) -> GeometryResult<Self> {
        let n = geometry.channel_count() as f64;
        let b = geometry.base_width().value;
        let c = geometry.fin_height().value;
        let l = geometry.base_length().value;
        let t = geometry.fin_thickness().value;
        let s = geometry.fin_spacing().value;
        let dh = geometry.hydraulic_diameter().value;
        let rho = air.density.value;
        let mu = air.viscosity.value;

        if b <= c {
            return Err(GeometryError::InvalidGeometry {
                what: "inlet duct needs base width > fin height",
            });
        }

        let alpha = geometry.duct().flare_angle.value;
        let duct_length = ((b - c) / 2.0 / alpha.tan()).max(geometry.duct().min_length.value);
        let duct_dh = 2.0 * b * (b + c) / (3.0 * b + c);

        // Sudden contraction into / expansion out of the fin array
        let open = (1.0 - (n + 1.0) * t / b).powi(2);
        let k_expansion = (1.0 - open).powi(2);
        let k_contraction = 0.42 * (1.0 - open);

        let ac = n * s * c;
        let face = b * c;
        let dyn_ch = rho / 2.0 / (ac * ac);
        let dyn_face = rho / 2.0 / (face * face);

        let quadratic = (k_expansion + k_contraction) * dyn_ch
            + air.venturi_loss * dyn_face
            + (1.0 / (ac * ac) - 1.0 / b.powi(4)) * rho / 2.0;
        let channel_friction = n * mu * (c * s).sqrt() * l / dh * dyn_ch;
        let duct_friction =
            mu * (b * (b + c)).sqrt() / 2.0_f64.sqrt() * duct_length / (4.0 * duct_dh) * dyn_face;

        let curve = Self {
            quadratic,
            channel_friction,
            duct_friction,
            growth: developing_growth(l, n, mu),
            duct_growth: DEVELOPING_FLOW_COEFF * 2.0 * alpha.tan() / ((b - c) * mu),
            f_re_fd: fully_developed_f_re(geometry.aspect_ratio()),
        };
        if !curve.is_finite() {
            return Err(GeometryError::InvalidCurve {
                what: "non-finite pressure drop coefficient",
            });
        }
        Ok(curve)
    }

    fn is_finite(&self) -> bool {
        [
            self.quadratic,
            self.channel_friction,
            self.duct_friction,
            self.growth,
            self.duct_growth,
            self.f_re_fd,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Coefficient of q², Pa/(m³/s)².
    pub fn quadratic_coefficient(&self) -> f64 {
        self.quadratic
    }

    /// Flow-dependent coefficient of q at flow `q`, Pa/(m³/s).
    pub fn linear_coefficient(&self, q: VolumeRate) -> f64 {
        let q = q.value.max(0.0);
        let fd2 = self.f_re_fd * self.f_re_fd;
        let channel = (self.growth * q + fd2).sqrt();
        let duct = ((self.growth + self.duct_growth) * q + fd2).sqrt();
        self.channel_friction * channel + self.duct_friction * duct
    }

    /// Quadratic curve with the linear coefficient frozen at `q`.
    ///
    /// Matches this curve exactly at `q` and bounds it from above below `q`.
    pub fn quadratic_at(&self, q: VolumeRate) -> QuadraticCurve {
        QuadraticCurve {
            a: self.quadratic,
            b: self.linear_coefficient(q),
            c: 0.0,
        }
    }
}

impl SystemCurve for HeatSinkCurve {
    fn pressure_drop(&self, q: VolumeRate) -> Pressure {
        let q_si = q.value.max(0.0);
        pa(self.quadratic * q_si * q_si + q_si * self.linear_coefficient(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryParams;
    use hs_core::units::{m3ps, mm};

    fn reference_curve() -> HeatSinkCurve {
        let g = Geometry::new(GeometryParams::default()).unwrap();
        HeatSinkCurve::new(&g, &AirProperties::default()).unwrap()
    }

    #[test]
    fn quadratic_curve_closed_form() {
        let curve = QuadraticCurve::new(2.0, 3.0, 1.0).unwrap();
        assert_eq!(curve.pressure_drop(m3ps(2.0)).value, 15.0);
        assert_eq!(curve.pressure_drop(m3ps(0.0)).value, 1.0);
        assert!(QuadraticCurve::new(-1.0, 0.0, 0.0).is_err());
        assert!(QuadraticCurve::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn heat_sink_curve_reference_values() {
        let curve = reference_curve();
        for (q, expected) in [
            (0.001, 0.8983572967598142),
            (0.005, 17.582290793572408),
            (0.014, 127.6572648133613),
        ] {
            let dp = curve.pressure_drop(m3ps(q)).value;
            assert!((dp - expected).abs() < 1e-9 * expected, "q={q}: {dp}");
        }
    }

    #[test]
    fn heat_sink_curve_is_increasing() {
        let curve = reference_curve();
        assert_eq!(curve.pressure_drop(m3ps(0.0)).value, 0.0);
        let mut last = 0.0;
        for i in 1..50 {
            let dp = curve.pressure_drop(m3ps(i as f64 * 5e-4)).value;
            assert!(dp > last);
            last = dp;
        }
    }

    #[test]
    fn frozen_quadratic_matches_at_reference_flow() {
        let curve = reference_curve();
        let q = m3ps(0.005);
        let frozen = curve.quadratic_at(q);
        assert!((frozen.pressure_drop(q).value - curve.pressure_drop(q).value).abs() < 1e-12);
        assert!(frozen.pressure_drop(m3ps(0.002)).value >= curve.pressure_drop(m3ps(0.002)).value);
    }

    #[test]
    fn more_fins_raise_resistance() {
        let air = AirProperties::default();
        let mut last_a = 0.0;
        let mut last_dp = 0.0;
        for n in 3..=11 {
            let g = Geometry::new(GeometryParams {
                channel_count: n,
                ..GeometryParams::default()
            })
            .unwrap();
            let curve = HeatSinkCurve::new(&g, &air).unwrap();
            let dp = curve.pressure_drop(m3ps(0.005)).value;
            assert!(curve.quadratic_coefficient() > last_a, "n={n}");
            assert!(dp > last_dp, "n={n}");
            last_a = curve.quadratic_coefficient();
            last_dp = dp;
        }
    }

    #[test]
    fn square_face_has_no_duct() {
        let g = Geometry::new(GeometryParams {
            fin_height: mm(40.0),
            ..GeometryParams::default()
        })
        .unwrap();
        assert!(matches!(
            HeatSinkCurve::new(&g, &AirProperties::default()),
            Err(GeometryError::InvalidGeometry { .. })
        ));
    }
}
