//! Bracketing + bisection on fan pressure minus system pressure.

use crate::error::{SolverError, SolverResult};
use hs_core::units::{Pressure, VolumeRate, m3ps, pa};
use hs_fans::FanCurve;
use hs_geometry::SystemCurve;
use tracing::{debug, trace};

/// Operating point search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Bisection stops once the bracket is narrower than `rel_tol` times its midpoint
    pub rel_tol: f64,
    /// Bisection budget
    pub max_iterations: usize,
    /// System curves below this pressure at free-air flow count as zero resistance (Pa)
    pub degenerate_pressure: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rel_tol: 1e-4,
            max_iterations: 100,
            degenerate_pressure: 1e-9,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.rel_tol.is_finite() && self.rel_tol > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "rel_tol must be finite and > 0",
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1",
            });
        }
        if !(self.degenerate_pressure.is_finite() && self.degenerate_pressure >= 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "degenerate_pressure must be finite and >= 0",
            });
        }
        Ok(())
    }
}

/// Steady flow through a fan + system pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub flow: VolumeRate,
    /// System pressure drop at `flow`
    pub pressure: Pressure,
    /// Bisection steps taken (0 when the point was hit exactly or clamped)
    pub iterations: usize,
    /// True when the system curve was degenerate and the free-air point was taken
    pub clamped: bool,
}

/// Intersect `fan` with `system`.
///
/// Fails with [`SolverError::NoOperatingPoint`] when the system needs more than
/// the shut-off pressure at the lowest sampled flow, or when the fan still
/// out-pressures the system at its highest sampled flow.
pub fn solve<S>(fan: &FanCurve, system: &S, config: &SolverConfig) -> SolverResult<OperatingPoint>
where
    S: SystemCurve + ?Sized,
{
    config.validate()?;

    let residual = |q: f64| -> SolverResult<(f64, f64)> {
        let dp = system.pressure_drop(m3ps(q)).value;
        if !dp.is_finite() {
            return Err(SolverError::NonFinite { flow: q });
        }
        Ok((fan.pressure_at(m3ps(q)).value - dp, dp))
    };
    let exact = |q: f64, dp: f64| OperatingPoint {
        flow: m3ps(q),
        pressure: pa(dp),
        iterations: 0,
        clamped: false,
    };

    let mut breakpoints = fan.breakpoints().map(|(q, _)| q.value);
    let Some(q_min) = breakpoints.next() else {
        return Err(SolverError::NoOperatingPoint {
            fan: fan.name().to_string(),
            what: "fan curve has no samples",
        });
    };

    let (g_min, dp_min) = residual(q_min)?;
    if g_min < 0.0 {
        return Err(SolverError::NoOperatingPoint {
            fan: fan.name().to_string(),
            what: "system pressure exceeds fan shut-off pressure",
        });
    }
    if g_min == 0.0 {
        return Ok(exact(q_min, dp_min));
    }

    let q_free = fan.free_air_flow().value;
    let (_, dp_free) = residual(q_free)?;
    if dp_free <= config.degenerate_pressure {
        debug!(
            fan = fan.name(),
            dp_free, "degenerate system curve, clamping to free-air flow"
        );
        return Ok(OperatingPoint {
            flow: m3ps(q_free),
            pressure: pa(dp_free),
            iterations: 0,
            clamped: true,
        });
    }

    // First sampled segment where the residual changes sign
    let mut lo = q_min;
    let mut bracket = None;
    for q in breakpoints {
        let (g, dp) = residual(q)?;
        if g == 0.0 {
            return Ok(exact(q, dp));
        }
        if g < 0.0 {
            bracket = Some((lo, q));
            break;
        }
        lo = q;
    }
    let Some((mut lo, mut hi)) = bracket else {
        return Err(SolverError::NoOperatingPoint {
            fan: fan.name().to_string(),
            what: "fan pressure exceeds system pressure over the whole curve",
        });
    };

    let mut iterations = 0;
    while hi - lo > config.rel_tol * 0.5 * (lo + hi) {
        if iterations >= config.max_iterations {
            return Err(SolverError::ConvergenceFailed {
                fan: fan.name().to_string(),
                iterations,
            });
        }
        iterations += 1;

        let mid = 0.5 * (lo + hi);
        let (g, dp) = residual(mid)?;
        if g == 0.0 {
            return Ok(OperatingPoint {
                iterations,
                ..exact(mid, dp)
            });
        }
        if g > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let flow = 0.5 * (lo + hi);
    let (_, dp) = residual(flow)?;
    trace!(fan = fan.name(), flow, dp, iterations, "operating point");
    Ok(OperatingPoint {
        flow: m3ps(flow),
        pressure: pa(dp),
        iterations,
        clamped: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::units::{m3ph, to_m3ph};
    use hs_fans::SampleUnits;
    use hs_geometry::QuadraticCurve;

    /// Quadratic coefficient given in Pa/(m³/h)², converted to SI.
    fn per_m3ph2(a: f64) -> f64 {
        a * 3600.0 * 3600.0
    }

    fn step_fan() -> FanCurve {
        FanCurve::from_datasheet(
            "step",
            &[(0.0, 100.0), (10.0, 80.0), (20.0, 40.0), (30.0, 0.0)],
            SampleUnits::CubicMeterPerHourPascal,
        )
        .unwrap()
    }

    #[test]
    fn intersects_piecewise_fan_with_quadratic_system() {
        let system = QuadraticCurve::new(per_m3ph2(0.1), 0.0, 0.0).unwrap();
        let op = solve(&step_fan(), &system, &SolverConfig::default()).unwrap();
        assert!((to_m3ph(op.flow) - 20.0).abs() < 0.01, "{}", to_m3ph(op.flow));
        assert!((op.pressure.value - 40.0).abs() < 0.1);
        assert!(!op.clamped);
    }

    #[test]
    fn offset_above_shutoff_has_no_operating_point() {
        let system = QuadraticCurve::new(per_m3ph2(0.1), 0.0, 150.0).unwrap();
        let err = solve(&step_fan(), &system, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NoOperatingPoint { .. }));
    }

    #[test]
    fn zero_resistance_clamps_to_free_air() {
        let system = QuadraticCurve::new(0.0, 0.0, 0.0).unwrap();
        let op = solve(&step_fan(), &system, &SolverConfig::default()).unwrap();
        assert!(op.clamped);
        assert!((to_m3ph(op.flow) - 30.0).abs() < 1e-9);
        assert_eq!(op.pressure.value, 0.0);
    }

    #[test]
    fn hits_breakpoint_exactly() {
        // Δp = 4 Pa/(m³/s) · q crosses the SI fan exactly at (10, 40)
        let fan = FanCurve::new("exact", &[(0.0, 80.0), (10.0, 40.0), (20.0, 0.0)]).unwrap();
        let system = QuadraticCurve::new(0.0, 4.0, 0.0).unwrap();
        let op = solve(&fan, &system, &SolverConfig::default()).unwrap();
        assert_eq!(op.flow.value, 10.0);
        assert_eq!(op.iterations, 0);
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        let system = QuadraticCurve::new(per_m3ph2(0.07), 0.0, 0.0).unwrap();
        let config = SolverConfig {
            max_iterations: 3,
            ..SolverConfig::default()
        };
        let err = solve(&step_fan(), &system, &config).unwrap_err();
        assert!(matches!(
            err,
            SolverError::ConvergenceFailed { iterations: 3, .. }
        ));
    }

    #[test]
    fn fan_that_never_drops_has_no_crossing() {
        // Not pinned to zero at free air, and the system is too weak to meet it
        let fan = FanCurve::new("strong", &[(0.0, 50.0), (0.01, 40.0)]).unwrap();
        let system = QuadraticCurve::new(1.0, 0.0, 0.0).unwrap();
        let err = solve(&fan, &system, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NoOperatingPoint { .. }));
    }

    #[test]
    fn rejects_bad_config() {
        let system = QuadraticCurve::new(1.0, 0.0, 0.0).unwrap();
        let config = SolverConfig {
            rel_tol: 0.0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            solve(&step_fan(), &system, &config),
            Err(SolverError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_finite_system_is_reported() {
        struct Broken;
        impl SystemCurve for Broken {
            fn pressure_drop(&self, q: VolumeRate) -> Pressure {
                pa(if q.value > 0.0 { f64::NAN } else { 0.0 })
            }
        }
        let err = solve(&step_fan(), &Broken, &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NonFinite { .. }));
    }

    #[test]
    fn deterministic() {
        let system = QuadraticCurve::new(per_m3ph2(0.07), 1.0, 5.0).unwrap();
        let a = solve(&step_fan(), &system, &SolverConfig::default()).unwrap();
        let b = solve(&step_fan(), &system, &SolverConfig::default()).unwrap();
        assert_eq!(a, b);
        assert!(a.flow > m3ph(10.0));
    }
}
