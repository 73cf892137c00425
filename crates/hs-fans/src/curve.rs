//! Fan characteristic curve.

use crate::error::{FanError, FanResult};
use hs_core::numeric::lerp;
use hs_core::units::{Length, Pressure, Volume, VolumeRate, constants, m3ps, pa};

/// Unit system of raw datasheet samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleUnits {
    /// Flow in m³/s, static pressure in Pa
    Si,
    /// Flow in m³/h, static pressure in Pa
    CubicMeterPerHourPascal,
    /// Flow in CFM, static pressure in inch H2O (US datasheets)
    CfmInchWater,
}

impl SampleUnits {
    /// Convert one raw `(flow, pressure)` sample to SI.
    pub fn to_si(self, flow: f64, pressure: f64) -> (f64, f64) {
        match self {
            SampleUnits::Si => (flow, pressure),
            SampleUnits::CubicMeterPerHourPascal => (flow / constants::SECONDS_PER_HOUR, pressure),
            SampleUnits::CfmInchWater => (
                flow / constants::CFM_PER_M3PS,
                pressure * constants::PA_PER_INCH_H2O,
            ),
        }
    }
}

/// Outer dimensions of a square axial fan frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanFrame {
    /// Edge length of the square frame
    pub side: Length,
    /// Frame depth along the air path
    pub depth: Length,
}

impl FanFrame {
    pub fn volume(&self) -> Volume {
        self.side * self.side * self.depth
    }
}

/// Named, immutable static-pressure characteristic of one fan model.
///
/// Samples are stored in SI, ordered by strictly ascending flow with
/// non-increasing pressure. Between samples the curve is linear. Below the
/// first sample it holds the shut-off pressure; above the last sample it holds
/// the last sample's pressure, which is zero for curves built with
/// [`FanCurve::from_datasheet`]. `pressure_at` is non-increasing in flow and
/// returns NaN only for a NaN flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCurve {
    name: String,
    flows: Vec<f64>,
    pressures: Vec<f64>,
    frame: Option<FanFrame>,
}

impl FanCurve {
    /// Build a curve from SI samples `(flow m³/s, pressure Pa)`.
    pub fn new(name: impl Into<String>, samples: &[(f64, f64)]) -> FanResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FanError::EmptyName);
        }
        if samples.len() < 2 {
            return Err(FanError::TooFewSamples {
                fan: name,
                count: samples.len(),
            });
        }

        for (index, &(q, p)) in samples.iter().enumerate() {
            if !q.is_finite() || !p.is_finite() {
                return Err(FanError::NonFinite { fan: name, index });
            }
            if q < 0.0 || p < 0.0 {
                return Err(FanError::Negative { fan: name, index });
            }
        }

        for (index, pair) in samples.windows(2).enumerate() {
            let (q0, p0) = pair[0];
            let (q1, p1) = pair[1];
            if q1 <= q0 {
                return Err(FanError::NonAscendingFlow {
                    fan: name,
                    index: index + 1,
                });
            }
            if p1 > p0 {
                return Err(FanError::IncreasingPressure {
                    fan: name,
                    index: index + 1,
                });
            }
        }

        Ok(Self {
            name,
            flows: samples.iter().map(|&(q, _)| q).collect(),
            pressures: samples.iter().map(|&(_, p)| p).collect(),
            frame: None,
        })
    }

    /// Build a curve from raw datasheet samples.
    ///
    /// Digitized datasheet curves stop just short of free air, so the last
    /// sample is pinned to zero pressure before validation.
    pub fn from_datasheet(
        name: impl Into<String>,
        samples: &[(f64, f64)],
        units: SampleUnits,
    ) -> FanResult<Self> {
        let mut si: Vec<(f64, f64)> = samples.iter().map(|&(q, p)| units.to_si(q, p)).collect();
        if let Some(last) = si.last_mut() {
            last.1 = 0.0;
        }
        Self::new(name, &si)
    }

    /// Attach frame dimensions (needed for cooling-system volume).
    pub fn with_frame(mut self, frame: FanFrame) -> FanResult<Self> {
        let ok = |l: Length| l.value.is_finite() && l.value > 0.0;
        if !ok(frame.side) || !ok(frame.depth) {
            return Err(FanError::InvalidFrame { fan: self.name });
        }
        self.frame = Some(frame);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> Option<&FanFrame> {
        self.frame.as_ref()
    }

    /// Static pressure the fan delivers at flow `q`. NaN in, NaN out.
    pub fn pressure_at(&self, q: VolumeRate) -> Pressure {
        pa(self.pressure_at_si(q.value))
    }

    fn pressure_at_si(&self, q: f64) -> f64 {
        if q.is_nan() {
            return f64::NAN;
        }
        let last = self.flows.len() - 1;
        if q <= self.flows[0] {
            return self.pressures[0];
        }
        if q >= self.flows[last] {
            return self.pressures[last];
        }
        // First sample strictly above q; guaranteed in 1..=last by the checks above.
        let hi = self.flows.partition_point(|&f| f <= q);
        let lo = hi - 1;
        lerp(
            self.flows[lo],
            self.pressures[lo],
            self.flows[hi],
            self.pressures[hi],
            q,
        )
    }

    /// Pressure at the lowest sampled flow.
    pub fn shutoff_pressure(&self) -> Pressure {
        pa(self.pressures[0])
    }

    /// Highest sampled flow (the free-air point).
    pub fn free_air_flow(&self) -> VolumeRate {
        m3ps(self.flows[self.flows.len() - 1])
    }

    /// Lowest sampled flow.
    pub fn min_flow(&self) -> VolumeRate {
        m3ps(self.flows[0])
    }

    /// Sample points in SI, ascending by flow.
    pub fn breakpoints(&self) -> impl Iterator<Item = (VolumeRate, Pressure)> + '_ {
        self.flows
            .iter()
            .zip(&self.pressures)
            .map(|(&q, &p)| (m3ps(q), pa(p)))
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
