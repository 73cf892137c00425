//! Volume metrics used to rank designs.

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Geometry;
use hs_core::units::{Length, Mass, Volume, m};
use hs_fans::{FanCurve, FanFrame};

/// Which volume the optimizer minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeMetric {
    /// Solid metal of base plate and fins
    #[default]
    Material,
    /// Bounding box of the heat sink
    Boxed,
    /// Bounding box + fan frame + inlet duct
    CoolingSystem,
}

impl VolumeMetric {
    /// Volume of `geometry` under this metric. Only `CoolingSystem` looks at the fan.
    pub fn volume(self, geometry: &Geometry, fan: &FanCurve) -> GeometryResult<Volume> {
        match self {
            VolumeMetric::Material => Ok(geometry.material_volume()),
            VolumeMetric::Boxed => Ok(geometry.boxed_volume()),
            VolumeMetric::CoolingSystem => geometry.cooling_system_volume(fan),
        }
    }
}

impl Geometry {
    /// L·b·(c + d)
    pub fn boxed_volume(&self) -> Volume {
        self.base_length() * self.base_width() * (self.fin_height() + self.base_thickness())
    }

    pub fn material_volume(&self) -> Volume {
        let slab = self.base_length() * self.base_width() * self.base_thickness();
        let fins =
            self.fin_count() as f64 * self.fin_thickness() * self.fin_height() * self.base_length();
        slab + fins
    }

    pub fn mass(&self) -> Mass {
        self.material_volume() * self.material().density
    }

    /// Length of the flared duct between a fan of `frame` and the sink face.
    ///
    /// The duct walls open at half the flare angle from the smaller sink edge
    /// to the fan edge; short ducts are raised to the minimum length.
    pub fn duct_length(&self, frame: &FanFrame) -> Option<Length> {
        let half_tan = (self.duct().flare_angle.value / 2.0).tan();
        let sink_edge = self.base_width().value.min(self.fin_height().value);
        let to_fan = frame.side.value / 2.0 / half_tan;
        let to_sink = sink_edge / 2.0 / half_tan;
        let length = to_fan - to_sink;
        if length < 0.0 {
            return None;
        }
        Some(m(length.max(self.duct().min_length.value)))
    }

    /// Frustum volume of the inlet duct.
    pub fn duct_volume(&self, frame: &FanFrame) -> Option<Volume> {
        let length = self.duct_length(frame)?;
        let side = frame.side;
        Some((side + self.base_width()) / 2.0 * ((side + self.fin_height()) / 2.0) * length)
    }

    /// Heat sink box + fan frame + duct.
    pub fn cooling_system_volume(&self, fan: &FanCurve) -> GeometryResult<Volume> {
        let frame = fan.frame().ok_or_else(|| GeometryError::MissingFanFrame {
            fan: fan.name().to_string(),
        })?;
        let duct = self
            .duct_volume(frame)
            .ok_or_else(|| GeometryError::FanTooSmall {
                fan: fan.name().to_string(),
            })?;
        Ok(self.boxed_volume() + frame.volume() + duct)
    }
}
