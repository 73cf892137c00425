//! Heat sink geometry and its dimensional invariants.

use crate::error::{GeometryError, GeometryResult};
use hs_core::units::{Angle, Area, Conductivity, Density, Length, deg, kg_per_m3, m, mm, w_per_mk};
use std::f64::consts::FRAC_PI_2;

/// Heat sink material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub conductivity: Conductivity,
    pub density: Density,
}

impl Material {
    pub fn aluminium() -> Self {
        Self {
            conductivity: w_per_mk(210.0),
            density: kg_per_m3(2699.0),
        }
    }

    pub fn copper() -> Self {
        Self {
            conductivity: w_per_mk(400.0),
            density: kg_per_m3(8960.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::aluminium()
    }
}

/// Flared inlet duct between fan and heat sink face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctGeometry {
    /// Flare angle of the duct walls, 0 < α < 90°
    pub flare_angle: Angle,
    /// Lower bound on the duct length
    pub min_length: Length,
}

impl Default for DuctGeometry {
    fn default() -> Self {
        Self {
            flare_angle: deg(40.0),
            min_length: mm(5.0),
        }
    }
}

/// Manufacturing limits applied on top of the physical invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryLimits {
    pub min_fin_spacing: Length,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        Self {
            min_fin_spacing: mm(0.1),
        }
    }
}

/// Unvalidated geometry description.
///
/// `channel_count` is the number of air channels; the sink has one more fin
/// than channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryParams {
    pub channel_count: usize,
    pub fin_thickness: Length,
    pub fin_height: Length,
    pub base_width: Length,
    /// Base length, equal to the channel length along the flow
    pub base_length: Length,
    pub base_thickness: Length,
    pub material: Material,
    pub duct: DuctGeometry,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            channel_count: 5,
            fin_thickness: mm(1.0),
            fin_height: mm(30.0),
            base_width: mm(40.0),
            base_length: mm(100.0),
            base_thickness: mm(3.0),
            material: Material::default(),
            duct: DuctGeometry::default(),
        }
    }
}

/// Validated, immutable heat sink geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    params: GeometryParams,
    fin_spacing: Length,
}

impl Geometry {
    pub fn new(params: GeometryParams) -> GeometryResult<Self> {
        Self::with_limits(params, &GeometryLimits::default())
    }

    pub fn with_limits(params: GeometryParams, limits: &GeometryLimits) -> GeometryResult<Self> {
        if params.channel_count == 0 {
            return Err(GeometryError::InvalidGeometry {
                what: "channel count must be at least 1",
            });
        }
        positive(params.fin_thickness.value, "fin thickness must be > 0")?;
        positive(params.fin_height.value, "fin height must be > 0")?;
        positive(params.base_width.value, "base width must be > 0")?;
        positive(params.base_length.value, "base length must be > 0")?;
        positive(params.base_thickness.value, "base thickness must be > 0")?;
        positive(
            params.material.conductivity.value,
            "material conductivity must be > 0",
        )?;
        positive(params.material.density.value, "material density must be > 0")?;
        positive(params.duct.min_length.value, "minimum duct length must be > 0")?;

        let alpha = params.duct.flare_angle.value;
        if !(alpha > 0.0 && alpha < FRAC_PI_2) {
            return Err(GeometryError::InvalidGeometry {
                what: "duct flare angle must lie in (0, 90) degrees",
            });
        }

        let n = params.channel_count as f64;
        let spacing = (params.base_width.value - (n + 1.0) * params.fin_thickness.value) / n;
        if !(spacing > limits.min_fin_spacing.value) {
            return Err(GeometryError::InvalidGeometry {
                what: "fins do not fit on the base plate",
            });
        }

        Ok(Self {
            params,
            fin_spacing: m(spacing),
        })
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    pub fn channel_count(&self) -> usize {
        self.params.channel_count
    }

    pub fn fin_count(&self) -> usize {
        self.params.channel_count + 1
    }

    pub fn fin_thickness(&self) -> Length {
        self.params.fin_thickness
    }

    pub fn fin_height(&self) -> Length {
        self.params.fin_height
    }

    pub fn base_width(&self) -> Length {
        self.params.base_width
    }

    pub fn base_length(&self) -> Length {
        self.params.base_length
    }

    pub fn base_thickness(&self) -> Length {
        self.params.base_thickness
    }

    pub fn material(&self) -> &Material {
        &self.params.material
    }

    pub fn duct(&self) -> &DuctGeometry {
        &self.params.duct
    }

    /// Clear gap between adjacent fins.
    pub fn fin_spacing(&self) -> Length {
        self.fin_spacing
    }

    /// Hydraulic diameter of one channel, 2sc/(s+c).
    pub fn hydraulic_diameter(&self) -> Length {
        let s = self.fin_spacing;
        let c = self.params.fin_height;
        2.0 * s * c / (s + c)
    }

    /// Channel aspect ratio, always in (0, 1].
    pub fn aspect_ratio(&self) -> f64 {
        let s = self.fin_spacing.value;
        let c = self.params.fin_height.value;
        if s < c { s / c } else { c / s }
    }

    /// Total open cross section of all channels.
    pub fn channel_flow_area(&self) -> Area {
        self.params.channel_count as f64 * self.fin_spacing * self.params.fin_height
    }

    /// Footprint of the base plate.
    pub fn base_area(&self) -> Area {
        self.params.base_width * self.params.base_length
    }
}

fn positive(v: f64, what: &'static str) -> GeometryResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry { what })
    }
}
