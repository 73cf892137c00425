//! Cartesian grid of candidate geometries.

use hs_core::units::Length;
use hs_geometry::{DuctGeometry, Geometry, GeometryLimits, GeometryParams, GeometryResult, Material};

/// Values to try along each geometry dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryAxes {
    pub channel_counts: Vec<usize>,
    pub fin_thicknesses: Vec<Length>,
    pub fin_heights: Vec<Length>,
    pub base_widths: Vec<Length>,
    pub base_lengths: Vec<Length>,
    pub base_thicknesses: Vec<Length>,
}

impl GeometryAxes {
    fn radices(&self) -> [usize; 6] {
        [
            self.channel_counts.len(),
            self.fin_thicknesses.len(),
            self.fin_heights.len(),
            self.base_widths.len(),
            self.base_lengths.len(),
            self.base_thicknesses.len(),
        ]
    }
}

/// Finite, restartable design space.
///
/// Candidates are addressed by index in mixed radix with the last axis
/// (base thickness) varying fastest, so any index range can be handed to a
/// worker without materializing the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySpace {
    pub axes: GeometryAxes,
    pub material: Material,
    pub duct: DuctGeometry,
    pub limits: GeometryLimits,
}

impl GeometrySpace {
    pub fn new(axes: GeometryAxes) -> Self {
        Self {
            axes,
            material: Material::default(),
            duct: DuctGeometry::default(),
            limits: GeometryLimits::default(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_duct(mut self, duct: DuctGeometry) -> Self {
        self.duct = duct;
        self
    }

    pub fn with_limits(mut self, limits: GeometryLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Number of candidates; zero if any axis is empty.
    pub fn len(&self) -> usize {
        self.axes.radices().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unvalidated parameters of candidate `index`.
    pub fn candidate(&self, index: usize) -> Option<GeometryParams> {
        (index < self.len()).then(|| self.params_at(index))
    }

    /// Mixed-radix decode. Caller guarantees `index < len()`, which also
    /// means every axis is non-empty.
    pub(crate) fn params_at(&self, index: usize) -> GeometryParams {
        let radices = self.axes.radices();
        let mut digits = [0usize; 6];
        let mut rest = index;
        for (digit, radix) in digits.iter_mut().zip(radices).rev() {
            *digit = rest % radix;
            rest /= radix;
        }

        let a = &self.axes;
        GeometryParams {
            channel_count: a.channel_counts[digits[0]],
            fin_thickness: a.fin_thicknesses[digits[1]],
            fin_height: a.fin_heights[digits[2]],
            base_width: a.base_widths[digits[3]],
            base_length: a.base_lengths[digits[4]],
            base_thickness: a.base_thicknesses[digits[5]],
            material: self.material,
            duct: self.duct,
        }
    }

    /// Validated geometry of candidate `index`.
    pub fn geometry(&self, index: usize) -> Option<GeometryResult<Geometry>> {
        (index < self.len()).then(|| self.geometry_at(index))
    }

    /// Validated geometry of candidate `index`, `index < len()`.
    pub(crate) fn geometry_at(&self, index: usize) -> GeometryResult<Geometry> {
        Geometry::with_limits(self.params_at(index), &self.limits)
    }

    pub fn iter(&self) -> impl Iterator<Item = GeometryParams> + '_ {
        (0..self.len()).map(move |i| self.params_at(i))
    }
}
