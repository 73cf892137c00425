//! Thermal resistance of a heat sink at a given air flow.

use crate::convection::{ChannelFlow, FlowRegime, developing_laminar_nusselt, gnielinski_nusselt};
use crate::error::ThermalError;
use crate::fin::{air_side_resistance, effective_area, film_resistance, fin_efficiency};
use crate::properties::{CorrelationConstants, prandtl_number};
use crate::spreading::{SpreadingPlate, spreading_resistance};
use hs_core::units::{Area, KelvinPerWatt, Length, Temperature, VolumeRate, deg_c};
use hs_geometry::channel::{apparent_f_re, fully_developed_f_re};
use hs_geometry::{AirProperties, Geometry};
use hs_solver::OperatingPoint;

/// Flows at or below this are treated as no cooling (m³/s).
const MIN_FLOW: f64 = 1e-9;

/// Rectangular footprint of the heat source, centred on the base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    pub width: Length,
    pub length: Length,
}

impl HeatSource {
    pub fn area(&self) -> Area {
        self.width * self.length
    }
}

/// Resistance breakdown at one operating point, all in K/W.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalResult {
    /// Film resistance 1/(h·A) of the ideal-fin wetted area
    pub convective: KelvinPerWatt,
    /// Temperature rise of the air stream along the channels, ideal fins
    pub air_heating: KelvinPerWatt,
    /// Base conduction plus fin efficiency penalty
    pub conductive: KelvinPerWatt,
    /// Constriction from a source smaller than the base
    pub spreading: KelvinPerWatt,
    pub total: KelvinPerWatt,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub nusselt: f64,
    /// W/(m²·K)
    pub heat_transfer_coefficient: f64,
    pub fin_efficiency: f64,
}

/// Evaluates sink-to-ambient resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalModel {
    pub air: AirProperties,
    pub constants: CorrelationConstants,
    /// Inlet air temperature
    pub ambient: Temperature,
    /// `None` spreads from the whole base (no correction)
    pub source: Option<HeatSource>,
    /// Channel Reynolds number at which the turbulent correlation takes over
    pub transition_reynolds: f64,
}

impl Default for ThermalModel {
    fn default() -> Self {
        Self {
            air: AirProperties::default(),
            constants: CorrelationConstants::default(),
            ambient: deg_c(25.0),
            source: None,
            transition_reynolds: 2300.0,
        }
    }
}

impl ThermalModel {
    pub fn evaluate(
        &self,
        geometry: &Geometry,
        operating_point: &OperatingPoint,
    ) -> Result<ThermalResult, ThermalError> {
        self.evaluate_at_flow(geometry, operating_point.flow)
    }

    pub fn evaluate_at_flow(
        &self,
        geometry: &Geometry,
        flow: VolumeRate,
    ) -> Result<ThermalResult, ThermalError> {
        let q = flow.value;
        if !(q.is_finite() && q > MIN_FLOW) {
            return Err(ThermalError::PhysicallyInfeasible {
                what: "no cooling air flow",
            });
        }

        let n = geometry.channel_count() as f64;
        let s = geometry.fin_spacing().value;
        let c = geometry.fin_height().value;
        let l = geometry.base_length().value;
        let dh = geometry.hydraulic_diameter().value;
        let eps = geometry.aspect_ratio();
        let rho = self.air.density.value;
        let mu = self.air.viscosity.value;

        let prandtl = prandtl_number(self.ambient)?;
        let channel = ChannelFlow {
            prandtl,
            aspect_ratio: eps,
            f_re: apparent_f_re(q, l, n, mu, fully_developed_f_re(eps)),
            z_star: l * n * mu / (prandtl * q),
        };
        let laminar = developing_laminar_nusselt(&channel, &self.constants)?;

        let velocity = q / (n * s * c);
        let reynolds = rho * velocity * dh / mu;
        let (regime, nusselt) = if reynolds >= self.transition_reynolds {
            let turbulent = gnielinski_nusselt(reynolds, prandtl, dh / l);
            (FlowRegime::Turbulent, turbulent.max(laminar))
        } else {
            (FlowRegime::Laminar, laminar)
        };

        let h = nusselt * self.air.conductivity.value / dh;
        let efficiency = fin_efficiency(geometry, h);
        let capacity = self.air.volumetric_heat_capacity() * q;
        let ideal_area = effective_area(geometry, 1.0);
        let r_air = air_side_resistance(capacity, h, effective_area(geometry, efficiency));
        let r_ideal = air_side_resistance(capacity, h, ideal_area);
        let r_film = film_resistance(h, ideal_area);

        let lambda = geometry.material().conductivity.value;
        let r_base = geometry.base_thickness().value / (geometry.base_area().value * lambda);

        let spreading = match self.source {
            Some(source) if source.area() < geometry.base_area() => {
                let plate = SpreadingPlate {
                    source_area: source.area(),
                    plate_area: geometry.base_area(),
                    thickness: geometry.base_thickness(),
                    conductivity: geometry.material().conductivity,
                };
                spreading_resistance(&plate, r_air)?.constriction
            }
            _ => 0.0,
        };

        let convective = r_film;
        let air_heating = r_ideal - r_film;
        let conductive = r_base + (r_air - r_ideal);
        let total = spreading + conductive + convective + air_heating;

        let result = ThermalResult {
            convective,
            air_heating,
            conductive,
            spreading,
            total,
            reynolds,
            regime,
            nusselt,
            heat_transfer_coefficient: h,
            fin_efficiency: efficiency,
        };
        let finite = [total, convective, air_heating, conductive, spreading, h, efficiency]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ThermalError::PhysicallyInfeasible {
                what: "non-finite thermal resistance",
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::units::{m3ps, mm, pa};
    use hs_geometry::GeometryParams;

    fn reference() -> Geometry {
        Geometry::new(GeometryParams::default()).unwrap()
    }

    fn laminar_only() -> ThermalModel {
        ThermalModel {
            transition_reynolds: f64::INFINITY,
            ..ThermalModel::default()
        }
    }

    #[test]
    fn reference_sink_to_ambient_resistance() {
        let r = laminar_only()
            .evaluate_at_flow(&reference(), m3ps(0.014))
            .unwrap();
        assert!((r.total - 0.46442982872906496).abs() < 1e-12, "{}", r.total);
        assert!((r.convective - 0.3603611877756496).abs() < 1e-12);
        assert!((r.air_heating - 0.028182274984988653).abs() < 1e-12);
        // air-side resistance with ideal fins
        assert!((r.convective + r.air_heating - 0.3885434627606383).abs() < 1e-12);
        assert_eq!(r.spreading, 0.0);
        assert_eq!(r.regime, FlowRegime::Laminar);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let model = ThermalModel {
            source: Some(HeatSource {
                width: mm(10.0),
                length: mm(20.0),
            }),
            ..ThermalModel::default()
        };
        let r = model.evaluate_at_flow(&reference(), m3ps(0.005)).unwrap();
        assert!(r.spreading > 0.0);
        assert!(r.conductive > 0.0 && r.convective > 0.0 && r.air_heating > 0.0);
        let sum = r.spreading + r.conductive + r.convective + r.air_heating;
        assert!((r.total - sum).abs() < 1e-15);
        assert!(r.fin_efficiency > 0.0 && r.fin_efficiency < 1.0);
    }

    #[test]
    fn source_covering_base_has_no_spreading() {
        let model = ThermalModel {
            source: Some(HeatSource {
                width: mm(40.0),
                length: mm(100.0),
            }),
            ..ThermalModel::default()
        };
        let r = model.evaluate_at_flow(&reference(), m3ps(0.005)).unwrap();
        assert_eq!(r.spreading, 0.0);
    }

    #[test]
    fn turbulent_branch_never_below_laminar() {
        let g = reference();
        let lam = laminar_only().evaluate_at_flow(&g, m3ps(0.014)).unwrap();
        let mixed = ThermalModel::default().evaluate_at_flow(&g, m3ps(0.014)).unwrap();
        assert_eq!(mixed.regime, FlowRegime::Turbulent);
        assert!(mixed.nusselt >= lam.nusselt);
        assert!(mixed.total <= lam.total);
        assert!((mixed.reynolds - 10811.0).abs() < 5.0, "{}", mixed.reynolds);
    }

    #[test]
    fn zero_flow_is_infeasible() {
        let op = OperatingPoint {
            flow: m3ps(0.0),
            pressure: pa(0.0),
            iterations: 0,
            clamped: false,
        };
        assert!(matches!(
            ThermalModel::default().evaluate(&reference(), &op),
            Err(ThermalError::PhysicallyInfeasible { .. })
        ));
        assert!(
            ThermalModel::default()
                .evaluate_at_flow(&reference(), m3ps(f64::NAN))
                .is_err()
        );
    }

    #[test]
    fn more_flow_cools_better() {
        let g = reference();
        let model = ThermalModel::default();
        let slow = model.evaluate_at_flow(&g, m3ps(0.002)).unwrap();
        let fast = model.evaluate_at_flow(&g, m3ps(0.01)).unwrap();
        assert!(fast.total < slow.total);
    }
}
