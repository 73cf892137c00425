//! Fin efficiency and the air-side resistance of the fin array.

use hs_geometry::Geometry;

/// Efficiency of a straight rectangular fin with adiabatic tip.
pub fn fin_efficiency(geometry: &Geometry, h: f64) -> f64 {
    let t = geometry.fin_thickness().value;
    let l = geometry.base_length().value;
    let c = geometry.fin_height().value;
    let lambda = geometry.material().conductivity.value;

    let mc = (2.0 * h * (t + l) / (lambda * t * l)).sqrt() * c;
    if mc == 0.0 {
        return 1.0;
    }
    mc.tanh() / mc
}

/// Wetted area of fins and exposed base, fin area weighted by `efficiency`.
pub fn effective_area(geometry: &Geometry, efficiency: f64) -> f64 {
    let n = geometry.channel_count() as f64;
    let c = geometry.fin_height().value;
    let s = geometry.fin_spacing().value;
    let l = geometry.base_length().value;
    n * (2.0 * c * efficiency + s) * l
}

/// Convective film resistance 1/(h·A).
pub fn film_resistance(h: f64, area: f64) -> f64 {
    1.0 / (h * area)
}

/// Sink-to-ambient resistance of an air stream of heat capacity rate `capacity`
/// (W/K) through area `area` with coefficient `h`.
///
/// Referenced to inlet air temperature, so it never drops below 1/capacity.
pub fn air_side_resistance(capacity: f64, h: f64, area: f64) -> f64 {
    1.0 / (capacity * (1.0 - (-h * area / capacity).exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_geometry::GeometryParams;

    #[test]
    fn efficiency_drops_with_h() {
        let g = Geometry::new(GeometryParams::default()).unwrap();
        let low = fin_efficiency(&g, 10.0);
        let high = fin_efficiency(&g, 200.0);
        assert!(low > high);
        assert!(low < 1.0 && high > 0.0);
        assert_eq!(fin_efficiency(&g, 0.0), 1.0);
    }

    #[test]
    fn air_resistance_bounded_by_capacity() {
        let capacity = 1.293 * 1005.0 * 0.01;
        let r = air_side_resistance(capacity, 1e4, 1.0);
        assert!((r - 1.0 / capacity).abs() < 1e-12);
        assert!(air_side_resistance(capacity, 50.0, 0.05) > r);
    }

    #[test]
    fn air_resistance_exceeds_film_resistance() {
        let capacity = 1.293 * 1005.0 * 0.005;
        for (h, area) in [(20.0, 0.02), (80.0, 0.05), (200.0, 0.1)] {
            assert!(air_side_resistance(capacity, h, area) > film_resistance(h, area));
        }
    }

    #[test]
    fn ideal_area_is_full_wetted_area() {
        let g = Geometry::new(GeometryParams::default()).unwrap();
        let a = effective_area(&g, 1.0);
        assert!((a - 5.0 * (2.0 * 0.03 + 6.8e-3) * 0.1).abs() < 1e-12);
    }
}
