/// Floating point type used throughout system
pub type Real = f64;

/// Linear interpolation between `(x0, y0)` and `(x1, y1)` at `x`.
///
/// Degenerate segments (`x1 == x0`) return `y0`.
pub fn lerp(x0: Real, y0: Real, x1: Real, y1: Real, x: Real) -> Real {
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / dx
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lerp_stays_between_endpoints(
            y0 in 0.0_f64..500.0,
            y1 in 0.0_f64..500.0,
            t in 0.0_f64..=1.0,
        ) {
            let y = lerp(0.0, y0, 1.0, y1, t);
            prop_assert!(y >= y0.min(y1) - 1e-9);
            prop_assert!(y <= y0.max(y1) + 1e-9);
        }
    }
}
