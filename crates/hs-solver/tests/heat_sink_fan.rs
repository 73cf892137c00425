//! Operating points of real heat sink curves.

use hs_core::units::m3ps;
use hs_fans::FanCurve;
use hs_geometry::{AirProperties, Geometry, GeometryParams, HeatSinkCurve, SystemCurve};
use hs_solver::{SolverConfig, solve};

fn linear_fan() -> FanCurve {
    FanCurve::new("linear", &[(0.0, 60.0), (0.012, 0.0)]).unwrap()
}

fn curve(channels: usize) -> HeatSinkCurve {
    let geometry = Geometry::new(GeometryParams {
        channel_count: channels,
        ..GeometryParams::default()
    })
    .unwrap();
    HeatSinkCurve::new(&geometry, &AirProperties::default()).unwrap()
}

#[test]
fn pressures_balance_at_operating_point() {
    let fan = linear_fan();
    let system = curve(5);
    let op = solve(&fan, &system, &SolverConfig::default()).unwrap();

    let fan_dp = fan.pressure_at(op.flow).value;
    let sys_dp = system.pressure_drop(op.flow).value;
    // Fan slope is 5000 Pa/(m³/s); a flow error of 1e-4·q bounds the gap
    assert!((fan_dp - sys_dp).abs() < 0.05, "fan {fan_dp} vs system {sys_dp}");
    assert!(op.iterations > 0 && op.iterations < 30);
}

#[test]
fn more_fins_means_less_flow() {
    let fan = linear_fan();
    let config = SolverConfig::default();
    let flows: Vec<f64> = (3..=11)
        .map(|n| solve(&fan, &curve(n), &config).unwrap().flow.value)
        .collect();

    assert!(flows.windows(2).all(|w| w[1] < w[0]), "{flows:?}");
    assert!((flows[0] - 0.00697).abs() < 1e-4);
    assert!((flows[8] - 0.00468).abs() < 1e-4);
}

#[test]
fn shared_curve_across_threads() {
    let fan = linear_fan();
    let system = curve(6);
    let expected = solve(&fan, &system, &SolverConfig::default()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let op = solve(&fan, &system, &SolverConfig::default()).unwrap();
                assert_eq!(op, expected);
            });
        }
    });
    assert!(expected.flow > m3ps(0.0));
}
