//! End-to-end design sweeps.

use hs_core::units::mm;
use hs_fans::{FanCatalog, FanCurve};
use hs_optim::{
    Evaluator, GeometryAxes, GeometrySpace, OptimError, SkipReason, evaluate_pair, optimize,
};

fn axes(base_thicknesses_mm: &[f64]) -> GeometryAxes {
    GeometryAxes {
        channel_counts: vec![5],
        fin_thicknesses: vec![mm(1.0)],
        fin_heights: vec![mm(30.0)],
        base_widths: vec![mm(40.0)],
        base_lengths: vec![mm(100.0)],
        base_thicknesses: base_thicknesses_mm.iter().map(|&t| mm(t)).collect(),
    }
}

fn catalog() -> FanCatalog {
    FanCatalog::new([
        FanCurve::new("strong", &[(0.0, 80.0), (0.012, 0.0)]).unwrap(),
        FanCurve::new("weak", &[(0.0, 30.0), (0.010, 0.0)]).unwrap(),
    ])
    .unwrap()
}

#[test]
fn dominated_geometry_never_reaches_front() {
    // Thicker base: more metal and more conduction, same hydraulics
    let space = GeometrySpace::new(axes(&[3.0, 6.0]));
    let result = optimize(&space, &catalog(), &Evaluator::default()).unwrap();

    assert_eq!(result.report.total_pairs, 4);
    assert_eq!(result.evaluated.len(), 4);
    assert!(!result.front.is_empty());
    for point in &result.front {
        assert_eq!(point.geometry.base_thickness(), mm(3.0));
    }
}

#[test]
fn evaluated_points_keep_pair_order() {
    let space = GeometrySpace::new(axes(&[3.0, 6.0]));
    let catalog = catalog();
    let evaluator = Evaluator::default();
    let result = optimize(&space, &catalog, &evaluator).unwrap();

    let names: Vec<&str> = result.evaluated.iter().map(|p| p.fan.name()).collect();
    assert_eq!(names, ["strong", "weak", "strong", "weak"]);

    // Parallel sweep gives the same points as evaluating each pair alone
    let geometry = space.geometry(1).unwrap().unwrap();
    let alone = evaluate_pair(&geometry, catalog.fan(1).unwrap(), &evaluator).unwrap();
    assert_eq!(result.evaluated[3], alone);
}

#[test]
fn sweep_is_deterministic() {
    let space = GeometrySpace::new(GeometryAxes {
        channel_counts: vec![3, 5, 7, 9],
        fin_heights: vec![mm(20.0), mm(30.0)],
        ..axes(&[2.0, 4.0])
    });
    let a = optimize(&space, &catalog(), &Evaluator::default()).unwrap();
    let b = optimize(&space, &catalog(), &Evaluator::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn failed_pairs_are_reported_not_fatal() {
    let space = GeometrySpace::new(GeometryAxes {
        channel_counts: vec![5, 40],
        ..axes(&[3.0])
    });
    let catalog = FanCatalog::new([
        FanCurve::new("strong", &[(0.0, 80.0), (0.012, 0.0)]).unwrap(),
        // Never drops over its sampled range, so it cannot meet the sink
        FanCurve::new("flat", &[(0.0, 50.0), (1e-4, 50.0)]).unwrap(),
    ])
    .unwrap();

    let result = optimize(&space, &catalog, &Evaluator::default()).unwrap();
    let counts = result.report.skip_counts();

    assert_eq!(result.report.total_pairs, 4);
    assert_eq!(result.report.evaluated, 1);
    assert_eq!(counts.get(&SkipReason::InvalidGeometry), Some(&2));
    assert_eq!(counts.get(&SkipReason::NoOperatingPoint), Some(&1));
    assert_eq!(result.front.len(), 1);

    let skipped = &result.report.skipped[0];
    assert_eq!(skipped.fan, "flat");
    assert_eq!(skipped.geometry_index, 0);
}

#[test]
fn empty_inputs_are_fatal() {
    let space = GeometrySpace::new(axes(&[3.0]));
    assert_eq!(
        optimize(&space, &FanCatalog::default(), &Evaluator::default()).unwrap_err(),
        OptimError::EmptyFanCatalog
    );

    let empty = GeometrySpace::new(axes(&[]));
    assert_eq!(
        optimize(&empty, &catalog(), &Evaluator::default()).unwrap_err(),
        OptimError::EmptyGeometrySpace
    );
}

#[test]
fn every_pair_is_accounted_for() {
    let space = GeometrySpace::new(GeometryAxes {
        channel_counts: vec![3, 5, 40],
        fin_heights: vec![mm(20.0), mm(30.0)],
        ..axes(&[2.0, 4.0])
    });
    let catalog = FanCatalog::new([
        FanCurve::new("strong", &[(0.0, 80.0), (0.012, 0.0)]).unwrap(),
        FanCurve::new("weak", &[(0.0, 30.0), (0.010, 0.0)]).unwrap(),
        FanCurve::new("flat", &[(0.0, 50.0), (1e-4, 50.0)]).unwrap(),
    ])
    .unwrap();

    let result = optimize(&space, &catalog, &Evaluator::default()).unwrap();
    let report = &result.report;
    assert_eq!(report.total_pairs, space.len() * catalog.len());
    assert_eq!(report.evaluated + report.skipped.len(), report.total_pairs);

    // Each geometry appears once per fan across evaluated and skipped pairs
    let mut seen = vec![0usize; space.len()];
    for skip in &report.skipped {
        seen[skip.geometry_index] += 1;
    }
    for point in &result.evaluated {
        let index = (0..space.len())
            .find(|&i| space.geometry(i).unwrap().ok() == Some(point.geometry))
            .unwrap();
        seen[index] += 1;
    }
    assert!(seen.iter().all(|&count| count == catalog.len()), "{seen:?}");
}
