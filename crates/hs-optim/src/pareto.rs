//! Non-dominated filtering over (volume, thermal resistance).

use crate::evaluate::DesignPoint;
use std::cmp::Ordering;

/// The two minimized objectives of a design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objectives {
    /// m³
    pub volume: f64,
    /// K/W
    pub resistance: f64,
}

/// True if `p` is no worse than `q` in both objectives and better in one.
pub fn dominates(p: Objectives, q: Objectives) -> bool {
    p.volume <= q.volume
        && p.resistance <= q.resistance
        && (p.volume < q.volume || p.resistance < q.resistance)
}

/// Indices of the non-dominated points, ordered by ascending volume.
///
/// Sort by (volume, resistance, index) and keep every point that strictly
/// lowers the running minimum resistance. Of several identical points only the
/// first enumerated is kept.
pub fn front_indices(objectives: &[Objectives]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..objectives.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (objectives[a], objectives[b]);
        pa.volume
            .total_cmp(&pb.volume)
            .then(pa.resistance.total_cmp(&pb.resistance))
            .then(a.cmp(&b))
    });

    let mut best = f64::INFINITY;
    let mut front = Vec::new();
    for index in order {
        let r = objectives[index].resistance;
        if r.partial_cmp(&best) == Some(Ordering::Less) {
            best = r;
            front.push(index);
        }
    }
    front
}

/// Pareto-optimal design points, ordered by ascending volume
/// (and so by descending thermal resistance).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParetoFront {
    points: Vec<DesignPoint>,
}

impl ParetoFront {
    pub fn from_points(points: &[DesignPoint]) -> Self {
        let objectives: Vec<Objectives> = points.iter().map(DesignPoint::objectives).collect();
        Self {
            points: front_indices(&objectives)
                .into_iter()
                .map(|i| points[i].clone())
                .collect(),
        }
    }

    pub fn points(&self) -> &[DesignPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DesignPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ParetoFront {
    type Item = &'a DesignPoint;
    type IntoIter = std::slice::Iter<'a, DesignPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_objectives() -> impl Strategy<Value = Vec<Objectives>> {
        // Coarse grid values so ties actually occur
        prop::collection::vec((0u8..20, 0u8..20), 0..60).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(v, r)| Objectives {
                    volume: f64::from(v) * 1e-5,
                    resistance: 0.1 + f64::from(r) * 0.05,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn front_points_are_not_dominated(points in arb_objectives()) {
            for i in front_indices(&points) {
                prop_assert!(points.iter().all(|q| !dominates(*q, points[i])));
            }
        }

        #[test]
        fn every_other_point_is_covered(points in arb_objectives()) {
            let front = front_indices(&points);
            for (i, p) in points.iter().enumerate() {
                if front.contains(&i) {
                    continue;
                }
                prop_assert!(front.iter().any(|&f| dominates(points[f], *p) || points[f] == *p));
            }
        }

        #[test]
        fn front_is_sorted_by_volume(points in arb_objectives()) {
            let front = front_indices(&points);
            for w in front.windows(2) {
                prop_assert!(points[w[0]].volume < points[w[1]].volume);
                prop_assert!(points[w[0]].resistance > points[w[1]].resistance);
            }
        }
    }
}
