//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point2;
use nosecone::float_types::Real;

/// Returns the bounding box `[min_x, min_y, max_x, max_y]` of a point set.
pub fn bounding_box(points: &[Point2<Real>]) -> [Real; 4] {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    [min_x, min_y, max_x, max_y]
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Signed area of a closed ring (shoelace), positive for counter-clockwise.
pub fn signed_area(ring: &[Point2<Real>]) -> Real {
    ring.windows(2)
        .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
        .sum::<Real>()
        * 0.5
}

/// Length, radius and tip radius grid used by the search sweeps.
pub fn realistic_grid() -> Vec<(Real, Real, Real)> {
    let mut cases = Vec::new();
    for radius in [5.0, 12.5, 25.0, 60.0, 100.0] {
        for ratio in [1.2, 1.5, 3.0, 5.0, 8.0] {
            for tip_fraction in [0.001, 0.05, 0.2, 0.5, 0.9, 0.99] {
                cases.push((radius * ratio, radius, radius * tip_fraction));
            }
        }
    }
    cases
}
