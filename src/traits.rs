use crate::float_types::Real;
use nalgebra::Point2;

/// Curve pieces that can be flattened into an ordered polyline in the XY plane.
pub trait Tessellate {
    /// Returns points ordered along the curve, first and last points included.
    ///
    /// `segments` is the number of straight segments per natural piece of the curve
    /// (the whole arc for an [`Arc2`](crate::curve::Arc2), each knot span for a
    /// [`CubicSpline2`](crate::curve::CubicSpline2)). Values below 1 are treated as 1.
    fn tessellate(&self, segments: usize) -> Vec<Point2<Real>>;

    /// First point of the curve.
    fn start_point(&self) -> Point2<Real>;

    /// Last point of the curve.
    fn end_point(&self) -> Point2<Real>;

    /// Polyline length of the tessellation, a lower bound on the true arc length.
    fn polyline_length(&self, segments: usize) -> Real {
        self.tessellate(segments)
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}
