//! Circular arcs defined by three points.

use crate::errors::{GeometryError, Result};
use crate::float_types::{Real, TAU, tolerance};
use crate::traits::Tessellate;
use nalgebra::{Point2, Vector2};

/// A circular arc from `start` through `through` to `end`.
///
/// The endpoints are stored as given and returned bit-for-bit by
/// [`Arc2::point_at`] at `t = 0` and `t = 1`, so an arc can share a vertex exactly
/// with a neighbouring curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc2 {
    pub start: Point2<Real>,
    pub through: Point2<Real>,
    pub end: Point2<Real>,
    pub center: Point2<Real>,
    pub radius: Real,
    /// Polar angle of `start` about `center`.
    pub start_angle: Real,
    /// Signed sweep from `start` to `end`; positive is counter-clockwise.
    pub sweep: Real,
}

impl Arc2 {
    /// **Mathematical Foundation: Circumscribed Circle of Three Points**
    ///
    /// Builds the unique arc that starts at `start`, passes through `through` and
    /// stops at `end`.
    ///
    /// ## **Circumcenter**
    /// With `b = through − start` and `c = end − start`:
    /// ```text
    /// d  = 2 (bₓ c_y − b_y cₓ)
    /// uₓ = (c_y |b|² − b_y |c|²) / d
    /// u_y = (bₓ |c|² − cₓ |b|²) / d
    /// center = start + u
    /// ```
    /// Working relative to `start` keeps the products small when the points sit far
    /// from the origin.
    ///
    /// ## **Sweep Direction**
    /// The counter-clockwise angle from `start` to `end` is measured in `[0, 2π)`.
    /// If the through point falls inside that span the arc runs counter-clockwise,
    /// otherwise it runs the complementary clockwise way round.
    ///
    /// # Errors
    /// [`GeometryError::DegenerateCurve`] if two points coincide or all three are
    /// collinear, both judged relative to the largest pairwise distance.
    pub fn from_three_points(
        start: Point2<Real>,
        through: Point2<Real>,
        end: Point2<Real>,
    ) -> Result<Self> {
        let b = through - start;
        let c = end - start;
        let tol = tolerance();
        // relative to the arc's own size so tiny tips stay usable
        let scale = b.norm().max(c.norm()).max((end - through).norm());
        if !(scale > 0.0)
            || b.norm() <= tol * scale
            || c.norm() <= tol * scale
            || (end - through).norm() <= tol * scale
        {
            return Err(GeometryError::DegenerateCurve(format!(
                "arc points are not distinct: {start}, {through}, {end}"
            )));
        }

        let cross = b.x * c.y - b.y * c.x;
        if cross.abs() <= tol * b.norm() * c.norm() {
            return Err(GeometryError::DegenerateCurve(format!(
                "arc points are collinear: {start}, {through}, {end}"
            )));
        }

        let d = 2.0 * cross;
        let (b2, c2) = (b.norm_squared(), c.norm_squared());
        let u = Vector2::new((c.y * b2 - b.y * c2) / d, (b.x * c2 - c.x * b2) / d);
        let center = start + u;
        let radius = u.norm();

        let angle_of = |p: Point2<Real>| (p.y - center.y).atan2(p.x - center.x);
        let start_angle = angle_of(start);
        let to_end = normalize_angle(angle_of(end) - start_angle);
        let to_through = normalize_angle(angle_of(through) - start_angle);
        let sweep = if to_through < to_end { to_end } else { to_end - TAU };

        Ok(Arc2 {
            start,
            through,
            end,
            center,
            radius,
            start_angle,
            sweep,
        })
    }

    /// Point at normalized parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        let angle = self.start_angle + self.sweep * t;
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }

    /// Unit tangent at `t`, pointing in the direction of travel.
    pub fn tangent_at(&self, t: Real) -> Vector2<Real> {
        let angle = self.start_angle + self.sweep * t.clamp(0.0, 1.0);
        let sign = if self.sweep >= 0.0 { 1.0 } else { -1.0 };
        Vector2::new(-angle.sin(), angle.cos()) * sign
    }

    /// Exact arc length, `r·|sweep|`.
    pub fn length(&self) -> Real {
        self.radius * self.sweep.abs()
    }

    /// The same arc traversed from `end` to `start`.
    pub fn reversed(&self) -> Self {
        Arc2 {
            start: self.end,
            through: self.through,
            end: self.start,
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle + self.sweep,
            sweep: -self.sweep,
        }
    }
}

impl Tessellate for Arc2 {
    fn tessellate(&self, segments: usize) -> Vec<Point2<Real>> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as Real / segments as Real))
            .collect()
    }

    fn start_point(&self) -> Point2<Real> {
        self.start
    }

    fn end_point(&self) -> Point2<Real> {
        self.end
    }
}

/// Wraps an angle into `[0, 2π)`.
#[inline]
fn normalize_angle(angle: Real) -> Real {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}
