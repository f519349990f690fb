//! Interpolating cubic splines through ordered 2D samples.

use crate::errors::{GeometryError, Result};
use crate::float_types::{Real, tolerance};
use crate::traits::Tessellate;
use nalgebra::{Point2, Vector2};

/// Natural parametric cubic spline passing exactly through every sample.
///
/// Parameterized by cumulative chord length, so `x(t)` and `y(t)` are both C² and
/// the curve may turn freely in the plane.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicSpline2 {
    points: Vec<Point2<Real>>,
    /// Cumulative chord length at each sample, starting at 0.
    knots: Vec<Real>,
    /// Second derivative with respect to the chord parameter at each sample.
    second: Vec<Vector2<Real>>,
}

impl CubicSpline2 {
    /// **Mathematical Foundation: Natural Cubic Spline Interpolation**
    ///
    /// For knots `t₀ < t₁ < … < tₙ` with spans `hᵢ = tᵢ₊₁ − tᵢ`, the second
    /// derivatives `Mᵢ` satisfy the tridiagonal system
    /// ```text
    /// hᵢ₋₁ Mᵢ₋₁ + 2 (hᵢ₋₁ + hᵢ) Mᵢ + hᵢ Mᵢ₊₁ = 6 ((Pᵢ₊₁ − Pᵢ)/hᵢ − (Pᵢ − Pᵢ₋₁)/hᵢ₋₁)
    /// M₀ = Mₙ = 0
    /// ```
    /// solved once for both coordinates with the Thomas algorithm. The system is
    /// strictly diagonally dominant so no pivoting is needed.
    ///
    /// Two samples give a straight segment.
    ///
    /// # Errors
    /// [`GeometryError::DegenerateCurve`] for fewer than two samples or two
    /// consecutive samples closer than [`tolerance`].
    pub fn interpolate(points: &[Point2<Real>]) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::DegenerateCurve(format!(
                "spline needs at least 2 points, got {}",
                points.len()
            )));
        }

        let mut knots = Vec::with_capacity(points.len());
        knots.push(0.0);
        for (i, pair) in points.windows(2).enumerate() {
            let h = (pair[1] - pair[0]).norm();
            if !(h > tolerance()) {
                return Err(GeometryError::DegenerateCurve(format!(
                    "spline samples {} and {} coincide at {}",
                    i,
                    i + 1,
                    pair[0]
                )));
            }
            knots.push(knots[i] + h);
        }

        let n = points.len() - 1;
        let mut second = vec![Vector2::zeros(); n + 1];
        if n >= 2 {
            // interior unknowns M₁ … Mₙ₋₁
            let m = n - 1;
            let mut diag = Vec::with_capacity(m);
            let mut upper = Vec::with_capacity(m);
            let mut rhs = Vec::with_capacity(m);
            for i in 1..n {
                let h0 = knots[i] - knots[i - 1];
                let h1 = knots[i + 1] - knots[i];
                let slope0 = (points[i] - points[i - 1]) / h0;
                let slope1 = (points[i + 1] - points[i]) / h1;
                diag.push(2.0 * (h0 + h1));
                upper.push(h1);
                rhs.push((slope1 - slope0) * 6.0);
            }

            // forward sweep; the sub-diagonal entry of row k is h_k = upper[k - 1]
            for k in 1..m {
                let w = upper[k - 1] / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                let prev = rhs[k - 1];
                rhs[k] -= prev * w;
            }

            // back substitution
            second[m] = rhs[m - 1] / diag[m - 1];
            for k in (0..m - 1).rev() {
                second[k + 1] = (rhs[k] - second[k + 2] * upper[k]) / diag[k];
            }
        }

        Ok(CubicSpline2 {
            points: points.to_vec(),
            knots,
            second,
        })
    }

    /// The interpolated samples, in order.
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// Number of knot spans (`points().len() − 1`).
    pub fn span_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Total chord length, the parameter range is `[0, chord_length()]`.
    pub fn chord_length(&self) -> Real {
        self.knots[self.knots.len() - 1]
    }

    /// Evaluates span `i` at local offset `s ∈ [0, hᵢ]`.
    fn eval_span(&self, i: usize, s: Real) -> Point2<Real> {
        let h = self.knots[i + 1] - self.knots[i];
        let a = h - s;
        let (p0, p1) = (self.points[i].coords, self.points[i + 1].coords);
        let (m0, m1) = (self.second[i], self.second[i + 1]);
        let coords = m0 * (a * a * a / (6.0 * h))
            + m1 * (s * s * s / (6.0 * h))
            + (p0 / h - m0 * (h / 6.0)) * a
            + (p1 / h - m1 * (h / 6.0)) * s;
        Point2::from(coords)
    }

    /// First derivative of span `i` at local offset `s`.
    fn derivative_span(&self, i: usize, s: Real) -> Vector2<Real> {
        let h = self.knots[i + 1] - self.knots[i];
        let a = h - s;
        let (p0, p1) = (self.points[i].coords, self.points[i + 1].coords);
        let (m0, m1) = (self.second[i], self.second[i + 1]);
        -m0 * (a * a / (2.0 * h)) + m1 * (s * s / (2.0 * h)) + (p1 - p0) / h
            - (m1 - m0) * (h / 6.0)
    }

    fn locate(&self, t: Real) -> (usize, Real) {
        let t = t.clamp(0.0, self.chord_length());
        // index of the last knot <= t, capped to the final span
        let i = self.knots.partition_point(|&k| k <= t).saturating_sub(1);
        let i = i.min(self.span_count() - 1);
        (i, t - self.knots[i])
    }

    /// Point at chord parameter `t`. Knots return their sample exactly.
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        let (i, s) = self.locate(t);
        if s == 0.0 {
            return self.points[i];
        }
        if t >= self.chord_length() {
            return self.points[self.points.len() - 1];
        }
        self.eval_span(i, s)
    }

    /// Unit tangent at chord parameter `t`.
    pub fn tangent_at(&self, t: Real) -> Vector2<Real> {
        let (i, s) = self.locate(t);
        let d = self.derivative_span(i, s);
        let len = d.norm();
        if len > 0.0 { d / len } else { d }
    }
}

impl Tessellate for CubicSpline2 {
    fn tessellate(&self, segments: usize) -> Vec<Point2<Real>> {
        let segments = segments.max(1);
        let mut out = Vec::with_capacity(self.span_count() * segments + 1);
        out.push(self.points[0]);
        for i in 0..self.span_count() {
            let h = self.knots[i + 1] - self.knots[i];
            for k in 1..segments {
                out.push(self.eval_span(i, h * k as Real / segments as Real));
            }
            out.push(self.points[i + 1]);
        }
        out
    }

    fn start_point(&self) -> Point2<Real> {
        self.points[0]
    }

    fn end_point(&self) -> Point2<Real> {
        self.points[self.points.len() - 1]
    }
}
