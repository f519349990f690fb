use crate::curve::{Arc2, CubicSpline2};
use crate::float_types::Real;
use crate::ogive::SolvedBlunting;
use crate::traits::Tessellate;
use nalgebra::Point2;

/// Meridian curve of a (possibly blunted) ogive, from the nose tip to the base.
///
/// `blunting` runs from the first ogive sample to the axis point `(offset, 0)`, the
/// way the pieces are constructed. [`Tessellate`] walks the whole curve the other
/// way, tip first.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryCurve {
    /// Spherical-cap arc at the tip, `None` for a sharp ogive.
    pub blunting: Option<Arc2>,
    /// Spline through the ogive samples, increasing x.
    pub ogive: CubicSpline2,
    /// Search result the curve was built from, `None` for a sharp ogive.
    pub solved: Option<SolvedBlunting>,
    /// Axial inset of the tip, 0 for an outer curve.
    pub offset: Real,
    /// Base radius of the generating ogive at the inset (`radius` for an outer curve).
    pub offset_radius: Real,
}

impl BoundaryCurve {
    /// The raw ogive samples (`resolution + 1` points).
    pub fn samples(&self) -> &[Point2<Real>] {
        self.ogive.points()
    }

    /// Most forward point of the curve, on the axis for a blunted nose.
    pub fn tip(&self) -> Point2<Real> {
        match &self.blunting {
            Some(arc) => arc.end,
            None => self.ogive.start_point(),
        }
    }

    /// Last point of the curve, at the base radius.
    pub fn base(&self) -> Point2<Real> {
        self.ogive.end_point()
    }

    /// Axial extent from tip to base.
    pub fn axial_length(&self) -> Real {
        self.base().x - self.tip().x
    }
}

impl Tessellate for BoundaryCurve {
    fn tessellate(&self, segments: usize) -> Vec<Point2<Real>> {
        let mut points = match &self.blunting {
            Some(arc) => arc.reversed().tessellate(segments),
            None => Vec::new(),
        };
        let ogive = self.ogive.tessellate(segments);
        // the arc ends on the first sample exactly
        let skip = usize::from(!points.is_empty());
        points.extend(ogive.into_iter().skip(skip));
        points
    }

    fn start_point(&self) -> Point2<Real> {
        self.tip()
    }

    fn end_point(&self) -> Point2<Real> {
        self.base()
    }
}
