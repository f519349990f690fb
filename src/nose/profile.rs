use crate::curve::BoundaryCurve;
use crate::float_types::Real;
use crate::nose::{NoseCone, NoseStyle, Shoulder};
use crate::sketch::Sketch;
use crate::traits::Tessellate;
use nalgebra::Point2;
use std::fmt::Debug;

/// Outer and (for shells) inner meridian curves of one nose cone variant, together
/// with the dimensions needed to close them into a cross-section.
#[derive(Clone, Debug, PartialEq)]
pub struct NoseProfile {
    outer: BoundaryCurve,
    inner: Option<BoundaryCurve>,
    style: NoseStyle,
    shoulder: Option<Shoulder>,
    length: Real,
    radius: Real,
    thickness: Real,
}

impl NoseProfile {
    pub(crate) fn new(
        cone: &NoseCone,
        style: NoseStyle,
        shoulder: Option<Shoulder>,
        outer: BoundaryCurve,
        inner: Option<BoundaryCurve>,
    ) -> Self {
        NoseProfile {
            outer,
            inner,
            style,
            shoulder,
            length: cone.length,
            radius: cone.radius,
            thickness: if style == NoseStyle::Solid { 0.0 } else { cone.thickness },
        }
    }

    pub const fn outer(&self) -> &BoundaryCurve {
        &self.outer
    }

    pub const fn inner(&self) -> Option<&BoundaryCurve> {
        self.inner.as_ref()
    }

    pub const fn style(&self) -> NoseStyle {
        self.style
    }

    pub const fn shoulder(&self) -> Option<Shoulder> {
        self.shoulder
    }

    /// Wall thickness, 0 for solid variants.
    pub const fn thickness(&self) -> Real {
        self.thickness
    }

    /// Height of the inner curve where it meets the base or cap.
    pub fn minor_y(&self) -> Option<Real> {
        self.inner.as_ref().map(|inner| inner.base().y)
    }

    /// Closed cross-section ring in the meridian half-plane (`y ≥ 0`), first point
    /// repeated at the end.
    ///
    /// Starts at the outer tip, follows the outer curve to the base, walks the base,
    /// shoulder and cap faces, returns along the inner curve (if any) and closes
    /// along the axis. `segments` is passed to [`Tessellate::tessellate`].
    pub fn outline(&self, segments: usize) -> Vec<Point2<Real>> {
        let (l, t) = (self.length, self.thickness);
        let mut ring = self.outer.tessellate(segments);
        let tip = ring[0];

        let mut faces: Vec<Point2<Real>> = Vec::new();
        match (self.style, self.shoulder) {
            (NoseStyle::Solid, None) => {
                faces.push(Point2::new(l, 0.0));
            },
            (NoseStyle::Solid, Some(s)) => {
                faces.push(Point2::new(l, s.radius));
                faces.push(Point2::new(l + s.length, s.radius));
                faces.push(Point2::new(l + s.length, 0.0));
            },
            (NoseStyle::Hollow, None) => {},
            (NoseStyle::Hollow, Some(s)) => {
                let bore = s.radius - s.thickness;
                faces.push(Point2::new(l, s.radius));
                faces.push(Point2::new(l + s.length, s.radius));
                faces.push(Point2::new(l + s.length, bore));
                faces.push(Point2::new(l - t, bore));
            },
            (NoseStyle::Capped, None) => {
                faces.push(Point2::new(l, 0.0));
                faces.push(Point2::new(l - t, 0.0));
            },
            (NoseStyle::Capped, Some(s)) => {
                let bore = s.radius - s.thickness;
                faces.push(Point2::new(l, s.radius));
                faces.push(Point2::new(l + s.length, s.radius));
                faces.push(Point2::new(l + s.length, 0.0));
                faces.push(Point2::new(l + s.length - t, 0.0));
                faces.push(Point2::new(l + s.length - t, bore));
                faces.push(Point2::new(l - t, bore));
            },
        }
        for p in faces {
            push_distinct(&mut ring, p);
        }

        if let Some(inner) = &self.inner {
            for p in inner.tessellate(segments).into_iter().rev() {
                push_distinct(&mut ring, p);
            }
        }

        ring.push(tip);
        ring
    }

    /// The cross-section as a filled [`Sketch`].
    pub fn to_sketch<S: Clone + Debug + Send + Sync>(
        &self,
        segments: usize,
        metadata: Option<S>,
    ) -> Sketch<S> {
        Sketch::from_ring(&self.outline(segments), metadata)
    }
}

fn push_distinct(ring: &mut Vec<Point2<Real>>, p: Point2<Real>) {
    if ring.last() != Some(&p) {
        ring.push(p);
    }
}
