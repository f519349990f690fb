//! Area-derived measurements of a sketch.

use crate::float_types::{Real, TAU};
use crate::sketch::Sketch;
use geo::{Area, BoundingRect, Centroid};
use nalgebra::Point2;
use std::fmt::Debug;

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// Unsigned area of all polygons.
    pub fn area(&self) -> Real {
        self.geometry.unsigned_area()
    }

    /// `(min, max)` corners of the axis-aligned bounds, `None` when empty.
    pub fn bounds(&self) -> Option<(Point2<Real>, Point2<Real>)> {
        self.geometry
            .bounding_rect()
            .map(|r| (Point2::new(r.min().x, r.min().y), Point2::new(r.max().x, r.max().y)))
    }

    /// Area centroid, `None` when empty.
    pub fn centroid(&self) -> Option<Point2<Real>> {
        self.geometry.centroid().map(|c| Point2::new(c.x(), c.y()))
    }

    /// **Mathematical Foundation: Pappus' Second Centroid Theorem**
    ///
    /// Volume swept by revolving the sketch a full turn about the X axis:
    /// ```text
    /// V = 2π · A · ȳ
    /// ```
    /// where `A` is the area and `ȳ` the centroid's distance from the axis. Only
    /// meaningful for regions lying entirely in `y ≥ 0`, such as a meridian
    /// cross-section.
    pub fn revolved_volume(&self) -> Real {
        match self.centroid() {
            Some(c) => TAU * self.area() * c.y,
            None => 0.0,
        }
    }
}
