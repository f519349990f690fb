use crate::float_types::Real;
use geo::{Geometry, GeometryCollection, LineString, Polygon as GeoPolygon, coord};
use nalgebra::Point2;
use std::fmt::Debug;

/// A 2D region in the XY plane, stored as a geo `GeometryCollection`.
#[derive(Clone, Debug)]
pub struct Sketch<S: Clone + Debug + Send + Sync = ()> {
    pub geometry: GeometryCollection<Real>,
    pub metadata: Option<S>,
}

impl<S: Clone + Debug + Send + Sync> Sketch<S> {
    /// An empty sketch.
    pub fn new() -> Self {
        Sketch {
            geometry: GeometryCollection::default(),
            metadata: None,
        }
    }

    pub const fn from_geo(geometry: GeometryCollection<Real>, metadata: Option<S>) -> Self {
        Sketch { geometry, metadata }
    }

    /// A single filled polygon bounded by `ring`.
    ///
    /// The ring is closed if its last point differs from its first. Fewer than
    /// three distinct points give an empty sketch.
    pub fn from_ring(ring: &[Point2<Real>], metadata: Option<S>) -> Self {
        let mut coords: Vec<_> = ring.iter().map(|p| coord! { x: p.x, y: p.y }).collect();
        coords.dedup();
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }
        if coords.len() < 3 {
            return Sketch {
                geometry: GeometryCollection::default(),
                metadata,
            };
        }

        // In geo, a Polygon is basically (outer: LineString, Vec<LineString> for holes).
        let polygon_2d = GeoPolygon::new(LineString::new(coords), vec![]);
        Sketch::from_geo(
            GeometryCollection(vec![Geometry::Polygon(polygon_2d)]),
            metadata,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    /// Exterior rings of every polygon, each closed (first point repeated).
    pub fn exteriors(&self) -> Vec<Vec<Point2<Real>>> {
        self.geometry
            .iter()
            .filter_map(|g| match g {
                Geometry::Polygon(p) => Some(
                    p.exterior()
                        .coords()
                        .map(|c| Point2::new(c.x, c.y))
                        .collect(),
                ),
                _ => None,
            })
            .collect()
    }
}

impl<S: Clone + Debug + Send + Sync> Default for Sketch<S> {
    fn default() -> Self {
        Self::new()
    }
}
